//! Everything that can go wrong when building bodies or stepping the engine.
//!
//! All of these are validation failures at the crate boundary. None of them leave
//! the engine in a partially updated state.

use thiserror::Error;

use crate::engine::BodyHandle;

pub type Result<T, E = PhysicsError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The outline cannot be turned into mass properties.
    #[error("degenerate polygon: {0}")]
    DegeneratePolygon(Degeneracy),

    /// Mass must be finite and strictly positive.
    #[error("invalid mass {0}, expected a finite positive value")]
    InvalidMass(f32),

    /// The moment of inertia underflowed to zero or overflowed. Such a body could
    /// never be turned by a torque, or only with infinite angular acceleration.
    #[error("moment of inertia is zero or not finite, body cannot be rotated by torque")]
    ZeroMomentOfInertia,

    /// `update` needs a finite, strictly positive tick rate to derive `dt`.
    #[error("invalid tick rate {0}, expected a finite positive value")]
    InvalidTickRate(f32),

    #[error("division by zero")]
    DivideByZero,

    /// The handle was removed or belongs to another engine.
    #[error("no body with handle {0:?}")]
    UnknownBody(BodyHandle),
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    #[error("need at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("enclosed area is zero")]
    ZeroArea,
    #[error("vertex {0} is not finite")]
    NonFiniteVertex(usize),
    /// The vertices are finite, but too far apart for the area to fit into an `f32`.
    #[error("enclosed area is too large to represent")]
    NonFiniteArea,
}

impl From<Degeneracy> for PhysicsError {
    fn from(reason: Degeneracy) -> Self {
        Self::DegeneratePolygon(reason)
    }
}
