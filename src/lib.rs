//! A tiny 2d rigid body core.
//!
//! Bodies are simple polygons of uniform density. Their centre of mass and moment of inertia
//! are derived from the outline once, when the body is created. Every tick the
//! [`PhysicsEngine`] applies gravity, turns the [`PointForce`]s attached to each body into
//! linear and angular acceleration and integrates position and rotation with position
//! based verlet integration.
//!
//! There are no collisions or constraints, bodies never influence each other.

#![warn(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

pub use body::{PointForce, RigidBody};
pub use engine::{BodyHandle, EngineConfig, PhysicsEngine, STANDARD_GRAVITY};
pub use error::{Degeneracy, PhysicsError, Result};
pub use mass_properties::{MassProperties, MomentModel, Triangle};
pub use vec2::Vector2;

pub mod body;
pub mod engine;
pub mod error;
pub mod mass_properties;
pub mod vec2;
