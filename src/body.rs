use crate::{
    PhysicsError, Result, Vector2,
    mass_properties::{MomentModel, solve_with},
};

/// A force that keeps acting on a body every tick until it is removed.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointForce {
    /// Point of application in the body's local frame, relative to its centre of mass.
    pub origin: Vector2,
    /// Direction and magnitude, in world units.
    pub vector: Vector2,
}

impl PointForce {
    pub const fn new(origin: Vector2, vector: Vector2) -> Self {
        Self { origin, vector }
    }

    /// Torque around the centre of mass of a body rotated by `rotation`.
    /// Positive torque turns the body anticlockwise.
    pub fn torque(&self, rotation: f32) -> f32 {
        self.origin.rotate(rotation).perp().dot(self.vector)
    }
}

/// A polygon of uniform density moved with position based verlet integration.
///
/// The local frame of the shape always has the centre of mass at its origin.
/// Velocities are never stored, they are whatever moved the body during the last tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    mass: f32,
    moment_of_inertia: f32,

    position: Vector2,
    last_position: Vector2,
    /// Summation of all accelerations applied since last
    /// integration. Will get reset to zero at next `integrate`
    acceleration: Vector2,

    rotation: f32,
    last_rotation: f32,
    /// Summation of all angular accelerations applied since last
    /// integration. Will get reset to zero at next `integrate`
    angular_acceleration: f32,

    shape: Vec<Vector2>,
    point_forces: Vec<PointForce>,
}

impl RigidBody {
    /// Create a resting body from an outline. The vertices can be in any frame, the body
    /// is placed at the outline's centre of mass in that same frame.
    pub fn new(vertices: &[Vector2], mass: f32) -> Result<Self> {
        Self::with_moment_model(vertices, mass, MomentModel::default())
    }

    pub fn with_moment_model(vertices: &[Vector2], mass: f32, model: MomentModel) -> Result<Self> {
        let properties = solve_with(vertices, Some(mass), model)?;
        let moment_of_inertia = properties
            .moment_of_inertia
            .filter(|moi| moi.is_finite() && *moi > 0.0)
            .ok_or(PhysicsError::ZeroMomentOfInertia)?;
        Ok(Self {
            mass,
            moment_of_inertia,
            position: properties.centre_of_mass,
            last_position: properties.centre_of_mass,
            acceleration: Vector2::ZERO,
            rotation: 0.0,
            last_rotation: 0.0,
            angular_acceleration: 0.0,
            shape: properties.recentre(vertices),
            point_forces: Vec::new(),
        })
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn moment_of_inertia(&self) -> f32 {
        self.moment_of_inertia
    }

    /// World position of the centre of mass.
    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn last_position(&self) -> Vector2 {
        self.last_position
    }

    /// Radians, anticlockwise.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn last_rotation(&self) -> f32 {
        self.last_rotation
    }

    /// Distance moved during the last tick.
    pub fn velocity(&self) -> Vector2 {
        self.position - self.last_position
    }

    /// Angle turned during the last tick.
    pub fn angular_velocity(&self) -> f32 {
        self.rotation - self.last_rotation
    }

    pub fn acceleration(&self) -> Vector2 {
        self.acceleration
    }

    pub fn angular_acceleration(&self) -> f32 {
        self.angular_acceleration
    }

    /// Outline around the centre of mass, without rotation applied.
    pub fn local_vertices(&self) -> &[Vector2] {
        &self.shape
    }

    /// Outline rotated and moved to where the body currently is.
    pub fn world_vertices(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.shape
            .iter()
            .map(|&v| v.rotate(self.rotation) + self.position)
    }

    pub fn point_forces(&self) -> &[PointForce] {
        &self.point_forces
    }

    pub fn add_point_force(&mut self, force: PointForce) {
        self.point_forces.push(force);
    }

    pub fn clear_point_forces(&mut self) {
        self.point_forces.clear();
    }

    /// Move the body without giving it any velocity.
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
        self.last_position = position;
    }

    /// Turn the body without giving it any angular velocity.
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.last_rotation = rotation;
    }

    pub fn accelerate(&mut self, acceleration: Vector2) {
        self.acceleration += acceleration;
    }

    pub fn accelerate_angular(&mut self, acceleration: f32) {
        self.angular_acceleration += acceleration;
    }

    pub fn net_force(&self) -> Vector2 {
        self.point_forces
            .iter()
            .fold(Vector2::ZERO, |acc, force| acc + force.vector)
    }

    pub fn net_torque(&self) -> f32 {
        self.point_forces
            .iter()
            .map(|force| force.torque(self.rotation))
            .sum()
    }

    /// Turn the attached point forces into linear and angular acceleration.
    pub fn resolve_forces(&mut self) {
        let force = self.net_force();
        let torque = self.net_torque();
        // Both divisors are validated to be positive on construction.
        self.accelerate(force * self.mass.recip());
        self.accelerate_angular(torque / self.moment_of_inertia);
    }

    /// Advance position and rotation by `dt` and clear the accumulated accelerations.
    /// `dt` is validated by [`crate::PhysicsEngine::update`].
    pub(crate) fn integrate(&mut self, dt: f32) {
        let dt2 = dt * dt;

        let velocity = self.velocity();
        self.last_position = self.position;
        self.position += velocity + std::mem::take(&mut self.acceleration) * dt2;

        let angular_velocity = self.angular_velocity();
        self.last_rotation = self.rotation;
        self.rotation += angular_velocity + std::mem::take(&mut self.angular_acceleration) * dt2;
    }
}
