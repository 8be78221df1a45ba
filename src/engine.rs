use std::{collections::BTreeMap, num::NonZeroU16};

use tracing::{debug, trace, warn};

use crate::{MomentModel, PhysicsError, Result, RigidBody, Vector2};

/// Gravity in metres per second squared, pointing down on a screen whose y axis grows downwards.
pub const STANDARD_GRAVITY: Vector2 = Vector2::new(0.0, 9.81);

/// Identifies a body within the [`PhysicsEngine`] that created it. Handles are never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(u64);

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Acceleration applied to every body on every (sub)step.
    pub gravity: Vector2,
    /// Number of equal parts each `update` is split into.
    pub substeps: NonZeroU16,
    /// Used for bodies created through [`PhysicsEngine::create_body`].
    pub moment_model: MomentModel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            substeps: NonZeroU16::MIN,
            moment_model: MomentModel::default(),
        }
    }
}

/// Owns all bodies and advances them in lockstep.
///
/// Bodies never interact, so the order they are processed in does not matter. They
/// are still iterated in creation order to keep everything reproducible.
#[derive(Debug, Default)]
pub struct PhysicsEngine {
    config: EngineConfig,
    bodies: BTreeMap<BodyHandle, RigidBody>,
    next_handle: u64,
}

impl PhysicsEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            bodies: BTreeMap::new(),
            next_handle: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn gravity(&self) -> Vector2 {
        self.config.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.config.gravity = gravity;
    }

    /// Build a body from an outline and add it. See [`RigidBody::new`] for how the
    /// outline is interpreted.
    pub fn create_body(&mut self, vertices: &[Vector2], mass: f32) -> Result<BodyHandle> {
        let body = RigidBody::with_moment_model(vertices, mass, self.config.moment_model)
            .inspect_err(|err| warn!(%err, vertices = vertices.len(), mass, "rejected body"))?;
        Ok(self.insert_body(body))
    }

    pub fn insert_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        debug!(
            ?handle,
            mass = body.mass(),
            moment_of_inertia = body.moment_of_inertia(),
            position = ?body.position(),
            "added body"
        );
        self.bodies.insert(handle, body);
        handle
    }

    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<RigidBody> {
        let body = self
            .bodies
            .remove(&handle)
            .ok_or(PhysicsError::UnknownBody(handle))?;
        debug!(?handle, "removed body");
        Ok(body)
    }

    pub fn body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies
            .get(&handle)
            .ok_or(PhysicsError::UnknownBody(handle))
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies
            .get_mut(&handle)
            .ok_or(PhysicsError::UnknownBody(handle))
    }

    /// All bodies in the order they were added.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.bodies.iter().map(|(&handle, body)| (handle, body))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance the simulation by one tick of `1 / tick_rate` seconds.
    ///
    /// Nothing is modified if the tick rate is rejected.
    pub fn update(&mut self, tick_rate: f32) -> Result<()> {
        let substeps = self.config.substeps.get();
        let dt = tick_rate.recip() / f32::from(substeps);
        if !(tick_rate.is_finite() && tick_rate > 0.0 && dt.is_finite()) {
            warn!(tick_rate, "refusing to advance simulation");
            return Err(PhysicsError::InvalidTickRate(tick_rate));
        }
        trace!(dt, substeps, bodies = self.bodies.len(), "update");
        for _ in 0..substeps {
            self.step(dt);
        }
        Ok(())
    }

    /// A single pass of the pipeline without any subdivision of `dt`.
    fn step(&mut self, dt: f32) {
        self.apply_gravity();
        self.resolve_forces();
        self.integrate(dt);
    }

    pub fn apply_gravity(&mut self) {
        let gravity = self.config.gravity;
        for body in self.bodies.values_mut() {
            body.accelerate(gravity);
        }
    }

    pub fn resolve_forces(&mut self) {
        for body in self.bodies.values_mut() {
            body.resolve_forces();
        }
    }

    fn integrate(&mut self, dt: f32) {
        for body in self.bodies.values_mut() {
            body.integrate(dt);
        }
    }
}
