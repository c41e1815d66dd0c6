//! Rigid body the mover drives
//!
//! A circle under gravity. Nothing here knows about speeds or jumping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The physics object seam between the mover and the simulation.
pub trait PhysicsBody: std::fmt::Debug {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Instantaneous change of momentum
    fn apply_impulse(&mut self, impulse: Vec2);
    /// Suspend or resume integration entirely
    fn set_simulated(&mut self, simulated: bool);
    fn is_simulated(&self) -> bool;
    fn radius(&self) -> f32;
    /// Integrate one fixed step. No-op while not simulated.
    fn step(&mut self, dt: f32, gravity: Vec2);
    /// Push the body out along `normal` by `depth` and drop velocity into the surface
    fn resolve_contact(&mut self, normal: Vec2, depth: f32);
}

/// A dynamic circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub gravity_scale: f32,
    pub simulated: bool,
}

impl RigidBody {
    pub fn new(pos: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            mass,
            gravity_scale: 1.0,
            simulated: true,
        }
    }
}

impl PhysicsBody for RigidBody {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.vel = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        if !self.simulated {
            return;
        }
        self.vel += impulse / self.mass;
    }

    fn set_simulated(&mut self, simulated: bool) {
        self.simulated = simulated;
    }

    fn is_simulated(&self) -> bool {
        self.simulated
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn step(&mut self, dt: f32, gravity: Vec2) {
        if !self.simulated {
            return;
        }
        // Semi-implicit Euler
        self.vel += gravity * self.gravity_scale * dt;
        self.pos += self.vel * dt;
    }

    fn resolve_contact(&mut self, normal: Vec2, depth: f32) {
        if depth <= 0.0 {
            return;
        }
        self.pos += normal * depth;
        let into_surface = self.vel.dot(normal);
        if into_surface < 0.0 {
            self.vel -= normal * into_surface;
        }
    }
}
