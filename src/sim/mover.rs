//! The player circle
//!
//! Sits frozen until a speed arrives, then runs right at that speed forever
//! and jumps on demand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::collision::Tag;

/// Mover lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoverState {
    /// Waiting for a speed; body suspended, input ignored
    Dormant,
    /// Running at the chosen speed
    Active,
}

/// Receives the locked-in speed
pub trait SpeedReceiver {
    fn start_movement(&mut self, speed: f32);
}

/// Something the camera can follow
pub trait Tracked {
    fn tracked_position(&self) -> Option<Vec2>;
}

/// What the world should do after a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactResponse {
    Ignore,
    RestartLevel,
}

/// Player-controlled runner
#[derive(Debug)]
pub struct Mover {
    body: Option<Box<dyn PhysicsBody>>,
    state: MoverState,
    speed: f32,
    pub jump_impulse: f32,
}

impl Mover {
    /// Wrap `body`, suspending its simulation until activation
    pub fn new(mut body: Option<Box<dyn PhysicsBody>>, jump_impulse: f32) -> Self {
        if let Some(body) = body.as_mut() {
            body.set_simulated(false);
        }
        Self {
            body,
            state: MoverState::Dormant,
            speed: 0.0,
            jump_impulse,
        }
    }

    pub fn state(&self) -> MoverState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == MoverState::Active
    }

    /// Speed locked in at activation (0 while dormant)
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn body(&self) -> Option<&(dyn PhysicsBody + 'static)> {
        self.body.as_deref()
    }

    pub fn body_mut(&mut self) -> Option<&mut (dyn PhysicsBody + 'static)> {
        self.body.as_deref_mut()
    }

    /// Zero velocity, resume simulation, store `speed`
    ///
    /// Calling again from `Active` repeats exactly the same effects.
    pub fn activate(&mut self, speed: f32) {
        if let Some(body) = self.body.as_mut() {
            body.set_velocity(Vec2::ZERO);
            body.set_simulated(true);
        }
        self.speed = speed;
        self.state = MoverState::Active;
        log::info!("Mover active at speed {:.2}", speed);
    }

    /// Physics-rate update: drive horizontal velocity
    pub fn fixed_update(&mut self) {
        if !self.is_active() {
            return;
        }
        let Some(body) = self.body.as_mut() else {
            return;
        };
        let vel = body.velocity();
        body.set_velocity(Vec2::new(self.speed, vel.y));
    }

    /// Frame-rate update: apply a jump impulse if pressed this frame
    ///
    /// Returns true when an impulse was applied. No grounded check, so
    /// presses in mid-air stack.
    pub fn update(&mut self, jump_pressed: bool) -> bool {
        if !jump_pressed || !self.is_active() {
            return false;
        }
        let Some(body) = self.body.as_mut() else {
            return false;
        };
        body.apply_impulse(Vec2::Y * self.jump_impulse);
        true
    }

    /// Contact-begin notification
    pub fn on_collision_begin(&self, other: Tag) -> ContactResponse {
        match other {
            Tag::Obstacle => ContactResponse::RestartLevel,
            Tag::Ground => ContactResponse::Ignore,
        }
    }
}

impl SpeedReceiver for Mover {
    fn start_movement(&mut self, speed: f32) {
        self.activate(speed);
    }
}

impl Tracked for Mover {
    fn tracked_position(&self) -> Option<Vec2> {
        self.body.as_ref().map(|b| b.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::RigidBody;

    const G: Vec2 = Vec2::new(0.0, -9.81);

    fn mover() -> Mover {
        let body = RigidBody::new(Vec2::new(0.0, 0.5), 0.5, 1.0);
        Mover::new(Some(Box::new(body)), 4.0)
    }

    #[test]
    fn test_starts_dormant_and_suspended() {
        let m = mover();
        assert_eq!(m.state(), MoverState::Dormant);
        assert!(!m.body().unwrap().is_simulated());
    }

    #[test]
    fn test_jump_while_dormant_has_no_effect() {
        let mut m = mover();
        let before = m.body().unwrap().velocity();
        assert!(!m.update(true));
        m.fixed_update();
        assert_eq!(m.body().unwrap().velocity(), before);
    }

    #[test]
    fn test_activate_zeroes_velocity_and_resumes() {
        let mut m = mover();
        m.body_mut().unwrap().set_velocity(Vec2::new(5.0, -2.0));
        m.activate(7.0);
        assert_eq!(m.state(), MoverState::Active);
        assert_eq!(m.speed(), 7.0);
        let body = m.body().unwrap();
        assert!(body.is_simulated());
        assert_eq!(body.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_second_activation_same_effects() {
        let mut m = mover();
        m.activate(7.0);
        m.body_mut().unwrap().set_velocity(Vec2::new(7.0, 3.0));
        m.activate(7.0);
        assert_eq!(m.state(), MoverState::Active);
        assert_eq!(m.speed(), 7.0);
        assert!(m.body().unwrap().is_simulated());
        assert_eq!(m.body().unwrap().velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_fixed_update_keeps_vertical_velocity() {
        let mut m = mover();
        m.activate(7.0);
        for _ in 0..10 {
            m.fixed_update();
            m.body_mut().unwrap().step(0.02, G);
        }
        let vel = m.body().unwrap().velocity();
        m.fixed_update();
        let after = m.body().unwrap().velocity();
        assert_eq!(after.x, 7.0);
        assert_eq!(after.y, vel.y);
        assert!(after.y < 0.0);
    }

    #[test]
    fn test_jumps_stack_in_air() {
        let mut m = mover();
        m.activate(3.0);
        assert!(m.update(true));
        assert!(m.update(true));
        assert_eq!(m.body().unwrap().velocity().y, 8.0);
        assert!(!m.update(false));
    }

    #[test]
    fn test_obstacle_contact_requests_restart() {
        let m = mover();
        assert_eq!(m.on_collision_begin(Tag::Obstacle), ContactResponse::RestartLevel);
        assert_eq!(m.on_collision_begin(Tag::Ground), ContactResponse::Ignore);
    }

    #[test]
    fn test_missing_body_is_skipped() {
        let mut m = Mover::new(None, 4.0);
        m.activate(5.0);
        m.fixed_update();
        assert!(!m.update(true));
        assert_eq!(m.tracked_position(), None);
        assert!(m.is_active());
    }
}
