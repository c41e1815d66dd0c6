//! World state
//!
//! Owns every component of a run and rebuilds them on reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{PhysicsBody, RigidBody};
use super::camera::CameraFollower;
use super::collision::ContactTracker;
use super::level::Level;
use super::mover::Mover;
use super::picker::SpeedPicker;
use crate::settings::Settings;
use crate::ui::SharedLabel;

/// Notable things that happened, drained by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SpeedLocked { speed: f32 },
    Jumped,
    ObstacleHit { id: u32 },
    LevelReset { attempt: u32 },
}

#[derive(Debug)]
pub struct World {
    pub settings: Settings,
    pub seed: u64,
    /// Number of resets so far
    pub attempt: u32,
    pub level: Level,
    pub mover: Option<Mover>,
    pub picker: SpeedPicker,
    pub camera: CameraFollower,
    /// Speed readout, shared with the host
    pub label: SharedLabel,
    pub contacts: ContactTracker,
    /// Physics steps since the last reset
    pub physics_steps: u64,
    /// Frame updates since the last reset
    pub frames: u64,
    reset_pending: bool,
    events: Vec<GameEvent>,
}

impl World {
    /// Build a fresh run
    pub fn new(settings: Settings, seed: u64) -> Self {
        let label = SharedLabel::new();
        let world = Self {
            level: Level::generate(seed, &settings.level),
            mover: Some(spawn_mover(&settings)),
            picker: SpeedPicker::new(&settings, Some(Box::new(label.clone()))),
            camera: CameraFollower::new(settings.camera_offset),
            label,
            contacts: ContactTracker::new(),
            physics_steps: 0,
            frames: 0,
            reset_pending: false,
            events: Vec::new(),
            attempt: 0,
            settings,
            seed,
        };
        log::info!(
            "World ready: seed={} speeds={:.1}..{:.1}",
            seed,
            world.settings.min_speed,
            world.settings.max_speed
        );
        world
    }

    /// Throw away the run and rebuild everything from settings and seed
    pub fn reset(&mut self) {
        self.attempt += 1;
        self.level = Level::generate(self.seed, &self.settings.level);
        self.mover = Some(spawn_mover(&self.settings));
        self.picker = SpeedPicker::new(&self.settings, Some(Box::new(self.label.clone())));
        self.camera = CameraFollower::new(self.settings.camera_offset);
        self.contacts.clear();
        self.physics_steps = 0;
        self.frames = 0;
        self.reset_pending = false;
        self.events.push(GameEvent::LevelReset {
            attempt: self.attempt,
        });
        log::info!("Level reset (attempt {})", self.attempt);
    }

    /// Mark the run for restart; [`World::reset`] is applied by the host loop
    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Player position, if there is a player
    pub fn player_position(&self) -> Option<Vec2> {
        self.player_body().map(|b| b.position())
    }

    pub fn player_velocity(&self) -> Option<Vec2> {
        self.player_body().map(|b| b.velocity())
    }

    fn player_body(&self) -> Option<&(dyn PhysicsBody + 'static)> {
        self.mover.as_ref().and_then(|m| m.body())
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn spawn_mover(settings: &Settings) -> Mover {
    let mut body = RigidBody::new(settings.spawn, settings.player_radius, settings.player_mass);
    body.gravity_scale = settings.gravity_scale;
    Mover::new(Some(Box::new(body)), settings.jump_impulse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::mover::MoverState;
    use crate::sim::picker::PickerState;

    #[test]
    fn test_new_world_is_waiting() {
        let world = World::new(Settings::default(), 1);
        assert_eq!(world.picker.state(), PickerState::Unlocked);
        assert_eq!(world.picker.current(), 1.0);
        assert_eq!(world.mover.as_ref().unwrap().state(), MoverState::Dormant);
        assert_eq!(world.player_position(), Some(Settings::default().spawn));
        assert_eq!(world.label.text(), "0.0");
        assert_eq!(world.attempt, 0);
    }

    #[test]
    fn test_reset_rebuilds_same_level() {
        let mut world = World::new(Settings::default(), 99);
        let level = world.level.clone();
        world.mover.as_mut().unwrap().activate(5.0);
        world.reset();

        assert_eq!(world.level, level);
        assert_eq!(world.attempt, 1);
        assert_eq!(world.mover.as_ref().unwrap().state(), MoverState::Dormant);
        assert_eq!(world.picker.state(), PickerState::Unlocked);
        assert_eq!(world.picker.current(), world.settings.min_speed);
        assert_eq!(world.drain_events(), vec![GameEvent::LevelReset { attempt: 1 }]);
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_reset_clears_pending_request() {
        let mut world = World::new(Settings::default(), 5);
        world.request_reset();
        assert!(world.reset_pending());
        assert_eq!(world.attempt, 0);
        world.reset();
        assert!(!world.reset_pending());
        assert_eq!(world.attempt, 1);
    }

    #[test]
    fn test_reset_keeps_label_handle() {
        let mut world = World::new(Settings::default(), 3);
        let host_label = world.label.clone();
        world.picker.set_current(10.0);
        assert_eq!(host_label.text(), "100.0");
        world.reset();
        assert_eq!(host_label.text(), "0.0");
    }
}
