//! Camera that locks onto the player with a fixed offset

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::mover::Tracked;

/// Default camera depth (looking down -Z at the play plane)
pub const CAMERA_Z: f32 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFollower {
    pub position: Vec3,
    pub offset: Vec2,
}

impl CameraFollower {
    pub fn new(offset: Vec2) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
            offset,
        }
    }

    /// Snap to target + offset, keeping depth. Skipped without a target.
    pub fn update(&mut self, target: Option<&dyn Tracked>) {
        let Some(pos) = target.and_then(|t| t.tracked_position()) else {
            return;
        };
        self.position.x = pos.x + self.offset.x;
        self.position.y = pos.y + self.offset.y;
    }
}
