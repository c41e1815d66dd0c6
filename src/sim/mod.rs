//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed physics timestep
//! - Seeded RNG only
//! - Fixed update order (physics, then mover, picker, camera)
//! - No rendering or platform dependencies

pub mod body;
pub mod camera;
pub mod collision;
pub mod level;
pub mod mover;
pub mod oscillator;
pub mod picker;
pub mod state;
pub mod tick;

pub use body::{PhysicsBody, RigidBody};
pub use camera::CameraFollower;
pub use collision::{Aabb, Collider, CollisionResult, ContactTracker, Tag, circle_aabb_collision};
pub use level::Level;
pub use mover::{ContactResponse, Mover, MoverState, SpeedReceiver, Tracked};
pub use oscillator::{OscillatingValue, display_value, format_display};
pub use picker::{PickerState, SpeedPicker};
pub use state::{GameEvent, World};
pub use tick::{Clock, FrameInput, frame_update, physics_step};
