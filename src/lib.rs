//! Speed Hop - lock in a speed, then jump the obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (picker, mover, camera, level, world)
//! - `ui`: Slider and label models the picker drives
//! - `settings`: Tuning values loaded from JSON

pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed physics timestep (50 Hz)
    pub const PHYSICS_DT: f32 = 1.0 / 50.0;
    /// Maximum physics substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the host loop will simulate in one go
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default level seed
    pub const DEFAULT_SEED: u64 = 0x5EED_0001;
}

/// Linear interpolation between `a` and `b`, `t` clamped to [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Where `value` sits between `a` and `b`, clamped to [0, 1]
///
/// Returns 0.0 when `a == b`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_clamps() {
        assert_eq!(lerp(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp(0.0, 100.0, 2.0), 100.0);
        assert_eq!(lerp(0.0, 100.0, -1.0), 0.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(1.0, 10.0, 1.0), 0.0);
        assert_eq!(inverse_lerp(1.0, 10.0, 10.0), 1.0);
        assert!((inverse_lerp(1.0, 10.0, 5.5) - 0.5).abs() < 1e-6);
        assert_eq!(inverse_lerp(3.0, 3.0, 3.0), 0.0);
    }
}
