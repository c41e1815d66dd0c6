//! Game settings and tuning
//!
//! Set once at startup, never reconfigured while a session runs. Loaded from
//! a JSON file on native; missing fields fall back to the defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Obstacle course generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelSettings {
    /// Number of obstacles to place
    pub obstacle_count: u32,
    /// X coordinate of the first obstacle's left edge
    pub first_obstacle_x: f32,
    /// Gap between consecutive obstacles (min, max)
    pub gap_min: f32,
    pub gap_max: f32,
    /// Obstacle height (min, max)
    pub height_min: f32,
    pub height_max: f32,
    /// Obstacle width
    pub obstacle_width: f32,
    /// Top surface of the ground slab
    pub ground_y: f32,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            obstacle_count: 24,
            first_obstacle_x: 12.0,
            gap_min: 6.0,
            gap_max: 14.0,
            height_min: 0.5,
            height_max: 1.5,
            obstacle_width: 0.6,
            ground_y: 0.0,
        }
    }
}

/// All tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Speed picker ===
    /// Lowest selectable speed (units/s)
    pub min_speed: f32,
    /// Highest selectable speed (units/s)
    pub max_speed: f32,
    /// Full sweeps of the range per second
    pub slider_bounce_speed: f32,
    /// Label shows the speed mapped onto 0..display_max
    pub display_max: f32,

    // === Player ===
    /// Upward impulse per jump press
    pub jump_impulse: f32,
    pub player_radius: f32,
    pub player_mass: f32,
    pub gravity_scale: f32,
    /// Where the player starts each attempt
    pub spawn: Vec2,

    // === World ===
    pub gravity: Vec2,
    /// Camera position relative to the player
    pub camera_offset: Vec2,
    pub level: LevelSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_speed: 1.0,
            max_speed: 10.0,
            slider_bounce_speed: 1.0,
            display_max: 100.0,

            jump_impulse: 4.0,
            player_radius: 0.5,
            player_mass: 1.0,
            gravity_scale: 1.0,
            spawn: Vec2::new(0.0, 0.5),

            gravity: Vec2::new(0.0, -9.81),
            camera_offset: Vec2::new(4.0, 1.5),
            level: LevelSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path` when given, falling back to defaults on error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Check ranges the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let finite = [
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("slider_bounce_speed", self.slider_bounce_speed),
            ("display_max", self.display_max),
            ("jump_impulse", self.jump_impulse),
            ("player_radius", self.player_radius),
            ("player_mass", self.player_mass),
            ("gravity_scale", self.gravity_scale),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }
        if !self.spawn.is_finite() || !self.gravity.is_finite() || !self.camera_offset.is_finite() {
            return Err(SettingsError::Invalid {
                field: "spawn/gravity/camera_offset",
                reason: "must be finite",
            });
        }
        if self.min_speed > self.max_speed {
            return Err(SettingsError::Invalid {
                field: "min_speed",
                reason: "must not exceed max_speed",
            });
        }
        if self.slider_bounce_speed < 0.0 {
            return Err(SettingsError::Invalid {
                field: "slider_bounce_speed",
                reason: "must not be negative",
            });
        }
        if self.player_radius <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "player_radius",
                reason: "must be positive",
            });
        }
        if self.player_mass <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "player_mass",
                reason: "must be positive",
            });
        }
        let level = &self.level;
        let level_finite = [
            ("level.first_obstacle_x", level.first_obstacle_x),
            ("level.gap_min", level.gap_min),
            ("level.gap_max", level.gap_max),
            ("level.height_min", level.height_min),
            ("level.height_max", level.height_max),
            ("level.obstacle_width", level.obstacle_width),
            ("level.ground_y", level.ground_y),
        ];
        for (field, value) in level_finite {
            if !value.is_finite() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }
        if level.gap_min > level.gap_max || level.gap_min < 0.0 {
            return Err(SettingsError::Invalid {
                field: "level.gap_min",
                reason: "must be in 0..=gap_max",
            });
        }
        if level.height_min > level.height_max || level.height_min <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "level.height_min",
                reason: "must be in (0, height_max]",
            });
        }
        if level.obstacle_width <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "level.obstacle_width",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuning() {
        let s = Settings::default();
        assert_eq!(s.min_speed, 1.0);
        assert_eq!(s.max_speed, 10.0);
        assert_eq!(s.slider_bounce_speed, 1.0);
        assert_eq!(s.jump_impulse, 4.0);
        assert_eq!(s.display_max, 100.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "max_speed": 20.0, "camera_offset": [2.0, 0.0] }"#)
            .unwrap();
        assert_eq!(s.max_speed, 20.0);
        assert_eq!(s.min_speed, 1.0);
        assert_eq!(s.camera_offset, Vec2::new(2.0, 0.0));
        assert_eq!(s.level, LevelSettings::default());
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let err = Settings::from_json(r#"{ "min_speed": 5.0, "max_speed": 2.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "min_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_equal_speed_range_allowed() {
        assert!(Settings::from_json(r#"{ "min_speed": 3.0, "max_speed": 3.0 }"#).is_ok());
    }

    #[test]
    fn test_overflowing_level_bounds_rejected() {
        // 1e39 overflows f32 to infinity
        let err = Settings::from_json(r#"{ "level": { "height_max": 1e39 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "level.height_max",
                ..
            }
        ));
        let err = Settings::from_json(r#"{ "level": { "gap_max": 1e39 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "level.gap_max",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load_or_default(Some(Path::new("/definitely/not/here.json")));
        assert_eq!(s, Settings::default());
    }
}
