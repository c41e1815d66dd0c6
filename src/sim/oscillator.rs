//! Bouncing scalar and its display mapping

use serde::{Deserialize, Serialize};

use crate::{inverse_lerp, lerp};

/// A value that sweeps back and forth between two bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatingValue {
    pub current: f32,
    pub min: f32,
    pub max: f32,
    /// Full sweeps of the range per second
    pub rate: f32,
    /// +1 rising, -1 falling
    pub direction: f32,
}

impl OscillatingValue {
    /// Start at `min`, rising
    pub fn new(min: f32, max: f32, rate: f32) -> Self {
        Self {
            current: min,
            min,
            max,
            rate,
            direction: 1.0,
        }
    }

    /// Advance by `dt` seconds, reversing at either bound
    pub fn step(&mut self, dt: f32) -> f32 {
        let span = self.max - self.min;
        self.current += self.direction * self.rate * dt * span;

        if self.current >= self.max {
            self.current = self.max;
            self.direction = -1.0;
        } else if self.current <= self.min {
            self.current = self.min;
            self.direction = 1.0;
        }

        self.current
    }
}

/// Map `value` in `[min, max]` onto `[0, display_max]`
///
/// A degenerate range maps everything to 0.
pub fn display_value(value: f32, min: f32, max: f32, display_max: f32) -> f32 {
    let t = if (max - min).abs() > f32::EPSILON {
        inverse_lerp(min, max, value)
    } else {
        0.0
    };
    lerp(0.0, display_max, t)
}

/// Label text for a display value (one decimal)
pub fn format_display(value: f32) -> String {
    format!("{value:.1}")
}
