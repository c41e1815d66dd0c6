//! UI widget models
//!
//! The picker writes into a [`Slider`] and publishes text through a
//! [`TextLabel`]. Hosts plug in whatever actually draws them.

use std::cell::RefCell;
use std::rc::Rc;

/// A horizontal slider with a bounded value
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    min: f32,
    max: f32,
    value: f32,
    /// Whether the player may drag it
    pub interactable: bool,
}

impl Slider {
    /// Create a slider over the range spanned by `a` and `b`, starting at
    /// the lower end. Bounds are ordered; a NaN bound collapses onto the other.
    pub fn new(a: f32, b: f32) -> Self {
        let (min, max) = match (a.is_nan(), b.is_nan()) {
            (false, false) => (a.min(b), a.max(b)),
            (true, false) => (b, b),
            (false, true) => (a, a),
            (true, true) => (0.0, 0.0),
        };
        Self {
            min,
            max,
            value: min,
            interactable: true,
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value (clamped to range)
    ///
    /// Returns the new value when it changed, which is the slider's
    /// value-changed notification.
    pub fn set_value(&mut self, value: f32) -> Option<f32> {
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(value)
    }
}

/// A text widget
pub trait TextLabel {
    fn set_text(&mut self, text: &str);
}

/// Label backed by a shared string, readable by the host after each frame
#[derive(Debug, Clone, Default)]
pub struct SharedLabel(Rc<RefCell<String>>);

impl SharedLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text
    pub fn text(&self) -> String {
        self.0.borrow().clone()
    }
}

impl TextLabel for SharedLabel {
    fn set_text(&mut self, text: &str) {
        let mut s = self.0.borrow_mut();
        s.clear();
        s.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_starts_at_min() {
        let slider = Slider::new(1.0, 10.0);
        assert_eq!(slider.value(), 1.0);
        assert!(slider.interactable);
    }

    #[test]
    fn test_slider_orders_bounds() {
        let mut slider = Slider::new(5.0, 2.0);
        assert_eq!((slider.min(), slider.max()), (2.0, 5.0));
        assert_eq!(slider.value(), 2.0);
        assert_eq!(slider.set_value(9.0), Some(5.0));
    }

    #[test]
    fn test_slider_nan_bound_collapses() {
        let mut slider = Slider::new(f32::NAN, 3.0);
        assert_eq!((slider.min(), slider.max()), (3.0, 3.0));
        assert_eq!(slider.set_value(1.0), None);

        let slider = Slider::new(f32::NAN, f32::NAN);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_slider_clamps_and_notifies() {
        let mut slider = Slider::new(1.0, 10.0);
        assert_eq!(slider.set_value(12.0), Some(10.0));
        assert_eq!(slider.value(), 10.0);
        // No change, no notification
        assert_eq!(slider.set_value(10.0), None);
        assert_eq!(slider.set_value(-3.0), Some(1.0));
    }

    #[test]
    fn test_shared_label_clones_see_updates() {
        let label = SharedLabel::new();
        let mut writer = label.clone();
        writer.set_text("42.0");
        assert_eq!(label.text(), "42.0");
        writer.set_text("7.5");
        assert_eq!(label.text(), "7.5");
    }
}
