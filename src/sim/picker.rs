//! Speed picker
//!
//! The slider sweeps between the speed bounds until the lock-in action,
//! then freezes and hands the value to the mover exactly once.

use serde::{Deserialize, Serialize};

use super::mover::SpeedReceiver;
use super::oscillator::{OscillatingValue, display_value, format_display};
use crate::settings::Settings;
use crate::ui::{Slider, TextLabel};

/// Picker lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerState {
    /// Slider sweeping
    Unlocked,
    /// Speed chosen, slider frozen
    Locked,
}

pub struct SpeedPicker {
    value: OscillatingValue,
    slider: Slider,
    label: Option<Box<dyn TextLabel>>,
    display_max: f32,
    state: PickerState,
    chosen_speed: Option<f32>,
}

impl std::fmt::Debug for SpeedPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeedPicker")
            .field("value", &self.value)
            .field("slider", &self.slider)
            .field("has_label", &self.label.is_some())
            .field("state", &self.state)
            .field("chosen_speed", &self.chosen_speed)
            .finish()
    }
}

impl SpeedPicker {
    /// Create an unlocked picker at `min_speed` and publish the initial label
    ///
    /// Expects validated settings. An inverted speed range is swapped and a
    /// NaN bound collapses onto the other instead of panicking.
    pub fn new(settings: &Settings, label: Option<Box<dyn TextLabel>>) -> Self {
        let slider = Slider::new(settings.min_speed, settings.max_speed);
        let mut picker = Self {
            value: OscillatingValue::new(slider.min(), slider.max(), settings.slider_bounce_speed),
            slider,
            label,
            display_max: settings.display_max,
            state: PickerState::Unlocked,
            chosen_speed: None,
        };
        picker.on_slider_changed(picker.slider.value());
        picker
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    /// Current slider value
    pub fn current(&self) -> f32 {
        self.value.current
    }

    pub fn direction(&self) -> f32 {
        self.value.direction
    }

    pub fn chosen_speed(&self) -> Option<f32> {
        self.chosen_speed
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    /// Label value for the current slider position
    pub fn display(&self) -> f32 {
        display_value(
            self.slider.value(),
            self.slider.min(),
            self.slider.max(),
            self.display_max,
        )
    }

    /// Frame update
    ///
    /// Sweeps the slider, then locks in if `lock_in_pressed`. Returns the
    /// chosen speed on the frame it is locked in.
    pub fn update(
        &mut self,
        dt: f32,
        lock_in_pressed: bool,
        receiver: Option<&mut dyn SpeedReceiver>,
    ) -> Option<f32> {
        if self.state == PickerState::Locked {
            return None;
        }

        let value = self.value.step(dt);
        if let Some(changed) = self.slider.set_value(value) {
            self.on_slider_changed(changed);
        }

        if lock_in_pressed {
            return Some(self.lock_in(receiver));
        }
        None
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, value: f32) {
        self.value.current = value.clamp(self.value.min, self.value.max);
        if let Some(changed) = self.slider.set_value(self.value.current) {
            self.on_slider_changed(changed);
        }
    }

    fn lock_in(&mut self, receiver: Option<&mut dyn SpeedReceiver>) -> f32 {
        let speed = self.slider.value();
        self.state = PickerState::Locked;
        self.chosen_speed = Some(speed);
        self.slider.interactable = false;
        log::info!("Speed locked in: {:.2}", speed);

        match receiver {
            Some(receiver) => receiver.start_movement(speed),
            None => log::warn!("No mover to receive speed {:.2}", speed),
        }
        speed
    }

    fn on_slider_changed(&mut self, value: f32) {
        let Some(label) = self.label.as_mut() else {
            return;
        };
        let shown = display_value(value, self.slider.min(), self.slider.max(), self.display_max);
        label.set_text(&format_display(shown));
    }
}
