//! Bounded, stepped numeric values for sliders and other range controls.

use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::error::ConfigError;

/// Tolerance used when deciding whether a value already sits on a step boundary.
pub const STEP_EPSILON: f64 = 1e-9;

/// Steps moved by `PageUp` / `PageDown`.
const PAGE_STEPS: i32 = 10;

/// Most tick marks a stepped slider draws; finer ranges draw none.
pub const MAX_STEP_MARKS: usize = 101;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
/// Validated `[min, max]` interval quantized by `step`.
pub struct ValueRange {
    min: f64,
    max: f64,
    step: f64,
}

#[derive(Deserialize)]
struct RawRange {
    min: f64,
    max: f64,
    step: f64,
}

impl TryFrom<RawRange> for ValueRange {
    type Error = ConfigError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max, raw.step)
    }
}

impl ValueRange {
    /// Builds a range, rejecting non-finite bounds, `max <= min`, and `step <= 0`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(ConfigError::NonFiniteBounds { min, max, step });
        }
        if max <= min {
            return Err(ConfigError::InvalidRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Quantization step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamps `raw` into the range and snaps it to the nearest step offset from `min`.
    ///
    /// Ties round half away from zero. The snapped value is clamped again so a
    /// range whose width is not a multiple of `step` never yields a value past `max`.
    pub fn quantize(&self, raw: f64) -> f64 {
        let clamped = raw.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (steps * self.step + self.min).clamp(self.min, self.max)
    }

    /// Projects `value` onto `0..=100` for fill width and thumb offset.
    pub fn percentage(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min) * 100.0
    }

    /// Maps a track ratio (`0.0` at the origin, `1.0` at the far edge) to a quantized value.
    pub fn value_at_ratio(&self, ratio: f64) -> f64 {
        let ratio = ratio.clamp(0.0, 1.0);
        self.quantize(self.min + ratio * (self.max - self.min))
    }

    /// Tick marks drawn by the stepped slider variant, one per reachable step.
    ///
    /// Empty when that would be more than [`MAX_STEP_MARKS`] marks.
    pub fn step_marks(&self) -> Vec<StepMark> {
        let steps = ((self.max - self.min) / self.step + STEP_EPSILON).floor();
        if steps >= MAX_STEP_MARKS as f64 {
            return Vec::new();
        }
        let count = steps as usize + 1;
        (0..count)
            .map(|index| {
                let value = self.min + index as f64 * self.step;
                StepMark {
                    index,
                    value,
                    percent: self.percentage(value),
                }
            })
            .collect()
    }

    fn step_index(&self, value: f64) -> f64 {
        let raw = (value - self.min) / self.step;
        let nearest = raw.round();
        if (raw - nearest).abs() < STEP_EPSILON {
            nearest
        } else {
            raw
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Tick position for the stepped slider variant.
pub struct StepMark {
    /// Zero-based tick index.
    pub index: usize,
    /// Value the tick represents.
    pub value: f64,
    /// Offset along the track in percent.
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys the slider thumb reacts to.
pub enum SliderKey {
    /// One step up (`ArrowRight` / `ArrowUp`).
    Increment,
    /// One step down (`ArrowLeft` / `ArrowDown`).
    Decrement,
    /// Ten steps up.
    PageUp,
    /// Ten steps down.
    PageDown,
    /// Jump to `min`.
    Home,
    /// Jump to `max`.
    End,
}

impl SliderKey {
    /// Parses a DOM `KeyboardEvent.key` value. Unhandled keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowUp" => Some(Self::Increment),
            "ArrowLeft" | "ArrowDown" => Some(Self::Decrement),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSliderState")]
/// Current slider value together with the range it is constrained to.
pub struct SliderState {
    range: ValueRange,
    value: f64,
}

#[derive(Deserialize)]
struct RawSliderState {
    range: ValueRange,
    value: f64,
}

impl From<RawSliderState> for SliderState {
    fn from(raw: RawSliderState) -> Self {
        Self::with_range(raw.range, raw.value)
    }
}

impl SliderState {
    /// Builds the mounted state from a config; the default value is quantized like any input.
    pub fn new(config: &SliderConfig) -> Result<Self, ConfigError> {
        let range = ValueRange::new(config.min, config.max, config.step)?;
        Ok(Self::with_range(range, config.default_value))
    }

    /// Builds the state from an already validated range.
    pub fn with_range(range: ValueRange, default_value: f64) -> Self {
        let value = if default_value.is_finite() {
            range.quantize(default_value)
        } else {
            range.min()
        };
        Self { range, value }
    }

    /// Range the value is constrained to.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Accepted value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current value projected onto `0..=100`.
    pub fn percentage(&self) -> f64 {
        self.range.percentage(self.value)
    }

    /// Accepts `raw` after clamping and quantization and returns the stored value.
    ///
    /// Non-finite input is ignored.
    pub fn set_value(&mut self, raw: f64) -> f64 {
        if raw.is_finite() {
            self.value = self.range.quantize(raw);
        }
        self.value
    }

    /// Sets the value from a track ratio.
    pub fn set_ratio(&mut self, ratio: f64) -> f64 {
        if ratio.is_finite() {
            self.value = self.range.value_at_ratio(ratio);
        }
        self.value
    }

    /// Applies a keyboard step and returns the stored value.
    pub fn apply_key(&mut self, key: SliderKey) -> f64 {
        match key {
            SliderKey::Increment => self.nudge(1),
            SliderKey::Decrement => self.nudge(-1),
            SliderKey::PageUp => self.nudge(PAGE_STEPS),
            SliderKey::PageDown => self.nudge(-PAGE_STEPS),
            SliderKey::Home => self.set_value(self.range.min()),
            SliderKey::End => self.set_value(self.range.max()),
        }
    }

    fn nudge(&mut self, steps: i32) -> f64 {
        let index = self.range.step_index(self.value);
        // Off-grid values (only possible at `max`) move to the neighbouring grid point.
        let base = if steps < 0 {
            index.ceil()
        } else {
            index.floor()
        };
        let target = (base + f64::from(steps)) * self.range.step() + self.range.min();
        self.set_value(target)
    }
}
