//! Progress bar and star rating projections.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of stars in a rating.
pub const DEFAULT_STAR_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProgress")]
/// Progress value normalized against `max`.
pub struct ProgressModel {
    value: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawProgress {
    value: f64,
    max: f64,
}

impl TryFrom<RawProgress> for ProgressModel {
    type Error = ConfigError;

    fn try_from(raw: RawProgress) -> Result<Self, Self::Error> {
        Self::new(raw.value, raw.max)
    }
}

impl ProgressModel {
    /// Builds a progress value; `max` must be positive and finite.
    pub fn new(value: f64, max: f64) -> Result<Self, ConfigError> {
        if !max.is_finite() || max <= 0.0 {
            return Err(ConfigError::InvalidProgressMax(max));
        }
        let mut model = Self { value: 0.0, max };
        model.set_value(value);
        Ok(model)
    }

    /// Current value in `[0, max]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Updates the value, clamping into `[0, max]`. NaN is ignored.
    pub fn set_value(&mut self, value: f64) -> f64 {
        if !value.is_nan() {
            self.value = value.clamp(0.0, self.max);
        }
        self.value
    }

    /// Value as a percentage of `max`.
    pub fn percent(&self) -> f64 {
        self.value / self.max * 100.0
    }

    /// Status text such as `"42%"`.
    pub fn label(&self) -> String {
        format!("{:.0}%", self.percent())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRating")]
/// Star rating with hover preview.
pub struct RatingState {
    value: usize,
    star_count: usize,
    disabled: bool,
    showcase: bool,
}

#[derive(Deserialize)]
struct RawRating {
    value: usize,
    star_count: usize,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    showcase: bool,
}

impl From<RawRating> for RatingState {
    fn from(raw: RawRating) -> Self {
        Self::new(raw.value, raw.star_count)
            .disabled(raw.disabled)
            .showcase(raw.showcase)
    }
}

impl Default for RatingState {
    fn default() -> Self {
        Self {
            value: 0,
            star_count: DEFAULT_STAR_COUNT,
            disabled: false,
            showcase: false,
        }
    }
}

impl RatingState {
    /// Builds a rating with `value` clamped to `star_count`.
    pub fn new(value: usize, star_count: usize) -> Self {
        Self {
            value: value.min(star_count),
            star_count,
            ..Self::default()
        }
    }

    /// Disables hover updates.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Showcase ratings render a fixed value and ignore hover.
    pub fn showcase(mut self, showcase: bool) -> Self {
        self.showcase = showcase;
        self
    }

    /// Number of filled stars.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Number of stars rendered.
    pub fn star_count(&self) -> usize {
        self.star_count
    }

    /// Whether hover updates are ignored.
    pub fn is_locked(&self) -> bool {
        self.disabled || self.showcase
    }

    /// Whether star `index` is filled.
    pub fn is_filled(&self, index: usize) -> bool {
        index < self.value
    }

    /// Hovering star `index` sets the value to `index + 1`; returns whether it changed.
    pub fn hover(&mut self, index: usize) -> bool {
        if self.is_locked() || index >= self.star_count {
            return false;
        }
        let next = index + 1;
        let changed = next != self.value;
        self.value = next;
        changed
    }
}
