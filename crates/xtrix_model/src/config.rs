//! Widget configuration with defaults matching the component library.
//!
//! Each section deserializes independently; missing fields fall back to the
//! same defaults the components use when mounted without props.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::notifications::NotificationPosition;
use crate::panels::PanelPolicy;
use crate::range::ValueRange;

/// Notifications retained by default before the oldest is evicted.
pub const DEFAULT_NOTIFICATION_CAP: usize = 5;
/// Cells in a default OTP input.
pub const DEFAULT_OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Slider bounds and mount value.
pub struct SliderConfig {
    /// Value at mount before quantization.
    pub default_value: f64,
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Quantization step.
    pub step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            default_value: 25.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl SliderConfig {
    /// Validates the bounds.
    pub fn validate(&self) -> Result<ValueRange, ConfigError> {
        ValueRange::new(self.min, self.max, self.step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Notification stack settings.
pub struct ToasterConfig {
    /// Most-recent entries retained; older ones are evicted first.
    pub max_visible: usize,
    /// Auto-dismiss delay applied when a notification does not set its own.
    #[serde(with = "optional_millis")]
    pub default_duration: Option<Duration>,
    /// Stack placement used when a notification does not set its own.
    pub default_position: NotificationPosition,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_NOTIFICATION_CAP,
            default_duration: None,
            default_position: NotificationPosition::TopRight,
        }
    }
}

impl ToasterConfig {
    /// Rejects a zero-capacity stack.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_visible == 0 {
            return Err(ConfigError::ZeroNotificationCap);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// OTP input shape.
pub struct OtpConfig {
    /// Number of single-digit cells.
    pub length: usize,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_OTP_LENGTH,
        }
    }
}

impl OtpConfig {
    /// Rejects an input with no cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::ZeroLengthOtp);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Bundle of per-widget settings a host application can ship as JSON.
pub struct WidgetConfig {
    /// Slider defaults.
    pub slider: SliderConfig,
    /// Resizable panel bounds.
    pub panels: PanelPolicy,
    /// Notification stack settings.
    pub toaster: ToasterConfig,
    /// OTP input shape.
    pub otp: OtpConfig,
}

impl WidgetConfig {
    /// Parses a JSON document and validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetConfigError::Parse`] for malformed JSON and
    /// [`WidgetConfigError::Invalid`] when a section fails validation.
    pub fn from_json(raw: &str) -> Result<Self, WidgetConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.slider.validate()?;
        self.panels.validate()?;
        self.toaster.validate()?;
        self.otp.validate()
    }
}

#[derive(Debug, thiserror::Error)]
/// Failure loading a [`WidgetConfig`] document.
pub enum WidgetConfigError {
    /// The document is not valid JSON for the config schema.
    #[error("widget config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but describes an invalid widget.
    #[error("widget config invalid: {0}")]
    Invalid(#[from] ConfigError),
}

mod optional_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, ser: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => ser.serialize_some(&(duration.as_millis() as u64)),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(de)?.map(Duration::from_millis))
    }
}
