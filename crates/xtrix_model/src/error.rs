//! Error types shared by the widget models.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
/// Invalid widget configuration detected while building a model.
///
/// These are raised at construction time; a model that exists is always
/// internally consistent.
pub enum ConfigError {
    /// A numeric range bound was NaN or infinite.
    #[error("range bounds must be finite (min={min}, max={max}, step={step})")]
    NonFiniteBounds {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
        /// Configured step.
        step: f64,
    },
    /// The range is empty or inverted.
    #[error("range max ({max}) must be greater than min ({min})")]
    InvalidRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The step is zero or negative.
    #[error("range step must be positive, got {0}")]
    InvalidStep(f64),
    /// Panel size bounds are inverted or outside `0..=100`.
    #[error("panel size bounds must satisfy 0 <= min ({min}) <= max ({max}) <= 100")]
    InvalidPanelBounds {
        /// Configured minimum panel size.
        min: f64,
        /// Configured maximum panel size.
        max: f64,
    },
    /// The default panel size is not a finite value within the size bounds.
    #[error("default panel size ({size}) must lie within {min}..={max}")]
    InvalidDefaultPanelSize {
        /// Configured default size.
        size: f64,
        /// Configured minimum panel size.
        min: f64,
        /// Configured maximum panel size.
        max: f64,
    },
    /// A stored panel size falls outside the group's bounds.
    #[error("panel `{id}` has size {size} outside the group bounds")]
    PanelSizeOutOfBounds {
        /// Panel id.
        id: String,
        /// Stored size.
        size: f64,
    },
    /// The same panel id appears twice in a stored group.
    #[error("panel `{0}` is listed more than once")]
    DuplicatePanel(String),
    /// An OTP input was configured with no cells.
    #[error("otp input length must be at least 1")]
    ZeroLengthOtp,
    /// A progress indicator was configured with a non-positive maximum.
    #[error("progress max must be positive, got {0}")]
    InvalidProgressMax(f64),
    /// Two list options share a value.
    #[error("option value `{0}` is listed more than once")]
    DuplicateOption(String),
    /// A notification queue was configured to hold nothing.
    #[error("notification queue must retain at least one entry")]
    ZeroNotificationCap,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors reported by [`crate::resizable::reduce_resizable`].
pub enum ResizableError {
    /// The action referenced a panel id that never registered.
    #[error("panel `{0}` is not registered")]
    UnknownPanel(String),
    /// A handle named the same panel on both sides.
    #[error("handle must sit between two distinct panels, got `{0}` twice")]
    SamePanel(String),
}
