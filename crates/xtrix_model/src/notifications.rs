//! Bounded notification stack backing the Sonner/Toast components.
//!
//! The queue keeps the most recent entries up to its cap and evicts the oldest
//! first. It owns no timers: [`NotificationQueue::add`] reports evicted ids so
//! the view layer can cancel their auto-dismiss timers.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ToasterConfig;
use crate::error::ConfigError;

/// Width of the front-most notification, in rem.
const STACK_BASE_WIDTH_REM: u32 = 20;
/// Pixels each stacked notification is narrowed and lifted by.
const STACK_STEP_PX: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Queue-unique notification identifier.
pub struct NotificationId(pub u64);

impl NotificationId {
    /// DOM id for the rendered notification.
    pub fn dom_id(self) -> String {
        format!("xtrix-notification-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Colour treatment of a notification.
pub enum NotificationVariant {
    /// Neutral.
    #[default]
    Default,
    /// Positive outcome.
    Success,
    /// Failure.
    Error,
    /// Needs attention.
    Warning,
}

impl NotificationVariant {
    /// Token emitted as `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Screen anchor for a notification stack.
pub enum NotificationPosition {
    /// Top right corner.
    #[default]
    TopRight,
    /// Top left corner.
    TopLeft,
    /// Bottom right corner.
    BottomRight,
    /// Bottom left corner.
    BottomLeft,
    /// Top edge, horizontally centred.
    CenterTop,
    /// Bottom edge, horizontally centred.
    CenterBottom,
    /// Left edge, vertically centred.
    CenterLeft,
    /// Right edge, vertically centred.
    CenterRight,
}

impl NotificationPosition {
    /// Every anchor, in the order stacks are rendered.
    pub const ALL: [Self; 8] = [
        Self::TopRight,
        Self::TopLeft,
        Self::BottomRight,
        Self::BottomLeft,
        Self::CenterTop,
        Self::CenterBottom,
        Self::CenterLeft,
        Self::CenterRight,
    ];

    /// Token emitted as `data-ui-position`.
    pub fn token(self) -> &'static str {
        match self {
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::CenterTop => "center-top",
            Self::CenterBottom => "center-bottom",
            Self::CenterLeft => "center-left",
            Self::CenterRight => "center-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Per-notification overrides.
pub struct NotificationOptions {
    /// Auto-dismiss delay; `None` keeps the notification until dismissed.
    pub duration: Option<Duration>,
    /// Colour treatment.
    pub variant: Option<NotificationVariant>,
    /// Stack anchor.
    pub position: Option<NotificationPosition>,
}

impl NotificationOptions {
    /// Sets the auto-dismiss delay.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the colour treatment.
    pub fn with_variant(mut self, variant: NotificationVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the stack anchor.
    pub fn with_position(mut self, position: NotificationPosition) -> Self {
        self.position = Some(position);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One queued notification with its options resolved against the queue defaults.
pub struct Notification {
    /// Queue-unique id.
    pub id: NotificationId,
    /// Text shown to the user.
    pub message: String,
    /// Auto-dismiss delay.
    pub duration: Option<Duration>,
    /// Colour treatment.
    pub variant: NotificationVariant,
    /// Stack anchor.
    pub position: NotificationPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of [`NotificationQueue::add`].
pub struct Added {
    /// Id of the new notification.
    pub id: NotificationId,
    /// Ids evicted to stay within the cap, oldest first.
    pub evicted: Vec<NotificationId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Placement of a notification inside its stack.
pub struct StackSlot {
    /// Zero-based position within the notifications sharing an anchor.
    pub index: usize,
    /// Upward offset in pixels.
    pub lift_px: u32,
    /// Width narrowing in pixels applied to `20rem`.
    pub narrow_px: u32,
}

impl StackSlot {
    /// Inline style for the stacked wrapper.
    pub fn style(&self) -> String {
        format!(
            "width:calc({STACK_BASE_WIDTH_REM}rem - {}px);transform:translateY(-{}px);",
            self.narrow_px, self.lift_px
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// FIFO queue retaining the most recent notifications.
pub struct NotificationQueue {
    next_id: u64,
    cap: usize,
    default_duration: Option<Duration>,
    default_position: NotificationPosition,
    entries: VecDeque<Notification>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::from_validated(&ToasterConfig::default())
    }
}

impl NotificationQueue {
    /// Builds an empty queue after validating `config`.
    pub fn new(config: &ToasterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &ToasterConfig) -> Self {
        Self {
            next_id: 1,
            cap: config.max_visible,
            default_duration: config.default_duration,
            default_position: config.default_position,
            entries: VecDeque::with_capacity(config.max_visible),
        }
    }

    /// Maximum number of retained notifications.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Number of retained notifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retained notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Looks up a retained notification.
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Queues a notification and evicts the oldest entries beyond the cap.
    pub fn add(&mut self, message: impl Into<String>, options: NotificationOptions) -> Added {
        let id = NotificationId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.push_back(Notification {
            id,
            message: message.into(),
            duration: options.duration.or(self.default_duration),
            variant: options.variant.unwrap_or_default(),
            position: options.position.unwrap_or(self.default_position),
        });

        let overflow = self.entries.len().saturating_sub(self.cap);
        let evicted = self
            .entries
            .drain(..overflow)
            .map(|entry| entry.id)
            .collect();
        Added { id, evicted }
    }

    /// Removes a notification; returns whether it was still queued.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Timer-driven removal. Already-dismissed or evicted ids are ignored.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        self.remove(id)
    }

    /// Drops every notification and returns their ids.
    pub fn clear(&mut self) -> Vec<NotificationId> {
        self.entries.drain(..).map(|entry| entry.id).collect()
    }

    /// Notifications anchored at `position`, oldest first, with their stack slots.
    pub fn stack(&self, position: NotificationPosition) -> Vec<(StackSlot, &Notification)> {
        self.entries
            .iter()
            .filter(|entry| entry.position == position)
            .enumerate()
            .map(|(index, entry)| {
                let offset = STACK_STEP_PX * index as u32;
                let slot = StackSlot {
                    index,
                    lift_px: offset,
                    narrow_px: offset,
                };
                (slot, entry)
            })
            .collect()
    }
}
