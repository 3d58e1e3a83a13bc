//! Headless widget state for the xtrix component library.
//!
//! Every widget's state and every state transition lives here as plain data
//! plus pure functions so it can be tested on the host without a browser. The
//! `xtrix_ui` crate binds these models to DOM events, window listeners, and
//! timers.
//!
//! The core is a drag-to-value mapper: [`PointerTracker`] turns pointer travel
//! over a measured track into ratios, which [`SliderState`] quantizes into a
//! bounded value and [`reduce_resizable`] turns into panel size transfers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod carousel;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod listbox;
pub mod notifications;
pub mod otp;
pub mod overlay;
pub mod panels;
pub mod pointer;
pub mod progress;
pub mod range;
pub mod resizable;

pub use carousel::{CarouselMetrics, CarouselStep};
pub use config::{
    OtpConfig, SliderConfig, ToasterConfig, WidgetConfig, WidgetConfigError,
    DEFAULT_NOTIFICATION_CAP, DEFAULT_OTP_LENGTH,
};
pub use disclosure::{AccordionState, CollapsibleState, DisclosureSlot, TabsState};
pub use error::{ConfigError, ResizableError};
pub use notifications::{
    Added, Notification, NotificationId, NotificationOptions, NotificationPosition,
    NotificationQueue, NotificationVariant, StackSlot,
};
pub use listbox::{ComboboxState, ListKey, ListOption, ListOutcome, SelectState};
pub use otp::{cell_dom_id, OtpOutcome, OtpSeparator, OtpState};
pub use overlay::{DismissReason, OverlayKind, OverlaySide, OverlayState};
pub use panels::{allocate, PanelAllocation, PanelPair, PanelPolicy};
pub use pointer::{
    DragSession, DragUpdate, Orientation, PointerId, PointerPosition, PointerSample,
    PointerTracker, TrackRect,
};
pub use progress::{ProgressModel, RatingState, DEFAULT_STAR_COUNT};
pub use range::{SliderKey, SliderState, StepMark, ValueRange, MAX_STEP_MARKS};
pub use resizable::{
    reduce_resizable, HandleDrag, ResizableAction, ResizableEffect, ResizableInteraction,
};
