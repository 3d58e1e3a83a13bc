//! Leptos widget library bound to the headless `xtrix_model` state.
//!
//! Each stateful widget is driven by a `Copy` handle created by the component
//! that owns the state and passed down as a prop ([`SliderHandle`],
//! [`ResizableGroup`], [`SonnerHandle`], [`OtpHandle`], [`OverlayHandle`],
//! [`SelectHandle`], [`ComboboxHandle`]). Widgets emit the
//! stable `data-ui-*` DOM contract (`data-ui-kind`, `data-ui-variant`,
//! `data-ui-slot`, ...) consumed by stylesheets.
//!
//! Drag gestures attach their move/up/cancel listeners to the window when the
//! gesture starts and remove them when it ends, is cancelled, or the owner is
//! torn down. Recoverable runtime problems are logged with
//! `leptos::logging::warn!`; invalid configuration panics at mount.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod dom;
mod gesture;
mod widgets;

pub use widgets::{
    Accordion, Carousel, CarouselItem, Collapsible, Combobox, ComboboxHandle, InputOtp,
    InputOtpGroup, InputOtpSeparator, InputOtpSlot, OtpHandle, OverlayClose, OverlayContent,
    OverlayHandle, OverlayTrigger, Progress, Rating, ResizableGroup, ResizableHandle,
    ResizablePanel, ResizablePanelGroup, Select, SelectHandle, Slider, SliderHandle,
    SliderVariant, SonnerHandle, Tabs, Toaster,
};

/// Convenience imports for apps composing the widget set.
pub mod prelude {
    pub use crate::{
        Accordion, Carousel, CarouselItem, Collapsible, Combobox, ComboboxHandle, InputOtp,
        InputOtpGroup, InputOtpSeparator, InputOtpSlot, OtpHandle, OverlayClose, OverlayContent,
        OverlayHandle, OverlayTrigger, Progress, Rating, ResizableGroup, ResizableHandle,
        ResizablePanel, ResizablePanelGroup, Select, SelectHandle, Slider, SliderHandle,
        SliderVariant, SonnerHandle, Tabs, Toaster,
    };
    pub use xtrix_model::{
        DisclosureSlot, ListOption, NotificationOptions, NotificationPosition,
        NotificationVariant, Orientation, OtpConfig, OtpSeparator, OverlaySide, PanelPolicy,
        SliderConfig, ToasterConfig, WidgetConfig,
    };
}
