//! Leptos widgets bound to the headless `xtrix_model` state.

mod carousel;
mod disclosure;
mod listbox;
mod otp;
mod overlay;
mod progress;
mod resizable;
mod slider;
mod sonner;

pub use carousel::{Carousel, CarouselItem};
pub use disclosure::{Accordion, Collapsible, Tabs};
pub use listbox::{Combobox, ComboboxHandle, Select, SelectHandle};
pub use otp::{InputOtp, InputOtpGroup, InputOtpSeparator, InputOtpSlot, OtpHandle};
pub use overlay::{OverlayClose, OverlayContent, OverlayHandle, OverlayTrigger};
pub use progress::{Progress, Rating};
pub use resizable::{ResizableGroup, ResizableHandle, ResizablePanel, ResizablePanelGroup};
pub use slider::{Slider, SliderHandle, SliderVariant};
pub use sonner::{SonnerHandle, Toaster};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn open_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// Inline style positioning a fill or thumb along the track.
pub(crate) fn percent_style(property: &str, percent: f64) -> String {
    format!("{property}:{percent:.2}%;")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-slider", None), "ui-slider");
        assert_eq!(merge_layout_class("ui-slider", Some("")), "ui-slider");
        assert_eq!(
            merge_layout_class("ui-slider", Some("settings-volume")),
            "ui-slider settings-volume"
        );
    }

    #[test]
    fn tokens_render_state() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(open_token(false), "closed");
        assert_eq!(percent_style("width", 30.0), "width:30.00%;");
        assert_eq!(percent_style("left", 33.333), "left:33.33%;");
    }
}
