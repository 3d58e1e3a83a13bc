//! Internal DOM measurement, pointer, and focus helpers shared by the widgets.

use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use xtrix_model::{PointerId, PointerPosition, PointerSample, TrackRect};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons a gesture could not measure the element it drags over.
pub(crate) enum MeasureError {
    /// The track element has not mounted yet.
    #[error("`{0}` is not mounted")]
    NotMounted(String),
    /// The element rendered with no size along the drag axis.
    #[error("`{0}` has no extent along the drag axis")]
    ZeroExtent(String),
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Whether a pointer-down should start a gesture: primary mouse button, or the
/// primary touch/pen contact.
pub(crate) fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

pub(crate) fn pointer_sample(ev: &web_sys::PointerEvent) -> PointerSample {
    PointerSample {
        id: PointerId(ev.pointer_id()),
        position: PointerPosition {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        },
    }
}

pub(crate) fn element_rect(element: &web_sys::Element) -> TrackRect {
    let rect = element.get_bounding_client_rect();
    TrackRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
#[cfg(target_arch = "wasm32")]
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn focus_element_by_id(_: &str) -> bool {
    false
}

/// Stable DOM id for a widget part, derived from the owning widget's id.
pub(crate) fn part_id(owner: &str, part: &str) -> String {
    format!("{owner}-{part}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn part_ids_are_scoped_by_owner() {
        assert_eq!(part_id("volume", "thumb"), "volume-thumb");
    }

    #[test]
    fn measure_errors_name_the_element() {
        assert_eq!(
            MeasureError::NotMounted("slider track".to_string()).to_string(),
            "`slider track` is not mounted"
        );
        assert_eq!(
            MeasureError::ZeroExtent("resize handle".to_string()).to_string(),
            "`resize handle` has no extent along the drag axis"
        );
    }
}
