//! Open state for modal overlays: dialogs, side sheets, and drawers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Overlay flavor; decides the default edge and whether the backdrop dismisses.
pub enum OverlayKind {
    /// Centered modal dialog.
    #[default]
    Dialog,
    /// Panel sliding in from an edge.
    Sheet,
    /// Edge panel with a grab bar that closes on a backdrop click.
    Drawer,
}

impl OverlayKind {
    /// Token emitted as `data-ui-kind`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::Sheet => "sheet",
            Self::Drawer => "drawer",
        }
    }

    /// Edge the panel is anchored to when none is given.
    pub fn default_side(self) -> Option<OverlaySide> {
        match self {
            Self::Dialog => None,
            Self::Sheet => Some(OverlaySide::Right),
            Self::Drawer => Some(OverlaySide::Bottom),
        }
    }

    /// Whether clicking the backdrop closes the overlay.
    pub fn closes_on_backdrop(self) -> bool {
        matches!(self, Self::Drawer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Viewport edge a sheet or drawer slides in from.
pub enum OverlaySide {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl OverlaySide {
    /// Token emitted as `data-ui-side`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What asked the overlay to close.
pub enum DismissReason {
    /// `Escape` pressed while open.
    Escape,
    /// Pointer pressed on the backdrop.
    Backdrop,
    /// The overlay's own close control.
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Open/closed state of one overlay.
pub struct OverlayState {
    kind: OverlayKind,
    open: bool,
}

impl OverlayState {
    /// Builds a closed overlay.
    pub fn new(kind: OverlayKind) -> Self {
        Self { kind, open: false }
    }

    /// Overlay flavor.
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    /// Whether the overlay is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the overlay; returns whether it was closed.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Closes the overlay; returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes in response to `reason` if this kind honors it; returns whether it closed.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if reason == DismissReason::Backdrop && !self.kind.closes_on_backdrop() {
            return false;
        }
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_and_close_report_transitions() {
        let mut dialog = OverlayState::new(OverlayKind::Dialog);
        assert!(!dialog.is_open());
        assert!(dialog.open());
        assert!(!dialog.open());
        assert!(dialog.close());
        assert!(!dialog.close());
        assert!(dialog.toggle());
        assert!(!dialog.toggle());
    }

    #[test]
    fn escape_and_close_button_always_dismiss() {
        for kind in [OverlayKind::Dialog, OverlayKind::Sheet, OverlayKind::Drawer] {
            let mut overlay = OverlayState::new(kind);
            overlay.open();
            assert!(overlay.dismiss(DismissReason::Escape));
            overlay.open();
            assert!(overlay.dismiss(DismissReason::CloseButton));
            assert!(!overlay.dismiss(DismissReason::Escape));
        }
    }

    #[test]
    fn only_drawers_close_from_the_backdrop() {
        let mut dialog = OverlayState::new(OverlayKind::Dialog);
        dialog.open();
        assert!(!dialog.dismiss(DismissReason::Backdrop));
        assert!(dialog.is_open());

        let mut drawer = OverlayState::new(OverlayKind::Drawer);
        drawer.open();
        assert!(drawer.dismiss(DismissReason::Backdrop));
        assert!(!drawer.is_open());
    }

    #[test]
    fn kinds_anchor_to_their_default_edge() {
        assert_eq!(OverlayKind::Dialog.default_side(), None);
        assert_eq!(OverlayKind::Sheet.default_side(), Some(OverlaySide::Right));
        assert_eq!(OverlayKind::Drawer.default_side(), Some(OverlaySide::Bottom));
        assert_eq!(OverlaySide::Left.token(), "left");
        assert_eq!(OverlayKind::Drawer.token(), "drawer");
    }
}
