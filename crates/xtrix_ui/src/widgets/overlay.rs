//! Modal overlays: dialog, sheet, and drawer.
//!
//! All three share one handle and one content component; the handle's kind
//! decides the anchored edge and whether a backdrop press dismisses.

use leptos::*;
use xtrix_model::{DismissReason, OverlayKind, OverlaySide, OverlayState};

use super::{bool_token, merge_layout_class, open_token};
use crate::dom::{focus_element_by_id, part_id};

#[derive(Clone, Copy)]
/// Owner-side handle for one overlay.
pub struct OverlayHandle {
    state: RwSignal<OverlayState>,
    id: StoredValue<String>,
}

impl OverlayHandle {
    /// Creates a closed overlay of `kind`; `id` scopes the DOM ids of its parts.
    pub fn new(id: impl Into<String>, kind: OverlayKind) -> Self {
        Self {
            state: create_rw_signal(OverlayState::new(kind)),
            id: store_value(id.into()),
        }
    }

    /// Centered modal dialog.
    pub fn dialog(id: impl Into<String>) -> Self {
        Self::new(id, OverlayKind::Dialog)
    }

    /// Edge sheet, right side unless the content says otherwise.
    pub fn sheet(id: impl Into<String>) -> Self {
        Self::new(id, OverlayKind::Sheet)
    }

    /// Bottom drawer that also closes from its backdrop.
    pub fn drawer(id: impl Into<String>) -> Self {
        Self::new(id, OverlayKind::Drawer)
    }

    /// Overlay flavor.
    pub fn kind(&self) -> OverlayKind {
        self.state.with_untracked(OverlayState::kind)
    }

    /// Whether the overlay is showing. Tracked.
    pub fn is_open(&self) -> bool {
        self.state.with(OverlayState::is_open)
    }

    /// Shows the overlay.
    pub fn open(&self) {
        self.state.update(|state| {
            state.open();
        });
    }

    /// Hides the overlay and returns focus to its trigger.
    pub fn close(&self) {
        if self.state.try_update(OverlayState::close).unwrap_or(false) {
            let _ = focus_element_by_id(&self.trigger_id());
        }
    }

    /// Opens a closed overlay or closes an open one.
    pub fn toggle(&self) {
        if self.state.with_untracked(OverlayState::is_open) {
            self.close();
        } else {
            self.open();
        }
    }

    /// Closes for `reason` when the kind honors it; returns whether it closed.
    pub fn dismiss(&self, reason: DismissReason) -> bool {
        let closed = self
            .state
            .try_update(|state| state.dismiss(reason))
            .unwrap_or(false);
        if closed {
            let _ = focus_element_by_id(&self.trigger_id());
        }
        closed
    }

    fn trigger_id(&self) -> String {
        self.id.with_value(|id| part_id(id, "trigger"))
    }

    fn panel_id(&self) -> String {
        self.id.with_value(|id| part_id(id, "panel"))
    }

    fn title_id(&self) -> String {
        self.id.with_value(|id| part_id(id, "title"))
    }
}

#[component]
/// Button that toggles the overlay.
pub fn OverlayTrigger(
    handle: OverlayHandle,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            id=handle.trigger_id()
            class=merge_layout_class("ui-overlay-trigger", layout_class)
            aria-haspopup="dialog"
            aria-controls=handle.panel_id()
            aria-expanded=move || bool_token(handle.is_open())
            data-ui-primitive="true"
            data-ui-kind=format!("{}-trigger", handle.kind().token())
            on:click=move |_| handle.toggle()
        >
            {children()}
        </button>
    }
}

#[component]
/// Backdrop plus modal panel, rendered only while open.
///
/// `Escape` always closes; a backdrop press closes drawers only. The panel is
/// focused when it opens.
pub fn OverlayContent(
    handle: OverlayHandle,
    /// Heading announced as the dialog's accessible name.
    #[prop(into)]
    title: String,
    /// Edge for sheets and drawers; defaults by kind.
    #[prop(optional)]
    side: Option<OverlaySide>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let kind = handle.kind();
    let side = side.or_else(|| kind.default_side());
    let title = store_value(title);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if handle.state.with_untracked(OverlayState::is_open) {
            ev.prevent_default();
            ev.stop_propagation();
            handle.dismiss(DismissReason::Escape);
        }
    });
    on_cleanup(move || escape_listener.remove());

    create_effect(move |was_open: Option<bool>| {
        let is_open = handle.is_open();
        if is_open && was_open != Some(true) {
            let _ = focus_element_by_id(&handle.panel_id());
        }
        is_open
    });

    view! {
        <Show when=move || handle.is_open() fallback=|| ()>
            <div
                class="ui-overlay-backdrop"
                data-ui-primitive="true"
                data-ui-kind="overlay-backdrop"
                data-ui-state=open_token(true)
                on:mousedown=move |_| {
                    handle.dismiss(DismissReason::Backdrop);
                }
            ></div>
            <div
                id=handle.panel_id()
                class=merge_layout_class("ui-overlay", layout_class)
                role="dialog"
                aria-modal="true"
                aria-labelledby=handle.title_id()
                tabindex="-1"
                data-ui-primitive="true"
                data-ui-kind=kind.token()
                data-ui-side=side.map(OverlaySide::token)
                data-ui-state=open_token(true)
            >
                {(kind == OverlayKind::Drawer)
                    .then(|| view! { <div data-ui-slot="grab-bar" aria-hidden="true"></div> })}
                <h2 id=handle.title_id() data-ui-slot="title">{title.get_value()}</h2>
                <div data-ui-slot="body">{children()}</div>
                <button
                    type="button"
                    aria-label="Close"
                    data-ui-slot="close"
                    on:click=move |_| {
                        handle.dismiss(DismissReason::CloseButton);
                    }
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}

#[component]
/// Extra close control placed inside the content, such as a footer "Cancel".
pub fn OverlayClose(
    handle: OverlayHandle,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-overlay-close", layout_class)
            data-ui-slot="close"
            on:click=move |_| {
                handle.dismiss(DismissReason::CloseButton);
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn handle_tracks_open_state_across_copies() {
        let _ = create_runtime();
        let dialog = OverlayHandle::dialog("confirm");
        let copy = dialog;
        copy.open();
        assert!(dialog.is_open());
        dialog.toggle();
        assert!(!copy.is_open());
        assert_eq!(dialog.kind(), OverlayKind::Dialog);
        assert_eq!(dialog.trigger_id(), "confirm-trigger");
        assert_eq!(dialog.panel_id(), "confirm-panel");
    }

    #[test]
    fn backdrop_dismisses_drawers_but_not_dialogs() {
        let _ = create_runtime();
        let dialog = OverlayHandle::dialog("confirm");
        let drawer = OverlayHandle::drawer("filters");
        dialog.open();
        drawer.open();

        assert!(!dialog.dismiss(DismissReason::Backdrop));
        assert!(dialog.is_open());
        assert!(drawer.dismiss(DismissReason::Backdrop));
        assert!(!drawer.is_open());

        assert!(dialog.dismiss(DismissReason::Escape));
        assert!(!dialog.dismiss(DismissReason::Escape));
    }

    #[test]
    fn sheets_default_to_the_right_edge() {
        let _ = create_runtime();
        let sheet = OverlayHandle::sheet("settings");
        assert_eq!(sheet.kind().default_side(), Some(OverlaySide::Right));
        sheet.close();
        assert!(!sheet.is_open());
    }
}
