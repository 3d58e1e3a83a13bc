//! One-time-passcode input rendered as one focusable cell per digit.

use leptos::*;
use wasm_bindgen::JsCast;
use xtrix_model::{cell_dom_id, ConfigError, OtpConfig, OtpOutcome, OtpSeparator, OtpState};

use super::{bool_token, merge_layout_class};
use crate::dom::focus_element_by_id;

#[derive(Clone, Copy)]
/// Owner-side handle for an OTP input.
pub struct OtpHandle {
    state: RwSignal<OtpState>,
    input_id: StoredValue<String>,
}

impl OtpHandle {
    /// Creates an empty input; `input_id` scopes the DOM ids of its cells.
    ///
    /// # Panics
    ///
    /// Panics when `config.length` is zero.
    pub fn new(input_id: impl Into<String>, config: OtpConfig) -> Self {
        Self::try_new(input_id, config).unwrap_or_else(|err| panic!("invalid otp config: {err}"))
    }

    /// Fallible form of [`OtpHandle::new`].
    pub fn try_new(input_id: impl Into<String>, config: OtpConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: create_rw_signal(OtpState::new(&config)?),
            input_id: store_value(input_id.into()),
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.state.with_untracked(OtpState::len)
    }

    /// Always false; zero-length inputs cannot be built.
    pub fn is_empty(&self) -> bool {
        self.state.with_untracked(OtpState::is_empty)
    }

    /// The complete code once every cell is filled.
    pub fn code(&self) -> Option<String> {
        self.state.with(OtpState::code)
    }

    /// Clears every cell and focuses the first.
    pub fn reset(&self) {
        self.state.update(OtpState::reset);
        self.focus(0);
    }

    fn cell_id(&self, index: usize) -> String {
        self.input_id.with_value(|input_id| cell_dom_id(input_id, index))
    }

    fn cell_text(&self, index: usize) -> String {
        self.state
            .with(|state| state.cell(index).map(String::from).unwrap_or_default())
    }

    fn focus(&self, index: usize) {
        let _ = focus_element_by_id(&self.cell_id(index));
    }

    fn apply(&self, edit: impl FnOnce(&mut OtpState) -> OtpOutcome) -> OtpOutcome {
        let mut state = self.state.get_untracked();
        let outcome = edit(&mut state);
        if let OtpOutcome::Updated { focus } | OtpOutcome::Moved { focus } = outcome {
            self.state.set(state);
            self.focus(focus);
        }
        outcome
    }
}

/// Text the edit inserted, when the browser reports it; deletions report none.
fn inserted_text(ev: &web_sys::Event) -> Option<String> {
    ev.dyn_ref::<web_sys::InputEvent>()
        .and_then(web_sys::InputEvent::data)
        .filter(|data| !data.is_empty())
}

#[component]
/// Container for an OTP input's groups and separators.
pub fn InputOtp(
    handle: OtpHandle,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Called with the full code whenever an edit completes it.
    #[prop(optional)]
    on_complete: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    if let Some(on_complete) = on_complete {
        create_effect(move |previous: Option<Option<String>>| {
            let code = handle.code();
            if let Some(code) = code.as_ref() {
                if previous.flatten().as_ref() != Some(code) {
                    on_complete.call(code.clone());
                }
            }
            code
        });
    }

    view! {
        <div
            class=merge_layout_class("ui-otp", layout_class)
            id=handle.input_id.get_value()
            data-ui-primitive="true"
            data-ui-kind="input-otp"
            data-ui-complete=move || bool_token(handle.code().is_some())
        >
            {children()}
        </div>
    }
}

#[component]
/// Visual grouping of adjacent OTP cells.
pub fn InputOtpGroup(children: Children) -> impl IntoView {
    view! {
        <div data-ui-primitive="true" data-ui-kind="input-otp-group">
            {children()}
        </div>
    }
}

#[component]
/// Single digit cell.
///
/// Typing a digit advances focus; non-digits are discarded; Backspace clears
/// the cell or moves back when it is already empty. Pasting a digit run fills
/// the following cells.
pub fn InputOtpSlot(handle: OtpHandle, index: usize) -> impl IntoView {
    let on_input = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let outcome = match inserted_text(&ev) {
            Some(digits) => handle.apply(|state| state.insert(index, &digits)),
            None => {
                let text = input.value();
                handle.apply(|state| state.input(index, &text))
            }
        };
        if outcome == OtpOutcome::Rejected {
            input.set_value(&handle.cell_text(index));
        }
    };
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() != "Backspace" {
            return;
        }
        ev.prevent_default();
        handle.apply(|state| state.backspace(index));
    };
    let on_focus = move |ev: ev::FocusEvent| {
        // Typing over a filled cell then replaces its digit wherever the caret was.
        event_target::<web_sys::HtmlInputElement>(&ev).select();
        handle.state.update(|state| {
            state.focus_cell(index);
        });
    };

    view! {
        <input
            id=handle.cell_id(index)
            type="text"
            inputmode="numeric"
            autocomplete="one-time-code"
            aria-label=format!("Digit {}", index + 1)
            data-ui-primitive="true"
            data-ui-kind="input-otp-slot"
            data-ui-active=move || bool_token(handle.state.with(|state| state.focus() == index))
            data-ui-filled=move || bool_token(handle.state.with(|state| state.cell(index).is_some()))
            prop:value=move || handle.cell_text(index)
            on:input=on_input
            on:keydown=on_keydown
            on:focus=on_focus
        />
    }
}

#[component]
/// Decorative separator between OTP groups.
pub fn InputOtpSeparator(#[prop(optional)] variant: OtpSeparator) -> impl IntoView {
    view! {
        <div
            role="separator"
            data-ui-primitive="true"
            data-ui-kind="input-otp-separator"
            data-ui-variant=variant.token()
        >
            {variant.glyph()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn handle() -> OtpHandle {
        OtpHandle::new("verify", OtpConfig { length: 4 })
    }

    #[test]
    fn typed_digits_advance_and_complete_the_code() {
        let _ = create_runtime();
        let otp = handle();
        assert_eq!(otp.apply(|state| state.insert(0, "4")), OtpOutcome::Updated { focus: 1 });
        assert_eq!(otp.cell_text(0), "4");
        assert_eq!(otp.state.with_untracked(OtpState::focus), 1);
        assert_eq!(otp.code(), None);

        otp.apply(|state| state.insert(1, "271"));
        assert_eq!(otp.code().as_deref(), Some("4271"));
        assert_eq!(otp.state.with_untracked(OtpState::focus), 3);
    }

    #[test]
    fn rejected_input_leaves_cells_and_focus_alone() {
        let _ = create_runtime();
        let otp = handle();
        otp.apply(|state| state.insert(0, "12"));
        let before = otp.state.get_untracked();

        assert_eq!(otp.apply(|state| state.insert(2, "a")), OtpOutcome::Rejected);
        assert_eq!(otp.apply(|state| state.input(9, "3")), OtpOutcome::Rejected);
        assert_eq!(otp.state.get_untracked(), before);
        assert_eq!(otp.cell_text(2), "");
    }

    #[test]
    fn backspace_and_reset_clear_cells() {
        let _ = create_runtime();
        let otp = handle();
        otp.apply(|state| state.insert(0, "98"));
        otp.apply(|state| state.backspace(2));
        assert_eq!(otp.state.with_untracked(OtpState::focus), 1);
        otp.apply(|state| state.backspace(1));
        assert_eq!(otp.cell_text(1), "");

        otp.reset();
        assert_eq!(otp.cell_text(0), "");
        assert_eq!(otp.len(), 4);
        assert_eq!(otp.cell_id(3), cell_dom_id("verify", 3));
    }
}
