//! Select and combobox widgets built on a shared listbox popup.
//!
//! Focus stays on the trigger (or the combobox input) while the popup is open;
//! the highlighted row is announced through `aria-activedescendant`.

use leptos::*;
use xtrix_model::{ComboboxState, ConfigError, ListKey, ListOption, ListOutcome, SelectState};

use super::{bool_token, merge_layout_class, open_token};
use crate::dom::part_id;

fn option_id(owner: &str, index: usize) -> String {
    part_id(owner, &format!("option-{index}"))
}

#[derive(Clone, Copy)]
/// Owner-side handle for a select.
pub struct SelectHandle {
    state: RwSignal<SelectState>,
    id: StoredValue<String>,
}

impl SelectHandle {
    /// Creates a closed select; `id` scopes the DOM ids of its parts.
    ///
    /// # Panics
    ///
    /// Panics when two options share a value.
    pub fn new(id: impl Into<String>, options: Vec<ListOption>, default_value: Option<&str>) -> Self {
        Self::try_new(id, options, default_value)
            .unwrap_or_else(|err| panic!("invalid select options: {err}"))
    }

    /// Fallible form of [`SelectHandle::new`].
    pub fn try_new(
        id: impl Into<String>,
        options: Vec<ListOption>,
        default_value: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            state: create_rw_signal(SelectState::new(options, default_value)?),
            id: store_value(id.into()),
        })
    }

    /// Selected option value. Tracked.
    pub fn value(&self) -> Option<String> {
        self.state
            .with(|state| state.selected().map(|option| option.value.clone()))
    }

    /// Whether the popup is showing. Tracked.
    pub fn is_open(&self) -> bool {
        self.state.with(SelectState::is_open)
    }

    /// Selects `value` and closes; returns whether the selection changed.
    pub fn select(&self, value: &str) -> bool {
        self.state
            .try_update(|state| state.select(value))
            .unwrap_or(false)
    }

    /// Closes the popup without changing the selection.
    pub fn close(&self) {
        self.state.update(|state| {
            state.close();
        });
    }

    fn toggle(&self) {
        self.state.update(|state| {
            state.toggle();
        });
    }

    fn handle_key(&self, key: ListKey) -> ListOutcome {
        self.state
            .try_update(|state| state.handle_key(key))
            .unwrap_or(ListOutcome::Ignored)
    }

    fn part(&self, part: &str) -> String {
        self.id.with_value(|id| part_id(id, part))
    }

    fn option_id(&self, index: usize) -> String {
        self.id.with_value(|id| option_id(id, index))
    }
}

#[component]
/// Button that opens a list of fixed options.
pub fn Select(
    handle: SelectHandle,
    /// Shown while nothing is selected.
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
) -> impl IntoView {
    let placeholder = store_value(placeholder.unwrap_or_default());
    let notify = move |outcome: &ListOutcome| {
        if let (ListOutcome::Selected(value), Some(on_value_change)) = (outcome, on_value_change) {
            on_value_change.call(value.clone());
        }
    };

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if handle.state.with_untracked(SelectState::is_open) {
            handle.close();
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Some(key) = ListKey::from_key(&ev.key()) else {
            return;
        };
        let outcome = handle.handle_key(key);
        if outcome.is_handled() {
            ev.prevent_default();
            ev.stop_propagation();
        }
        notify(&outcome);
    };

    let label = move || {
        handle.state.with(|state| {
            state
                .selected()
                .map_or_else(|| placeholder.get_value(), |option| option.label.clone())
        })
    };
    let active_descendant = move || {
        handle
            .state
            .with(SelectState::highlighted)
            .map(|index| handle.option_id(index))
    };
    let options = handle.state.with_untracked(|state| state.options().to_vec());
    let rows = store_value(options);

    view! {
        <div
            class=merge_layout_class("ui-select", layout_class)
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-state=move || open_token(handle.is_open())
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <button
                type="button"
                id=handle.part("trigger")
                role="combobox"
                aria-haspopup="listbox"
                aria-controls=handle.part("listbox")
                aria-expanded=move || bool_token(handle.is_open())
                aria-activedescendant=active_descendant
                data-ui-slot="trigger"
                data-ui-placeholder=move || bool_token(handle.value().is_none())
                on:click=move |_| handle.toggle()
                on:keydown=on_keydown
            >
                {label}
            </button>
            <Show when=move || handle.is_open() fallback=|| ()>
                <ul role="listbox" id=handle.part("listbox") data-ui-slot="listbox">
                    {rows
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(index, option)| {
                            let value = option.value.clone();
                            let selected_value = option.value.clone();
                            view! {
                                <li
                                    role="option"
                                    id=handle.option_id(index)
                                    aria-selected=move || {
                                        bool_token(handle.state.with(|state| state.is_selected(&selected_value)))
                                    }
                                    data-ui-slot="option"
                                    data-ui-highlighted=move || {
                                        bool_token(handle.state.with(SelectState::highlighted) == Some(index))
                                    }
                                    on:click=move |_| {
                                        if handle.select(&value) {
                                            notify(&ListOutcome::Selected(value.clone()));
                                        }
                                    }
                                >
                                    {option.label}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[derive(Clone, Copy)]
/// Owner-side handle for a combobox.
pub struct ComboboxHandle {
    state: RwSignal<ComboboxState>,
    id: StoredValue<String>,
}

impl ComboboxHandle {
    /// Creates a closed combobox with an empty query.
    ///
    /// # Panics
    ///
    /// Panics when two options share a value.
    pub fn new(id: impl Into<String>, options: Vec<ListOption>) -> Self {
        Self::try_new(id, options).unwrap_or_else(|err| panic!("invalid combobox options: {err}"))
    }

    /// Fallible form of [`ComboboxHandle::new`].
    pub fn try_new(id: impl Into<String>, options: Vec<ListOption>) -> Result<Self, ConfigError> {
        Ok(Self {
            state: create_rw_signal(ComboboxState::new(options)?),
            id: store_value(id.into()),
        })
    }

    /// Selected option value. Tracked.
    pub fn value(&self) -> Option<String> {
        self.state
            .with(|state| state.selected().map(|option| option.value.clone()))
    }

    /// Current query text. Tracked.
    pub fn query(&self) -> String {
        self.state.with(|state| state.query().to_string())
    }

    /// Whether the popup is showing. Tracked.
    pub fn is_open(&self) -> bool {
        self.state.with(ComboboxState::is_open)
    }

    /// Replaces the query and opens the filtered list.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.update(|state| state.set_query(query));
    }

    /// Selects `value` and closes; returns whether the selection changed.
    pub fn select(&self, value: &str) -> bool {
        self.state
            .try_update(|state| state.select(value))
            .unwrap_or(false)
    }

    /// Closes the popup without changing the selection.
    pub fn close(&self) {
        self.state.update(|state| {
            state.close();
        });
    }

    fn toggle(&self) {
        self.state.update(|state| {
            state.toggle();
        });
    }

    fn handle_key(&self, key: ListKey) -> ListOutcome {
        self.state
            .try_update(|state| state.handle_key(key))
            .unwrap_or(ListOutcome::Ignored)
    }

    fn visible_options(&self) -> Vec<ListOption> {
        self.state
            .with(|state| state.matches().into_iter().cloned().collect())
    }

    fn part(&self, part: &str) -> String {
        self.id.with_value(|id| part_id(id, part))
    }

    fn option_id(&self, index: usize) -> String {
        self.id.with_value(|id| option_id(id, index))
    }
}

#[component]
/// Text input that filters its options as the user types.
pub fn Combobox(
    handle: ComboboxHandle,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
) -> impl IntoView {
    let notify = move |outcome: &ListOutcome| {
        if let (ListOutcome::Selected(value), Some(on_value_change)) = (outcome, on_value_change) {
            on_value_change.call(value.clone());
        }
    };

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if handle.state.with_untracked(ComboboxState::is_open) {
            handle.close();
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let Some(key) = ListKey::from_key(&ev.key()) else {
            return;
        };
        let outcome = handle.handle_key(key);
        if outcome.is_handled() {
            ev.prevent_default();
            ev.stop_propagation();
        }
        notify(&outcome);
    };
    let active_descendant = move || {
        handle
            .state
            .with(ComboboxState::highlighted)
            .map(|index| handle.option_id(index))
    };

    view! {
        <div
            class=merge_layout_class("ui-combobox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="combobox"
            data-ui-state=move || open_token(handle.is_open())
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <input
                type="text"
                id=handle.part("input")
                role="combobox"
                autocomplete="off"
                aria-autocomplete="list"
                aria-controls=handle.part("listbox")
                aria-expanded=move || bool_token(handle.is_open())
                aria-activedescendant=active_descendant
                placeholder=placeholder
                data-ui-slot="input"
                prop:value=move || handle.query()
                on:input=move |ev| handle.set_query(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                type="button"
                tabindex="-1"
                aria-label="Show options"
                data-ui-slot="toggle"
                on:click=move |_| handle.toggle()
            >
                "▾"
            </button>
            <Show when=move || handle.is_open() fallback=|| ()>
                <ul role="listbox" id=handle.part("listbox") data-ui-slot="listbox">
                    <For
                        each=move || handle.visible_options().into_iter().enumerate()
                        key=|(index, option)| (*index, option.value.clone())
                        children=move |(index, option)| {
                            let value = option.value.clone();
                            let selected_value = option.value.clone();
                            view! {
                                <li
                                    role="option"
                                    id=handle.option_id(index)
                                    aria-selected=move || {
                                        bool_token(handle.state.with(|state| state.is_selected(&selected_value)))
                                    }
                                    data-ui-slot="option"
                                    data-ui-highlighted=move || {
                                        bool_token(handle.state.with(ComboboxState::highlighted) == Some(index))
                                    }
                                    on:click=move |_| {
                                        if handle.select(&value) {
                                            notify(&ListOutcome::Selected(value.clone()));
                                        }
                                    }
                                >
                                    {option.label}
                                </li>
                            }
                        }
                    />
                    <Show when=move || handle.visible_options().is_empty() fallback=|| ()>
                        <li role="presentation" data-ui-slot="empty">"No results"</li>
                    </Show>
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn frameworks() -> Vec<ListOption> {
        vec![
            ListOption::new("leptos", "Leptos"),
            ListOption::new("yew", "Yew"),
            ListOption::new("dioxus", "Dioxus"),
        ]
    }

    #[test]
    fn select_handle_drives_the_shared_state() {
        let _ = create_runtime();
        let select = SelectHandle::new("framework", frameworks(), Some("yew"));
        assert_eq!(select.value().as_deref(), Some("yew"));

        select.toggle();
        assert!(select.is_open());
        assert_eq!(select.handle_key(ListKey::Next), ListOutcome::Highlighted(2));
        assert_eq!(
            select.handle_key(ListKey::Confirm),
            ListOutcome::Selected("dioxus".to_string())
        );
        assert!(!select.is_open());
        assert_eq!(select.value().as_deref(), Some("dioxus"));
        assert!(!select.select("dioxus"));
        assert_eq!(select.option_id(1), "framework-option-1");
    }

    #[test]
    fn duplicate_options_fail_to_build() {
        let _ = create_runtime();
        let mut options = frameworks();
        options.push(ListOption::new("yew", "Yew again"));
        assert!(SelectHandle::try_new("framework", options.clone(), None).is_err());
        assert!(ComboboxHandle::try_new("framework", options).is_err());
    }

    #[test]
    fn combobox_handle_filters_and_selects() {
        let _ = create_runtime();
        let combobox = ComboboxHandle::new("framework", frameworks());
        combobox.set_query("x");
        assert!(combobox.is_open());
        let values: Vec<String> = combobox
            .visible_options()
            .into_iter()
            .map(|option| option.value)
            .collect();
        assert_eq!(values, vec!["dioxus".to_string()]);

        assert_eq!(
            combobox.handle_key(ListKey::Confirm),
            ListOutcome::Selected("dioxus".to_string())
        );
        assert_eq!(combobox.query(), "Dioxus");
        assert_eq!(combobox.value().as_deref(), Some("dioxus"));

        combobox.toggle();
        assert_eq!(combobox.handle_key(ListKey::Dismiss), ListOutcome::Closed);
        assert!(!combobox.is_open());
    }
}
