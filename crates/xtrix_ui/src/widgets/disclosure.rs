//! Accordion, collapsible, and tab widgets.
//!
//! Accordion and tab containers take their children as a list of
//! [`DisclosureSlot`] values and render each one by its tag: items are static
//! wrappers, triggers toggle or select their key, and content renders only
//! while its key is open or active.

use leptos::*;
use xtrix_model::{AccordionState, CollapsibleState, DisclosureSlot, TabsState};

use super::{bool_token, merge_layout_class, open_token};
use crate::dom::{focus_element_by_id, part_id};

#[component]
/// Stack of collapsible items; single mode keeps at most one item open.
pub fn Accordion(
    slots: Vec<DisclosureSlot<ViewFn>>,
    /// Allows several items to be open at once.
    #[prop(optional)]
    multiple: bool,
    /// Item open on first render.
    #[prop(optional, into)]
    default_value: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Called with the open items after every toggle.
    #[prop(optional)]
    on_value_change: Option<Callback<Vec<String>>>,
) -> impl IntoView {
    let state = create_rw_signal(AccordionState::new(default_value.as_deref(), multiple));
    let is_open = move |value: &str| state.with(|state| state.is_open(value));
    let toggle = move |value: &str| {
        state.update(|state| {
            state.toggle(value);
        });
        if let Some(on_value_change) = on_value_change {
            on_value_change.call(state.with_untracked(|state| state.open_items().to_vec()));
        }
    };

    let rendered = slots
        .into_iter()
        .map(|slot| match slot {
            DisclosureSlot::Item { value, body } => {
                let key = value.clone();
                view! {
                    <div
                        data-ui-slot="item"
                        data-ui-value=value
                        data-ui-state=move || open_token(is_open(&key))
                    >
                        {body.run()}
                    </div>
                }
                .into_view()
            }
            DisclosureSlot::Trigger { value, body } => {
                let key = value.clone();
                view! {
                    <button
                        type="button"
                        data-ui-slot="trigger"
                        aria-expanded=move || bool_token(is_open(&key))
                        on:click=move |_| toggle(&value)
                    >
                        {body.run()}
                    </button>
                }
                .into_view()
            }
            DisclosureSlot::Content { value, body } => view! {
                <Show when=move || is_open(&value) fallback=|| ()>
                    <div data-ui-slot="content">{body.run()}</div>
                </Show>
            }
            .into_view(),
        })
        .collect_view();

    let variant = if multiple { "multiple" } else { "single" };

    view! {
        <div
            class=merge_layout_class("ui-accordion", layout_class)
            data-ui-primitive="true"
            data-ui-kind="accordion"
            data-ui-variant=variant
        >
            {rendered}
        </div>
    }
}

#[component]
/// Single section shown or hidden by its trigger.
///
/// Pass `open` to control the state from outside; it is resynced whenever the
/// signal changes.
pub fn Collapsible(
    #[prop(into)] trigger: ViewFn,
    #[prop(optional)] default_open: bool,
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    children: ChildrenFn,
) -> impl IntoView {
    let initial = open
        .as_ref()
        .map_or(default_open, |open| open.get_untracked());
    let state = create_rw_signal(CollapsibleState::new(initial));
    if let Some(open) = open {
        create_effect(move |_| {
            let next = open.get();
            state.update(|state| {
                state.sync(next);
            });
        });
    }

    let is_open = move || state.with(CollapsibleState::is_open);
    let toggle = move |_| {
        let Some(now_open) = state.try_update(CollapsibleState::toggle) else {
            return;
        };
        if let Some(on_open_change) = on_open_change {
            on_open_change.call(now_open);
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-collapsible", layout_class)
            data-ui-primitive="true"
            data-ui-kind="collapsible"
            data-ui-state=move || open_token(is_open())
        >
            <button
                type="button"
                data-ui-slot="trigger"
                aria-expanded=move || bool_token(is_open())
                on:click=toggle
            >
                {trigger.run()}
            </button>
            <Show when=is_open fallback=|| ()>
                <div data-ui-slot="content">{children()}</div>
            </Show>
        </div>
    }
}

fn tab_id(tabs_id: &str, value: &str) -> String {
    part_id(tabs_id, &format!("tab-{value}"))
}

fn panel_id(tabs_id: &str, value: &str) -> String {
    part_id(tabs_id, &format!("panel-{value}"))
}

/// Trigger to activate after an arrow key, wrapping at both ends.
fn adjacent_tab<'a>(values: &'a [String], active: Option<&str>, key: &str) -> Option<&'a str> {
    if values.is_empty() {
        return None;
    }
    let current = active
        .and_then(|active| values.iter().position(|value| value == active))
        .unwrap_or(0);
    let next = match key {
        "ArrowRight" | "ArrowDown" => (current + 1) % values.len(),
        "ArrowLeft" | "ArrowUp" => (current + values.len() - 1) % values.len(),
        "Home" => 0,
        "End" => values.len() - 1,
        _ => return None,
    };
    values.get(next).map(String::as_str)
}

#[component]
/// Tab set: triggers render in a tab list, and only the active content renders below.
pub fn Tabs(
    /// Scopes the DOM ids linking tabs to their panels.
    #[prop(into)]
    id: String,
    slots: Vec<DisclosureSlot<ViewFn>>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
) -> impl IntoView {
    let state = create_rw_signal(TabsState::new(default_value.as_deref()));
    let tabs_id = store_value(id);
    let trigger_values = store_value(
        slots
            .iter()
            .filter(|slot| matches!(slot, DisclosureSlot::Trigger { .. }))
            .map(|slot| slot.value().to_string())
            .collect::<Vec<_>>(),
    );

    let is_active = move |value: &str| state.with(|state| state.is_active(value));
    let select = move |value: &str| {
        let changed = state.try_update(|state| state.select(value)).unwrap_or(false);
        if changed {
            if let Some(on_value_change) = on_value_change {
                on_value_change.call(value.to_string());
            }
        }
    };
    let on_keydown = move |ev: ev::KeyboardEvent| {
        let active = state.with_untracked(|state| state.active().map(str::to_string));
        let Some(next) = trigger_values
            .with_value(|values| adjacent_tab(values, active.as_deref(), &ev.key()).map(str::to_string))
        else {
            return;
        };
        ev.prevent_default();
        select(&next);
        let _ = focus_element_by_id(&tabs_id.with_value(|id| tab_id(id, &next)));
    };

    let (list, panels): (Vec<_>, Vec<_>) = slots
        .into_iter()
        .partition(|slot| !matches!(slot, DisclosureSlot::Content { .. }));

    let render = move |slot: DisclosureSlot<ViewFn>| match slot {
        DisclosureSlot::Item { value, body } => view! {
            <div data-ui-slot="item" data-ui-value=value>{body.run()}</div>
        }
        .into_view(),
        DisclosureSlot::Trigger { value, body } => {
            let (dom_id, controls) =
                tabs_id.with_value(|id| (tab_id(id, &value), panel_id(id, &value)));
            let key = value.clone();
            let selected = Signal::derive(move || is_active(&key));
            view! {
                <button
                    type="button"
                    role="tab"
                    id=dom_id
                    aria-controls=controls
                    aria-selected=move || bool_token(selected.get())
                    tabindex=move || if selected.get() { "0" } else { "-1" }
                    data-ui-slot="tab"
                    data-ui-state=move || if selected.get() { "active" } else { "inactive" }
                    on:click=move |_| select(&value)
                >
                    {body.run()}
                </button>
            }
            .into_view()
        }
        DisclosureSlot::Content { value, body } => {
            let (dom_id, labelled_by) =
                tabs_id.with_value(|id| (panel_id(id, &value), tab_id(id, &value)));
            view! {
                <Show when=move || is_active(&value) fallback=|| ()>
                    <div
                        role="tabpanel"
                        id=dom_id.clone()
                        aria-labelledby=labelled_by.clone()
                        data-ui-slot="panel"
                    >
                        {body.run()}
                    </div>
                </Show>
            }
            .into_view()
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
        >
            <div role="tablist" data-ui-slot="list" on:keydown=on_keydown>
                {list.into_iter().map(render).collect_view()}
            </div>
            {panels.into_iter().map(render).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn values() -> Vec<String> {
        ["account", "password", "billing"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn arrow_keys_wrap_around_the_tab_list() {
        let values = values();
        assert_eq!(adjacent_tab(&values, Some("billing"), "ArrowRight"), Some("account"));
        assert_eq!(adjacent_tab(&values, Some("account"), "ArrowLeft"), Some("billing"));
        assert_eq!(adjacent_tab(&values, Some("password"), "End"), Some("billing"));
        assert_eq!(adjacent_tab(&values, None, "ArrowDown"), Some("password"));
        assert_eq!(adjacent_tab(&values, Some("account"), "Enter"), None);
        assert_eq!(adjacent_tab(&[], None, "Home"), None);
    }

    #[test]
    fn tab_and_panel_ids_share_a_scope() {
        assert_eq!(tab_id("settings", "account"), "settings-tab-account");
        assert_eq!(panel_id("settings", "account"), "settings-panel-account");
    }
}
