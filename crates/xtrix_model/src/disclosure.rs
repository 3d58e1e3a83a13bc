//! Open/closed state for accordions, collapsibles, and tabs.
//!
//! Containers declare their children as [`DisclosureSlot`] values and dispatch
//! on the tag to decide what each child receives.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Role of a child inside a disclosure container.
pub enum DisclosureSlot<T> {
    /// An accordion item or tab panel keyed by value.
    Item {
        /// Item key.
        value: String,
        /// Item payload.
        body: T,
    },
    /// Control that toggles or selects `value`.
    Trigger {
        /// Key toggled or selected by this trigger.
        value: String,
        /// Trigger payload.
        body: T,
    },
    /// Content shown while `value` is open or active.
    Content {
        /// Key whose open state gates this content.
        value: String,
        /// Content payload.
        body: T,
    },
}

impl<T> DisclosureSlot<T> {
    /// Key the slot is bound to.
    pub fn value(&self) -> &str {
        match self {
            Self::Item { value, .. } | Self::Trigger { value, .. } | Self::Content { value, .. } => {
                value
            }
        }
    }

    /// Slot payload.
    pub fn body(&self) -> &T {
        match self {
            Self::Item { body, .. } | Self::Trigger { body, .. } | Self::Content { body, .. } => body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Open items of an accordion.
pub struct AccordionState {
    open: Vec<String>,
    multiple: bool,
}

impl AccordionState {
    /// Builds an accordion with `default_value` open, allowing several open items when `multiple`.
    pub fn new(default_value: Option<&str>, multiple: bool) -> Self {
        Self {
            open: default_value.map(str::to_string).into_iter().collect(),
            multiple,
        }
    }

    /// Whether several items may be open at once.
    pub fn multiple(&self) -> bool {
        self.multiple
    }

    /// Whether `value` is open.
    pub fn is_open(&self, value: &str) -> bool {
        self.open.iter().any(|open| open == value)
    }

    /// Open items in the order they were opened.
    pub fn open_items(&self) -> &[String] {
        &self.open
    }

    /// Toggles `value` and returns whether it is now open.
    ///
    /// In single mode opening an item closes the previously open one.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.is_open(value) {
            self.open.retain(|open| open != value);
            return false;
        }
        if !self.multiple {
            self.open.clear();
        }
        self.open.push(value.to_string());
        true
    }

    /// Whether a slot is visible for the current open set.
    pub fn shows<T>(&self, slot: &DisclosureSlot<T>) -> bool {
        match slot {
            DisclosureSlot::Item { .. } | DisclosureSlot::Trigger { .. } => true,
            DisclosureSlot::Content { value, .. } => self.is_open(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Single open flag of a collapsible section.
pub struct CollapsibleState {
    open: bool,
}

impl CollapsibleState {
    /// Builds a collapsible with the given initial state.
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Whether the content is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Re-syncs from a controlled `open` prop; returns whether anything changed.
    pub fn sync(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Active tab of a tab set.
pub struct TabsState {
    active: Option<String>,
}

impl TabsState {
    /// Builds a tab set with `default_value` active.
    pub fn new(default_value: Option<&str>) -> Self {
        Self {
            active: default_value.map(str::to_string),
        }
    }

    /// Active tab value.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether `value` is the active tab.
    pub fn is_active(&self, value: &str) -> bool {
        self.active.as_deref() == Some(value)
    }

    /// Activates `value`; returns whether the active tab changed.
    pub fn select(&mut self, value: &str) -> bool {
        if self.is_active(value) {
            return false;
        }
        self.active = Some(value.to_string());
        true
    }

    /// Whether a slot is visible; only the active tab's content renders.
    pub fn shows<T>(&self, slot: &DisclosureSlot<T>) -> bool {
        match slot {
            DisclosureSlot::Content { value, .. } => self.is_active(value),
            DisclosureSlot::Item { .. } | DisclosureSlot::Trigger { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_accordion_keeps_one_item_open() {
        let mut accordion = AccordionState::new(Some("a"), false);
        assert!(accordion.is_open("a"));
        assert!(accordion.toggle("b"));
        assert!(!accordion.is_open("a"));
        assert_eq!(accordion.open_items(), ["b".to_string()]);
        assert!(!accordion.toggle("b"));
        assert!(accordion.open_items().is_empty());
    }

    #[test]
    fn multiple_accordion_toggles_membership() {
        let mut accordion = AccordionState::new(None, true);
        accordion.toggle("a");
        accordion.toggle("b");
        assert_eq!(accordion.open_items(), ["a".to_string(), "b".to_string()]);
        accordion.toggle("a");
        assert_eq!(accordion.open_items(), ["b".to_string()]);
    }

    #[test]
    fn content_slots_follow_open_state() {
        let accordion = AccordionState::new(Some("faq-1"), false);
        let open = DisclosureSlot::Content {
            value: "faq-1".to_string(),
            body: (),
        };
        let closed = DisclosureSlot::Content {
            value: "faq-2".to_string(),
            body: (),
        };
        let trigger = DisclosureSlot::Trigger {
            value: "faq-2".to_string(),
            body: (),
        };
        assert!(accordion.shows(&open));
        assert!(!accordion.shows(&closed));
        assert!(accordion.shows(&trigger));
        assert_eq!(closed.value(), "faq-2");
    }

    #[test]
    fn collapsible_toggle_and_sync() {
        let mut collapsible = CollapsibleState::new(false);
        assert!(collapsible.toggle());
        assert!(!collapsible.sync(true));
        assert!(collapsible.sync(false));
        assert!(!collapsible.is_open());
    }

    #[test]
    fn tabs_render_only_active_content() {
        let mut tabs = TabsState::new(Some("account"));
        assert!(!tabs.select("account"));
        assert!(tabs.select("password"));
        assert_eq!(tabs.active(), Some("password"));
        let account = DisclosureSlot::Content {
            value: "account".to_string(),
            body: 1,
        };
        assert!(!tabs.shows(&account));
        assert_eq!(*account.body(), 1);
    }
}
