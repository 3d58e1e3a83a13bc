//! Option lists behind the select and combobox widgets.
//!
//! Both keep an open flag, a highlighted row driven by the keyboard, and the
//! selected option. The combobox additionally filters its rows by a typed
//! query; highlight indices always refer to the rows currently visible.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable row.
pub struct ListOption {
    /// Stable key reported on selection.
    pub value: String,
    /// Text shown to the user and matched by the combobox query.
    pub label: String,
}

impl ListOption {
    /// Builds an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys the list reacts to.
pub enum ListKey {
    /// `ArrowDown`.
    Next,
    /// `ArrowUp`.
    Previous,
    /// `Home`.
    First,
    /// `End`.
    Last,
    /// `Enter`.
    Confirm,
    /// `Escape`.
    Dismiss,
}

impl ListKey {
    /// Parses a DOM `KeyboardEvent.key` value. Unhandled keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            "Enter" => Some(Self::Confirm),
            "Escape" => Some(Self::Dismiss),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a key press did, so the view knows whether to consume the event.
pub enum ListOutcome {
    /// The key had no effect.
    Ignored,
    /// The list opened.
    Opened,
    /// The list closed without changing the selection.
    Closed,
    /// The highlight moved to this visible row.
    Highlighted(usize),
    /// This option value became selected and the list closed.
    Selected(String),
}

impl ListOutcome {
    /// Whether the view should prevent the key's default action.
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

fn validate_options(options: &[ListOption]) -> Result<(), ConfigError> {
    for (index, option) in options.iter().enumerate() {
        if options[..index].iter().any(|seen| seen.value == option.value) {
            return Err(ConfigError::DuplicateOption(option.value.clone()));
        }
    }
    Ok(())
}

/// Highlight after a navigation key over `len` visible rows, wrapping at both ends.
fn roving(len: usize, current: Option<usize>, key: ListKey) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match key {
        ListKey::Next => Some(current.map_or(0, |index| (index + 1) % len)),
        ListKey::Previous => Some(current.map_or(len - 1, |index| (index + len - 1) % len)),
        ListKey::First => Some(0),
        ListKey::Last => Some(len - 1),
        ListKey::Confirm | ListKey::Dismiss => current,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Dropdown with a fixed option list.
pub struct SelectState {
    options: Vec<ListOption>,
    selected: Option<usize>,
    highlighted: Option<usize>,
    open: bool,
}

impl SelectState {
    /// Builds a closed select with `default_value` selected when it names an option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateOption`] when two options share a value.
    pub fn new(options: Vec<ListOption>, default_value: Option<&str>) -> Result<Self, ConfigError> {
        validate_options(&options)?;
        let selected =
            default_value.and_then(|value| options.iter().position(|option| option.value == value));
        Ok(Self {
            options,
            selected,
            highlighted: None,
            open: false,
        })
    }

    /// Every option in declaration order.
    pub fn options(&self) -> &[ListOption] {
        &self.options
    }

    /// Selected option.
    pub fn selected(&self) -> Option<&ListOption> {
        self.selected.and_then(|index| self.options.get(index))
    }

    /// Whether `value` is the selected option.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected().is_some_and(|option| option.value == value)
    }

    /// Highlighted row, when open.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the option list is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens with the selected row highlighted (or the first), or closes.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.highlighted = self
                .selected
                .or_else(|| (!self.options.is_empty()).then_some(0));
        }
        self.open
    }

    /// Closes without changing the selection; returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.highlighted = None;
        std::mem::replace(&mut self.open, false)
    }

    /// Selects `value` and closes. Unknown values are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, value: &str) -> bool {
        let Some(index) = self.options.iter().position(|option| option.value == value) else {
            return false;
        };
        self.close();
        self.selected.replace(index) != Some(index)
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: ListKey) -> ListOutcome {
        if !self.open {
            return match key {
                ListKey::Next | ListKey::Previous | ListKey::Confirm => {
                    self.toggle();
                    ListOutcome::Opened
                }
                _ => ListOutcome::Ignored,
            };
        }
        match key {
            ListKey::Dismiss => {
                self.close();
                ListOutcome::Closed
            }
            ListKey::Confirm => {
                let Some(option) = self.highlighted.and_then(|index| self.options.get(index)) else {
                    self.close();
                    return ListOutcome::Closed;
                };
                let value = option.value.clone();
                if self.select(&value) {
                    ListOutcome::Selected(value)
                } else {
                    ListOutcome::Closed
                }
            }
            _ => match roving(self.options.len(), self.highlighted, key) {
                Some(index) => {
                    self.highlighted = Some(index);
                    ListOutcome::Highlighted(index)
                }
                None => ListOutcome::Ignored,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Text input that filters an option list as the user types.
pub struct ComboboxState {
    options: Vec<ListOption>,
    query: String,
    selected: Option<usize>,
    highlighted: Option<usize>,
    open: bool,
}

impl ComboboxState {
    /// Builds a closed combobox with an empty query.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateOption`] when two options share a value.
    pub fn new(options: Vec<ListOption>) -> Result<Self, ConfigError> {
        validate_options(&options)?;
        Ok(Self {
            options,
            query: String::new(),
            selected: None,
            highlighted: None,
            open: false,
        })
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the option list is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Selected option.
    pub fn selected(&self) -> Option<&ListOption> {
        self.selected.and_then(|index| self.options.get(index))
    }

    /// Whether `value` is the selected option.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected().is_some_and(|option| option.value == value)
    }

    /// Highlighted visible row.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Options whose label contains the query, ignoring case, in declaration order.
    pub fn matches(&self) -> Vec<&ListOption> {
        let needle = self.query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Replaces the query, opens the list, and highlights the first match.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.open = true;
        self.highlighted = (!self.matches().is_empty()).then_some(0);
    }

    /// Opens or closes the list and returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.highlighted = (!self.matches().is_empty()).then_some(0);
        }
        self.open
    }

    /// Closes without changing the selection; returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.highlighted = None;
        std::mem::replace(&mut self.open, false)
    }

    /// Selects `value`, shows its label as the query, and closes.
    ///
    /// Returns whether the selection changed. Unknown values are ignored.
    pub fn select(&mut self, value: &str) -> bool {
        let Some(index) = self.options.iter().position(|option| option.value == value) else {
            return false;
        };
        self.query = self.options[index].label.clone();
        self.close();
        self.selected.replace(index) != Some(index)
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: ListKey) -> ListOutcome {
        if !self.open {
            return match key {
                ListKey::Next | ListKey::Previous => {
                    self.toggle();
                    ListOutcome::Opened
                }
                _ => ListOutcome::Ignored,
            };
        }
        match key {
            ListKey::Dismiss => {
                self.close();
                ListOutcome::Closed
            }
            ListKey::Confirm => {
                let value = self
                    .highlighted
                    .and_then(|index| self.matches().get(index).map(|option| option.value.clone()));
                let Some(value) = value else {
                    return ListOutcome::Ignored;
                };
                if self.select(&value) {
                    ListOutcome::Selected(value)
                } else {
                    ListOutcome::Closed
                }
            }
            _ => match roving(self.matches().len(), self.highlighted, key) {
                Some(index) => {
                    self.highlighted = Some(index);
                    ListOutcome::Highlighted(index)
                }
                None => ListOutcome::Ignored,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fruits() -> Vec<ListOption> {
        vec![
            ListOption::new("apple", "Apple"),
            ListOption::new("banana", "Banana"),
            ListOption::new("blueberry", "Blueberry"),
        ]
    }

    #[test]
    fn duplicate_values_are_a_config_error() {
        let mut options = fruits();
        options.push(ListOption::new("apple", "Green apple"));
        assert_eq!(
            SelectState::new(options.clone(), None),
            Err(ConfigError::DuplicateOption("apple".to_string()))
        );
        assert_eq!(
            ComboboxState::new(options),
            Err(ConfigError::DuplicateOption("apple".to_string()))
        );
    }

    #[test]
    fn select_opens_on_the_current_choice() {
        let mut select = SelectState::new(fruits(), Some("banana")).unwrap();
        assert!(select.toggle());
        assert_eq!(select.highlighted(), Some(1));
        assert!(!select.toggle());
        assert_eq!(select.highlighted(), None);

        let mut empty = SelectState::new(fruits(), Some("cherry")).unwrap();
        assert_eq!(empty.selected(), None);
        empty.toggle();
        assert_eq!(empty.highlighted(), Some(0));
    }

    #[test]
    fn select_keyboard_flow_wraps_and_confirms() {
        let mut select = SelectState::new(fruits(), None).unwrap();
        assert_eq!(select.handle_key(ListKey::Last), ListOutcome::Ignored);
        assert_eq!(select.handle_key(ListKey::Next), ListOutcome::Opened);
        assert_eq!(select.handle_key(ListKey::Previous), ListOutcome::Highlighted(2));
        assert_eq!(select.handle_key(ListKey::Next), ListOutcome::Highlighted(0));
        assert_eq!(select.handle_key(ListKey::Last), ListOutcome::Highlighted(2));
        assert_eq!(
            select.handle_key(ListKey::Confirm),
            ListOutcome::Selected("blueberry".to_string())
        );
        assert!(!select.is_open());
        assert!(select.is_selected("blueberry"));

        select.handle_key(ListKey::Confirm);
        assert_eq!(select.handle_key(ListKey::Confirm), ListOutcome::Closed);
        assert_eq!(select.handle_key(ListKey::Dismiss), ListOutcome::Ignored);
    }

    #[test]
    fn select_click_reports_only_changes() {
        let mut select = SelectState::new(fruits(), None).unwrap();
        select.toggle();
        assert!(select.select("apple"));
        assert!(!select.is_open());
        assert!(!select.select("apple"));
        assert!(!select.select("cherry"));
        assert_eq!(select.selected().map(|option| option.label.as_str()), Some("Apple"));
    }

    #[test]
    fn combobox_filters_case_insensitively() {
        let mut combobox = ComboboxState::new(fruits()).unwrap();
        assert_eq!(combobox.matches().len(), 3);
        combobox.set_query("B");
        assert!(combobox.is_open());
        let labels: Vec<&str> = combobox
            .matches()
            .into_iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Banana", "Blueberry"]);
        assert_eq!(combobox.highlighted(), Some(0));

        combobox.set_query("kiwi");
        assert!(combobox.matches().is_empty());
        assert_eq!(combobox.highlighted(), None);
        assert_eq!(combobox.handle_key(ListKey::Next), ListOutcome::Ignored);
        assert_eq!(combobox.handle_key(ListKey::Confirm), ListOutcome::Ignored);
    }

    #[test]
    fn combobox_confirms_the_highlighted_match() {
        let mut combobox = ComboboxState::new(fruits()).unwrap();
        combobox.set_query("b");
        assert_eq!(combobox.handle_key(ListKey::Next), ListOutcome::Highlighted(1));
        assert_eq!(
            combobox.handle_key(ListKey::Confirm),
            ListOutcome::Selected("blueberry".to_string())
        );
        assert_eq!(combobox.query(), "Blueberry");
        assert!(!combobox.is_open());
        assert!(combobox.is_selected("blueberry"));
    }

    #[test]
    fn combobox_escape_keeps_the_selection() {
        let mut combobox = ComboboxState::new(fruits()).unwrap();
        combobox.select("apple");
        assert_eq!(combobox.handle_key(ListKey::Previous), ListOutcome::Opened);
        assert_eq!(combobox.handle_key(ListKey::Dismiss), ListOutcome::Closed);
        assert!(combobox.is_selected("apple"));
        assert_eq!(ListKey::from_key("Escape"), Some(ListKey::Dismiss));
        assert_eq!(ListKey::from_key("a"), None);
    }
}
