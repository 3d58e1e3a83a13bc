//! Fixed-length one-time-passcode input with a focus cursor.

use serde::{Deserialize, Serialize};

use crate::config::OtpConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What an edit did, so the view knows whether to move DOM focus.
pub enum OtpOutcome {
    /// Input was rejected; nothing changed.
    Rejected,
    /// Cells changed and focus should move to `focus`.
    Updated {
        /// Cell that should hold focus.
        focus: usize,
    },
    /// Only focus moved.
    Moved {
        /// Cell that should hold focus.
        focus: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Glyph rendered between OTP cell groups.
pub enum OtpSeparator {
    /// Dot.
    #[default]
    Default,
    /// Vertical line.
    Line,
    /// Asterisk.
    Star,
    /// Horizontal dash.
    Dash,
    /// Circled dot.
    CircleDot,
}

impl OtpSeparator {
    /// Token emitted as `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Line => "line",
            Self::Star => "star",
            Self::Dash => "dash",
            Self::CircleDot => "circledot",
        }
    }

    /// Text glyph used when the separator has no custom children.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Default => "\u{00B7}",
            Self::Line => "|",
            Self::Star => "*",
            Self::Dash => "\u{2013}",
            Self::CircleDot => "\u{2299}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOtp")]
/// Digit cells plus the index of the focused cell.
pub struct OtpState {
    cells: Vec<Option<char>>,
    focus: usize,
}

#[derive(Deserialize)]
struct RawOtp {
    cells: Vec<Option<char>>,
    focus: usize,
}

impl TryFrom<RawOtp> for OtpState {
    type Error = ConfigError;

    fn try_from(raw: RawOtp) -> Result<Self, Self::Error> {
        let mut state = Self::new(&OtpConfig {
            length: raw.cells.len(),
        })?;
        for (index, digit) in raw.cells.into_iter().enumerate() {
            if let Some(digit) = digit {
                state.insert(index, digit.encode_utf8(&mut [0; 4]));
            }
        }
        state.focus = raw.focus.min(state.cells.len() - 1);
        Ok(state)
    }
}

impl OtpState {
    /// Builds an empty input with `config.length` cells.
    pub fn new(config: &OtpConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cells: vec![None; config.length],
            focus: 0,
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; zero-length inputs cannot be built.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell contents.
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Cell that should hold focus.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Records that the user focused a cell directly.
    pub fn focus_cell(&mut self, index: usize) -> OtpOutcome {
        if index >= self.cells.len() {
            return OtpOutcome::Rejected;
        }
        self.focus = index;
        OtpOutcome::Moved { focus: index }
    }

    /// Handles the text a cell's `input` event left in the cell.
    ///
    /// Empty text clears the cell. Text with any non-digit is rejected. When the
    /// cell already held a digit, the browser keeps it next to the new text, so
    /// that digit is dropped from whichever end it sits at before the rest is
    /// written with [`OtpState::insert`].
    pub fn input(&mut self, index: usize, text: &str) -> OtpOutcome {
        if index >= self.cells.len() {
            return OtpOutcome::Rejected;
        }
        if text.is_empty() {
            self.cells[index] = None;
            self.focus = index;
            return OtpOutcome::Updated { focus: index };
        }
        let inserted = match self.cells[index] {
            Some(previous) if text.chars().count() > 1 => text
                .strip_prefix(previous)
                .or_else(|| text.strip_suffix(previous))
                .unwrap_or(text),
            _ => text,
        };
        self.insert(index, inserted)
    }

    /// Writes digits the user inserted at `index`, replacing whatever the cell held.
    ///
    /// A single digit is stored and focus advances; a longer run is treated as
    /// a paste and spread across the following cells, truncated at the end.
    /// Text with any non-digit is rejected.
    pub fn insert(&mut self, index: usize, digits: &str) -> OtpOutcome {
        if index >= self.cells.len()
            || digits.is_empty()
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return OtpOutcome::Rejected;
        }

        let room = self.cells.len() - index;
        let mut written = 0;
        for (offset, digit) in digits.chars().take(room).enumerate() {
            self.cells[index + offset] = Some(digit);
            written += 1;
        }

        self.focus = (index + written).min(self.cells.len() - 1);
        OtpOutcome::Updated { focus: self.focus }
    }

    /// Handles `Backspace` on a cell: clears it, or retreats when already empty.
    pub fn backspace(&mut self, index: usize) -> OtpOutcome {
        if index >= self.cells.len() {
            return OtpOutcome::Rejected;
        }
        if self.cells[index].is_some() {
            self.cells[index] = None;
            self.focus = index;
            return OtpOutcome::Updated { focus: index };
        }
        self.focus = index.saturating_sub(1);
        OtpOutcome::Moved { focus: self.focus }
    }

    /// The full code once every cell holds a digit.
    pub fn code(&self) -> Option<String> {
        self.cells.iter().copied().collect()
    }

    /// Empties every cell and focuses the first.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.focus = 0;
    }
}

/// DOM id of an OTP cell, scoped by the owning input's id.
pub fn cell_dom_id(input_id: &str, index: usize) -> String {
    format!("{input_id}-cell-{index}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn otp(length: usize) -> OtpState {
        OtpState::new(&OtpConfig { length }).expect("valid otp")
    }

    #[test]
    fn typing_advances_focus() {
        let mut state = otp(6);
        assert_eq!(state.input(0, "1"), OtpOutcome::Updated { focus: 1 });
        assert_eq!(state.input(1, "2"), OtpOutcome::Updated { focus: 2 });
        assert_eq!(state.cell(0), Some('1'));
        assert_eq!(state.cell(1), Some('2'));
        assert_eq!(state.focus(), 2);
    }

    #[test]
    fn non_digits_are_rejected_without_change() {
        let mut state = otp(4);
        state.input(0, "7");
        let before = state.clone();
        assert_eq!(state.input(1, "a"), OtpOutcome::Rejected);
        assert_eq!(state.input(1, "3x"), OtpOutcome::Rejected);
        assert_eq!(state, before);
    }

    #[test]
    fn last_cell_keeps_focus() {
        let mut state = otp(2);
        state.input(0, "4");
        assert_eq!(state.input(1, "2"), OtpOutcome::Updated { focus: 1 });
        assert_eq!(state.code(), Some("42".to_string()));
    }

    #[test]
    fn typing_over_a_filled_cell_keeps_newest_digit() {
        let mut state = otp(4);
        state.input(0, "1");
        assert_eq!(state.input(0, "19"), OtpOutcome::Updated { focus: 1 });
        assert_eq!(state.cell(0), Some('9'));
        assert_eq!(state.cell(1), None);
    }

    #[test]
    fn typing_before_a_filled_digit_keeps_the_typed_one() {
        let mut state = otp(4);
        state.input(0, "1");
        assert_eq!(state.input(0, "51"), OtpOutcome::Updated { focus: 1 });
        assert_eq!(state.cell(0), Some('5'));
    }

    #[test]
    fn paste_into_a_filled_cell_drops_the_old_digit() {
        let mut state = otp(6);
        state.input(0, "1");
        assert_eq!(state.input(0, "1987654"), OtpOutcome::Updated { focus: 5 });
        assert_eq!(state.code(), Some("987654".to_string()));
    }

    #[test]
    fn insert_replaces_without_guessing() {
        let mut state = otp(4);
        state.input(0, "1");
        assert_eq!(state.insert(0, "12"), OtpOutcome::Updated { focus: 2 });
        assert_eq!(state.cell(0), Some('1'));
        assert_eq!(state.cell(1), Some('2'));
        assert_eq!(state.insert(1, ""), OtpOutcome::Rejected);
        assert_eq!(state.insert(1, "4a"), OtpOutcome::Rejected);
        assert_eq!(state.cell(1), Some('2'));
    }

    #[test]
    fn paste_spreads_digits_and_truncates() {
        let mut state = otp(6);
        assert_eq!(state.input(2, "98765"), OtpOutcome::Updated { focus: 5 });
        assert_eq!(state.cell(1), None);
        assert_eq!(state.cell(2), Some('9'));
        assert_eq!(state.cell(5), Some('6'));
        assert_eq!(state.code(), None);
    }

    #[test]
    fn backspace_clears_then_retreats() {
        let mut state = otp(6);
        state.input(0, "1");
        state.input(1, "2");
        assert_eq!(state.backspace(1), OtpOutcome::Updated { focus: 1 });
        assert_eq!(state.cell(1), None);
        assert_eq!(state.backspace(1), OtpOutcome::Moved { focus: 0 });
        assert_eq!(state.cell(0), Some('1'));
        state.input(0, "");
        assert_eq!(state.backspace(0), OtpOutcome::Moved { focus: 0 });
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let mut state = otp(3);
        assert_eq!(state.input(3, "1"), OtpOutcome::Rejected);
        assert_eq!(state.backspace(9), OtpOutcome::Rejected);
        assert_eq!(state.focus_cell(3), OtpOutcome::Rejected);
    }

    #[test]
    fn zero_length_is_a_config_error() {
        assert_eq!(
            OtpState::new(&OtpConfig { length: 0 }),
            Err(ConfigError::ZeroLengthOtp)
        );
    }

    #[test]
    fn reset_empties_cells() {
        let mut state = otp(3);
        state.input(0, "123");
        assert_eq!(state.code(), Some("123".to_string()));
        state.reset();
        assert_eq!(state.code(), None);
        assert_eq!(state.focus(), 0);
        assert_eq!(cell_dom_id("otp", 2), "otp-cell-2");
    }

    #[test]
    fn stored_state_drops_non_digits_and_clamps_focus() {
        let state: OtpState =
            serde_json::from_str(r#"{ "cells": ["4", "x", null], "focus": 7 }"#).unwrap();
        assert_eq!(state.cell(0), Some('4'));
        assert_eq!(state.cell(1), None);
        assert_eq!(state.focus(), 2);
        assert!(serde_json::from_str::<OtpState>(r#"{ "cells": [], "focus": 0 }"#).is_err());
    }
}
