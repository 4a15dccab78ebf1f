//! Day/time selection state shared by the filter engine and the map controls.
//! The slot invariant lives here so the UI can never observe a slot that does
//! not belong to the selected day.

use serde::{Deserialize, Serialize};

use crate::schedule::{Day, slot_at_index, slot_index, slots_for_day};

/// Map and UI color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Normal,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Normal => Theme::Dark,
            Theme::Dark => Theme::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Normal => "Normal",
            Theme::Dark => "Dark",
        }
    }
}

/// Current day, time slot, and UI toggles.
///
/// `time_slot` is always a member of `slots_for_day(day)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    day: Day,
    time_slot: &'static str,
    /// When armed, the next map click drops a collision report.
    pub reporting_mode: bool,
    pub theme: Theme,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Day::Monday)
    }
}

impl SelectionState {
    /// Start on `day` with its first slot selected.
    pub fn new(day: Day) -> Self {
        Self {
            day,
            time_slot: slot_at_index(day, 0),
            reporting_mode: false,
            theme: Theme::Normal,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn time_slot(&self) -> &'static str {
        self.time_slot
    }

    /// Slot labels valid for the selected day.
    pub fn slots(&self) -> &'static [&'static str] {
        slots_for_day(self.day)
    }

    /// Index of the selected slot within [`Self::slots`].
    pub fn time_index(&self) -> usize {
        slot_index(self.day, self.time_slot).unwrap_or(0)
    }

    /// Change the day, resetting the slot to the first one of the new day when
    /// the current label does not exist there. Returns true when the slot was reset.
    pub fn set_day(&mut self, day: Day) -> bool {
        self.day = day;
        match slot_index(day, self.time_slot) {
            Some(index) => {
                self.time_slot = slot_at_index(day, index);
                false
            }
            None => {
                self.time_slot = slot_at_index(day, 0);
                true
            }
        }
    }

    /// Select a slot by label. Labels outside the current day's list are ignored.
    pub fn set_time_slot(&mut self, label: &str) -> bool {
        match slot_index(self.day, label) {
            Some(index) => {
                self.time_slot = slot_at_index(self.day, index);
                true
            }
            None => false,
        }
    }

    /// Select a slot by slider position, clamped to the list bounds.
    pub fn set_time_index(&mut self, index: usize) {
        self.time_slot = slot_at_index(self.day, index);
    }
}
