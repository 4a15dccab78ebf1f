//! Class schedule model: weekdays, time-slot patterns, and 12-hour labels.

mod day;
mod slots;
mod time_label;

pub use day::{Day, ParseDayError};
pub use slots::{
    MON_WED_FRI_SLOTS, Schedule, TUE_THU_SLOTS, slot_at_index, slot_index, slots_for_day,
};
pub use time_label::{
    Period, TimeLabelError, TwelveHourTime, format_time_range_12h, to_twelve_hour,
};
