use super::Day;

/// Monday/Wednesday/Friday classes: nine 50-minute slots with 20-minute passing periods.
pub const MON_WED_FRI_SLOTS: [&str; 9] = [
    "8:00-8:50",
    "9:10-10:00",
    "10:20-11:10",
    "11:30-12:20",
    "12:40-13:30",
    "13:50-14:40",
    "15:00-15:50",
    "16:10-17:00",
    "17:20-18:10",
];

/// Tuesday/Thursday classes: seven 75-minute slots with 20-minute passing periods.
pub const TUE_THU_SLOTS: [&str; 7] = [
    "8:00-9:15",
    "9:35-10:50",
    "11:10-12:25",
    "12:45-14:00",
    "14:20-15:35",
    "15:55-17:10",
    "17:30-18:45",
];

/// Weekly class pattern a day follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    MonWedFri,
    TueThu,
}

impl Schedule {
    pub fn for_day(day: Day) -> Self {
        match day {
            Day::Monday | Day::Wednesday | Day::Friday => Schedule::MonWedFri,
            Day::Tuesday | Day::Thursday => Schedule::TueThu,
        }
    }

    /// Ordered slot labels for this pattern.
    pub fn slots(self) -> &'static [&'static str] {
        match self {
            Schedule::MonWedFri => &MON_WED_FRI_SLOTS,
            Schedule::TueThu => &TUE_THU_SLOTS,
        }
    }

    /// Length of a single class period.
    pub fn slot_minutes(self) -> u32 {
        match self {
            Schedule::MonWedFri => 50,
            Schedule::TueThu => 75,
        }
    }
}

/// Ordered list of valid time-slot labels for `day`.
pub fn slots_for_day(day: Day) -> &'static [&'static str] {
    Schedule::for_day(day).slots()
}

/// Position of `label` in the day's slot list.
pub fn slot_index(day: Day, label: &str) -> Option<usize> {
    slots_for_day(day).iter().position(|slot| *slot == label)
}

/// Map a slider index to a slot label, clamping out-of-range indices to the last slot.
pub fn slot_at_index(day: Day, index: usize) -> &'static str {
    let slots = slots_for_day(day);
    slots[index.min(slots.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::time_label::parse_clock;

    fn minutes(clock: &str) -> u32 {
        let (hour, minute) = parse_clock(clock).unwrap();
        hour * 60 + minute
    }

    #[test]
    fn patterns_have_expected_lengths() {
        assert_eq!(slots_for_day(Day::Monday).len(), 9);
        assert_eq!(slots_for_day(Day::Wednesday).len(), 9);
        assert_eq!(slots_for_day(Day::Friday).len(), 9);
        assert_eq!(slots_for_day(Day::Tuesday).len(), 7);
        assert_eq!(slots_for_day(Day::Thursday).len(), 7);
    }

    #[test]
    fn every_slot_spans_the_pattern_length_in_ascending_order() {
        for schedule in [Schedule::MonWedFri, Schedule::TueThu] {
            let mut previous_end = 0;
            for slot in schedule.slots() {
                let (start, end) = slot.split_once('-').unwrap();
                let (start, end) = (minutes(start), minutes(end));
                assert_eq!(end - start, schedule.slot_minutes(), "slot {slot}");
                assert!(start >= previous_end, "slot {slot} overlaps its predecessor");
                previous_end = end;
            }
        }
    }

    #[test]
    fn slot_at_index_clamps_to_bounds() {
        assert_eq!(slot_at_index(Day::Monday, 0), "8:00-8:50");
        assert_eq!(slot_at_index(Day::Tuesday, 4), "14:20-15:35");
        assert_eq!(slot_at_index(Day::Thursday, 99), "17:30-18:45");
    }

    #[test]
    fn slot_index_only_finds_labels_of_the_same_pattern() {
        assert_eq!(slot_index(Day::Friday, "13:50-14:40"), Some(5));
        assert_eq!(slot_index(Day::Thursday, "13:50-14:40"), None);
    }
}
