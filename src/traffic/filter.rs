use crate::schedule::Day;

use super::records::{BuildingRecord, HotspotRecord};

/// Records keyed by schedule day and time-slot label.
pub trait Scheduled {
    fn day(&self) -> Day;
    fn time_slot(&self) -> &str;
}

impl Scheduled for BuildingRecord {
    fn day(&self) -> Day {
        self.day
    }

    fn time_slot(&self) -> &str {
        &self.time_slot
    }
}

impl Scheduled for HotspotRecord {
    fn day(&self) -> Day {
        self.day
    }

    fn time_slot(&self) -> &str {
        &self.time_slot
    }
}

/// Indices of records whose day and slot label both match exactly.
pub fn filter_records<R: Scheduled>(records: &[R], day: Day, time_slot: &str) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.day() == day && record.time_slot() == time_slot)
        .map(|(index, _)| index)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ViewKey {
    day: Day,
    time_slot: String,
    generation: u64,
}

/// Memoized filter result for one dataset.
///
/// The indices are recomputed only when the day, the slot, or the dataset
/// generation differs from the last refresh.
#[derive(Clone, Debug, Default)]
pub struct FilteredView {
    key: Option<ViewKey>,
    indices: Vec<usize>,
}

impl FilteredView {
    /// Bring the view up to date. Returns true when the filter actually ran.
    pub fn refresh<R: Scheduled>(
        &mut self,
        records: &[R],
        generation: u64,
        day: Day,
        time_slot: &str,
    ) -> bool {
        let up_to_date = self.key.as_ref().is_some_and(|key| {
            key.day == day && key.generation == generation && key.time_slot == time_slot
        });
        if up_to_date {
            return false;
        }
        self.indices = filter_records(records, day, time_slot);
        self.key = Some(ViewKey {
            day,
            time_slot: time_slot.to_string(),
            generation,
        });
        true
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the view against its source slice.
    pub fn iter<'a, R>(&'a self, records: &'a [R]) -> impl Iterator<Item = (usize, &'a R)> + 'a {
        self.indices
            .iter()
            .filter_map(move |&index| records.get(index).map(|record| (index, record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(Day, &'static str);

    impl Scheduled for Row {
        fn day(&self) -> Day {
            self.0
        }

        fn time_slot(&self) -> &str {
            self.1
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row(Day::Monday, "8:00-8:50"),
            Row(Day::Monday, "9:10-10:00"),
            Row(Day::Wednesday, "8:00-8:50"),
            Row(Day::Monday, "8:00-8:50"),
        ]
    }

    #[test]
    fn filter_requires_both_keys_to_match() {
        assert_eq!(filter_records(&rows(), Day::Monday, "8:00-8:50"), vec![0, 3]);
        assert_eq!(filter_records(&rows(), Day::Wednesday, "8:00-8:50"), vec![2]);
        assert!(filter_records(&rows(), Day::Friday, "8:00-8:50").is_empty());
    }

    #[test]
    fn slot_labels_match_exactly() {
        assert!(filter_records(&rows(), Day::Monday, "8:00-8:5").is_empty());
        assert!(filter_records(&rows(), Day::Monday, " 8:00-8:50").is_empty());
    }

    #[test]
    fn view_recomputes_only_when_a_key_changes() {
        let data = rows();
        let mut view = FilteredView::default();
        assert!(view.refresh(&data, 1, Day::Monday, "8:00-8:50"));
        assert!(!view.refresh(&data, 1, Day::Monday, "8:00-8:50"));
        assert_eq!(view.len(), 2);
        assert!(view.refresh(&data, 1, Day::Monday, "9:10-10:00"));
        assert_eq!(view.indices(), &[1]);
        assert!(view.refresh(&data, 2, Day::Monday, "9:10-10:00"));
        assert!(view.refresh(&data, 2, Day::Wednesday, "9:10-10:00"));
        assert!(view.is_empty());
    }

    #[test]
    fn iter_yields_source_records() {
        let data = rows();
        let mut view = FilteredView::default();
        view.refresh(&data, 1, Day::Wednesday, "8:00-8:50");
        let matched: Vec<usize> = view.iter(&data).map(|(index, _)| index).collect();
        assert_eq!(matched, vec![2]);
    }
}
