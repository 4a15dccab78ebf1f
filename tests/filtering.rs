mod support;

use crashcourse::schedule::{Day, slots_for_day};
use crashcourse::selection::SelectionState;
use crashcourse::traffic::{FilteredView, filter_records};
use support::{fixture_buildings, fixture_hotspots};

#[test]
fn fixture_skips_records_with_unknown_days() {
    let buildings = fixture_buildings();
    assert_eq!(buildings.len(), 41);
    assert!(buildings.iter().all(|record| record.building_name != "Weekend Annex"));
}

#[test]
fn every_day_and_slot_yields_exactly_the_matching_records() {
    let buildings = fixture_buildings();
    let hotspots = fixture_hotspots();
    for day in Day::ALL {
        for &slot in slots_for_day(day) {
            let expected: Vec<usize> = buildings
                .iter()
                .enumerate()
                .filter(|(_, record)| record.day == day && record.time_slot == slot)
                .map(|(index, _)| index)
                .collect();
            assert_eq!(filter_records(&buildings, day, slot), expected, "{day} {slot}");

            let matched = filter_records(&hotspots, day, slot);
            assert!(matched.iter().all(|&index| {
                hotspots[index].day == day && hotspots[index].time_slot == slot
            }));
            let total = hotspots
                .iter()
                .filter(|record| record.day == day && record.time_slot == slot)
                .count();
            assert_eq!(matched.len(), total, "{day} {slot}");
        }
    }
}

#[test]
fn off_schedule_labels_never_match_a_selectable_slot() {
    let buildings = fixture_buildings();
    let shown: usize = Day::ALL
        .into_iter()
        .flat_map(|day| slots_for_day(day).iter().map(move |&slot| (day, slot)))
        .map(|(day, slot)| filter_records(&buildings, day, slot).len())
        .sum();
    assert_eq!(shown, buildings.len() - 1);
}

#[test]
fn known_slots_have_expected_counts() {
    let buildings = fixture_buildings();
    let hotspots = fixture_hotspots();
    assert!(filter_records(&buildings, Day::Monday, "8:00-8:50").is_empty());
    assert_eq!(filter_records(&hotspots, Day::Monday, "8:00-8:50").len(), 1);
    assert_eq!(filter_records(&buildings, Day::Monday, "9:10-10:00").len(), 1);
    assert!(filter_records(&hotspots, Day::Monday, "9:10-10:00").is_empty());
}

#[test]
fn view_follows_selection_through_a_day_change() {
    let buildings = fixture_buildings();
    let mut selection = SelectionState::new(Day::Thursday);
    assert!(selection.set_time_slot("14:20-15:35"));
    let mut view = FilteredView::default();
    view.refresh(&buildings, 1, selection.day(), selection.time_slot());
    assert_eq!(view.len(), 1);

    selection.set_day(Day::Monday);
    assert_eq!(selection.time_slot(), "8:00-8:50");
    assert!(view.refresh(&buildings, 1, selection.day(), selection.time_slot()));
    assert!(view.is_empty());
    assert!(!view.refresh(&buildings, 1, selection.day(), selection.time_slot()));
}
