mod support;

use std::time::{Duration, Instant};

use crashcourse::config::AppConfig;
use crashcourse::egui_app::controller::MapController;
use crashcourse::egui_app::state::MarkerRef;
use crashcourse::egui_app::ui::style::StatusTone;
use crashcourse::geo::GeoPoint;
use crashcourse::schedule::Day;
use crashcourse::selection::Theme;
use crashcourse::traffic::{DatasetKind, LoadState};
use support::env::ConfigHomeGuard;
use support::{fixture_buildings, fixture_hotspots, fixture_path};
use tempfile::TempDir;

struct ControllerHarness {
    _config: ConfigHomeGuard,
    _temp: TempDir,
    controller: MapController,
}

impl ControllerHarness {
    fn new() -> Self {
        Self::with_settings(|_| {})
    }

    fn with_settings(customize: impl FnOnce(&mut AppConfig)) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let config = ConfigHomeGuard::set(temp.path().to_path_buf());
        let mut settings = AppConfig::default();
        settings.tiles.disk_cache = false;
        settings.tiles.workers = 1;
        customize(&mut settings);
        Self {
            _config: config,
            _temp: temp,
            controller: MapController::new(settings),
        }
    }

    fn loaded() -> Self {
        let mut harness = Self::new();
        harness.controller.install_buildings(fixture_buildings());
        harness.controller.install_hotspots(fixture_hotspots());
        harness
    }

    fn wait_for_datasets(&mut self) {
        let ctx = eframe::egui::Context::default();
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            self.controller.poll_background(&ctx);
            let done = [DatasetKind::Buildings, DatasetKind::Hotspots]
                .into_iter()
                .all(|kind| *self.controller.dataset_state(kind) != LoadState::Pending);
            if done {
                return;
            }
            assert!(Instant::now() < deadline, "datasets did not load in time");
            std::thread::sleep(Duration::from_millis(10));
        }
    }
}

fn visible_building_names(controller: &MapController) -> Vec<String> {
    controller
        .visible_buildings()
        .map(|(_, record)| record.building_name.clone())
        .collect()
}

#[test]
fn starts_on_first_monday_slot_with_nothing_loaded() {
    let harness = ControllerHarness::new();
    let selection = harness.controller.selection();
    assert_eq!(selection.day(), Day::Monday);
    assert_eq!(selection.time_slot(), "8:00-8:50");
    assert!(!selection.reporting_mode);
    assert_eq!(harness.controller.visible_building_count(), 0);
    assert_eq!(
        *harness.controller.dataset_state(DatasetKind::Buildings),
        LoadState::Pending
    );
}

#[test]
fn loads_fixture_files_in_the_background() {
    let mut harness = ControllerHarness::with_settings(|settings| {
        settings.datasets.buildings = fixture_path("buildings.json").display().to_string();
        settings.datasets.hotspots = fixture_path("hotspots.json").display().to_string();
    });
    harness.controller.start_loading();
    assert!(harness.controller.is_busy());
    harness.wait_for_datasets();
    assert_eq!(
        *harness.controller.dataset_state(DatasetKind::Buildings),
        LoadState::Loaded
    );
    assert_eq!(harness.controller.dataset_len(DatasetKind::Buildings), 41);
    assert_eq!(harness.controller.visible_hotspot_count(), 1);
    assert!(!harness.controller.is_busy());
}

#[test]
fn missing_dataset_fails_without_touching_the_other() {
    let mut harness = ControllerHarness::with_settings(|settings| {
        settings.datasets.buildings = "/nonexistent/Aggie_Flow_Dataset.json".into();
        settings.datasets.hotspots = fixture_path("hotspots.json").display().to_string();
    });
    harness.controller.start_loading();
    harness.wait_for_datasets();
    assert!(matches!(
        harness.controller.dataset_state(DatasetKind::Buildings),
        LoadState::Failed(_)
    ));
    assert_eq!(harness.controller.dataset_len(DatasetKind::Buildings), 0);
    assert_eq!(
        *harness.controller.dataset_state(DatasetKind::Hotspots),
        LoadState::Loaded
    );
}

#[test]
fn changing_day_resets_slot_and_refilters() {
    let mut harness = ControllerHarness::loaded();
    harness.controller.select_day(Day::Thursday);
    assert!(harness.controller.select_time_slot("14:20-15:35"));
    assert_eq!(harness.controller.visible_building_count(), 1);

    harness.controller.select_day(Day::Monday);
    assert_eq!(harness.controller.selection().time_slot(), "8:00-8:50");
    assert!(visible_building_names(&harness.controller).is_empty());
    assert_eq!(harness.controller.visible_hotspot_count(), 1);
}

#[test]
fn slider_index_selects_slots_for_the_day() {
    let mut harness = ControllerHarness::loaded();
    harness.controller.select_time_index(1);
    assert_eq!(harness.controller.selection().time_slot(), "9:10-10:00");
    assert_eq!(harness.controller.visible_building_count(), 1);
    assert_eq!(harness.controller.visible_hotspot_count(), 0);
    assert!(!harness.controller.select_time_slot("9:35-10:50"));
}

#[test]
fn reporting_mode_adds_one_report_per_click() {
    let mut harness = ControllerHarness::new();
    let spot = GeoPoint::new(30.6150, -96.3400);
    assert_eq!(harness.controller.handle_map_click(spot), None);
    assert!(harness.controller.reports().is_empty());

    harness.controller.toggle_reporting_mode();
    let first = harness.controller.handle_map_click(spot).expect("report added");
    assert!(!harness.controller.selection().reporting_mode);
    assert_eq!(harness.controller.handle_map_click(spot), None);

    harness.controller.set_reporting_mode(true);
    let second = harness.controller.handle_map_click(spot).expect("report added");
    assert!(second > first);
    assert_eq!(harness.controller.reports().len(), 2);
}

#[test]
fn resolving_a_report_closes_its_popup() {
    let mut harness = ControllerHarness::new();
    harness.controller.set_reporting_mode(true);
    let id = harness
        .controller
        .handle_map_click(GeoPoint::new(30.61, -96.34))
        .expect("report added");
    harness.controller.open_popup(Some(MarkerRef::Report(id)));
    let view = harness.controller.popup_view().expect("report popup");
    assert_eq!(view.resolvable, Some(id));

    assert!(harness.controller.resolve_report(id));
    assert!(harness.controller.popup_view().is_none());
    assert!(harness.controller.reports().is_empty());
    assert!(!harness.controller.resolve_report(id));
}

#[test]
fn popups_close_when_their_marker_is_filtered_out() {
    let mut harness = ControllerHarness::loaded();
    harness.controller.select_time_index(1);
    let (index, _) = harness
        .controller
        .visible_buildings()
        .next()
        .expect("a building in the slot");
    harness.controller.open_popup(Some(MarkerRef::Building(index)));
    let view = harness.controller.popup_view().expect("building popup");
    assert_eq!(view.rows[1], ("Day", "Monday".to_string()));

    harness.controller.select_time_index(0);
    assert!(harness.controller.ui.map.popup.is_none());
}

#[test]
fn hidden_markers_cannot_be_opened() {
    let mut harness = ControllerHarness::loaded();
    harness.controller.open_popup(Some(MarkerRef::Building(0)));
    assert!(harness.controller.ui.map.popup.is_none());
}

#[test]
fn theme_toggle_swaps_basemap_attribution() {
    let mut harness = ControllerHarness::new();
    assert_eq!(harness.controller.theme(), Theme::Normal);
    let normal = harness.controller.tile_attribution().to_string();
    harness.controller.toggle_theme();
    assert_eq!(harness.controller.theme(), Theme::Dark);
    assert_ne!(harness.controller.tile_attribution(), normal);
    harness.controller.toggle_theme();
    assert_eq!(harness.controller.tile_attribution(), normal);
}

#[test]
fn config_file_sets_theme_and_camera() {
    let mut harness = ControllerHarness::new();
    let root = harness._temp.path().join(".crashcourse");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join("config.toml"),
        "[map]\nzoom = 14.0\n\n[appearance]\ntheme = \"dark\"\n\n[tiles]\ndisk_cache = false\n",
    )
    .unwrap();
    harness.controller.reload_configuration();
    assert_eq!(harness.controller.theme(), Theme::Dark);
    assert_eq!(harness.controller.ui.map.zoom, 14.0);
    assert_eq!(harness.controller.ui.status.tone, StatusTone::Info);
    assert_eq!(harness.controller.ui.status.text, "Configuration reloaded");
}

#[test]
fn broken_config_reload_keeps_current_settings() {
    let mut harness = ControllerHarness::new();
    harness.controller.toggle_theme();
    let root = harness._temp.path().join(".crashcourse");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.toml"), "[map\nzoom = ").unwrap();
    harness.controller.reload_configuration();
    assert_eq!(harness.controller.theme(), Theme::Dark);
    assert_eq!(harness.controller.ui.map.zoom, 16.0);
    assert_eq!(harness.controller.ui.status.tone, StatusTone::Error);
    assert!(
        harness
            .controller
            .ui
            .status
            .text
            .starts_with("Config reload failed")
    );
}
