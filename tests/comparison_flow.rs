use std::path::PathBuf;
use std::sync::Arc;

use scouting_madrid::config::AppConfig;
use scouting_madrid::dataset::cached_dataset;
use scouting_madrid::session::{ComparisonError, SelectionHandoff, build_comparison};
use scouting_madrid::state::{AppState, Focus, Screen};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/players.csv")
}

fn state() -> AppState {
    let dataset = cached_dataset(&fixture_path()).expect("fixture loads");
    AppState::new(dataset, AppConfig::default())
}

fn pick(state: &mut AppState, name: &str) {
    let idx = state
        .player_names
        .iter()
        .position(|n| n == name)
        .expect("name listed");
    state.player_cursor = idx;
    state.toggle_pick();
}

#[test]
fn cached_dataset_is_shared() {
    let a = cached_dataset(&fixture_path()).expect("first load");
    let b = cached_dataset(&fixture_path()).expect("second load");
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn one_player_selection_halts_with_warning() {
    let mut state = state();
    pick(&mut state, "Ana Ruiz");
    state.set_screen(Screen::Comparison);

    let err = state.comparison.as_ref().expect_err("one player is not enough");
    assert_eq!(*err, ComparisonError::NotEnoughPlayers { selected: 1 });
    assert!(err.to_string().starts_with("Selecciona al menos dos jugadores"));
    assert!(state.logs.back().is_some_and(|l| l.starts_with("[WARN]")));
}

#[test]
fn empty_selection_halts_before_any_normalization() {
    let dataset = cached_dataset(&fixture_path()).expect("fixture loads");
    let handoff = SelectionHandoff::new();
    let err = build_comparison(&dataset.records, handoff.selected()).expect_err("nothing selected");
    assert_eq!(err, ComparisonError::NotEnoughPlayers { selected: 0 });
}

#[test]
fn picks_flow_into_comparison_in_selection_order() {
    let mut state = state();
    pick(&mut state, "Eva Marin");
    pick(&mut state, "Ana Ruiz");
    pick(&mut state, "Bruno Gil");
    state.set_screen(Screen::Comparison);

    let report = state.comparison.as_ref().expect("three players compare");
    assert_eq!(report.table.rows.len(), 3);
    assert_eq!(report.summary.first, "Eva Marin");
    assert_eq!(report.summary.second, "Ana Ruiz");
    let table_order: Vec<&str> = report.table.names().collect();
    assert_eq!(table_order, vec!["Ana Ruiz", "Bruno Gil", "Eva Marin"]);
}

#[test]
fn picks_rebuild_comparison_without_visiting_screen() {
    let mut state = state();
    pick(&mut state, "Ana Ruiz");
    pick(&mut state, "Bruno Gil");
    assert_eq!(state.screen, Screen::Scouting);
    let report = state.comparison.as_ref().expect("two picks compare");
    assert_eq!(
        (report.summary.first.as_str(), report.summary.second.as_str()),
        ("Ana Ruiz", "Bruno Gil")
    );

    pick(&mut state, "Ana Ruiz");
    assert_eq!(
        state.comparison.as_ref().err(),
        Some(&ComparisonError::NotEnoughPlayers { selected: 1 })
    );

    pick(&mut state, "Eva Marin");
    let report = state.comparison.as_ref().expect("new pair compares");
    assert_eq!(
        (report.summary.first.as_str(), report.summary.second.as_str()),
        ("Bruno Gil", "Eva Marin")
    );
}

#[test]
fn unpicking_everything_keeps_last_published_selection() {
    let mut state = state();
    pick(&mut state, "Ana Ruiz");
    pick(&mut state, "Bruno Gil");
    pick(&mut state, "Ana Ruiz");
    pick(&mut state, "Bruno Gil");
    assert!(state.picked.is_empty());
    assert_eq!(state.handoff.selected(), &["Bruno Gil".to_string()]);
}

#[test]
fn unknown_name_is_reported() {
    let dataset = cached_dataset(&fixture_path()).expect("fixture loads");
    let selection = vec!["Ana Ruiz".to_string(), "Nadie".to_string()];
    let err = build_comparison(&dataset.records, &selection).expect_err("unknown player");
    assert_eq!(err, ComparisonError::UnknownPlayer("Nadie".to_string()));
}

#[test]
fn focus_cycles_through_every_control() {
    let mut state = state();
    let start = state.focus;
    let mut seen = 0;
    loop {
        state.focus_next();
        seen += 1;
        if state.focus == start {
            break;
        }
    }
    assert_eq!(seen, 9);
    state.focus_prev();
    assert_eq!(state.focus, Focus::Players);
}
