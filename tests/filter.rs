use std::path::PathBuf;

use scouting_madrid::dataset::{Dataset, PlayerRecord, load_dataset};
use scouting_madrid::filter::{
    FilterPipeline, FilterState, NumericRange, RangeField, apply_categorical, apply_filters, apply_ranges,
    filter_category, filter_position, filter_team,
};
use scouting_madrid::rankings::{ReportConfig, ReportWarning, build_report};

fn fixture() -> Dataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/players.csv");
    load_dataset(&path).expect("fixture loads")
}

fn names(rows: &[&PlayerRecord]) -> Vec<String> {
    let mut out: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
    out.sort();
    out
}

#[test]
fn fixture_has_every_column() {
    let data = fixture();
    assert_eq!(data.len(), 8);
    let ana = data.find("Ana Ruiz").expect("Ana present");
    assert_eq!(ana.team, "CD Leganes B");
    assert_eq!(ana.goals_per_match, 0.5);
    assert_eq!(ana.total_impact, 78.4);
}

#[test]
fn categorical_predicates_compose_in_any_order() {
    let data = fixture();
    let records = &data.records;
    let all: Vec<&PlayerRecord> = records.iter().collect();

    for team in ["CD Leganes B", "AD Alcorcon C"] {
        for category in ["Juvenil", "Senior"] {
            for position in ["Delanteros", "Defensas"] {
                let forward = filter_position(
                    &filter_category(&filter_team(records, Some(team)), Some(category)),
                    Some(position),
                );
                let reversed: Vec<&PlayerRecord> = filter_category(&filter_position(&all, Some(position)), Some(category))
                    .into_iter()
                    .filter(|r| r.team == team)
                    .collect();
                assert_eq!(names(&forward), names(&reversed), "{team}/{category}/{position}");
            }
        }
    }
}

#[test]
fn chained_age_range_matches_single_pass() {
    let data = fixture();
    let age = [(RangeField::Age, NumericRange::new(18.0, 23.0))];

    for team in ["CD Leganes B", "AD Alcorcon C", "Rayo Majadahonda"] {
        for category in ["Juvenil", "Senior"] {
            let categorical = FilterState::default().with_team(team).with_category(category);
            let chained = apply_ranges(&apply_categorical(&data.records, &categorical), &age);
            let single = apply_filters(&data.records, &categorical.clone().with_range(RangeField::Age, 18.0, 23.0));
            let chained: Vec<&str> = chained.iter().map(|r| r.name.as_str()).collect();
            let single: Vec<&str> = single.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(chained, single, "{team}/{category}");
        }
    }

    let leganes = FilterState::default()
        .with_team("CD Leganes B")
        .with_category("Juvenil")
        .with_range(RangeField::Age, 18.0, 23.0);
    let rows = apply_filters(&data.records, &leganes);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ana Ruiz", "Bruno Gil"]);
}

#[test]
fn ranges_intersect_with_categorical_choice() {
    let data = fixture();
    let filter = FilterState::default()
        .with_category("Juvenil")
        .with_range(RangeField::Age, 18.0, 21.0)
        .with_range(RangeField::Goals, 10.0, 20.0);
    let rows = apply_filters(&data.records, &filter);
    assert_eq!(names(&rows), vec!["Ana Ruiz".to_string(), "Eva Marin".to_string()]);
    assert!(rows.iter().all(|r| r.category == "Juvenil" && r.age <= 21.0 && r.goals >= 10.0));
}

#[test]
fn options_cascade_from_the_team_subset() {
    let data = fixture();
    let outcome = FilterPipeline::run(&data.records, &FilterState::default().with_team("Rayo Majadahonda"));
    assert_eq!(outcome.team_options.len(), 3);
    assert_eq!(outcome.category_options, vec!["Juvenil".to_string(), "Senior".to_string()]);
    assert_eq!(
        outcome.position_options,
        vec!["Centrocampistas".to_string(), "Delanteros".to_string()]
    );
    assert_eq!(
        outcome.bounds_for(RangeField::Age),
        Some(NumericRange::new(18.0, 25.0))
    );
}

#[test]
fn stale_range_is_clamped_to_new_bounds() {
    let data = fixture();
    let filter = FilterState::default()
        .with_team("AD Alcorcon C")
        .with_range(RangeField::Height, 150.0, 189.0);
    let outcome = FilterPipeline::run(&data.records, &filter);
    assert_eq!(
        outcome.applied_for(RangeField::Height),
        Some(NumericRange::new(170.0, 189.0))
    );
    assert_eq!(
        names(&outcome.rows),
        vec!["Diego Soto".to_string(), "Eva Marin".to_string()]
    );
}

#[test]
fn unknown_team_yields_empty_subset_and_warning() {
    let data = fixture();
    let outcome = FilterPipeline::run(&data.records, &FilterState::default().with_team("Inexistente CF"));
    assert!(outcome.is_empty());
    assert!(outcome.category_options.is_empty());
    assert!(RangeField::ALL.iter().all(|f| outcome.bounds_for(*f).is_none()));

    let report = build_report(&data.records, &outcome.rows, &ReportConfig::default());
    assert!(!report.has_players());
    assert!(report.regulars.is_none());
    assert_eq!(report.warnings, vec![ReportWarning::NoPlayers]);
}

#[test]
fn team_without_defenders_warns() {
    let data = fixture();
    let outcome = FilterPipeline::run(&data.records, &FilterState::default().with_team("Rayo Majadahonda"));
    let report = build_report(&data.records, &outcome.rows, &ReportConfig::default());
    assert_eq!(report.participation_threshold, 15.0);
    let regulars = report.regulars.expect("Gabi Luna is a regular");
    assert_eq!(regulars.top_impact.len(), 1);
    assert_eq!(regulars.top_impact[0].name, "Gabi Luna");
    assert_eq!(regulars.top_scorers.len(), 2);
    assert!(regulars.defenders.is_none());
    assert_eq!(report.warnings, vec![ReportWarning::NoDefenders]);
}
