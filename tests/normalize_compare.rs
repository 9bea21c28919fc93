use std::path::PathBuf;

use scouting_madrid::compare::{Winner, compare_pair};
use scouting_madrid::dataset::{Dataset, PlayerRecord, load_dataset, parse_players_csv};
use scouting_madrid::normalize::{Metric, normalize};
use scouting_madrid::session::build_comparison;

fn fixture() -> Dataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/players.csv");
    load_dataset(&path).expect("fixture loads")
}

const HEADER: &str = "Nombre,Equipo,categoria,Posicion,Edad,Altura,ELO,Partidos_jugados,Goles,Goles_por_partido,Partidos_titular,Tarjetas_amarillas,Aporte_Goles,Aporte_Puntos,RC,IDR,Impacto_Total";

/// Three players that differ only in goals: 10, 5 and 0.
fn abc() -> Vec<PlayerRecord> {
    let csv = format!(
        "{HEADER}\n\
         A,T,Senior,Delanteros,24,180,1200,20,10,0.5,15,2,10,10,50,5,40\n\
         B,T,Senior,Delanteros,24,180,1200,20,5,0.25,15,2,10,10,50,5,40\n\
         C,T,Senior,Delanteros,24,180,1200,20,0,0,15,2,10,10,50,5,40\n"
    );
    parse_players_csv(csv.as_bytes()).expect("inline csv parses")
}

#[test]
fn normalized_values_stay_in_range_with_extremes_pinned() {
    let data = fixture();
    let all: Vec<&PlayerRecord> = data.records.iter().collect();
    let table = normalize(&data.records, &all);

    for (idx, metric) in Metric::ALL.iter().enumerate() {
        let column: Vec<f64> = table.rows.iter().map(|r| r.values[idx]).collect();
        assert!(column.iter().all(|v| (0.0..=100.0).contains(v)), "{metric:?} out of range");

        let raw: Vec<f64> = data.records.iter().map(|r| metric.value(r)).collect();
        let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
        let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for (record, value) in data.records.iter().zip(&column) {
            if metric.value(record) == min {
                assert_eq!(*value, 0.0, "{metric:?} argmin");
            }
            if metric.value(record) == max {
                assert_eq!(*value, 100.0, "{metric:?} argmax");
            }
        }
    }
}

#[test]
fn constant_metric_normalizes_to_zero() {
    let data = abc();
    let all: Vec<&PlayerRecord> = data.iter().collect();
    let table = normalize(&data, &all);
    for row in &table.rows {
        assert_eq!(row.get(Metric::Rating), 0.0);
        assert_eq!(row.get(Metric::TotalImpact), 0.0);
    }
}

#[test]
fn scale_comes_from_full_dataset_not_selection() {
    let data = fixture();
    let pair: Vec<&PlayerRecord> = data
        .records
        .iter()
        .filter(|r| r.name == "Carlos Mena" || r.name == "Gabi Luna")
        .collect();
    let table = normalize(&data.records, &pair);
    let gabi = table.value("Gabi Luna", Metric::Goals).expect("Gabi normalized");
    // Goals span 0..14 across the whole file.
    assert!((gabi - 5.0 / 14.0 * 100.0).abs() < 1e-9);
}

#[test]
fn comparator_is_symmetric() {
    let data = fixture();
    let all: Vec<&PlayerRecord> = data.records.iter().collect();
    let table = normalize(&data.records, &all);

    for a in &table.rows {
        for b in &table.rows {
            let ab = compare_pair(a, b);
            let ba = compare_pair(b, a);
            assert_eq!(ab.first_wins, ba.second_wins);
            assert_eq!(ab.second_wins, ba.first_wins);
            assert_eq!(ab.ties, ba.ties);
            for (x, y) in ab.verdicts.iter().zip(&ba.verdicts) {
                assert_eq!(x.winner, y.winner.swapped());
            }
        }
    }
}

#[test]
fn decisive_shares_sum_to_hundred() {
    let data = fixture();
    let all: Vec<&PlayerRecord> = data.records.iter().collect();
    let table = normalize(&data.records, &all);

    for a in &table.rows {
        for b in &table.rows {
            let s = compare_pair(a, b);
            match s.share {
                Some(share) => {
                    assert!(s.decisive() > 0);
                    assert!((share.first_pct + share.second_pct - 100.0).abs() < 1e-9);
                }
                None => assert_eq!(s.decisive(), 0),
            }
        }
    }
}

#[test]
fn self_comparison_is_all_ties() {
    let data = fixture();
    let all: Vec<&PlayerRecord> = data.records.iter().collect();
    let table = normalize(&data.records, &all);
    let s = compare_pair(&table.rows[0], &table.rows[0]);
    assert_eq!(s.ties, Metric::ALL.len());
    assert!(s.share.is_none());
}

#[test]
fn three_player_scenario() {
    let data = abc();
    let selection = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let report = build_comparison(&data, &selection).expect("three players compare");

    assert_eq!(report.table.value("A", Metric::Goals), Some(100.0));
    assert_eq!(report.table.value("B", Metric::Goals), Some(50.0));
    assert_eq!(report.table.value("C", Metric::Goals), Some(0.0));

    let s = &report.summary;
    assert_eq!((s.first.as_str(), s.second.as_str()), ("A", "B"));
    let goals = s
        .verdicts
        .iter()
        .find(|v| v.metric == Metric::Goals)
        .expect("goals compared");
    assert_eq!(goals.winner, Winner::First);
    assert_eq!(s.first_wins, 1);
    assert_eq!(s.second_wins, 0);
    let share = s.share.expect("one decisive metric");
    assert_eq!((share.first_pct, share.second_pct), (100.0, 0.0));
}
