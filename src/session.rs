use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::compare::{PairwiseSummary, compare_pair};
use crate::dataset::PlayerRecord;
use crate::normalize::{NormalizedTable, normalize, select_players};

pub const MIN_COMPARISON_PLAYERS: usize = 2;

/// Cross-view store for the comparison selection.
///
/// The scouting view is the only writer (`publish`), the comparison view the
/// only reader (`selected`). An empty publish leaves the previous selection in
/// place; a non-empty one replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionHandoff {
    names: Vec<String>,
}

impl SelectionHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the stored selection changed.
    pub fn publish(&mut self, names: &[String]) -> bool {
        if names.is_empty() {
            return false;
        }
        let mut seen = HashSet::new();
        let next: Vec<String> = names
            .iter()
            .filter(|n| seen.insert(n.as_str()))
            .cloned()
            .collect();
        if next == self.names {
            return false;
        }
        self.names = next;
        true
    }

    pub fn selected(&self) -> &[String] {
        &self.names
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("Selecciona al menos dos jugadores para comparar en la página anterior.")]
    NotEnoughPlayers { selected: usize },
    #[error("El jugador {0} no aparece en el conjunto de datos.")]
    UnknownPlayer(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Every selected player, in dataset order. Feeds the radar chart.
    pub table: NormalizedTable,
    /// First two names of the selection, head to head.
    pub summary: PairwiseSummary,
}

/// Build the comparison view for `selection` against the full dataset.
pub fn build_comparison(dataset: &[PlayerRecord], selection: &[String]) -> Result<ComparisonReport, ComparisonError> {
    if selection.len() < MIN_COMPARISON_PLAYERS {
        return Err(ComparisonError::NotEnoughPlayers {
            selected: selection.len(),
        });
    }
    if let Some(missing) = selection
        .iter()
        .find(|name| !dataset.iter().any(|r| &r.name == *name))
    {
        return Err(ComparisonError::UnknownPlayer(missing.clone()));
    }

    let subset = select_players(dataset, selection);
    let table = normalize(dataset, &subset);

    let (first, second) = (&selection[0], &selection[1]);
    let a = table
        .row(first)
        .ok_or_else(|| ComparisonError::UnknownPlayer(first.clone()))?;
    let b = table
        .row(second)
        .ok_or_else(|| ComparisonError::UnknownPlayer(second.clone()))?;
    let summary = compare_pair(a, b);
    Ok(ComparisonReport { table, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::player;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_publish_keeps_previous_selection() {
        let mut handoff = SelectionHandoff::new();
        assert!(handoff.publish(&names(&["A", "B"])));
        assert!(!handoff.publish(&[]));
        assert_eq!(handoff.selected(), names(&["A", "B"]).as_slice());
        assert!(handoff.publish(&names(&["C", "C", "A"])));
        assert_eq!(handoff.selected(), names(&["C", "A"]).as_slice());
    }

    #[test]
    fn one_player_is_not_enough() {
        let data = vec![player("A", "T", "C", "P", 20.0, 1.0)];
        let err = build_comparison(&data, &names(&["A"])).unwrap_err();
        assert_eq!(err, ComparisonError::NotEnoughPlayers { selected: 1 });
        assert!(err.to_string().contains("al menos dos"));
    }

    #[test]
    fn unknown_name_is_reported() {
        let data = vec![player("A", "T", "C", "P", 20.0, 1.0)];
        let err = build_comparison(&data, &names(&["A", "Z"])).unwrap_err();
        assert_eq!(err, ComparisonError::UnknownPlayer("Z".to_string()));
    }

    #[test]
    fn missing_name_is_the_one_reported() {
        let data = vec![
            player("A", "T", "C", "P", 20.0, 1.0),
            player("B", "T", "C", "P", 20.0, 2.0),
        ];
        let err = build_comparison(&data, &names(&["A", "B", "Y"])).unwrap_err();
        assert_eq!(err, ComparisonError::UnknownPlayer("Y".to_string()));
        let err = build_comparison(&data, &names(&["X", "B"])).unwrap_err();
        assert_eq!(err, ComparisonError::UnknownPlayer("X".to_string()));
    }

    #[test]
    fn pair_follows_selection_order() {
        let data = vec![
            player("A", "T", "C", "P", 20.0, 1.0),
            player("B", "T", "C", "P", 20.0, 9.0),
        ];
        let report = build_comparison(&data, &names(&["B", "A"])).expect("two known players");
        assert_eq!(report.summary.first, "B");
        assert_eq!(report.summary.second, "A");
        let table_names: Vec<&str> = report.table.names().collect();
        assert_eq!(table_names, vec!["A", "B"]);
    }
}
