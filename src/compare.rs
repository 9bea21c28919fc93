use serde::Serialize;

use crate::normalize::{Metric, NormalizedRow};

/// Label used for a tied metric.
pub const TIE_LABEL: &str = "Empate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    First,
    Second,
    Tie,
}

impl Winner {
    pub fn swapped(self) -> Self {
        match self {
            Winner::First => Winner::Second,
            Winner::Second => Winner::First,
            Winner::Tie => Winner::Tie,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricVerdict {
    pub metric: Metric,
    pub first: f64,
    pub second: f64,
    pub winner: Winner,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WinShare {
    pub first_pct: f64,
    pub second_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseSummary {
    pub first: String,
    pub second: String,
    pub verdicts: Vec<MetricVerdict>,
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
    /// Share of decisive metrics won. `None` when every metric tied.
    pub share: Option<WinShare>,
}

impl PairwiseSummary {
    pub fn decisive(&self) -> usize {
        self.first_wins + self.second_wins
    }

    /// Name of the winner of a verdict, or the tie label.
    pub fn winner_label(&self, winner: Winner) -> &str {
        match winner {
            Winner::First => &self.first,
            Winner::Second => &self.second,
            Winner::Tie => TIE_LABEL,
        }
    }
}

fn verdict(first: f64, second: f64) -> Winner {
    if first > second {
        Winner::First
    } else if first < second {
        Winner::Second
    } else {
        Winner::Tie
    }
}

pub fn compare_pair(first: &NormalizedRow, second: &NormalizedRow) -> PairwiseSummary {
    compare_on(first, second, &Metric::ALL)
}

/// Compare two normalized rows over `metrics`. Ties are left out of the
/// percentage denominator.
pub fn compare_on(first: &NormalizedRow, second: &NormalizedRow, metrics: &[Metric]) -> PairwiseSummary {
    let verdicts: Vec<MetricVerdict> = metrics
        .iter()
        .map(|m| {
            let a = first.get(*m);
            let b = second.get(*m);
            MetricVerdict {
                metric: *m,
                first: a,
                second: b,
                winner: verdict(a, b),
            }
        })
        .collect();

    let first_wins = verdicts.iter().filter(|v| v.winner == Winner::First).count();
    let second_wins = verdicts.iter().filter(|v| v.winner == Winner::Second).count();
    let ties = verdicts.iter().filter(|v| v.winner == Winner::Tie).count();

    let decisive = first_wins + second_wins;
    let share = (decisive > 0).then(|| WinShare {
        first_pct: first_wins as f64 / decisive as f64 * 100.0,
        second_pct: second_wins as f64 / decisive as f64 * 100.0,
    });

    PairwiseSummary {
        first: first.name.clone(),
        second: second.name.clone(),
        verdicts,
        first_wins,
        second_wins,
        ties,
        share,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, values: [f64; 10]) -> NormalizedRow {
        NormalizedRow {
            name: name.to_string(),
            values,
        }
    }

    #[test]
    fn counts_wins_and_ties() {
        let a = row("A", [100.0, 40.0, 0.0, 100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let b = row("B", [50.0, 60.0, 0.0, 50.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0]);
        let s = compare_pair(&a, &b);
        assert_eq!(s.first_wins, 2);
        assert_eq!(s.second_wins, 2);
        assert_eq!(s.ties, 6);
        let share = s.share.expect("decisive metrics present");
        assert_eq!(share.first_pct, 50.0);
        assert_eq!(share.second_pct, 50.0);
        assert_eq!(s.winner_label(s.verdicts[1].winner), "B");
        assert_eq!(s.winner_label(s.verdicts[2].winner), TIE_LABEL);
    }

    #[test]
    fn all_tied_has_no_share() {
        let a = row("A", [10.0; 10]);
        let b = row("B", [10.0; 10]);
        let s = compare_pair(&a, &b);
        assert_eq!(s.ties, 10);
        assert_eq!(s.decisive(), 0);
        assert!(s.share.is_none());
    }

    #[test]
    fn single_metric_comparison() {
        let a = row("A", [0.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let b = row("B", [0.0, 0.0, 0.0, 50.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let s = compare_on(&a, &b, &[Metric::Goals]);
        assert_eq!(s.first_wins, 1);
        assert_eq!(s.share.map(|x| (x.first_pct, x.second_pct)), Some((100.0, 0.0)));
    }
}
