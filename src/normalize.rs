use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::PlayerRecord;

/// The fixed metric set of the comparison view, in radar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Appearances,
    Rating,
    Starts,
    Goals,
    YellowCards,
    GoalsContribution,
    PointsContribution,
    ContextualPerformance,
    DefensivePerformance,
    TotalImpact,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::Appearances,
        Metric::Rating,
        Metric::Starts,
        Metric::Goals,
        Metric::YellowCards,
        Metric::GoalsContribution,
        Metric::PointsContribution,
        Metric::ContextualPerformance,
        Metric::DefensivePerformance,
        Metric::TotalImpact,
    ];

    pub fn value(self, record: &PlayerRecord) -> f64 {
        match self {
            Metric::Appearances => record.appearances,
            Metric::Rating => record.rating,
            Metric::Starts => record.starts,
            Metric::Goals => record.goals,
            Metric::YellowCards => record.yellow_cards,
            Metric::GoalsContribution => record.goals_contribution,
            Metric::PointsContribution => record.points_contribution,
            Metric::ContextualPerformance => record.contextual_performance,
            Metric::DefensivePerformance => record.defensive_performance,
            Metric::TotalImpact => record.total_impact,
        }
    }

    /// Column name with underscores spaced out, as shown on the radar axes.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Appearances => "Partidos jugados",
            Metric::Rating => "ELO",
            Metric::Starts => "Partidos titular",
            Metric::Goals => "Goles",
            Metric::YellowCards => "Tarjetas amarillas",
            Metric::GoalsContribution => "Aporte Goles",
            Metric::PointsContribution => "Aporte Puntos",
            Metric::ContextualPerformance => "RC",
            Metric::DefensivePerformance => "IDR",
            Metric::TotalImpact => "Impacto Total",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricScale {
    pub min: f64,
    pub max: f64,
}

impl MetricScale {
    /// Min/max of `metric` over every record. `None` for an empty dataset.
    pub fn over(records: &[PlayerRecord], metric: Metric) -> Option<Self> {
        let mut iter = records.iter().map(|r| metric.value(r));
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }

    /// Position of `value` on a 0-100 scale. A constant metric maps to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        (value - self.min) / span * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRow {
    pub name: String,
    /// Indexed like `Metric::ALL`.
    pub values: [f64; 10],
}

impl NormalizedRow {
    pub fn get(&self, metric: Metric) -> f64 {
        self.values[metric_index(metric)]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedTable {
    pub rows: Vec<NormalizedRow>,
}

impl NormalizedTable {
    pub fn row(&self, name: &str) -> Option<&NormalizedRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    pub fn value(&self, name: &str, metric: Metric) -> Option<f64> {
        self.row(name).map(|r| r.get(metric))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn metric_index(metric: Metric) -> usize {
    Metric::ALL
        .iter()
        .position(|m| *m == metric)
        .unwrap_or_default()
}

/// Records of `dataset` whose name appears in `names`, in dataset order,
/// keeping the first record for a repeated name.
pub fn select_players<'a>(dataset: &'a [PlayerRecord], names: &[String]) -> Vec<&'a PlayerRecord> {
    let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    dataset
        .iter()
        .filter(|r| wanted.contains(r.name.as_str()))
        .filter(|r| seen.insert(r.name.as_str()))
        .collect()
}

/// Rescale every metric of `subset` against min/max of the full `dataset`,
/// so a player's geometry does not move when the selection changes.
pub fn normalize(dataset: &[PlayerRecord], subset: &[&PlayerRecord]) -> NormalizedTable {
    let scales: Vec<Option<MetricScale>> = Metric::ALL
        .iter()
        .map(|m| MetricScale::over(dataset, *m))
        .collect();

    let rows = subset
        .iter()
        .map(|record| {
            let mut values = [0.0; 10];
            for (idx, metric) in Metric::ALL.iter().enumerate() {
                values[idx] = scales[idx]
                    .map(|s| s.normalize(metric.value(record)))
                    .unwrap_or(0.0);
            }
            NormalizedRow {
                name: record.name.clone(),
                values,
            }
        })
        .collect();

    NormalizedTable { rows }
}
