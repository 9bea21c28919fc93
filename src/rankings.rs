use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::dataset::PlayerRecord;

/// Position label of defenders in the source data.
pub const DEFENDER_POSITION: &str = "Defensas";
pub const TOP_TABLE_LEN: usize = 5;
pub const TOP_SCORERS_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScorerMetric {
    Goals,
    GoalsPerMatch,
}

impl ScorerMetric {
    pub fn value(self, record: &PlayerRecord) -> f64 {
        match self {
            ScorerMetric::Goals => record.goals,
            ScorerMetric::GoalsPerMatch => record.goals_per_match,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScorerMetric::Goals => "Goles",
            ScorerMetric::GoalsPerMatch => "Goles por partido",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ScorerMetric::Goals => ScorerMetric::GoalsPerMatch,
            ScorerMetric::GoalsPerMatch => ScorerMetric::Goals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgeGroup {
    Young,
    Senior,
}

impl AgeGroup {
    pub fn of(age: f64, young_age: f64) -> Self {
        if age <= young_age {
            AgeGroup::Young
        } else {
            AgeGroup::Senior
        }
    }

    pub fn label(self, young_age: f64) -> String {
        match self {
            AgeGroup::Young => format!("Menor o igual a {young_age}"),
            AgeGroup::Senior => format!("Mayor a {young_age}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    pub young_age: f64,
    pub participation_ratio: f64,
    pub scorer_metric: ScorerMetric,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            young_age: crate::config::DEFAULT_YOUNG_AGE,
            participation_ratio: crate::config::DEFAULT_PARTICIPATION_RATIO,
            scorer_metric: ScorerMetric::Goals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SummaryMetrics {
    pub total_players: usize,
    pub avg_goals: f64,
    pub avg_height: f64,
    pub avg_age: f64,
}

impl SummaryMetrics {
    pub fn of(rows: &[&PlayerRecord]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let n = rows.len() as f64;
        Self {
            total_players: rows.len(),
            avg_goals: rows.iter().map(|r| r.goals).sum::<f64>() / n,
            avg_height: rows.iter().map(|r| r.height).sum::<f64>() / n,
            avg_age: rows.iter().map(|r| r.age).sum::<f64>() / n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub team: String,
    pub age: f64,
    pub value: f64,
    pub rating: f64,
    pub group: AgeGroup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub name: String,
    pub team: String,
    pub age: f64,
    pub height: f64,
    pub appearances: f64,
    pub group: AgeGroup,
    /// The value the table is ranked by.
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportWarning {
    NoPlayers,
    NoRegulars,
    NoDefenders,
}

impl ReportWarning {
    pub fn message(self) -> &'static str {
        match self {
            ReportWarning::NoPlayers => "No hay jugadores que cumplan con los filtros seleccionados.",
            ReportWarning::NoRegulars => {
                "No hay jugadores que cumplan con el filtro de participación mínima (más del 50% de partidos jugados)."
            }
            ReportWarning::NoDefenders => "No hay defensas que cumplan con los filtros seleccionados.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefenderReport {
    pub idr_scatter: Vec<ScatterPoint>,
    pub top_idr: Vec<RankedRow>,
}

/// Sections shown only when at least one filtered player is a regular.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegularsReport {
    pub top_impact: Vec<RankedRow>,
    pub scorer_metric: ScorerMetric,
    pub top_scorers: Vec<RankedRow>,
    pub top_goals_contribution: Vec<RankedRow>,
    pub rc_scatter: Vec<ScatterPoint>,
    pub top_rc: Vec<RankedRow>,
    pub defenders: Option<DefenderReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoutingReport {
    pub summary: SummaryMetrics,
    pub young_age: f64,
    pub max_appearances: f64,
    /// Regulars have strictly more appearances than this.
    pub participation_threshold: f64,
    pub impact_scatter: Vec<ScatterPoint>,
    pub regulars: Option<RegularsReport>,
    pub warnings: Vec<ReportWarning>,
}

impl ScoutingReport {
    pub fn has_players(&self) -> bool {
        self.summary.total_players > 0
    }
}

/// Whole numbers without a fraction, everything else to two decimals.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

pub fn participation_threshold(dataset: &[PlayerRecord], ratio: f64) -> (f64, f64) {
    let max = dataset
        .iter()
        .map(|r| r.appearances)
        .fold(f64::NEG_INFINITY, f64::max);
    let max = if max.is_finite() { max } else { 0.0 };
    (max, max * ratio)
}

fn scatter(rows: &[&PlayerRecord], young_age: f64, value: impl Fn(&PlayerRecord) -> f64) -> Vec<ScatterPoint> {
    rows.iter()
        .map(|r| ScatterPoint {
            name: r.name.clone(),
            team: r.team.clone(),
            age: r.age,
            value: value(r),
            rating: r.rating,
            group: AgeGroup::of(r.age, young_age),
        })
        .collect()
}

/// Top `n` by `value`, descending. Equal values keep source order.
pub fn top_by(
    rows: &[&PlayerRecord],
    n: usize,
    young_age: f64,
    value: impl Fn(&PlayerRecord) -> f64,
) -> Vec<RankedRow> {
    let mut sorted: Vec<&PlayerRecord> = rows.to_vec();
    sorted.sort_by(|a, b| value(b).partial_cmp(&value(a)).unwrap_or(Ordering::Equal));
    sorted
        .into_iter()
        .take(n)
        .map(|r| RankedRow {
            name: r.name.clone(),
            team: r.team.clone(),
            age: r.age,
            height: r.height,
            appearances: r.appearances,
            group: AgeGroup::of(r.age, young_age),
            value: value(r),
        })
        .collect()
}

/// Build every section of the scouting view for an already filtered subset.
/// The participation threshold is taken from the full `dataset`.
pub fn build_report(dataset: &[PlayerRecord], filtered: &[&PlayerRecord], cfg: &ReportConfig) -> ScoutingReport {
    let (max_appearances, threshold) = participation_threshold(dataset, cfg.participation_ratio);
    let young = cfg.young_age;
    let mut report = ScoutingReport {
        summary: SummaryMetrics::of(filtered),
        young_age: young,
        max_appearances,
        participation_threshold: threshold,
        impact_scatter: Vec::new(),
        regulars: None,
        warnings: Vec::new(),
    };

    if filtered.is_empty() {
        report.warnings.push(ReportWarning::NoPlayers);
        return report;
    }

    report.impact_scatter = scatter(filtered, young, |r| r.total_impact);

    let regulars: Vec<&PlayerRecord> = filtered
        .iter()
        .copied()
        .filter(|r| r.appearances > threshold)
        .collect();
    if regulars.is_empty() {
        report.warnings.push(ReportWarning::NoRegulars);
        return report;
    }

    let defenders: Vec<&PlayerRecord> = filtered
        .iter()
        .copied()
        .filter(|r| r.position == DEFENDER_POSITION)
        .collect();
    let defender_report = if defenders.is_empty() {
        report.warnings.push(ReportWarning::NoDefenders);
        None
    } else {
        let regular_defenders: Vec<&PlayerRecord> = defenders
            .iter()
            .copied()
            .filter(|r| r.appearances > threshold)
            .collect();
        Some(DefenderReport {
            idr_scatter: scatter(&defenders, young, |r| r.defensive_performance),
            top_idr: top_by(&regular_defenders, TOP_TABLE_LEN, young, |r| r.defensive_performance),
        })
    };

    let metric = cfg.scorer_metric;
    report.regulars = Some(RegularsReport {
        top_impact: top_by(&regulars, TOP_TABLE_LEN, young, |r| r.total_impact),
        scorer_metric: metric,
        top_scorers: top_by(filtered, TOP_SCORERS_LEN, young, |r| metric.value(r)),
        top_goals_contribution: top_by(filtered, TOP_TABLE_LEN, young, |r| r.goals_contribution),
        rc_scatter: scatter(filtered, young, |r| r.contextual_performance),
        top_rc: top_by(&regulars, TOP_TABLE_LEN, young, |r| r.contextual_performance),
        defenders: defender_report,
    });
    report
}
