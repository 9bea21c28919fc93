use std::collections::VecDeque;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::dataset::Dataset;
use crate::filter::{FilterPipeline, FilterState, NumericRange, RangeField};
use crate::rankings::{ReportConfig, ScorerMetric, ScoutingReport, build_report};
use crate::session::{ComparisonError, ComparisonReport, SelectionHandoff, build_comparison};

const LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Scouting,
    Comparison,
}

/// Control of the scouting sidebar that receives Left/Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Team,
    Category,
    Position,
    Range(RangeField),
    Players,
}

impl Focus {
    const ORDER: [Focus; 9] = [
        Focus::Team,
        Focus::Category,
        Focus::Position,
        Focus::Range(RangeField::Age),
        Focus::Range(RangeField::Height),
        Focus::Range(RangeField::Rating),
        Focus::Range(RangeField::Appearances),
        Focus::Range(RangeField::Goals),
        Focus::Players,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Which end of a range slider moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEdge {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoutingTab {
    Impact,
    Scorers,
    Contextual,
    Defensive,
}

impl ScoutingTab {
    pub fn next(self) -> Self {
        match self {
            ScoutingTab::Impact => ScoutingTab::Scorers,
            ScoutingTab::Scorers => ScoutingTab::Contextual,
            ScoutingTab::Contextual => ScoutingTab::Defensive,
            ScoutingTab::Defensive => ScoutingTab::Impact,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoutingTab::Impact => "Impacto Total",
            ScoutingTab::Scorers => "Goleadores",
            ScoutingTab::Contextual => "RC",
            ScoutingTab::Defensive => "IDR",
        }
    }
}

/// Controls and report derived from the current filter state.
#[derive(Debug, Clone)]
pub struct ScoutingView {
    pub team_options: Vec<String>,
    pub category_options: Vec<String>,
    pub position_options: Vec<String>,
    pub bounds: [Option<NumericRange>; 5],
    pub applied: [Option<NumericRange>; 5],
    pub filtered_names: Vec<String>,
    pub report: ScoutingReport,
}

impl ScoutingView {
    pub fn bounds_for(&self, field: RangeField) -> Option<NumericRange> {
        self.bounds[field.index()]
    }

    pub fn applied_for(&self, field: RangeField) -> Option<NumericRange> {
        self.applied[field.index()]
    }
}

pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub config: AppConfig,
    pub screen: Screen,
    pub focus: Focus,
    pub range_edge: RangeEdge,
    pub tab: ScoutingTab,
    pub filter: FilterState,
    pub scorer_metric: ScorerMetric,
    pub player_names: Vec<String>,
    pub player_cursor: usize,
    pub picked: Vec<String>,
    pub handoff: SelectionHandoff,
    pub view: ScoutingView,
    pub comparison: Result<ComparisonReport, ComparisonError>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub help_seen: bool,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: AppConfig) -> Self {
        let player_names = dataset.player_names();
        let filter = FilterState::default();
        let scorer_metric = ScorerMetric::Goals;
        let view = compute_view(&dataset, &config, &filter, scorer_metric);
        let comparison = build_comparison(&dataset.records, &[]);
        let mut state = Self {
            dataset,
            config,
            screen: Screen::Scouting,
            focus: Focus::Team,
            range_edge: RangeEdge::Min,
            tab: ScoutingTab::Impact,
            filter,
            scorer_metric,
            player_names,
            player_cursor: 0,
            picked: Vec::new(),
            handoff: SelectionHandoff::new(),
            view,
            comparison,
            logs: VecDeque::with_capacity(LOG_CAPACITY),
            help_overlay: false,
            help_seen: false,
        };
        let rows = state.dataset.len();
        state.push_log(format!("[INFO] Loaded {rows} players"));
        state
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        if self.logs.len() >= LOG_CAPACITY {
            self.logs.pop_front();
        }
        self.logs.push_back(msg.into());
    }

    /// Recompute the scouting view after any filter or metric change.
    pub fn refresh_view(&mut self) {
        self.view = compute_view(&self.dataset, &self.config, &self.filter, self.scorer_metric);
        let shown = self.view.report.summary.total_players;
        self.push_log(format!("[INFO] Filters matched {shown} players"));
        let warnings = self.view.report.warnings.clone();
        for w in warnings {
            self.push_log(format!("[WARN] {}", w.message()));
        }
    }

    pub fn refresh_comparison(&mut self) {
        self.comparison = build_comparison(&self.dataset.records, self.handoff.selected());
        let msg = match &self.comparison {
            Ok(report) => format!(
                "[INFO] Comparing {} players ({} vs {})",
                report.table.rows.len(),
                report.summary.first,
                report.summary.second
            ),
            Err(err) => format!("[WARN] {err}"),
        };
        self.push_log(msg);
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        if screen == Screen::Comparison {
            self.refresh_comparison();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn toggle_range_edge(&mut self) {
        self.range_edge = match self.range_edge {
            RangeEdge::Min => RangeEdge::Max,
            RangeEdge::Max => RangeEdge::Min,
        };
    }

    /// Left/Right on the focused control. `forward` is Right.
    pub fn adjust_focused(&mut self, forward: bool) {
        match self.focus {
            Focus::Team => {
                let options = self.view.team_options.clone();
                self.filter.team = cycle_choice(self.filter.team.as_deref(), &options, forward);
                self.on_categorical_change();
            }
            Focus::Category => {
                let options = self.view.category_options.clone();
                self.filter.category = cycle_choice(self.filter.category.as_deref(), &options, forward);
                self.on_categorical_change();
            }
            Focus::Position => {
                let options = self.view.position_options.clone();
                self.filter.position = cycle_choice(self.filter.position.as_deref(), &options, forward);
                self.on_categorical_change();
            }
            Focus::Range(field) => self.nudge_range(field, forward),
            Focus::Players => {}
        }
    }

    /// Categorical changes re-bound the numeric sliders, and a category or
    /// position that no longer exists under the new team falls back to all.
    fn on_categorical_change(&mut self) {
        self.filter.clear_ranges();
        let teams = crate::filter::filter_team(&self.dataset.records, self.filter.team.as_deref());
        let categories = crate::filter::category_options(&teams);
        if let Some(c) = &self.filter.category
            && !categories.contains(c)
        {
            self.filter.category = None;
        }
        let by_category = crate::filter::filter_category(&teams, self.filter.category.as_deref());
        let positions = crate::filter::position_options(&by_category);
        if let Some(p) = &self.filter.position
            && !positions.contains(p)
        {
            self.filter.position = None;
        }
        self.refresh_view();
    }

    fn nudge_range(&mut self, field: RangeField, forward: bool) {
        let Some(bounds) = self.view.bounds_for(field) else {
            self.push_log("[WARN] No players to bound this range");
            return;
        };
        let current = self.view.applied_for(field).unwrap_or(bounds);
        let step = if forward { field.step() } else { -field.step() };
        let next = match self.range_edge {
            RangeEdge::Min => {
                let min = (current.min + step).clamp(bounds.min, current.max);
                NumericRange::new(min, current.max)
            }
            RangeEdge::Max => {
                let max = (current.max + step).clamp(current.min, bounds.max);
                NumericRange::new(current.min, max)
            }
        };
        if next == current {
            return;
        }
        self.filter.set_range(field, next);
        self.refresh_view();
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
        self.push_log("[INFO] Filters reset");
        self.refresh_view();
    }

    pub fn toggle_scorer_metric(&mut self) {
        self.scorer_metric = self.scorer_metric.toggled();
        self.refresh_view();
    }

    pub fn select_player_next(&mut self) {
        let total = self.player_names.len();
        if total == 0 {
            self.player_cursor = 0;
            return;
        }
        self.player_cursor = (self.player_cursor + 1) % total;
    }

    pub fn select_player_prev(&mut self) {
        let total = self.player_names.len();
        if total == 0 {
            self.player_cursor = 0;
            return;
        }
        if self.player_cursor == 0 {
            self.player_cursor = total - 1;
        } else {
            self.player_cursor -= 1;
        }
    }

    /// Add or remove the player under the cursor and publish the selection.
    pub fn toggle_pick(&mut self) {
        let Some(name) = self.player_names.get(self.player_cursor).cloned() else {
            return;
        };
        if let Some(idx) = self.picked.iter().position(|n| *n == name) {
            self.picked.remove(idx);
        } else {
            self.picked.push(name);
        }
        let picked = self.picked.clone();
        if self.handoff.publish(&picked) {
            self.push_log(format!("[INFO] Comparison selection: {}", picked.join(", ")));
            self.refresh_comparison();
        }
    }

    pub fn is_picked(&self, name: &str) -> bool {
        self.picked.iter().any(|n| n == name)
    }
}

fn compute_view(dataset: &Dataset, config: &AppConfig, filter: &FilterState, metric: ScorerMetric) -> ScoutingView {
    let outcome = FilterPipeline::run(&dataset.records, filter);
    let report_cfg = ReportConfig {
        young_age: config.young_age,
        participation_ratio: config.participation_ratio,
        scorer_metric: metric,
    };
    let report = build_report(&dataset.records, &outcome.rows, &report_cfg);
    ScoutingView {
        filtered_names: outcome.rows.iter().map(|r| r.name.clone()).collect(),
        team_options: outcome.team_options,
        category_options: outcome.category_options,
        position_options: outcome.position_options,
        bounds: outcome.bounds,
        applied: outcome.applied,
        report,
    }
}

/// Step through `[sentinel, options...]`, where `None` is the sentinel.
pub fn cycle_choice(current: Option<&str>, options: &[String], forward: bool) -> Option<String> {
    let len = options.len() + 1;
    let idx = current
        .and_then(|c| options.iter().position(|o| o == c))
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
    if next == 0 {
        None
    } else {
        options.get(next - 1).cloned()
    }
}
