use std::collections::BTreeSet;

use crate::dataset::PlayerRecord;

/// Sentinel shown for an unconstrained team picker.
pub const ALL_TEAMS: &str = "Todos";
/// Sentinel shown for unconstrained category / position pickers.
pub const ALL_OPTIONS: &str = "Todas";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeField {
    Age,
    Height,
    Rating,
    Appearances,
    Goals,
}

impl RangeField {
    /// Presentation order of the range controls.
    pub const ALL: [RangeField; 5] = [
        RangeField::Age,
        RangeField::Height,
        RangeField::Rating,
        RangeField::Appearances,
        RangeField::Goals,
    ];

    pub fn index(self) -> usize {
        match self {
            RangeField::Age => 0,
            RangeField::Height => 1,
            RangeField::Rating => 2,
            RangeField::Appearances => 3,
            RangeField::Goals => 4,
        }
    }

    pub fn value(self, record: &PlayerRecord) -> f64 {
        match self {
            RangeField::Age => record.age,
            RangeField::Height => record.height,
            RangeField::Rating => record.rating,
            RangeField::Appearances => record.appearances,
            RangeField::Goals => record.goals,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RangeField::Age => "Edad",
            RangeField::Height => "Altura (cm)",
            RangeField::Rating => "ELO",
            RangeField::Appearances => "Partidos Jugados",
            RangeField::Goals => "Goles",
        }
    }

    /// Step used by the terminal slider for this field.
    pub fn step(self) -> f64 {
        match self {
            RangeField::Rating => 10.0,
            _ => 1.0,
        }
    }
}

/// Inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Intersect with the observed bounds. A range left over from a wider
    /// subset shrinks to what the current subset can actually show.
    pub fn clamp_to(&self, bounds: NumericRange) -> NumericRange {
        NumericRange {
            min: self.min.max(bounds.min),
            max: self.max.min(bounds.max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Predicate parameters of the scouting view. `None` on a categorical field is
/// the "Todos"/"Todas" sentinel; `None` on a range means "observed bounds".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub team: Option<String>,
    pub category: Option<String>,
    pub position: Option<String>,
    ranges: [Option<NumericRange>; 5],
}

impl FilterState {
    pub fn range(&self, field: RangeField) -> Option<NumericRange> {
        self.ranges[field.index()]
    }

    pub fn set_range(&mut self, field: RangeField, range: NumericRange) {
        self.ranges[field.index()] = Some(range);
    }

    pub fn clear_range(&mut self, field: RangeField) {
        self.ranges[field.index()] = None;
    }

    pub fn clear_ranges(&mut self) {
        self.ranges = [None; 5];
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_range(mut self, field: RangeField, min: f64, max: f64) -> Self {
        self.set_range(field, NumericRange::new(min, max));
        self
    }
}

fn distinct_sorted<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn team_options(records: &[PlayerRecord]) -> Vec<String> {
    distinct_sorted(records.iter().map(|r| r.team.as_str()))
}

pub fn category_options(subset: &[&PlayerRecord]) -> Vec<String> {
    distinct_sorted(subset.iter().map(|r| r.category.as_str()))
}

pub fn position_options(subset: &[&PlayerRecord]) -> Vec<String> {
    distinct_sorted(subset.iter().map(|r| r.position.as_str()))
}

fn matches_choice(choice: Option<&str>, value: &str) -> bool {
    choice.is_none_or(|c| c == value)
}

pub fn filter_team<'a>(records: &'a [PlayerRecord], team: Option<&str>) -> Vec<&'a PlayerRecord> {
    records
        .iter()
        .filter(|r| matches_choice(team, &r.team))
        .collect()
}

pub fn filter_category<'a>(subset: &[&'a PlayerRecord], category: Option<&str>) -> Vec<&'a PlayerRecord> {
    subset
        .iter()
        .copied()
        .filter(|r| matches_choice(category, &r.category))
        .collect()
}

pub fn filter_position<'a>(subset: &[&'a PlayerRecord], position: Option<&str>) -> Vec<&'a PlayerRecord> {
    subset
        .iter()
        .copied()
        .filter(|r| matches_choice(position, &r.position))
        .collect()
}

/// Team AND category AND position, in source order.
pub fn apply_categorical<'a>(records: &'a [PlayerRecord], filter: &FilterState) -> Vec<&'a PlayerRecord> {
    let by_team = filter_team(records, filter.team.as_deref());
    let by_category = filter_category(&by_team, filter.category.as_deref());
    filter_position(&by_category, filter.position.as_deref())
}

/// Min/max of `field` over the subset, `None` when the subset is empty.
pub fn observed_range(subset: &[&PlayerRecord], field: RangeField) -> Option<NumericRange> {
    let mut iter = subset.iter().map(|r| field.value(r));
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some(NumericRange::new(min, max))
}

pub fn apply_ranges<'a>(
    subset: &[&'a PlayerRecord],
    ranges: &[(RangeField, NumericRange)],
) -> Vec<&'a PlayerRecord> {
    subset
        .iter()
        .copied()
        .filter(|r| ranges.iter().all(|(field, range)| range.contains(field.value(r))))
        .collect()
}

/// Everything the scouting controls need, captured stage by stage as the
/// subset narrows.
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    pub team_options: Vec<String>,
    pub category_options: Vec<String>,
    pub position_options: Vec<String>,
    /// Observed bounds of the categorical subset, per range field.
    pub bounds: [Option<NumericRange>; 5],
    /// Ranges actually applied (user choice clamped to bounds, else bounds).
    pub applied: [Option<NumericRange>; 5],
    pub rows: Vec<&'a PlayerRecord>,
}

impl FilterOutcome<'_> {
    pub fn bounds_for(&self, field: RangeField) -> Option<NumericRange> {
        self.bounds[field.index()]
    }

    pub fn applied_for(&self, field: RangeField) -> Option<NumericRange> {
        self.applied[field.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct FilterPipeline;

impl FilterPipeline {
    pub fn run<'a>(records: &'a [PlayerRecord], filter: &FilterState) -> FilterOutcome<'a> {
        let team_options = team_options(records);
        let by_team = filter_team(records, filter.team.as_deref());

        let category_options = category_options(&by_team);
        let by_category = filter_category(&by_team, filter.category.as_deref());

        let position_options = position_options(&by_category);
        let categorical = filter_position(&by_category, filter.position.as_deref());

        let mut bounds = [None; 5];
        let mut applied = [None; 5];
        let mut active = Vec::with_capacity(RangeField::ALL.len());
        for field in RangeField::ALL {
            let observed = observed_range(&categorical, field);
            bounds[field.index()] = observed;
            let Some(observed) = observed else { continue };
            let range = filter
                .range(field)
                .map(|r| r.clamp_to(observed))
                .unwrap_or(observed);
            applied[field.index()] = Some(range);
            active.push((field, range));
        }

        let rows = if categorical.is_empty() {
            Vec::new()
        } else {
            apply_ranges(&categorical, &active)
        };

        FilterOutcome {
            team_options,
            category_options,
            position_options,
            bounds,
            applied,
            rows,
        }
    }
}

pub fn apply_filters<'a>(records: &'a [PlayerRecord], filter: &FilterState) -> Vec<&'a PlayerRecord> {
    FilterPipeline::run(records, filter).rows
}

/// Label for a categorical choice, substituting the sentinel for `None`.
pub fn choice_label<'a>(choice: Option<&'a str>, sentinel: &'a str) -> &'a str {
    choice.unwrap_or(sentinel)
}
