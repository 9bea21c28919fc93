use std::f64::consts::PI;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Clear, Dataset as ChartDataset,
    GraphType, Paragraph, Row, Table, Wrap,
};

use crate::compare::{PairwiseSummary, Winner};
use crate::filter::{ALL_OPTIONS, ALL_TEAMS, RangeField, choice_label};
use crate::normalize::{Metric, NormalizedTable};
use crate::rankings::{AgeGroup, RankedRow, ReportWarning, ScatterPoint, ScoutingReport, format_value};
use crate::session::ComparisonReport;
use crate::state::{AppState, Focus, RangeEdge, Screen, ScoutingTab};

const YOUNG_COLOR: Color = Color::Green;
const SENIOR_COLOR: Color = Color::Rgb(255, 165, 0);
const RADAR_GRID: Color = Color::Rgb(245, 245, 220);
const BETTER_CELL: Color = Color::LightGreen;
const SIDEBAR_WIDTH: u16 = 36;

/// Qualitative palette for radar series, one color per compared player.
const SERIES_COLORS: [Color; 8] = [
    Color::Rgb(102, 194, 165),
    Color::Rgb(252, 141, 98),
    Color::Rgb(141, 160, 203),
    Color::Rgb(231, 138, 195),
    Color::Rgb(166, 216, 84),
    Color::Rgb(255, 217, 47),
    Color::Rgb(229, 196, 148),
    Color::Rgb(179, 179, 179),
];

pub fn draw(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match state.screen {
        Screen::Scouting => render_scouting(frame, chunks[1], state),
        Screen::Comparison => render_comparison(frame, chunks[1], state),
    }

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    if state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

pub fn header_text(state: &AppState) -> String {
    let title = match state.screen {
        Screen::Scouting => format!(
            "SCOUTING MADRID | Scouting | Equipo: {} | {} jugadores | Tab: {}",
            choice_label(state.filter.team.as_deref(), ALL_TEAMS),
            state.view.report.summary.total_players,
            state.tab.label()
        ),
        Screen::Comparison => format!(
            "SCOUTING MADRID | Comparativa | {} seleccionados",
            state.handoff.selected().len()
        ),
    };
    format!("  .-.  {title}\n (   )\n  '-'")
}

pub fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Scouting => {
            "1 Scouting | 2 Comparativa | Tab/⇧Tab Focus | ←/→ Change | m Min/Max | j/k Players | Space Pick | t Section | g Metric | r Reset | e Export | ? Help | q Quit".to_string()
        }
        Screen::Comparison => "1 Scouting | 2 Comparativa | e Export | ? Help | q Quit".to_string(),
    }
}

fn render_scouting(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(30)])
        .split(area);

    render_sidebar(frame, columns[0], state);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(columns[1]);

    let report = &state.view.report;
    frame.render_widget(
        Paragraph::new(summary_text(report)).block(Block::default().title("Resumen").borders(Borders::ALL)),
        main[0],
    );

    if !report.has_players() {
        render_warning(frame, main[1], ReportWarning::NoPlayers.message());
        return;
    }

    match state.tab {
        ScoutingTab::Impact => render_impact_tab(frame, main[1], report),
        ScoutingTab::Scorers => render_scorers_tab(frame, main[1], report),
        ScoutingTab::Contextual => render_contextual_tab(frame, main[1], report),
        ScoutingTab::Defensive => render_defensive_tab(frame, main[1], report),
    }
}

pub fn summary_text(report: &ScoutingReport) -> String {
    let s = &report.summary;
    format!(
        "Total Jugadores: {} | Promedio Goles: {:.2} | Promedio Altura (cm): {:.1} | Promedio Edad: {:.1}",
        s.total_players, s.avg_goals, s.avg_height, s.avg_age
    )
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(3)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    let choices = [
        (Focus::Team, "Equipo", choice_label(state.filter.team.as_deref(), ALL_TEAMS)),
        (Focus::Category, "Categoría", choice_label(state.filter.category.as_deref(), ALL_OPTIONS)),
        (Focus::Position, "Posición", choice_label(state.filter.position.as_deref(), ALL_OPTIONS)),
    ];
    for (focus, label, value) in choices {
        lines.push(control_line(state.focus == focus, format!("{label}: ‹ {value} ›")));
    }
    for field in RangeField::ALL {
        lines.push(control_line(state.focus == Focus::Range(field), range_text(state, field)));
    }
    let filters = Paragraph::new(lines).block(Block::default().title("Filtros").borders(Borders::ALL));
    frame.render_widget(filters, sections[0]);

    render_player_picker(frame, sections[1], state);
}

fn control_line(focused: bool, text: String) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(Span::styled(text, style))
}

pub fn range_text(state: &AppState, field: RangeField) -> String {
    let (Some(bounds), Some(applied)) = (state.view.bounds_for(field), state.view.applied_for(field)) else {
        return format!("{}: sin datos", field.label());
    };
    let focused = state.focus == Focus::Range(field);
    let (min, max) = (format_value(applied.min), format_value(applied.max));
    let (min, max) = match (focused, state.range_edge) {
        (true, RangeEdge::Min) => (format!("[{min}]"), max),
        (true, RangeEdge::Max) => (min, format!("[{max}]")),
        (false, _) => (min, max),
    };
    format!(
        "{}: {min}–{max} ({}–{})",
        field.label(),
        format_value(bounds.min),
        format_value(bounds.max)
    )
}

fn render_player_picker(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = format!("Comparativa ({} elegidos)", state.picked.len());
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let visible = inner.height as usize;
    let (start, end) = visible_range(state.player_cursor, state.player_names.len(), visible);
    let focused = state.focus == Focus::Players;
    let lines: Vec<Line> = (start..end)
        .map(|idx| {
            let name = &state.player_names[idx];
            let mark = if state.is_picked(name) { "[x]" } else { "[ ]" };
            let style = if focused && idx == state.player_cursor {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{mark} {name}"), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn split_chart_table(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area)
}

fn render_warning(frame: &mut Frame, area: Rect, text: &str) {
    let warning = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(warning, area);
}

fn participation_note(report: &ScoutingReport) -> String {
    format!(
        "Jugadores con más de {} de los {} partidos posibles",
        format_value(report.participation_threshold),
        format_value(report.max_appearances)
    )
}

fn render_impact_tab(frame: &mut Frame, area: Rect, report: &ScoutingReport) {
    let parts = split_chart_table(area);
    render_scatter(frame, parts[0], "Gráfico de Impacto Total", "Impacto_Total", &report.impact_scatter, report.young_age);
    match &report.regulars {
        Some(regulars) => {
            let title = format!("Top 5 según Impacto Total | {}", participation_note(report));
            render_ranked_table(frame, parts[1], &title, "Impacto_Total", &regulars.top_impact);
        }
        None => render_warning(frame, parts[1], ReportWarning::NoRegulars.message()),
    }
}

fn render_scorers_tab(frame: &mut Frame, area: Rect, report: &ScoutingReport) {
    let Some(regulars) = &report.regulars else {
        render_warning(frame, area, ReportWarning::NoRegulars.message());
        return;
    };
    let parts = split_chart_table(area);
    let title = format!("Top goleadores por {} (g cambia métrica)", regulars.scorer_metric.label());
    render_scorer_bars(frame, parts[0], &title, &regulars.top_scorers, report.young_age);
    render_ranked_table(
        frame,
        parts[1],
        "Top 5 Jugadores según Aporte_Goles",
        "Aporte_Goles",
        &regulars.top_goals_contribution,
    );
}

fn render_contextual_tab(frame: &mut Frame, area: Rect, report: &ScoutingReport) {
    let Some(regulars) = &report.regulars else {
        render_warning(frame, area, ReportWarning::NoRegulars.message());
        return;
    };
    let parts = split_chart_table(area);
    render_scatter(frame, parts[0], "Rendimiento Contextual (RC)", "RC", &regulars.rc_scatter, report.young_age);
    let title = format!("Top 5 según RC | {}", participation_note(report));
    render_ranked_table(frame, parts[1], &title, "RC", &regulars.top_rc);
}

fn render_defensive_tab(frame: &mut Frame, area: Rect, report: &ScoutingReport) {
    let Some(regulars) = &report.regulars else {
        render_warning(frame, area, ReportWarning::NoRegulars.message());
        return;
    };
    let Some(defenders) = &regulars.defenders else {
        render_warning(frame, area, ReportWarning::NoDefenders.message());
        return;
    };
    let parts = split_chart_table(area);
    render_scatter(
        frame,
        parts[0],
        "Índice de Desempeño Defensivo (IDR)",
        "IDR",
        &defenders.idr_scatter,
        report.young_age,
    );
    let title = format!("Top 5 Defensas según IDR | {}", participation_note(report));
    render_ranked_table(frame, parts[1], &title, "IDR", &defenders.top_idr);
}

/// Axis bounds with a little headroom; a flat series still gets a visible span.
pub fn padded_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    if lo == hi {
        return [lo - 1.0, hi + 1.0];
    }
    let pad = (hi - lo) * 0.05;
    [lo - pad, hi + pad]
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::raw(format!("{v:.0}")))
        .collect()
}

fn render_scatter(frame: &mut Frame, area: Rect, title: &str, y_label: &str, points: &[ScatterPoint], young_age: f64) {
    let young: Vec<(f64, f64)> = points
        .iter()
        .filter(|p| p.group == AgeGroup::Young)
        .map(|p| (p.age, p.value))
        .collect();
    let senior: Vec<(f64, f64)> = points
        .iter()
        .filter(|p| p.group == AgeGroup::Senior)
        .map(|p| (p.age, p.value))
        .collect();

    let x_bounds = padded_bounds(points.iter().map(|p| p.age));
    let y_bounds = padded_bounds(points.iter().map(|p| p.value));

    let datasets = vec![
        ChartDataset::default()
            .name(AgeGroup::Young.label(young_age))
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(YOUNG_COLOR))
            .data(&young),
        ChartDataset::default()
            .name(AgeGroup::Senior.label(young_age))
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(SENIOR_COLOR))
            .data(&senior),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Edad")
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(y_label.to_string())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );
    frame.render_widget(chart, area);
}

fn group_color(group: AgeGroup) -> Color {
    match group {
        AgeGroup::Young => YOUNG_COLOR,
        AgeGroup::Senior => SENIOR_COLOR,
    }
}

fn render_scorer_bars(frame: &mut Frame, area: Rect, title: &str, rows: &[RankedRow], young_age: f64) {
    // Bar values are integers; scale so per-match ratios keep their ordering.
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            Bar::default()
                .value((r.value * 100.0).round().max(0.0) as u64)
                .text_value(format_value(r.value))
                .label(Line::from(r.name.clone()))
                .style(Style::default().fg(group_color(r.group)))
        })
        .collect();

    let legend = format!(
        "{title} | verde: {} | naranja: {}",
        AgeGroup::Young.label(young_age),
        AgeGroup::Senior.label(young_age)
    );
    let chart = BarChart::default()
        .block(Block::default().title(legend).borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0);
    frame.render_widget(chart, area);
}

fn render_ranked_table(frame: &mut Frame, area: Rect, title: &str, value_label: &str, rows: &[RankedRow]) {
    let header = Row::new(vec![
        Cell::from("Nombre"),
        Cell::from("Edad"),
        Cell::from("Altura"),
        Cell::from("Partidos"),
        Cell::from("Equipo"),
        Cell::from(value_label.to_string()),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let body: Vec<Row> = rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.name.clone()),
                Cell::from(format_value(r.age)),
                Cell::from(format_value(r.height)),
                Cell::from(format_value(r.appearances)),
                Cell::from(r.team.clone()),
                Cell::from(format_value(r.value)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Length(5),
        Constraint::Length(7),
        Constraint::Length(9),
        Constraint::Min(14),
        Constraint::Length(14),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn render_comparison(frame: &mut Frame, area: Rect, state: &AppState) {
    let report = match &state.comparison {
        Ok(report) => report,
        Err(err) => {
            render_warning(frame, area, &err.to_string());
            return;
        }
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_radar(frame, columns[0], &report.table);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Length(5), Constraint::Min(3)])
        .split(columns[1]);
    render_summary_table(frame, right[0], &report.summary);
    frame.render_widget(
        Paragraph::new(result_text(&report.summary))
            .block(Block::default().title("Resultado general de comparación").borders(Borders::ALL)),
        right[1],
    );
    render_share_bars(frame, right[2], report);
}

/// Unit-circle point for `value` (0-100) on axis `idx` of `n`, first axis up.
pub fn radar_point(idx: usize, n: usize, value: f64) -> (f64, f64) {
    let angle = PI / 2.0 - 2.0 * PI * idx as f64 / n as f64;
    let r = value / 100.0;
    (r * angle.cos(), r * angle.sin())
}

fn render_radar(frame: &mut Frame, area: Rect, table: &NormalizedTable) {
    let n = Metric::ALL.len();
    let series: Vec<(Color, Vec<(f64, f64)>)> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let pts = Metric::ALL
                .iter()
                .enumerate()
                .map(|(idx, m)| radar_point(idx, n, row.get(*m)))
                .collect();
            (color, pts)
        })
        .collect();

    let legend: Vec<Span> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Span::styled(
                format!("■ {}  ", row.name),
                Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]),
            )
        })
        .collect();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title("Radar de Comparación de Jugadores (Datos Estandarizados)")
                .title_bottom(Line::from(legend))
                .borders(Borders::ALL),
        )
        .background_color(Color::Rgb(50, 50, 50))
        .marker(Marker::Braille)
        .x_bounds([-1.4, 1.4])
        .y_bounds([-1.2, 1.2])
        .paint(move |ctx| {
            for ring in [25.0, 50.0, 75.0, 100.0] {
                for idx in 0..n {
                    let (x1, y1) = radar_point(idx, n, ring);
                    let (x2, y2) = radar_point((idx + 1) % n, n, ring);
                    ctx.draw(&CanvasLine { x1, y1, x2, y2, color: RADAR_GRID });
                }
            }
            for (idx, metric) in Metric::ALL.iter().enumerate() {
                let (x2, y2) = radar_point(idx, n, 100.0);
                ctx.draw(&CanvasLine { x1: 0.0, y1: 0.0, x2, y2, color: RADAR_GRID });
                let (lx, ly) = radar_point(idx, n, 112.0);
                ctx.print(lx, ly, Span::styled(metric.label(), Style::default().fg(RADAR_GRID)));
            }
            ctx.layer();
            for (color, pts) in &series {
                for idx in 0..pts.len() {
                    let (x1, y1) = pts[idx];
                    let (x2, y2) = pts[(idx + 1) % pts.len()];
                    ctx.draw(&CanvasLine { x1, y1, x2, y2, color: *color });
                }
            }
        });
    frame.render_widget(canvas, area);
}

fn render_summary_table(frame: &mut Frame, area: Rect, summary: &PairwiseSummary) {
    let header = Row::new(vec![
        Cell::from("Métrica"),
        Cell::from(summary.first.clone()),
        Cell::from(summary.second.clone()),
        Cell::from("Mejor"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let better = Style::default().fg(Color::Black).bg(BETTER_CELL);
    let body: Vec<Row> = summary
        .verdicts
        .iter()
        .map(|v| {
            let first = Cell::from(format!("{:.1}", v.first));
            let second = Cell::from(format!("{:.1}", v.second));
            let (first, second) = match v.winner {
                Winner::First => (first.style(better), second),
                Winner::Second => (first, second.style(better)),
                Winner::Tie => (first, second),
            };
            Row::new(vec![
                Cell::from(v.metric.label()),
                first,
                second,
                Cell::from(summary.winner_label(v.winner).to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(20),
        Constraint::Min(10),
        Constraint::Min(10),
        Constraint::Min(10),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().title("Resumen Comparativo").borders(Borders::ALL));
    frame.render_widget(table, area);
}

pub fn result_text(summary: &PairwiseSummary) -> String {
    if summary.share.is_none() {
        return "No hay métricas para comparar o todas están empatadas.".to_string();
    }
    format!(
        "{} ganó en {} métricas\n{} ganó en {} métricas\nEmpates en {} métricas",
        summary.first, summary.first_wins, summary.second, summary.second_wins, summary.ties
    )
}

fn render_share_bars(frame: &mut Frame, area: Rect, report: &ComparisonReport) {
    let summary = &report.summary;
    let Some(share) = summary.share else {
        return;
    };
    let bars = [
        Bar::default()
            .value(share.first_pct.round() as u64)
            .text_value(format!("{:.1}%", share.first_pct))
            .label(Line::from(summary.first.clone()))
            .style(Style::default().fg(YOUNG_COLOR)),
        Bar::default()
            .value(share.second_pct.round() as u64)
            .text_value(format!("{:.1}%", share.second_pct))
            .label(Line::from(summary.second.clone()))
            .style(Style::default().fg(SENIOR_COLOR)),
    ];
    let chart = BarChart::default()
        .block(Block::default().title("% Métricas Ganadas").borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .max(100);
    frame.render_widget(chart, area);
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    let start = state.logs.len().saturating_sub(2);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Scouting Madrid - Ayuda",
        "",
        "Global:",
        "  1            Scouting",
        "  2            Comparativa",
        "  e            Exportar a xlsx",
        "  ?            Ayuda",
        "  q            Salir",
        "",
        "Scouting:",
        "  Tab / ⇧Tab   Cambiar control",
        "  ← / →        Cambiar valor del control",
        "  m            Mover mínimo / máximo del rango",
        "  j/k o ↑/↓    Moverse por jugadores",
        "  Space        Elegir jugador para comparar",
        "  Enter / c    Abrir la comparativa",
        "  t            Cambiar sección",
        "  g            Goles / Goles por partido",
        "  r            Reiniciar filtros",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_range_centers_selection() {
        assert_eq!(visible_range(0, 0, 5), (0, 0));
        assert_eq!(visible_range(2, 3, 5), (0, 3));
        assert_eq!(visible_range(10, 20, 6), (7, 13));
        assert_eq!(visible_range(19, 20, 6), (14, 20));
    }

    #[test]
    fn radar_first_axis_points_up() {
        let (x, y) = radar_point(0, 10, 100.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
        let (x, y) = radar_point(3, 10, 0.0);
        assert_eq!((x, y), (0.0, 0.0));
    }

    #[test]
    fn flat_series_gets_span() {
        assert_eq!(padded_bounds([5.0, 5.0].into_iter()), [4.0, 6.0]);
        assert_eq!(padded_bounds(std::iter::empty()), [0.0, 1.0]);
    }
}
