use anyhow::{Result, anyhow};

use scouting_madrid::config::{AppConfig, parse_flag_value};
use scouting_madrid::dataset::cached_dataset;
use scouting_madrid::filter::{ALL_OPTIONS, ALL_TEAMS, FilterPipeline, FilterState, choice_label};
use scouting_madrid::rankings::{RankedRow, ReportConfig, ScorerMetric, ScatterPoint, build_report, format_value};
use scouting_madrid::session::build_comparison;

fn parse_scorer_metric(raw: Option<String>) -> Result<ScorerMetric> {
    match raw.as_deref() {
        None | Some("goals") => Ok(ScorerMetric::Goals),
        Some("per-match") => Ok(ScorerMetric::GoalsPerMatch),
        Some(other) => Err(anyhow!("unknown --scorers value {other:?} (expected goals|per-match)")),
    }
}

fn print_table(title: &str, value_label: &str, rows: &[RankedRow]) {
    println!("\n{title}");
    println!("  {:<28} {:>5} {:>7} {:>9}  {:<24} {:>10}", "Nombre", "Edad", "Altura", "Partidos", "Equipo", value_label);
    for r in rows {
        println!(
            "  {:<28} {:>5} {:>7} {:>9}  {:<24} {:>10}",
            r.name,
            format_value(r.age),
            format_value(r.height),
            format_value(r.appearances),
            r.team,
            format_value(r.value)
        );
    }
}

fn print_scatter_extent(title: &str, points: &[ScatterPoint]) {
    let best = points
        .iter()
        .max_by(|a, b| a.value.total_cmp(&b.value));
    match best {
        Some(p) => println!("\n{title}: {} puntos, máximo {} ({})", points.len(), format_value(p.value), p.name),
        None => println!("\n{title}: sin puntos"),
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env().with_args(&args);
    let dataset = cached_dataset(&config.data_path)?;

    let mut filter = FilterState::default();
    if let Some(team) = parse_flag_value(&args, "--team") {
        filter = filter.with_team(team);
    }
    if let Some(category) = parse_flag_value(&args, "--category") {
        filter = filter.with_category(category);
    }
    if let Some(position) = parse_flag_value(&args, "--position") {
        filter = filter.with_position(position);
    }
    let scorer_metric = parse_scorer_metric(parse_flag_value(&args, "--scorers"))?;

    let outcome = FilterPipeline::run(&dataset.records, &filter);
    let report_cfg = ReportConfig {
        young_age: config.young_age,
        participation_ratio: config.participation_ratio,
        scorer_metric,
    };
    let report = build_report(&dataset.records, &outcome.rows, &report_cfg);

    println!(
        "Scouting Madrid | Equipo: {} | Categoría: {} | Posición: {}",
        choice_label(filter.team.as_deref(), ALL_TEAMS),
        choice_label(filter.category.as_deref(), ALL_OPTIONS),
        choice_label(filter.position.as_deref(), ALL_OPTIONS)
    );
    let s = &report.summary;
    println!(
        "Total Jugadores: {} | Promedio Goles: {:.2} | Promedio Altura (cm): {:.1} | Promedio Edad: {:.1}",
        s.total_players, s.avg_goals, s.avg_height, s.avg_age
    );
    println!(
        "Participación mínima: más de {} de {} partidos",
        format_value(report.participation_threshold),
        format_value(report.max_appearances)
    );

    if report.has_players() {
        print_scatter_extent("Impacto Total", &report.impact_scatter);
    }
    if let Some(regulars) = &report.regulars {
        print_table("Top 5 según Impacto Total", "Impacto", &regulars.top_impact);
        print_table(
            &format!("Top goleadores por {}", regulars.scorer_metric.label()),
            regulars.scorer_metric.label(),
            &regulars.top_scorers,
        );
        print_table("Top 5 según Aporte_Goles", "Aporte", &regulars.top_goals_contribution);
        print_scatter_extent("Rendimiento Contextual (RC)", &regulars.rc_scatter);
        print_table("Top 5 según RC", "RC", &regulars.top_rc);
        if let Some(defenders) = &regulars.defenders {
            print_scatter_extent("IDR", &defenders.idr_scatter);
            print_table("Top 5 Defensas según IDR", "IDR", &defenders.top_idr);
        }
    }
    for w in &report.warnings {
        println!("\n[WARN] {}", w.message());
    }

    let Some(raw) = parse_flag_value(&args, "--compare") else {
        return Ok(());
    };
    let selection: Vec<String> = raw
        .split(',')
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();

    println!("\nComparativa: {}", selection.join(", "));
    match build_comparison(&dataset.records, &selection) {
        Err(err) => println!("[WARN] {err}"),
        Ok(comparison) => {
            let c = &comparison.summary;
            println!("  {:<22} {:>12} {:>12}  Mejor", "Métrica", c.first, c.second);
            for v in &c.verdicts {
                println!(
                    "  {:<22} {:>12.1} {:>12.1}  {}",
                    v.metric.label(),
                    v.first,
                    v.second,
                    c.winner_label(v.winner)
                );
            }
            match c.share {
                Some(share) => {
                    println!("{} ganó en {} métricas ({:.1}%)", c.first, c.first_wins, share.first_pct);
                    println!("{} ganó en {} métricas ({:.1}%)", c.second, c.second_wins, share.second_pct);
                    println!("Empates en {} métricas", c.ties);
                }
                None => println!("No hay métricas para comparar o todas están empatadas."),
            }
        }
    }
    Ok(())
}
