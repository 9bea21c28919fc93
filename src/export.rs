use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::dataset::PlayerRecord;
use crate::rankings::{RankedRow, ScoutingReport, format_value};
use crate::session::ComparisonReport;

pub struct ExportReport {
    pub path: PathBuf,
    pub filtered_rows: usize,
    pub sheets: Vec<&'static str>,
}

pub fn export_file_name() -> String {
    format!("scouting_{}.xlsx", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Write the filtered players, every ranking table and, when available, the
/// comparison summary into one workbook under `dir`.
pub fn export_workbook(
    dir: &Path,
    filtered: &[&PlayerRecord],
    report: &ScoutingReport,
    comparison: Option<&ComparisonReport>,
) -> Result<ExportReport> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create export dir {}", dir.display()))?;
    let path = dir.join(export_file_name());

    let mut workbook = Workbook::new();
    let mut sheets = Vec::new();

    let filtered_rows = filtered_sheet_rows(filtered);
    write_sheet(&mut workbook, "Filtered", &filtered_rows)?;
    sheets.push("Filtered");

    if let Some(regulars) = &report.regulars {
        let tables: [(&'static str, &str, &[RankedRow]); 4] = [
            ("Top Impact", "Impacto_Total", regulars.top_impact.as_slice()),
            ("Top Scorers", regulars.scorer_metric.label(), regulars.top_scorers.as_slice()),
            ("Top Aporte Goles", "Aporte_Goles", regulars.top_goals_contribution.as_slice()),
            ("Top RC", "RC", regulars.top_rc.as_slice()),
        ];
        for (sheet, value_label, rows) in tables {
            write_sheet(&mut workbook, sheet, &ranked_rows(value_label, rows))?;
            sheets.push(sheet);
        }
        if let Some(defenders) = &regulars.defenders {
            write_sheet(&mut workbook, "Top IDR", &ranked_rows("IDR", &defenders.top_idr))?;
            sheets.push("Top IDR");
        }
    }

    if let Some(comparison) = comparison {
        write_sheet(&mut workbook, "Comparison", &comparison_rows(comparison))?;
        sheets.push("Comparison");
    }

    workbook
        .save(&path)
        .with_context(|| format!("save workbook {}", path.display()))?;

    Ok(ExportReport {
        path,
        filtered_rows: filtered.len(),
        sheets,
    })
}

fn filtered_sheet_rows(filtered: &[&PlayerRecord]) -> Vec<Vec<String>> {
    let mut rows = vec![
        [
            "Nombre",
            "Equipo",
            "categoria",
            "Posicion",
            "Edad",
            "Altura",
            "ELO",
            "Partidos_jugados",
            "Goles",
            "Goles_por_partido",
            "Impacto_Total",
            "RC",
            "IDR",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>(),
    ];
    for r in filtered {
        rows.push(vec![
            r.name.clone(),
            r.team.clone(),
            r.category.clone(),
            r.position.clone(),
            format_value(r.age),
            format_value(r.height),
            format_value(r.rating),
            format_value(r.appearances),
            format_value(r.goals),
            format_value(r.goals_per_match),
            format_value(r.total_impact),
            format_value(r.contextual_performance),
            format_value(r.defensive_performance),
        ]);
    }
    rows
}

fn ranked_rows(value_label: &str, rows: &[RankedRow]) -> Vec<Vec<String>> {
    let mut out = vec![vec![
        "Nombre".to_string(),
        "Edad".to_string(),
        "Altura".to_string(),
        "Partidos_jugados".to_string(),
        "Equipo".to_string(),
        value_label.to_string(),
    ]];
    for r in rows {
        out.push(vec![
            r.name.clone(),
            format_value(r.age),
            format_value(r.height),
            format_value(r.appearances),
            r.team.clone(),
            format_value(r.value),
        ]);
    }
    out
}

fn comparison_rows(comparison: &ComparisonReport) -> Vec<Vec<String>> {
    let s = &comparison.summary;
    let mut out = vec![vec![
        "Métrica".to_string(),
        s.first.clone(),
        s.second.clone(),
        "Mejor".to_string(),
    ]];
    for v in &s.verdicts {
        out.push(vec![
            v.metric.label().to_string(),
            format!("{:.1}", v.first),
            format!("{:.1}", v.second),
            s.winner_label(v.winner).to_string(),
        ]);
    }
    out.push(Vec::new());
    out.push(vec!["Victorias".to_string(), s.first_wins.to_string(), s.second_wins.to_string()]);
    out.push(vec!["Empates".to_string(), s.ties.to_string()]);
    if let Some(share) = s.share {
        out.push(vec![
            "% Métricas Ganadas".to_string(),
            format!("{:.1}", share.first_pct),
            format!("{:.1}", share.second_pct),
        ]);
    }
    out
}

fn write_sheet(workbook: &mut Workbook, name: &str, rows: &[Vec<String>]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet
        .set_name(name)
        .with_context(|| format!("name worksheet {name}"))?;
    write_rows(sheet, rows)
}

fn write_rows(sheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet
                .write_string(r as u32, c as u16, value)
                .context("write cell")?;
        }
    }
    Ok(())
}
