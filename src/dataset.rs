use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One player-season row of the scouting CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Equipo")]
    pub team: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "Posicion")]
    pub position: String,
    #[serde(rename = "Edad")]
    pub age: f64,
    #[serde(rename = "Altura")]
    pub height: f64,
    #[serde(rename = "ELO")]
    pub rating: f64,
    #[serde(rename = "Partidos_jugados")]
    pub appearances: f64,
    #[serde(rename = "Goles")]
    pub goals: f64,
    #[serde(rename = "Goles_por_partido")]
    pub goals_per_match: f64,
    #[serde(rename = "Partidos_titular")]
    pub starts: f64,
    #[serde(rename = "Tarjetas_amarillas")]
    pub yellow_cards: f64,
    #[serde(rename = "Aporte_Goles")]
    pub goals_contribution: f64,
    #[serde(rename = "Aporte_Puntos")]
    pub points_contribution: f64,
    #[serde(rename = "RC")]
    pub contextual_performance: f64,
    #[serde(rename = "IDR")]
    pub defensive_performance: f64,
    #[serde(rename = "Impacto_Total")]
    pub total_impact: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub source: Option<PathBuf>,
    pub records: Vec<PlayerRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        Self {
            source: None,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Distinct player names, sorted. Feeds the comparison picker.
    pub fn player_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.iter().map(|r| r.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

pub fn parse_players_csv<R: Read>(reader: R) -> Result<Vec<PlayerRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut out = Vec::new();
    for (idx, row) in rdr.deserialize::<PlayerRecord>().enumerate() {
        // Header is line 1, so data row `idx` sits on line idx + 2.
        let record = row.with_context(|| format!("parse player row at line {}", idx + 2))?;
        out.push(record);
    }
    Ok(out)
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path)
        .with_context(|| format!("open scouting dataset {}", path.display()))?;
    let records = parse_players_csv(file)
        .with_context(|| format!("read scouting dataset {}", path.display()))?;
    if records.is_empty() {
        return Err(anyhow!("scouting dataset {} has no rows", path.display()));
    }
    Ok(Dataset {
        source: Some(path.to_path_buf()),
        records,
    })
}

static DATASETS: Lazy<Mutex<HashMap<PathBuf, Arc<Dataset>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Load-once, read-many access to a dataset file.
///
/// Entries are keyed by the canonical path and are never invalidated: a file
/// edited on disk after its first load is not observed until the process
/// restarts. Load errors are not cached, so a later call retries.
pub fn cached_dataset(path: &Path) -> Result<Arc<Dataset>> {
    let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    {
        let guard = DATASETS
            .lock()
            .map_err(|_| anyhow!("dataset cache lock poisoned"))?;
        if let Some(hit) = guard.get(&key) {
            return Ok(Arc::clone(hit));
        }
    }

    let loaded = Arc::new(load_dataset(path)?);
    let mut guard = DATASETS
        .lock()
        .map_err(|_| anyhow!("dataset cache lock poisoned"))?;
    let entry = guard.entry(key).or_insert(loaded);
    Ok(Arc::clone(entry))
}
