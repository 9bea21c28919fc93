use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::app_cache_dir;
use crate::rankings::ScorerMetric;
use crate::state::AppState;

const PREFS_FILE: &str = "ui_prefs.json";
const PREFS_VERSION: u32 = 1;

/// Display preferences carried between runs. Computed results are never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PrefsFile {
    version: u32,
    scorer_metric: ScorerMetric,
    #[serde(default)]
    help_seen: bool,
}

pub fn load_into_state(state: &mut AppState) {
    let Some(path) = prefs_path() else {
        return;
    };
    let Some(prefs) = load_prefs_file(&path) else {
        return;
    };
    state.scorer_metric = prefs.scorer_metric;
    state.help_seen = prefs.help_seen;
}

/// Write the current preferences. Without a cache dir there is nowhere to
/// write and this is a no-op.
pub fn save_from_state(state: &AppState) -> Result<()> {
    let Some(path) = prefs_path() else {
        return Ok(());
    };
    save_prefs_file(
        &path,
        &PrefsFile {
            version: PREFS_VERSION,
            scorer_metric: state.scorer_metric,
            help_seen: state.help_seen,
        },
    )
}

fn load_prefs_file(path: &Path) -> Option<PrefsFile> {
    let raw = fs::read_to_string(path).ok()?;
    let prefs = serde_json::from_str::<PrefsFile>(&raw).ok()?;
    (prefs.version == PREFS_VERSION).then_some(prefs)
}

fn save_prefs_file(path: &Path, prefs: &PrefsFile) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create prefs dir {}", dir.display()))?;
    }
    let json = serde_json::to_string(prefs).context("encode prefs")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

fn prefs_path() -> Option<PathBuf> {
    app_cache_dir().map(|dir| dir.join(PREFS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefs_round_trip_through_disk() {
        let dir = std::env::temp_dir().join(format!("scouting_prefs_{}", std::process::id()));
        let path = dir.join(PREFS_FILE);
        let prefs = PrefsFile {
            version: PREFS_VERSION,
            scorer_metric: ScorerMetric::GoalsPerMatch,
            help_seen: true,
        };
        save_prefs_file(&path, &prefs).expect("prefs saved");
        assert_eq!(load_prefs_file(&path), Some(prefs));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn other_version_is_ignored() {
        let dir = std::env::temp_dir().join(format!("scouting_prefs_v_{}", std::process::id()));
        let _ = fs::create_dir_all(&dir);
        let path = dir.join(PREFS_FILE);
        fs::write(&path, r#"{"version":99,"scorer_metric":"Goals"}"#).unwrap();
        assert_eq!(load_prefs_file(&path), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unwritable_dir_is_an_error() {
        let blocker = std::env::temp_dir().join(format!("scouting_prefs_file_{}", std::process::id()));
        fs::write(&blocker, "not a dir").unwrap();
        let prefs = PrefsFile {
            version: PREFS_VERSION,
            scorer_metric: ScorerMetric::Goals,
            help_seen: false,
        };
        let err = save_prefs_file(&blocker.join(PREFS_FILE), &prefs).unwrap_err();
        assert!(format!("{err:#}").contains("create prefs dir"));
        let _ = fs::remove_file(&blocker);
    }
}
