use std::env;
use std::path::PathBuf;

pub const APP_DIR: &str = "scouting_madrid";
pub const DEFAULT_DATA_PATH: &str = "data/Madrid_futbol_2025.csv";
pub const DEFAULT_YOUNG_AGE: f64 = 23.0;
pub const DEFAULT_PARTICIPATION_RATIO: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub export_dir: PathBuf,
    /// Players at or under this age fall in the young group.
    pub young_age: f64,
    /// Share of the dataset's max appearances a regular must exceed.
    pub participation_ratio: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            export_dir: default_export_dir(),
            young_age: DEFAULT_YOUNG_AGE,
            participation_ratio: DEFAULT_PARTICIPATION_RATIO,
        }
    }
}

impl AppConfig {
    /// Read `SCOUTING_*` variables. Call after `dotenvy` has loaded `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(path) = non_empty(lookup("SCOUTING_DATA_PATH")) {
            cfg.data_path = PathBuf::from(path);
        }
        if let Some(dir) = non_empty(lookup("SCOUTING_EXPORT_DIR")) {
            cfg.export_dir = PathBuf::from(dir);
        }
        if let Some(age) = non_empty(lookup("SCOUTING_YOUNG_AGE")).and_then(|v| v.parse::<f64>().ok())
            && age.is_finite()
        {
            cfg.young_age = age;
        }
        if let Some(ratio) = non_empty(lookup("SCOUTING_PARTICIPATION_RATIO"))
            .and_then(|v| v.parse::<f64>().ok())
            && ratio.is_finite()
        {
            cfg.participation_ratio = ratio.clamp(0.0, 1.0);
        }
        cfg
    }

    /// Apply `--data <path>` / `--data=<path>` from the command line.
    pub fn with_args(mut self, args: &[String]) -> Self {
        if let Some(path) = parse_path_arg(args, "--data") {
            self.data_path = path;
        }
        if let Some(path) = parse_path_arg(args, "--export-dir") {
            self.export_dir = path;
        }
        self
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Value of `--flag value` or `--flag=value`.
pub fn parse_flag_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(next.trim().to_string());
            }
        }
    }
    None
}

pub fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    parse_flag_value(args, flag).map(PathBuf::from)
}

pub fn app_cache_dir() -> Option<PathBuf> {
    if let Ok(base) = env::var("XDG_CACHE_HOME")
        && !base.trim().is_empty()
    {
        return Some(PathBuf::from(base).join(APP_DIR));
    }
    let home = env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(home).join(".cache").join(APP_DIR))
}

fn default_export_dir() -> PathBuf {
    app_cache_dir()
        .map(|dir| dir.join("exports"))
        .unwrap_or_else(|| PathBuf::from("."))
}
