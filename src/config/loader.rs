//! Configuration loading
//!
//! The file format follows the extension: `.yml`/`.yaml` is YAML, `.toml` is
//! TOML, anything else is read as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserializer;

use crate::error::{QtacError, QtacResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> QtacResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (config, unknown_paths) = parse_str(&content, ConfigFormat::from_path(path))
        .map_err(|message| QtacError::InvalidConfig {
            file: path.to_path_buf(),
            message,
        })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Parse config text, returning the paths of keys that were ignored.
pub fn parse_str(content: &str, format: ConfigFormat) -> Result<(Config, Vec<String>), String> {
    let mut unknown = Vec::new();
    let config = match format {
        ConfigFormat::Json => {
            let mut de = serde_json::Deserializer::from_str(content);
            let config = collect_unknown(&mut de, &mut unknown).map_err(|e| e.to_string())?;
            de.end().map_err(|e| e.to_string())?;
            config
        }
        ConfigFormat::Yaml => {
            let de = serde_yaml_ng::Deserializer::from_str(content);
            collect_unknown(de, &mut unknown).map_err(|e| e.to_string())?
        }
        ConfigFormat::Toml => {
            let de = toml::de::Deserializer::new(content);
            collect_unknown(de, &mut unknown).map_err(|e| e.to_string())?
        }
    };
    Ok((config, unknown))
}

fn collect_unknown<'de, D>(deserializer: D, unknown: &mut Vec<String>) -> Result<Config, D::Error>
where
    D: Deserializer<'de>,
{
    serde_ignored::deserialize(deserializer, |p| unknown.push(p.to_string()))
}

/// Apply environment variable overrides (QTAC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(val) = get_env("QTAC_FORCE") {
        config.force = parse_flag(&val);
    }

    if let Some(val) = get_env("QTAC_INIT_PACKAGE") {
        config.init_package = parse_flag(&val);
    }

    if let Some(val) = get_env("QTAC_UIC").filter(|v| !v.trim().is_empty()) {
        config.uic = val;
    }

    if let Some(val) = get_env("QTAC_RCC").filter(|v| !v.trim().is_empty()) {
        config.rcc = val;
    }

    if let Some(val) = get_env("QTAC_UIC_OPTIONS") {
        config.uic_options = val;
    }

    if let Some(val) = get_env("QTAC_RCC_OPTIONS") {
        config.rcc_options = val;
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(
        val.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "rcc",
        "rcc_options",
        "uic",
        "uic_options",
        "force",
        "ioPaths",
        "io_paths",
        "variables",
        "init_package",
        "missing_dependency",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
