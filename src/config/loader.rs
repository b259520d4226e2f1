//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MonoMetaError, MonoMetaResult};

use super::types::Config;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MONO_META_";

/// Keys accepted in configuration files
const KNOWN_KEYS: &[&str] = &["services", "cmd", "binary_name", "exclude", "local", "url"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load a configuration file and collect non-fatal warnings (unknown keys).
///
/// Files ending in `.toml` are read as TOML, anything else as JSON.
pub fn load_with_warnings(path: &Path) -> MonoMetaResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| {
        MonoMetaError::config(format!("cannot read config file {}: {}", path.display(), e))
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();

    let parsed = if is_toml(path) {
        let deserializer = toml::de::Deserializer::new(&content);
        serde_ignored::deserialize(deserializer, |p| unknown_paths.push(p.to_string()))
            .map_err(|e| e.to_string())
    } else {
        let mut deserializer = serde_json::Deserializer::from_str(&content);
        serde_ignored::deserialize(&mut deserializer, |p| unknown_paths.push(p.to_string()))
            .and_then(|config: Config| deserializer.end().map(|()| config))
            .map_err(|e| e.to_string())
    };

    let config: Config = parsed.map_err(|message| {
        MonoMetaError::config(format!("invalid config file {}: {}", path.display(), message))
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

/// Read overrides from `MONO_META_*` variables
pub fn from_env() -> Config {
    from_env_with(|key| std::env::var(key).ok())
}

/// Read overrides through `lookup`, keyed by full variable name
pub fn from_env_with<F>(lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| {
        lookup(&format!("{}{}", ENV_PREFIX, name)).filter(|v| !v.trim().is_empty())
    };

    Config {
        services: var("SERVICES"),
        cmd: var("BUILD_CMD"),
        binary_name: var("BINARY_NAME"),
        exclude: var("EXCLUDE")
            .map(|v| split_list(&v))
            .unwrap_or_default(),
        local: var("LOCAL").map(PathBuf::from),
        url: var("URL"),
    }
}

/// Resolve the layered configuration
///
/// Priority, highest first: `cli`, `env`, the file at `file`, defaults.
pub fn resolve(
    file: Option<&Path>,
    env: Config,
    cli: Config,
) -> MonoMetaResult<(Config, Vec<ConfigWarning>)> {
    let (from_file, warnings) = match file {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok((from_file.merge(env).merge(cli), warnings))
}

/// Split a comma separated list, dropping blanks
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in KNOWN_KEYS {
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
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
