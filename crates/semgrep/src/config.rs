//! Rule config catalog.
//!
//! A config directory holds Semgrep rule files (`*.yml` / `*.yaml`), each with
//! a top-level `rules:` list. Only the rule summary (`id`, `message`,
//! `languages`, `severity`) is read; pattern bodies are left to Semgrep.
//! The directory is read fresh on every call.

use crate::error::{SemgrepError, SemgrepResult};
use crate::types::{Config, RuleFile};
use std::fs;
use std::path::Path;
use tracing::debug;

const CONFIG_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Read every rule config in `dir`, sorted by file name.
///
/// Subdirectories and files with other extensions are skipped. The first
/// unreadable or malformed file aborts the whole read.
pub fn read_configs(dir: impl AsRef<Path>) -> SemgrepResult<Vec<Config>> {
    let dir = dir.as_ref();
    let read_dir_err = |source| SemgrepError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        if entry.file_type().map_err(read_dir_err)?.is_dir() {
            continue;
        }
        let path = entry.path();
        if !is_config_file(&path) {
            continue;
        }
        entries.push(path);
    }
    entries.sort();

    let mut configs = Vec::with_capacity(entries.len());
    for path in entries {
        configs.push(read_config_file(&path)?);
    }
    debug!("Read {} configs from {}", configs.len(), dir.display());
    Ok(configs)
}

/// Read one rule config file. The config is named after the file name.
pub fn read_config_file(path: impl AsRef<Path>) -> SemgrepResult<Config> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let contents = fs::read_to_string(path).map_err(|source| SemgrepError::ConfigRead {
        name: name.clone(),
        source,
    })?;

    // An empty YAML document carries no rules.
    let file: RuleFile = if contents.trim().is_empty() {
        RuleFile::default()
    } else {
        serde_yaml::from_str(&contents).map_err(|source| SemgrepError::ConfigParse {
            name: name.clone(),
            source,
        })?
    };

    Ok(Config {
        name,
        rules: file.rules,
    })
}

fn is_config_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext))
}
