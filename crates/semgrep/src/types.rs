//! Type definitions for Semgrep JSON output and rule configurations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Root of the document printed by `semgrep scan --json`.
///
/// Newer Semgrep versions emit more top-level keys (`skipped_rules`,
/// `interfile_languages_used`, ...); those are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanOutput {
    #[serde(default)]
    pub errors: Vec<OutputError>,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub results: Vec<Finding>,
    #[serde(default)]
    pub version: String,
}

/// Files Semgrep looked at during a scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paths {
    #[serde(rename = "_comment", default)]
    pub comment: String,
    #[serde(default)]
    pub scanned: Vec<String>,
}

/// An error reported by Semgrep itself (rule parse failure, target parse failure, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub level: String,
    /// Untyped: Semgrep emits either a string or a tagged array here.
    #[serde(rename = "type", default)]
    pub kind: serde_json::Value,
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] code {}", self.level, self.code)?;
        match &self.kind {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => write!(f, " {}", s)?,
            other => write!(f, " {}", other)?,
        }
        write!(f, ": {}", self.message.trim())
    }
}

/// A point in a source file. Line and column are 1-based, offset is a 0-based byte index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub col: usize,
    pub line: usize,
    pub offset: usize,
}

/// A single match reported by Semgrep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub check_id: String,
    pub path: String,
    pub start: Position,
    pub end: Position,
    #[serde(default)]
    pub extra: Extra,
}

/// Per-finding payload under `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    #[serde(default)]
    pub engine_kind: String,
    #[serde(default)]
    pub fingerprint: String,
    #[serde(default)]
    pub is_ignored: bool,
    #[serde(default)]
    pub lines: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub severity: String,
}

/// Summary of one rule in a config file. The pattern body is not modelled.
///
/// Read from YAML with lowercase keys, written to tool output as
/// `ID`/`Message`/`Languages`/`Severity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    #[serde(rename(serialize = "ID", deserialize = "id"))]
    pub id: String,
    #[serde(rename(serialize = "Message", deserialize = "message"))]
    pub message: String,
    #[serde(rename(serialize = "Languages", deserialize = "languages"))]
    pub languages: Vec<String>,
    #[serde(rename(serialize = "Severity", deserialize = "severity"))]
    pub severity: String,
}

/// A config file and the rules it defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rules")]
    pub rules: Vec<Rule>,
}

/// On-disk layout of a rule config file.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RuleFile {
    #[serde(default)]
    pub rules: Vec<Rule>,
}
