//! Request/response types for MCP tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Directory scanned when the caller does not name one.
pub const DEFAULT_SCAN_DIRECTORY: &str = ".";

fn default_directory() -> Option<String> {
    Some(DEFAULT_SCAN_DIRECTORY.to_string())
}

/// Mark `config` required in the published schema. The field stays optional
/// in Rust so a call without it gets "Missing config argument" back.
fn require_config(schema: &mut schemars::Schema) {
    let Some(obj) = schema.as_object_mut() else {
        return;
    };
    let required = obj
        .entry("required")
        .or_insert_with(|| serde_json::Value::Array(Vec::new()));
    if let Some(list) = required.as_array_mut() {
        if !list.iter().any(|v| v == "config") {
            list.push(serde_json::Value::from("config"));
        }
    }
}

/// Request to run a scan.
#[derive(Debug, Deserialize, JsonSchema)]
#[schemars(transform = require_config)]
pub struct ScanRequest {
    /// Directory to scan. Defaults to ".".
    #[serde(default = "default_directory")]
    pub directory: Option<String>,
    /// Name of the configuration to use (required). Use the list_configs tool to enumerate them.
    #[serde(default)]
    pub config: Option<String>,
}

impl ScanRequest {
    pub fn directory(&self) -> &str {
        self.directory
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEFAULT_SCAN_DIRECTORY)
    }

    /// The config name, or `None` when it is missing or blank.
    pub fn config(&self) -> Option<&str> {
        self.config.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// One finding as returned by the scan tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, PartialEq)]
pub struct ScanHit {
    /// File path as reported by semgrep.
    pub file: String,
    /// First line of the match (1-based).
    pub line: usize,
    /// Source lines covered by the match.
    pub lines: String,
}
