//! MCP tool definitions for the semgrep server.

use crate::server::types::*;
use rmcp::handler::server::{router::tool::ToolRouter, wrapper::Parameters};
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use semgrep::{ContextOptions, Finding, ScanOptions, SemgrepError};
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};

/// Text result flagged as a tool error. The agent gets an answer either way.
fn tool_error(msg: impl fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", msg))])
}

/// Text result holding `value` as compact JSON.
fn tool_json<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => tool_error(format!("failed to marshal JSON: {}", e)),
    }
}

/// Join a config name onto the config directory.
///
/// `None` when the name is absolute or climbs out with `..`, so a scan can
/// only use configs that `list_configs` would show.
fn resolve_config(config_dir: &Path, name: &str) -> Option<PathBuf> {
    let name = Path::new(name);
    let nested = name
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    nested.then(|| config_dir.join(name))
}

/// Why a scan tool call produced no results.
#[derive(Debug)]
enum ScanFailure {
    Scan(SemgrepError),
    Context(SemgrepError),
}

impl fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanFailure::Scan(e) => {
                write!(f, "Scan failed: {}", e)?;
                if let Some(stderr) = e.stderr() {
                    write!(f, "\nStderr: {}", String::from_utf8_lossy(stderr))?;
                }
                Ok(())
            }
            ScanFailure::Context(e) => write!(f, "Failed to read lines: {}", e),
        }
    }
}

/// Run the scan and read back the context of every finding.
///
/// Blocking: spawns semgrep and reads source files.
fn run_scan(opts: &ScanOptions) -> Result<Vec<ScanHit>, ScanFailure> {
    let output = semgrep::scan(opts).map_err(ScanFailure::Scan)?;

    // Semgrep reports paths relative to its working directory, which is ours.
    let context = ContextOptions::extended();
    output
        .results
        .iter()
        .map(|finding: &Finding| {
            let lines = semgrep::read_lines(finding, &context).map_err(ScanFailure::Context)?;
            Ok(ScanHit {
                file: finding.path.clone(),
                line: finding.start.line,
                lines,
            })
        })
        .collect()
}

/// The semgrep MCP server.
#[derive(Clone)]
pub struct SemgrepServer {
    config_dir: PathBuf,
    semgrep_bin: Option<PathBuf>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SemgrepServer {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        SemgrepServer {
            config_dir: config_dir.into(),
            semgrep_bin: None,
            tool_router: Self::tool_router(),
        }
    }

    /// Use `bin` instead of `semgrep` from `PATH`.
    #[must_use]
    pub fn with_semgrep_bin(mut self, bin: Option<PathBuf>) -> Self {
        self.semgrep_bin = bin;
        self
    }

    /// List the rule configs in the config directory.
    #[tool(description = "List available Semgrep configurations. Returns a JSON array of {Name, Rules: [{ID, Message, Languages, Severity}]}; pass a Name as the config argument of the scan tool.")]
    async fn list_configs(&self) -> Result<CallToolResult, McpError> {
        info!("Listing configs in {}", self.config_dir.display());
        let config_dir = self.config_dir.clone();
        let catalog = tokio::task::spawn_blocking(move || semgrep::read_configs(&config_dir))
            .await
            .map_err(|e| McpError::internal_error(format!("Config task failed: {}", e), None))?;

        match catalog {
            Ok(configs) => Ok(tool_json(&configs)),
            Err(e) => {
                warn!("list_configs failed: {}", e);
                Ok(tool_error(e))
            }
        }
    }

    /// Run semgrep with one config.
    #[tool(description = "Run Semgrep scan with specified configuration. The results contain the exact file path and line numbers. Fields: directory (directory to scan, default \".\"), config (required, name of the configuration to use; use the list_configs tool to enumerate them). Returns a JSON array of {file, line, lines}.")]
    async fn scan(
        &self,
        Parameters(req): Parameters<ScanRequest>,
    ) -> Result<CallToolResult, McpError> {
        let Some(config) = req.config() else {
            return Ok(tool_error("Missing config argument"));
        };

        let Some(config_path) = resolve_config(&self.config_dir, config) else {
            return Ok(tool_error(format!(
                "Invalid config name {:?}: must be a file name from list_configs",
                config
            )));
        };

        let mut opts = ScanOptions::new(req.directory(), config_path);
        if let Some(bin) = &self.semgrep_bin {
            opts = opts.with_bin(bin);
        }
        info!(
            "Scanning {} with {}",
            opts.dir.display(),
            opts.config_path.display()
        );

        let outcome = tokio::task::spawn_blocking(move || run_scan(&opts))
            .await
            .map_err(|e| McpError::internal_error(format!("Scan task failed: {}", e), None))?;

        match outcome {
            Ok(hits) => {
                info!("Scan returned {} findings", hits.len());
                Ok(tool_json(&hits))
            }
            Err(failure) => {
                warn!("{}", failure);
                Ok(tool_error(failure))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for SemgrepServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "semgrep-mcp: run Semgrep static analysis scans. \
                 Call list_configs to see the available rule configurations, \
                 then call scan with config set to one of their names and \
                 directory set to the code to check. Each result has the file, \
                 the first line of the match, and the full source lines matched."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
