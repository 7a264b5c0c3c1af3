//! Thin wrapper around the Semgrep command-line scanner.
//!
//! This crate knows nothing about MCP. It provides:
//!
//! - Reading a directory of rule configs (`*.yml` / `*.yaml`) into a catalog
//! - Running `semgrep scan --json` as a subprocess and parsing its output,
//!   separating errors Semgrep reported from processes that failed outright
//! - Reading a finding's source back from disk, optionally grown to full
//!   lines and rendered with a line-number gutter
//!
//! # Example
//!
//! ```rust,ignore
//! use semgrep::{read_configs, read_lines, scan, ContextOptions, ScanOptions};
//!
//! let configs = read_configs("./semgrep")?;
//! let output = scan(&ScanOptions::new("src", "./semgrep/rules.yml"))?;
//! for finding in &output.results {
//!     println!("{}:{}\n{}", finding.path, finding.start.line,
//!         read_lines(finding, &ContextOptions::extended())?);
//! }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod parser;
pub mod scan;
pub mod types;

// Re-export key types at crate root.
pub use config::{read_config_file, read_configs};
pub use context::{extend_span, format_lines, read_lines, ContextOptions, GUTTER_WIDTH};
pub use error::{SemgrepError, SemgrepResult};
pub use parser::{parse_output_bytes, parse_output_file, parse_output_str};
pub use scan::{scan, ScanOptions, DEFAULT_BIN};
pub use types::{Config, Extra, Finding, OutputError, Paths, Position, Rule, ScanOutput};
