//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "semgrep-mcp",
    version,
    about = "Semgrep scans as MCP tools over stdio",
    long_about = "semgrep-mcp serves the Model Context Protocol on stdin/stdout, exposing two tools: list_configs (rule configs found in --configs) and scan (run semgrep with one of them).\n\nLogs go to stderr; set RUST_LOG to adjust verbosity.",
    after_help = "Examples:\n  semgrep-mcp --configs ./semgrep\n  semgrep-mcp --configs rules --semgrep-bin /opt/semgrep/bin/semgrep"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, default_value = "./semgrep", help = "Directory containing Semgrep config files")]
    pub configs: PathBuf,
    #[arg(long, env = "SEMGREP_BIN", help = "Semgrep binary to run (default: semgrep from PATH)")]
    pub semgrep_bin: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["semgrep-mcp"]).unwrap();
        assert_eq!(cli.configs, PathBuf::from("./semgrep"));
    }

    #[test]
    fn test_configs_flag() {
        let cli = Cli::try_parse_from(["semgrep-mcp", "--configs", "/etc/rules"]).unwrap();
        assert_eq!(cli.configs, PathBuf::from("/etc/rules"));
    }

    #[test]
    fn test_semgrep_bin_flag() {
        let cli =
            Cli::try_parse_from(["semgrep-mcp", "--semgrep-bin", "/opt/semgrep/bin/semgrep"])
                .unwrap();
        assert_eq!(cli.semgrep_bin, Some(PathBuf::from("/opt/semgrep/bin/semgrep")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["semgrep-mcp", "--config", "x"]).is_err());
    }
}
