//! Running `semgrep scan` as a subprocess.

use crate::error::{SemgrepError, SemgrepResult};
use crate::parser::parse_output_bytes;
use crate::types::ScanOutput;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, warn};

/// Scanner binary used when no override is given, resolved through `PATH`.
pub const DEFAULT_BIN: &str = "semgrep";

/// Inputs for a single scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory (or file) to scan.
    pub dir: PathBuf,
    /// Rule config passed to `--config`.
    pub config_path: PathBuf,
    /// Scanner binary override.
    pub bin: Option<PathBuf>,
}

impl ScanOptions {
    pub fn new(dir: impl Into<PathBuf>, config_path: impl Into<PathBuf>) -> Self {
        ScanOptions {
            dir: dir.into(),
            config_path: config_path.into(),
            bin: None,
        }
    }

    #[must_use]
    pub fn with_bin(mut self, bin: impl Into<PathBuf>) -> Self {
        self.bin = Some(bin.into());
        self
    }

    fn bin(&self) -> PathBuf {
        self.bin.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_BIN))
    }
}

/// Run `<bin> scan --config <config_path> --json <dir>` and parse its output.
///
/// Blocks until the scanner exits; no timeout is applied. On a non-zero exit
/// the captured stdout is still parsed: if Semgrep reported errors there, they
/// are returned as [`SemgrepError::Reported`]. Otherwise the failure is
/// [`SemgrepError::Exit`] with the captured stderr.
pub fn scan(opts: &ScanOptions) -> SemgrepResult<ScanOutput> {
    let bin = opts.bin();
    let bin_name = bin.display().to_string();
    debug!(
        "Running {} scan --config {} --json {}",
        bin_name,
        opts.config_path.display(),
        opts.dir.display()
    );

    let output = Command::new(&bin)
        .arg("scan")
        .arg("--config")
        .arg(&opts.config_path)
        .arg("--json")
        .arg(&opts.dir)
        .output()
        .map_err(|source| SemgrepError::Launch {
            bin: bin_name.clone(),
            source,
        })?;

    if !output.status.success() {
        warn!("{} exited with {}", bin_name, output.status);
        if let Ok(parsed) = parse_output_bytes(&output.stdout) {
            if !parsed.errors.is_empty() {
                return Err(SemgrepError::Reported(parsed.errors));
            }
        }
        return Err(SemgrepError::Exit {
            bin: bin_name,
            status: output.status,
            stderr: output.stderr,
        });
    }

    let parsed = parse_output_bytes(&output.stdout)?;
    debug!(
        "Scan finished: {} results, {} errors, {} files scanned",
        parsed.results.len(),
        parsed.errors.len(),
        parsed.paths.scanned.len()
    );
    Ok(parsed)
}
