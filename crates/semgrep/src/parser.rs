//! Parsing of `semgrep --json` output documents.

use crate::error::{SemgrepError, SemgrepResult};
use crate::types::ScanOutput;
use std::path::Path;

/// Parse a saved scan output file (e.g. from `semgrep scan --json -o out.json`).
pub fn parse_output_file(path: impl AsRef<Path>) -> SemgrepResult<ScanOutput> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SemgrepError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_output_bytes(&bytes)
}

/// Parse scan output from raw JSON bytes, as captured from stdout.
pub fn parse_output_bytes(json_bytes: &[u8]) -> SemgrepResult<ScanOutput> {
    Ok(serde_json::from_slice(json_bytes)?)
}

/// Parse scan output from a JSON string.
pub fn parse_output_str(json_str: &str) -> SemgrepResult<ScanOutput> {
    Ok(serde_json::from_str(json_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Paths, Position};

    // Trimmed copy of what semgrep 1.122 prints for testdata/code.
    const SAMPLE_OUTPUT: &str = r#"{
        "errors": [],
        "interfile_languages_used": [],
        "paths": { "scanned": ["testdata/code/file.js"] },
        "results": [
            {
                "check_id": "testdata.configs.nulling.coalescing.0",
                "end": { "col": 2, "line": 6, "offset": 48 },
                "extra": {
                    "engine_kind": "OSS",
                    "fingerprint": "requires login",
                    "is_ignored": false,
                    "lines": "requires login",
                    "message": "Use nullish coalescing",
                    "metadata": {},
                    "metavars": {},
                    "severity": "ERROR",
                    "validation_state": "NO_VALIDATOR"
                },
                "path": "testdata/code/file.js",
                "start": { "col": 1, "line": 4, "offset": 16 }
            }
        ],
        "skipped_rules": [],
        "version": "1.122.0"
    }"#;

    #[test]
    fn test_parse_sample_output() {
        let out = parse_output_str(SAMPLE_OUTPUT).unwrap();

        assert_eq!(out.version, "1.122.0");
        assert!(out.errors.is_empty());
        assert_eq!(
            out.paths,
            Paths {
                comment: String::new(),
                scanned: vec!["testdata/code/file.js".to_string()],
            }
        );

        assert_eq!(out.results.len(), 1);
        let finding = &out.results[0];
        assert!(finding.check_id.ends_with("nulling.coalescing.0"));
        assert_eq!(finding.start, Position { col: 1, line: 4, offset: 16 });
        assert_eq!(finding.end, Position { col: 2, line: 6, offset: 48 });
        assert_eq!(finding.extra.severity, "ERROR");
        assert_eq!(finding.extra.engine_kind, "OSS");
        assert!(finding.extra.metadata.is_empty());
    }

    #[test]
    fn test_parse_reported_errors() {
        let json = r#"{
            "errors": [
                { "code": 7, "level": "error", "type": "InvalidRuleSchemaError", "message": "bad rule" },
                { "code": 3, "level": "warn", "type": ["PartialParsing", [{"path": "a.js"}]], "message": "syntax" }
            ],
            "paths": { "_comment": "<add --verbose for a list of skipped paths>", "scanned": [] },
            "results": [],
            "version": "1.122.0"
        }"#;
        let out = parse_output_bytes(json.as_bytes()).unwrap();
        assert_eq!(out.errors.len(), 2);
        assert_eq!(out.errors[0].code, 7);
        assert_eq!(out.errors[0].kind, serde_json::json!("InvalidRuleSchemaError"));
        assert!(out.errors[1].kind.is_array());
        assert!(out.paths.comment.contains("--verbose"));
    }

    #[test]
    fn test_parse_missing_lists_default_empty() {
        let out = parse_output_str(r#"{"version": "1.0.0"}"#).unwrap();
        assert!(out.errors.is_empty());
        assert!(out.results.is_empty());
        assert!(out.paths.scanned.is_empty());
    }

    #[test]
    fn test_parse_garbage() {
        let result = parse_output_str("semgrep: command crashed");
        assert!(matches!(result, Err(SemgrepError::JsonParse(_))));
    }

    #[test]
    fn test_parse_file_not_found() {
        let result = parse_output_file("/nonexistent/output.json");
        match result.unwrap_err() {
            SemgrepError::FileRead { path, .. } => {
                assert!(path.to_string_lossy().contains("nonexistent"))
            }
            other => panic!("Expected FileRead, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_file_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, SAMPLE_OUTPUT).unwrap();
        let out = parse_output_file(&path).unwrap();
        assert_eq!(out, parse_output_str(SAMPLE_OUTPUT).unwrap());
    }
}
