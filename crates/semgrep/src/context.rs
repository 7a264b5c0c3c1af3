//! Source context for findings.
//!
//! Semgrep reports each match as a byte span. To give a reader something
//! useful, the span is read back from the file, optionally grown to whole
//! lines, and optionally rendered with a line-number gutter:
//!
//! ```text
//!     4| if (a === undefined) {
//!     5|   a = b;
//!     6| }
//! ```

use crate::error::{SemgrepError, SemgrepResult};
use crate::types::{Finding, Position};
use std::path::PathBuf;

/// Width of the line-number gutter used by [`read_lines`] when formatting.
pub const GUTTER_WIDTH: usize = 5;

/// How [`read_lines`] locates and renders a finding's source.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// Directory finding paths are relative to. `None` means the process's
    /// working directory.
    pub base_dir: Option<PathBuf>,
    /// Grow the span to cover the full lines it touches.
    pub extend: bool,
    /// Prefix every line with its line number.
    pub format: bool,
}

impl ContextOptions {
    /// Whole-line context without a gutter.
    pub fn extended() -> Self {
        ContextOptions {
            extend: true,
            ..Default::default()
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(path),
            None => PathBuf::from(path),
        }
    }
}

/// Read the source text covered by `finding`.
pub fn read_lines(finding: &Finding, opts: &ContextOptions) -> SemgrepResult<String> {
    let path = opts.resolve(&finding.path);
    let data = std::fs::read(&path).map_err(|source| SemgrepError::FileRead {
        path: path.clone(),
        source,
    })?;

    let (start, end) = if opts.extend {
        extend_span(finding.start, finding.end, &data)
    } else {
        check_span(finding.start, finding.end, &data)
    }
    .map_err(|e| e.with_path(&path))?;

    let matched = &data[start.offset..end.offset];
    if opts.format {
        Ok(format_lines(matched, start.line, GUTTER_WIDTH))
    } else {
        Ok(String::from_utf8_lossy(matched).into_owned())
    }
}

fn is_line_break(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Grow `start..end` outward to the nearest line breaks (or buffer edges).
///
/// A boundary already sitting on a line break is left alone, so aligned spans
/// come back unchanged. Columns move in step with offsets. An `end` equal to
/// `data.len()` is already at the edge and is not moved.
pub fn extend_span(
    mut start: Position,
    mut end: Position,
    data: &[u8],
) -> SemgrepResult<(Position, Position)> {
    check_span(start, end, data)?;
    if data.is_empty() {
        return Ok((start, end));
    }

    if start.offset == data.len() || !is_line_break(data[start.offset]) {
        while start.offset > 0 && !is_line_break(data[start.offset - 1]) {
            start.offset -= 1;
            start.col = start.col.saturating_sub(1);
        }
    }

    while end.offset < data.len() && !is_line_break(data[end.offset]) {
        end.offset += 1;
        end.col += 1;
    }

    Ok((start, end))
}

fn check_span(start: Position, end: Position, data: &[u8]) -> SemgrepResult<(Position, Position)> {
    let len = data.len();
    for offset in [start.offset, end.offset] {
        if offset > len {
            return Err(SemgrepError::OffsetOutOfBounds {
                path: PathBuf::new(),
                offset,
                len,
            });
        }
    }
    if start.offset > end.offset {
        return Err(SemgrepError::InvalidSpan {
            path: PathBuf::new(),
            start: start.offset,
            end: end.offset,
        });
    }
    Ok((start, end))
}

/// Render `data` one line per row, numbered from `first_line`, with the
/// number right-aligned in a `gutter`-wide column followed by `"| "`.
pub fn format_lines(data: &[u8], first_line: usize, gutter: usize) -> String {
    let text = String::from_utf8_lossy(data);
    let mut out = String::with_capacity(text.len() + 8);
    for (i, line) in text.lines().enumerate() {
        out.push_str(&format!("{:>width$}| ", first_line + i, width = gutter));
        out.push_str(line);
        out.push('\n');
    }
    out
}
