//! Edge-list loader.
//!
//! One edge per line: `start end` for unweighted graphs, `start end weight`
//! for weighted ones. Blank lines and `#` comments are skipped. A bad line is
//! recorded in the [`LoadReport`] and loading carries on.

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

use super::store::Graph;

/// A line that was skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// Why the line was rejected.
    pub reason: String,
}

/// Summary of a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Lines applied to the graph.
    pub edges_loaded: usize,
    /// Lines that were rejected.
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Returns true when every non-comment line was applied.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Loads edges from text into `graph`.
pub fn load_str(graph: &mut Graph, content: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match apply_line(graph, line_no, line) {
            Ok(()) => report.edges_loaded += 1,
            Err(err) => {
                let reason = match err {
                    Error::Malformed { reason, .. } => reason,
                    other => other.to_string(),
                };
                tracing::warn!(line = line_no, %reason, "Skipping graph line");
                report.skipped.push(SkippedLine {
                    line: line_no,
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = report.edges_loaded,
        skipped = report.skipped.len(),
        "Graph loaded"
    );
    report
}

/// Reads `path` and loads it into `graph`.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read. Malformed lines do not
/// fail the load; they are listed in the report.
pub fn load_file(graph: &mut Graph, path: &Path) -> Result<LoadReport> {
    let content = std::fs::read_to_string(path)?;
    Ok(load_str(graph, &content))
}

fn apply_line(graph: &mut Graph, line: usize, text: &str) -> Result<()> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let expected = if graph.is_weighted() { 3 } else { 2 };
    if tokens.len() != expected {
        return Err(Error::Malformed {
            line,
            reason: format!("expected {expected} fields, found {}", tokens.len()),
        });
    }

    let weight = match tokens.get(2) {
        Some(raw) => Some(raw.parse::<i64>().map_err(|_| Error::Malformed {
            line,
            reason: format!("weight `{raw}` is not an integer"),
        })?),
        None => None,
    };

    graph.connect(tokens[0], tokens[1], weight)
}
