use crate::checks::{CheckResult, CodeMetrics, Finding};
use crate::config::LinterConfig;
use crate::source;

pub const NAME: &str = "Code statistics";

/// Informational only: always passes. Unreadable files are noted and left out
/// of the totals.
pub fn check(config: &LinterConfig) -> CheckResult {
    let mut counts = Vec::new();
    let mut findings = Vec::new();

    for rel in config.layout.metric_sources() {
        let path = config.resolve(rel);
        if !path.exists() {
            continue;
        }
        match source::read_text(&path) {
            Ok(content) => counts.push(count_lines(&content)),
            Err(e) => {
                tracing::warn!(file = rel, error = %e, "skipping unreadable source");
                findings.push(Finding::file_read(rel, &e));
            }
        }
    }

    CheckResult {
        name: NAME.to_string(),
        passed: true,
        findings,
        metrics: Some(summarize(&counts)),
    }
}

/// Segments after splitting on `\n`. A trailing newline yields one extra
/// (empty) segment, and empty text counts as one line.
pub fn count_lines(content: &str) -> usize {
    content.split('\n').count()
}

pub fn summarize(line_counts: &[usize]) -> CodeMetrics {
    let total_files = line_counts.len();
    let total_lines: usize = line_counts.iter().sum();
    let average_lines = total_lines.checked_div(total_files).unwrap_or(0);
    CodeMetrics { total_files, total_lines, average_lines }
}
