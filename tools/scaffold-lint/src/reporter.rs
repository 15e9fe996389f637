use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use crate::checks::{CheckResult, CodeMetrics, Finding};
use crate::RunReport;

pub const NEXT_STEPS: [&str; 4] = [
    "Install the Flutter SDK",
    "Run 'flutter pub get' to fetch dependencies",
    "Run 'flutter run' to launch the app",
    "Run 'flutter test' to run the test suite",
];

const INSTALL_TIP: &str =
    "Tip: if Flutter is not installed, see https://flutter.dev/docs/get-started/install";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

pub fn render(report: &RunReport, format: Format, out: &mut impl Write) -> io::Result<()> {
    match format {
        Format::Text => render_text(report, out),
        Format::Json => render_json(report, out),
    }
}

pub fn render_text(report: &RunReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "\n=== Project Preflight ===\n".if_supports_color(Stdout, |s| s.bold())
    )?;
    for result in &report.results {
        write_result(result, out)?;
    }
    write_summary(report, out)
}

fn write_result(result: &CheckResult, out: &mut impl Write) -> io::Result<()> {
    if result.passed {
        let status = if result.findings.is_empty() {
            "clean".to_string()
        } else {
            format!("passed with {} note(s)", result.findings.len())
        };
        writeln!(
            out,
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            result.name,
            status.if_supports_color(Stdout, |s| s.green()),
        )?;
    } else {
        writeln!(
            out,
            "{} {}: {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            result.name,
            format!("{} problem(s)", result.findings.len())
                .if_supports_color(Stdout, |s| s.red()),
        )?;
    }

    for finding in &result.findings {
        writeln!(
            out,
            "    - {}",
            describe(finding).if_supports_color(Stdout, |s| s.dimmed())
        )?;
    }
    if let Some(metrics) = &result.metrics {
        write_metrics(metrics, out)?;
    }
    Ok(())
}

fn write_metrics(metrics: &CodeMetrics, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "    - Total files: {}", metrics.total_files)?;
    writeln!(out, "    - Total lines: {}", metrics.total_lines)?;
    writeln!(out, "    - Average lines per file: {}", metrics.average_lines)
}

fn write_summary(report: &RunReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "\n--- Summary ---\n".if_supports_color(Stdout, |s| s.bold()))?;

    let tally = format!("{}/{} checks passed", report.passed_count(), report.total());
    if report.all_passed() {
        writeln!(out, "{}", format!("{tally}.").if_supports_color(Stdout, |s| s.green()))?;
        writeln!(out, "\nNext steps:")?;
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, step)?;
        }
    } else {
        writeln!(
            out,
            "{}",
            format!("{tally}. Fix the problems listed above and run again.")
                .if_supports_color(Stdout, |s| s.yellow())
        )?;
    }
    writeln!(out, "\n{}", INSTALL_TIP.if_supports_color(Stdout, |s| s.dimmed()))
}

pub fn describe(finding: &Finding) -> String {
    match finding {
        Finding::MissingFile { path } => format!("missing file: {path}"),
        Finding::MalformedImport { file, target } => format!(
            "{file}: import '{target}' must be relative (start with '.') or use an exempt prefix"
        ),
        Finding::FileRead { message, .. } => format!("read error: {message}"),
        Finding::ManifestRead { message, .. } => format!("manifest unreadable: {message}"),
        Finding::MissingDependency { name } => format!("missing dependency: {name}"),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    passed_checks: usize,
    total_checks: usize,
    checks: &'a [CheckResult],
}

pub fn render_json(report: &RunReport, out: &mut impl Write) -> io::Result<()> {
    let doc = JsonReport {
        passed: report.all_passed(),
        passed_checks: report.passed_count(),
        total_checks: report.total(),
        checks: &report.results,
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}
