use crate::checks::{CheckResult, Finding};
use crate::config::LinterConfig;

pub const NAME: &str = "Project structure";

/// Existence-only check over every layout entry. Reports all missing paths,
/// in layout order.
pub fn check(config: &LinterConfig) -> CheckResult {
    let findings = config
        .layout
        .structural_paths()
        .into_iter()
        .filter(|rel| !config.resolve(rel).exists())
        .map(|rel| Finding::MissingFile { path: rel.to_string() })
        .collect();

    CheckResult::from_findings(NAME, findings)
}
