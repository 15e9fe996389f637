use crate::checks::{CheckResult, Finding};
use crate::config::LinterConfig;
use crate::source;

pub const NAME: &str = "Manifest dependencies";

/// Every required name must occur somewhere in the manifest text.
///
/// This is raw substring containment, not a lookup in the parsed dependency
/// table: a name mentioned in a comment or in another package's name counts
/// as present.
pub fn check(config: &LinterConfig) -> CheckResult {
    let rel = config.layout.manifest.as_str();

    let content = match source::read_text(&config.resolve(rel)) {
        Ok(c) => c,
        Err(e) => {
            return CheckResult::from_findings(NAME, vec![Finding::manifest_read(rel, &e)]);
        }
    };

    let findings = missing_dependencies(&content, &config.layout.required_dependencies)
        .into_iter()
        .map(|name| Finding::MissingDependency { name: name.to_string() })
        .collect();

    CheckResult::from_findings(NAME, findings)
}

pub fn missing_dependencies<'a>(manifest_text: &str, required: &'a [String]) -> Vec<&'a str> {
    required
        .iter()
        .map(String::as_str)
        .filter(|name| !manifest_text.contains(name))
        .collect()
}
