use crate::checks::{CheckResult, Finding};
use crate::config::LinterConfig;
use crate::source;
use regex::Regex;
use std::sync::LazyLock;

pub const NAME: &str = "Import paths";

// Either quote may open or close the target; the payload never contains one.
static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+['"]([^'"]+)['"]"#).unwrap()
});

pub fn check(config: &LinterConfig) -> CheckResult {
    let exempt = &config.layout.exempt_prefixes;
    let mut findings = Vec::new();

    for rel in config.layout.import_sources() {
        let path = config.resolve(rel);
        if !path.exists() {
            continue;
        }

        let content = match source::read_text(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(file = rel, error = %e, "skipping unreadable source");
                findings.push(Finding::file_read(rel, &e));
                continue;
            }
        };

        for target in extract_imports(&content) {
            if !is_well_formed(target, exempt) {
                findings.push(Finding::MalformedImport {
                    file: rel.to_string(),
                    target: target.to_string(),
                });
            }
        }
    }

    CheckResult::from_findings(NAME, findings)
}

/// Quoted import targets in source order.
pub fn extract_imports(content: &str) -> Vec<&str> {
    IMPORT_PATTERN
        .captures_iter(content)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Exempt-prefixed targets pass; anything else must be a `.`-relative path.
pub fn is_well_formed(target: &str, exempt_prefixes: &[String]) -> bool {
    if exempt_prefixes.iter().any(|p| target.starts_with(p.as_str())) {
        return true;
    }
    target.starts_with('.')
}
