pub mod checks;
pub mod config;
pub mod error;
pub mod layout;
pub mod reporter;
pub mod source;

use std::time::Instant;

use checks::{CheckFn, CheckResult};
use config::LinterConfig;

/// Checks in execution order. None depends on another's result.
pub const CHECKS: &[CheckFn] = &[
    checks::structure::check,
    checks::imports::check,
    checks::dependencies::check,
    checks::metrics::check,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Passed,
    Failed,
}

impl RunOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub results: Vec<CheckResult>,
}

impl RunReport {
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed_count() == self.total()
    }

    pub fn outcome(&self) -> RunOutcome {
        if self.all_passed() {
            RunOutcome::Passed
        } else {
            RunOutcome::Failed
        }
    }
}

/// Run every check once, in order, regardless of earlier failures.
pub fn run_all_checks(config: &LinterConfig) -> RunReport {
    let mut results = Vec::with_capacity(CHECKS.len());
    for check_fn in CHECKS {
        let start = Instant::now();
        let result = check_fn(config);
        tracing::debug!(
            check = %result.name,
            passed = result.passed,
            findings = result.findings.len(),
            elapsed = ?start.elapsed(),
            "check finished"
        );
        results.push(result);
    }
    RunReport { results }
}
