pub mod dependencies;
pub mod imports;
pub mod metrics;
pub mod structure;

use serde::Serialize;

use crate::config::LinterConfig;
use crate::error::{ReadError, ReadErrorKind};

/// A single problem (or note) discovered by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    MissingFile {
        path: String,
    },
    MalformedImport {
        file: String,
        target: String,
    },
    FileRead {
        path: String,
        error: ReadErrorKind,
        message: String,
    },
    ManifestRead {
        path: String,
        error: ReadErrorKind,
        message: String,
    },
    MissingDependency {
        name: String,
    },
}

impl Finding {
    pub fn file_read(path: &str, err: &ReadError) -> Self {
        Self::FileRead {
            path: path.to_string(),
            error: err.kind(),
            message: err.to_string(),
        }
    }

    pub fn manifest_read(path: &str, err: &ReadError) -> Self {
        Self::ManifestRead {
            path: path.to_string(),
            error: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CodeMetrics {
    pub total_files: usize,
    pub total_lines: usize,
    pub average_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub findings: Vec<Finding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<CodeMetrics>,
}

impl CheckResult {
    /// Pass iff nothing was found.
    pub fn from_findings(name: &str, findings: Vec<Finding>) -> Self {
        Self {
            name: name.to_string(),
            passed: findings.is_empty(),
            findings,
            metrics: None,
        }
    }
}

pub type CheckFn = fn(&LinterConfig) -> CheckResult;
