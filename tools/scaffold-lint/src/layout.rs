use std::fs;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// One expected path in the project. Every entry is checked for existence;
/// the flags opt it into the import and line-count checks as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutEntry {
    pub path: String,
    #[serde(default)]
    pub scan_imports: bool,
    #[serde(default)]
    pub count_lines: bool,
}

impl LayoutEntry {
    pub fn structural(path: &str) -> Self {
        Self { path: path.to_string(), scan_imports: false, count_lines: false }
    }

    pub fn source(path: &str) -> Self {
        Self { path: path.to_string(), scan_imports: true, count_lines: true }
    }
}

/// Declarative description of the expected project scaffold, shared by all checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectLayout {
    pub manifest: String,
    #[serde(default)]
    pub required_dependencies: Vec<String>,
    #[serde(default = "default_exempt_prefixes")]
    pub exempt_prefixes: Vec<String>,
    pub entries: Vec<LayoutEntry>,
}

fn default_exempt_prefixes() -> Vec<String> {
    ["package:", "dart:", "flutter"].iter().map(|s| s.to_string()).collect()
}

const FLUTTER_SOURCES: &[&str] = &[
    "lib/main.dart",
    "lib/core/constants/app_constants.dart",
    "lib/core/theme/app_theme.dart",
    "lib/core/utils/error_handler.dart",
    "lib/core/widgets/common_widgets.dart",
    "lib/core/di/dependency_injection.dart",
    "lib/features/home/domain/entities/home_entity.dart",
    "lib/features/home/domain/repositories/home_repository.dart",
    "lib/features/home/domain/usecases/get_home_message.dart",
    "lib/features/home/data/models/home_model.dart",
    "lib/features/home/data/repositories/home_repository_impl.dart",
    "lib/features/home/presentation/bloc/home_bloc.dart",
    "lib/features/home/presentation/pages/home_page.dart",
    "lib/features/home/presentation/widgets/home_widget.dart",
];

const FLUTTER_SUPPORT_FILES: &[&str] = &[
    "test/unit/home_bloc_test.dart",
    "lib/l10n/app_zh.arb",
    "lib/l10n/app_en.arb",
    "README.md",
];

const FLUTTER_DEPENDENCIES: &[&str] = &["flutter_bloc", "get_it", "go_router", "equatable", "dartz"];

impl ProjectLayout {
    /// Built-in checklist for a clean-architecture Flutter app with a `home` feature.
    pub fn flutter_default() -> Self {
        let manifest = "pubspec.yaml".to_string();
        let mut entries = vec![LayoutEntry::structural(&manifest)];
        entries.extend(FLUTTER_SOURCES.iter().map(|p| LayoutEntry::source(p)));
        entries.extend(FLUTTER_SUPPORT_FILES.iter().map(|p| LayoutEntry::structural(p)));

        Self {
            manifest,
            required_dependencies: FLUTTER_DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
            exempt_prefixes: default_exempt_prefixes(),
            entries,
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, LayoutError> {
        let text = fs::read_to_string(path).map_err(|source| LayoutError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let layout: Self = serde_json::from_str(&text).map_err(|source| LayoutError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.entries.is_empty() {
            return Err(LayoutError::Empty);
        }
        if self.manifest.trim().is_empty() {
            return Err(LayoutError::EmptyManifest);
        }
        let paths = self.entries.iter().map(|e| e.path.as_str());
        for path in std::iter::once(self.manifest.as_str()).chain(paths) {
            check_relative(path)?;
        }
        Ok(())
    }

    pub fn structural_paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }

    pub fn import_sources(&self) -> Vec<&str> {
        self.entries.iter().filter(|e| e.scan_imports).map(|e| e.path.as_str()).collect()
    }

    pub fn metric_sources(&self) -> Vec<&str> {
        self.entries.iter().filter(|e| e.count_lines).map(|e| e.path.as_str()).collect()
    }
}

/// Paths must name something strictly below the project root.
fn check_relative(path: &str) -> Result<(), LayoutError> {
    if path.trim().is_empty() {
        return Err(LayoutError::EmptyPath);
    }
    let mut names_file = false;
    for component in Path::new(path).components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {
                return Err(LayoutError::AbsolutePath(path.to_string()));
            }
            Component::ParentDir => return Err(LayoutError::EscapesRoot(path.to_string())),
            Component::Normal(_) => names_file = true,
            Component::CurDir => {}
        }
    }
    if names_file {
        Ok(())
    } else {
        Err(LayoutError::EmptyPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flutter_default_matches_builtin_checklist() {
        let layout = ProjectLayout::flutter_default();
        assert_eq!(layout.structural_paths().len(), 19);
        assert_eq!(layout.import_sources().len(), 14);
        assert_eq!(layout.import_sources(), layout.metric_sources());
        assert_eq!(layout.structural_paths()[0], "pubspec.yaml");
        assert_eq!(layout.required_dependencies.len(), 5);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn scanned_sources_are_subset_of_structural_paths() {
        let layout = ProjectLayout::flutter_default();
        let structural = layout.structural_paths();
        for path in layout.import_sources().iter().chain(layout.metric_sources().iter()) {
            assert!(structural.contains(path), "{path} missing from structural list");
        }
    }

    #[test]
    fn rejects_empty_and_absolute_layouts() {
        let mut layout = ProjectLayout::flutter_default();
        layout.entries.clear();
        assert!(matches!(layout.validate(), Err(LayoutError::Empty)));

        let mut layout = ProjectLayout::flutter_default();
        layout.entries.push(LayoutEntry::structural("/etc/passwd"));
        assert!(matches!(layout.validate(), Err(LayoutError::AbsolutePath(_))));

        let mut layout = ProjectLayout::flutter_default();
        layout.manifest = "  ".to_string();
        assert!(matches!(layout.validate(), Err(LayoutError::EmptyManifest)));

        let mut layout = ProjectLayout::flutter_default();
        layout.entries.push(LayoutEntry::structural(""));
        assert!(matches!(layout.validate(), Err(LayoutError::EmptyPath)));

        let mut layout = ProjectLayout::flutter_default();
        layout.entries.push(LayoutEntry::structural(" "));
        assert!(matches!(layout.validate(), Err(LayoutError::EmptyPath)));

        let mut layout = ProjectLayout::flutter_default();
        layout.entries.push(LayoutEntry::structural("./"));
        assert!(matches!(layout.validate(), Err(LayoutError::EmptyPath)));
    }

    #[test]
    fn rejects_paths_outside_the_root() {
        let mut layout = ProjectLayout::flutter_default();
        layout.entries.push(LayoutEntry::source("../secret.dart"));
        assert!(matches!(layout.validate(), Err(LayoutError::EscapesRoot(p)) if p == "../secret.dart"));

        let mut layout = ProjectLayout::flutter_default();
        layout.entries.push(LayoutEntry::source("lib/../../secret.dart"));
        assert!(matches!(layout.validate(), Err(LayoutError::EscapesRoot(_))));

        let mut layout = ProjectLayout::flutter_default();
        layout.manifest = "../pubspec.yaml".to_string();
        assert!(matches!(layout.validate(), Err(LayoutError::EscapesRoot(_))));

        let mut layout = ProjectLayout::flutter_default();
        layout.entries.push(LayoutEntry::source("./lib/extra.dart"));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn json_layout_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(
            &path,
            r#"{
                "manifest": "pubspec.yaml",
                "entries": [
                    { "path": "pubspec.yaml" },
                    { "path": "lib/main.dart", "scan_imports": true }
                ]
            }"#,
        )
        .unwrap();

        let layout = ProjectLayout::from_json_file(&path).unwrap();
        assert!(layout.required_dependencies.is_empty());
        assert_eq!(layout.exempt_prefixes, vec!["package:", "dart:", "flutter"]);
        assert_eq!(layout.import_sources(), vec!["lib/main.dart"]);
        assert!(layout.metric_sources().is_empty());
    }

    #[test]
    fn unknown_layout_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(
            &path,
            r#"{
                "manifest": "pubspec.yaml",
                "entries": [{ "path": "lib/main.dart", "scan_import": true }]
            }"#,
        )
        .unwrap();
        let err = ProjectLayout::from_json_file(&path).unwrap_err();
        assert!(matches!(err, LayoutError::Parse { .. }));
        assert!(err.to_string().contains("layout.json"));

        fs::write(
            &path,
            r#"{ "manifest": "pubspec.yaml", "entries": [{ "path": "a" }], "dependencies": [] }"#,
        )
        .unwrap();
        assert!(matches!(
            ProjectLayout::from_json_file(&path),
            Err(LayoutError::Parse { .. })
        ));
    }

    #[test]
    fn json_layout_escaping_the_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(
            &path,
            r#"{ "manifest": "pubspec.yaml", "entries": [{ "path": "../x.dart", "count_lines": true }] }"#,
        )
        .unwrap();
        assert!(matches!(
            ProjectLayout::from_json_file(&path),
            Err(LayoutError::EscapesRoot(_))
        ));
    }

    #[test]
    fn malformed_json_layout_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ProjectLayout::from_json_file(&path),
            Err(LayoutError::Parse { .. })
        ));
    }
}
