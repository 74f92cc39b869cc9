//! Frontmatter validation for the whole content tree.
//!
//! Field presence only: a required field must exist and be non-empty, a
//! recommended field only has to exist. Values are never type-checked.

use crate::config::{OgConfig, ValidateConfig};
use crate::content;
use crate::frontmatter;
use std::fs;
use std::path::{Path, PathBuf};

/// Problems found in one file, without the path prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFindings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate one markdown file against `rules`.
pub fn validate_file(path: &Path, rules: &ValidateConfig) -> FileFindings {
    let mut findings = FileFindings::default();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            findings.errors.push(format!("Error reading file - {e}"));
            return findings;
        }
    };
    let Ok(table) = frontmatter::parse_table(&text) else {
        findings.errors.push("Could not parse frontmatter".to_string());
        return findings;
    };

    for field in &rules.required {
        if !table.get(field).is_some_and(frontmatter::is_truthy) {
            findings
                .errors
                .push(format!("Missing required field '{field}'"));
        }
    }
    for field in &rules.recommended {
        if !table.contains_key(field) {
            findings
                .warnings
                .push(format!("Missing optional field '{field}'"));
        }
    }
    findings
}

/// Outcome of validating the content tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub content_dir: PathBuf,
    /// Number of files validated.
    pub files: usize,
    /// `path: message` lines.
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every eligible markdown file under the content directory.
///
/// Paths in messages are shown relative to `root`.
pub fn validate_content(config: &OgConfig, root: &Path) -> ValidationReport {
    let content_dir = config.resolve_paths(root).content;
    let mut report = ValidationReport {
        content_dir: content_dir.clone(),
        ..ValidationReport::default()
    };

    for path in content::discover(&content_dir, &[]) {
        report.files += 1;
        let shown = path.strip_prefix(root).unwrap_or(&path).display().to_string();
        let findings = validate_file(&path, &config.validate);
        report
            .errors
            .extend(findings.errors.iter().map(|m| format!("{shown}: {m}")));
        report
            .warnings
            .extend(findings.warnings.iter().map(|m| format!("{shown}: {m}")));
    }

    report
}
