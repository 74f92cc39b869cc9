//! CLI output formatting for all commands.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! blog (2 files)
//!     Writing a tiny allocator → writing-a-tiny-allocator.png
//!         Source: content/blog/writing-a-tiny-allocator.md
//!     FAILED content/blog/broken.md
//!         Missing asset: static/fonts/IBMPlexSans-Bold.ttf
//! projects: not found at content/projects, skipped
//!
//! Generated 1 OG image, 1 failed
//! ```
//!
//! ## Check
//!
//! ```text
//! [MISSING OG IMAGES]
//!   blog/my-post.md: Missing static/og_images/my-post.png
//!
//! Pre-commit failed: 1/4 content files missing OG images
//! Run: ogkit generate
//! ```
//!
//! ## Validate
//!
//! ```text
//! [WARNINGS]
//!   content/blog/a.md: Missing optional field 'description'
//!
//! [ERRORS]
//!   content/blog/a.md: Missing required field 'date'
//!
//! Pre-commit failed: 1 error(s) found
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects. Paths are shown relative to
//! the project root.

use crate::audit::AuditReport;
use crate::generate::{GenerateEvent, GenerateSummary};
use crate::validate::ValidationReport;
use std::path::Path;

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

// ============================================================================
// Generate
// ============================================================================

/// Format a single generate progress event as display lines.
///
/// Information-first: a generated card leads with its title and output file
/// name; the source path is indented context.
pub fn format_generate_event(event: &GenerateEvent, root: &Path) -> Vec<String> {
    match event {
        GenerateEvent::SectionStarted { section, count } => {
            vec![format!("{section} ({})", plural(*count, "file", "files"))]
        }
        GenerateEvent::SectionMissing { section, path } => {
            vec![format!(
                "{section}: not found at {}, skipped",
                relative(path, root)
            )]
        }
        GenerateEvent::Generated {
            source,
            output,
            title,
        } => {
            let file_name = output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            vec![
                format!("    {title} \u{2192} {file_name}"),
                format!("        Source: {}", relative(source, root)),
            ]
        }
        GenerateEvent::Failed { source, error } => vec![
            format!("    FAILED {}", relative(source, root)),
            format!("        {error}"),
        ],
    }
}

pub fn print_generate_event(event: &GenerateEvent, root: &Path) {
    for line in format_generate_event(event, root) {
        println!("{}", line);
    }
}

pub fn format_generate_summary(summary: &GenerateSummary) -> Vec<String> {
    let mut line = format!(
        "Generated {}",
        plural(summary.generated, "OG image", "OG images")
    );
    if !summary.failed.is_empty() {
        line.push_str(&format!(", {} failed", summary.failed.len()));
    }
    vec![String::new(), line]
}

pub fn print_generate_summary(summary: &GenerateSummary) {
    for line in format_generate_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_audit_report(report: &AuditReport) -> Vec<String> {
    if report.is_ok() {
        return vec![format!(
            "Checked OG images for {} content files - OK",
            report.checked
        )];
    }

    let mut lines = vec![String::new(), "[MISSING OG IMAGES]".to_string()];
    lines.extend(report.missing.iter().map(|m| format!("  {}", m.message())));
    lines.push(String::new());
    lines.push(format!(
        "Pre-commit failed: {}/{} content files missing OG images",
        report.missing.len(),
        report.checked
    ));
    lines.push("Run: ogkit generate".to_string());
    lines
}

pub fn print_audit_report(report: &AuditReport) {
    for line in format_audit_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Validate
// ============================================================================

pub fn format_validation_report(report: &ValidationReport, root: &Path) -> Vec<String> {
    if report.files == 0 {
        return vec![format!(
            "No markdown files found in {}",
            relative(&report.content_dir, root)
        )];
    }

    let mut lines = Vec::new();
    if !report.warnings.is_empty() {
        lines.push(String::new());
        lines.push("[WARNINGS]".to_string());
        lines.extend(report.warnings.iter().map(|w| format!("  {w}")));
    }
    if !report.errors.is_empty() {
        lines.push(String::new());
        lines.push("[ERRORS]".to_string());
        lines.extend(report.errors.iter().map(|e| format!("  {e}")));
        lines.push(String::new());
        lines.push(format!(
            "Pre-commit failed: {} error(s) found",
            report.errors.len()
        ));
        return lines;
    }
    lines.push(format!("Validated {} markdown files - OK", report.files));
    lines
}

pub fn print_validation_report(report: &ValidationReport, root: &Path) {
    for line in format_validation_report(report, root) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MissingImage;
    use crate::generate::FailedItem;
    use std::path::PathBuf;

    const ROOT: &str = "/site";

    #[test]
    fn generated_event_shows_title_then_source() {
        let event = GenerateEvent::Generated {
            source: PathBuf::from("/site/content/blog/my-post.md"),
            output: PathBuf::from("/site/static/og_images/my-post.png"),
            title: "My Post".to_string(),
        };
        assert_eq!(
            format_generate_event(&event, Path::new(ROOT)),
            vec![
                "    My Post \u{2192} my-post.png",
                "        Source: content/blog/my-post.md",
            ]
        );
    }

    #[test]
    fn failed_event_shows_source_and_error() {
        let event = GenerateEvent::Failed {
            source: PathBuf::from("/site/content/blog/bad.md"),
            error: "Missing asset: fonts/X.ttf".to_string(),
        };
        assert_eq!(
            format_generate_event(&event, Path::new(ROOT)),
            vec![
                "    FAILED content/blog/bad.md",
                "        Missing asset: fonts/X.ttf"
            ]
        );
    }

    #[test]
    fn section_events() {
        let started = GenerateEvent::SectionStarted {
            section: "blog".to_string(),
            count: 1,
        };
        assert_eq!(
            format_generate_event(&started, Path::new(ROOT)),
            vec!["blog (1 file)"]
        );
        let missing = GenerateEvent::SectionMissing {
            section: "projects".to_string(),
            path: PathBuf::from("/site/content/projects"),
        };
        assert_eq!(
            format_generate_event(&missing, Path::new(ROOT)),
            vec!["projects: not found at content/projects, skipped"]
        );
    }

    #[test]
    fn generate_summary_lines() {
        let ok = GenerateSummary {
            generated: 3,
            failed: Vec::new(),
        };
        assert_eq!(format_generate_summary(&ok)[1], "Generated 3 OG images");

        let partial = GenerateSummary {
            generated: 1,
            failed: vec![FailedItem {
                source: PathBuf::from("a.md"),
                error: "boom".to_string(),
            }],
        };
        assert_eq!(
            format_generate_summary(&partial)[1],
            "Generated 1 OG image, 1 failed"
        );
    }

    #[test]
    fn audit_ok_line() {
        let report = AuditReport {
            checked: 5,
            missing: Vec::new(),
        };
        assert_eq!(
            format_audit_report(&report),
            vec!["Checked OG images for 5 content files - OK"]
        );
    }

    #[test]
    fn audit_failure_lists_missing_and_hint() {
        let report = AuditReport {
            checked: 4,
            missing: vec![MissingImage {
                section: "blog".to_string(),
                source: PathBuf::from("/site/content/blog/my-post.md"),
                expected: "static/og_images/my-post.png".to_string(),
            }],
        };
        assert_eq!(
            format_audit_report(&report),
            vec![
                "",
                "[MISSING OG IMAGES]",
                "  blog/my-post.md: Missing static/og_images/my-post.png",
                "",
                "Pre-commit failed: 1/4 content files missing OG images",
                "Run: ogkit generate",
            ]
        );
    }

    fn validation(errors: &[&str], warnings: &[&str]) -> ValidationReport {
        ValidationReport {
            content_dir: PathBuf::from("/site/content"),
            files: 2,
            errors: errors.iter().map(|s| s.to_string()).collect(),
            warnings: warnings.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn validation_ok_with_warnings() {
        let report = validation(&[], &["a.md: Missing optional field 'description'"]);
        assert_eq!(
            format_validation_report(&report, Path::new(ROOT)),
            vec![
                "",
                "[WARNINGS]",
                "  a.md: Missing optional field 'description'",
                "Validated 2 markdown files - OK",
            ]
        );
    }

    #[test]
    fn validation_errors_after_warnings() {
        let report = validation(
            &["a.md: Missing required field 'date'"],
            &["a.md: Missing optional field 'description'"],
        );
        let lines = format_validation_report(&report, Path::new(ROOT));
        let warnings_at = lines.iter().position(|l| l == "[WARNINGS]").unwrap();
        let errors_at = lines.iter().position(|l| l == "[ERRORS]").unwrap();
        assert!(warnings_at < errors_at);
        assert_eq!(lines.last().unwrap(), "Pre-commit failed: 1 error(s) found");
    }

    #[test]
    fn validation_without_files() {
        let mut report = validation(&[], &[]);
        report.files = 0;
        assert_eq!(
            format_validation_report(&report, Path::new(ROOT)),
            vec!["No markdown files found in content"]
        );
    }
}
