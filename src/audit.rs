//! Existence audit: does every card-eligible content file have its image?
//!
//! Only presence is checked. A stale image for edited content still passes;
//! regenerating is always a manual `ogkit generate`.

use crate::config::OgConfig;
use crate::content;
use crate::naming;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One content file without a generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingImage {
    pub section: String,
    pub source: PathBuf,
    /// Expected image, as configured (relative to the project root).
    pub expected: String,
}

impl MissingImage {
    /// `blog/my-post.md: Missing static/og_images/my-post.png`
    pub fn message(&self) -> String {
        let file_name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}/{}: Missing {}", self.section, file_name, self.expected)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub checked: usize,
    pub missing: Vec<MissingImage>,
}

impl AuditReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check every configured section for missing images.
///
/// Sections that do not exist are skipped.
pub fn audit(config: &OgConfig, root: &Path) -> AuditReport {
    let paths = config.resolve_paths(root);
    let mut report = AuditReport::default();

    for section in &config.scan.sections {
        let dir = paths.content.join(section);
        if !dir.is_dir() {
            debug!(section = %section, "section directory not found, nothing to check");
            continue;
        }
        for source in content::discover(&dir, &config.scan.exclude_dirs) {
            report.checked += 1;
            let file_name = naming::image_filename(&source);
            if !paths.output.join(&file_name).is_file() {
                report.missing.push(MissingImage {
                    section: section.clone(),
                    source,
                    expected: format!(
                        "{}/{}",
                        config.paths.output.trim_end_matches('/'),
                        file_name
                    ),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_file;
    use tempfile::TempDir;

    #[test]
    fn all_present_is_ok() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "content/blog/my-post.md", "");
        write_file(tmp.path(), "content/projects/tool.md", "");
        write_file(tmp.path(), "static/og_images/my-post.png", "");
        write_file(tmp.path(), "static/og_images/tool.png", "");

        let report = audit(&OgConfig::default(), tmp.path());
        assert_eq!(report.checked, 2);
        assert!(report.is_ok());
    }

    #[test]
    fn missing_image_is_reported_with_section_and_expected_path() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "content/blog/my-post.md", "");
        write_file(tmp.path(), "content/blog/other.md", "");
        write_file(tmp.path(), "static/og_images/other.png", "");

        let report = audit(&OgConfig::default(), tmp.path());
        assert_eq!(report.checked, 2);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(
            report.missing[0].message(),
            "blog/my-post.md: Missing static/og_images/my-post.png"
        );
    }

    #[test]
    fn nested_files_report_bare_file_name() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "content/projects/2024/deep.md", "");

        let report = audit(&OgConfig::default(), tmp.path());
        assert_eq!(
            report.missing[0].message(),
            "projects/deep.md: Missing static/og_images/deep.png"
        );
    }

    #[test]
    fn underscored_and_excluded_files_are_not_checked() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "content/blog/_index.md", "");
        write_file(tmp.path(), "content/blog/assets/readme.md", "");
        write_file(tmp.path(), "content/about.md", "");

        let report = audit(&OgConfig::default(), tmp.path());
        assert_eq!(report.checked, 0);
        assert!(report.is_ok());
    }

    #[test]
    fn missing_content_checks_nothing() {
        let tmp = TempDir::new().unwrap();
        let report = audit(&OgConfig::default(), tmp.path());
        assert_eq!(report, AuditReport::default());
    }

    #[test]
    fn uses_configured_output_dir() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "content/blog/post.md", "");
        write_file(tmp.path(), "public/og/post.png", "");

        let mut config = OgConfig::default();
        config.paths.output = "public/og/".to_string();
        assert!(audit(&config, tmp.path()).is_ok());

        config.paths.output = "elsewhere".to_string();
        let report = audit(&config, tmp.path());
        assert_eq!(
            report.missing[0].message(),
            "blog/post.md: Missing elsewhere/post.png"
        );
    }
}
