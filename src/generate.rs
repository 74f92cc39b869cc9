//! Card generation: content sections in, one PNG per content file out.
//!
//! ```text
//! content/blog/my-post.md        →  static/og_images/my-post.png
//! content/projects/ogkit.md      →  static/og_images/ogkit.png
//! ```
//!
//! Output names depend only on the source file stem, so two sections holding
//! the same stem write the same image; the later one wins.
//!
//! Items are processed one at a time. A failure on one item (unreadable file,
//! missing font, encode error) is reported and the batch moves on; only an
//! output directory that cannot be created stops the run.
//!
//! Progress is reported through a callback of [`GenerateEvent`]s so the CLI
//! can print as it goes while tests collect events into a `Vec`.

use crate::card::{CardRenderer, RasterRenderer, RenderError};
use crate::config::OgConfig;
use crate::content;
use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Progress reported while generating.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    SectionStarted {
        section: String,
        count: usize,
    },
    SectionMissing {
        section: String,
        path: PathBuf,
    },
    Generated {
        source: PathBuf,
        output: PathBuf,
        title: String,
    },
    Failed {
        source: PathBuf,
        error: String,
    },
}

/// A content file that did not get a card.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedItem {
    pub source: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateSummary {
    pub generated: usize,
    pub failed: Vec<FailedItem>,
}

impl GenerateSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate cards for every configured section with the raster renderer.
///
/// `only` restricts the batch to sources whose stem is listed; empty means
/// everything.
pub fn generate(
    config: &OgConfig,
    root: &Path,
    only: &[String],
    on_event: &mut dyn FnMut(&GenerateEvent),
) -> Result<GenerateSummary, GenerateError> {
    let renderer = RasterRenderer::from_config(config, root);
    generate_with_renderer(&renderer, config, root, only, on_event)
}

/// Generate cards using a specific renderer (allows testing with mock).
pub fn generate_with_renderer(
    renderer: &impl CardRenderer,
    config: &OgConfig,
    root: &Path,
    only: &[String],
    on_event: &mut dyn FnMut(&GenerateEvent),
) -> Result<GenerateSummary, GenerateError> {
    let paths = config.resolve_paths(root);
    fs::create_dir_all(&paths.output).map_err(|source| GenerateError::OutputDir {
        path: paths.output.clone(),
        source,
    })?;

    let mut summary = GenerateSummary::default();

    for section in &config.scan.sections {
        let dir = paths.content.join(section);
        if !dir.is_dir() {
            warn!(section = %section, path = %dir.display(), "section directory not found, skipping");
            on_event(&GenerateEvent::SectionMissing {
                section: section.clone(),
                path: dir,
            });
            continue;
        }

        let sources: Vec<PathBuf> = content::discover(&dir, &config.scan.exclude_dirs)
            .into_iter()
            .filter(|p| only.is_empty() || only.contains(&naming::stem(p)))
            .collect();
        on_event(&GenerateEvent::SectionStarted {
            section: section.clone(),
            count: sources.len(),
        });

        for source in sources {
            let output = paths.output.join(naming::image_filename(&source));
            let started = Instant::now();
            match render_one(renderer, &source, &paths.content, &output) {
                Ok(title) => {
                    debug!(
                        source = %source.display(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "rendered card"
                    );
                    summary.generated += 1;
                    on_event(&GenerateEvent::Generated {
                        source,
                        output,
                        title,
                    });
                }
                Err(e) => {
                    error!(source = %source.display(), error = %e, "failed to render card");
                    let item = FailedItem {
                        source,
                        error: e.to_string(),
                    };
                    on_event(&GenerateEvent::Failed {
                        source: item.source.clone(),
                        error: item.error.clone(),
                    });
                    summary.failed.push(item);
                }
            }
        }
    }

    Ok(summary)
}

/// Read, derive and render a single source. Returns the card title.
fn render_one(
    renderer: &impl CardRenderer,
    source: &Path,
    content_root: &Path,
    output: &Path,
) -> Result<String, RenderError> {
    let meta = content::read_metadata(source, content_root)?;
    renderer.render(&meta, output)?;
    Ok(meta.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::tests::MockRenderer;
    use crate::test_helpers::{fixture_config, write_file};
    use tempfile::TempDir;

    fn post(title: &str) -> String {
        format!("+++\ntitle = \"{title}\"\ndate = 2024-01-01\n+++\nBody\n")
    }

    fn run(
        renderer: &MockRenderer,
        config: &OgConfig,
        root: &Path,
        only: &[String],
    ) -> (GenerateSummary, Vec<GenerateEvent>) {
        let mut events = Vec::new();
        let mut record = |e: &GenerateEvent| events.push(e.clone());
        let summary = generate_with_renderer(renderer, config, root, only, &mut record).unwrap();
        (summary, events)
    }

    #[test]
    fn one_failing_item_does_not_stop_the_batch() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        write_file(&content, "blog/a-first.md", &post("First"));
        write_file(&content, "blog/b-second.md", &post("Second"));
        write_file(&content, "blog/c-third.md", &post("Third"));

        let renderer = MockRenderer::failing_on(&["Second"]);
        let (summary, events) = run(&renderer, &OgConfig::default(), tmp.path(), &[]);

        assert_eq!(renderer.titles(), vec!["First", "Third"]);
        assert_eq!(summary.generated, 2);
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.failed[0].source.ends_with("blog/b-second.md"));
        assert!(!summary.is_success());

        let failed: Vec<&GenerateEvent> = events
            .iter()
            .filter(|e| matches!(e, GenerateEvent::Failed { .. }))
            .collect();
        assert_eq!(failed.len(), 1);
    }

    #[test]
    fn output_name_is_stem_png() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "content/blog/my-post.md", &post("Whatever Title"));

        let renderer = MockRenderer::default();
        run(&renderer, &OgConfig::default(), tmp.path(), &[]);

        let rendered = renderer.rendered.lock().unwrap();
        assert_eq!(
            rendered[0].1,
            tmp.path().join("static/og_images/my-post.png")
        );
    }

    #[test]
    fn skips_underscored_and_excluded_files() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        write_file(&content, "blog/_index.md", &post("Index"));
        write_file(&content, "blog/assets/readme.md", &post("Asset Readme"));
        write_file(&content, "blog/post.md", &post("Post"));
        write_file(&content, "about.md", &post("About"));

        let renderer = MockRenderer::default();
        let (summary, _) = run(&renderer, &OgConfig::default(), tmp.path(), &[]);
        assert_eq!(renderer.titles(), vec!["Post"]);
        assert_eq!(summary.generated, 1);
    }

    #[test]
    fn sections_run_in_configured_order() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        write_file(&content, "projects/aaa.md", &post("Project"));
        write_file(&content, "blog/zzz.md", &post("Blog"));

        let renderer = MockRenderer::default();
        let (_, events) = run(&renderer, &OgConfig::default(), tmp.path(), &[]);
        assert_eq!(renderer.titles(), vec!["Blog", "Project"]);
        assert_eq!(
            events[0],
            GenerateEvent::SectionStarted {
                section: "blog".to_string(),
                count: 1
            }
        );
    }

    #[test]
    fn missing_section_is_reported_not_fatal() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "content/blog/post.md", &post("Post"));

        let renderer = MockRenderer::default();
        let (summary, events) = run(&renderer, &OgConfig::default(), tmp.path(), &[]);
        assert!(summary.is_success());
        assert!(events.iter().any(|e| matches!(
            e,
            GenerateEvent::SectionMissing { section, .. } if section == "projects"
        )));
    }

    #[test]
    fn only_filters_by_stem() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        write_file(&content, "blog/keep-me.md", &post("Keep"));
        write_file(&content, "blog/skip-me.md", &post("Skip"));

        let renderer = MockRenderer::default();
        let (summary, _) = run(
            &renderer,
            &OgConfig::default(),
            tmp.path(),
            &["keep-me".to_string()],
        );
        assert_eq!(renderer.titles(), vec!["Keep"]);
        assert_eq!(summary.generated, 1);
    }

    #[test]
    fn broken_frontmatter_uses_filename_title() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "content/blog/odd_one-out.md", "+++\ntitle = \n+++\n");

        let renderer = MockRenderer::default();
        let (summary, _) = run(&renderer, &OgConfig::default(), tmp.path(), &[]);
        assert!(summary.is_success());
        assert_eq!(renderer.titles(), vec!["Odd One Out"]);
    }

    #[test]
    fn creates_output_directory() {
        let tmp = TempDir::new().unwrap();
        let renderer = MockRenderer::default();
        run(&renderer, &OgConfig::default(), tmp.path(), &[]);
        assert!(tmp.path().join("static/og_images").is_dir());
    }

    #[test]
    fn uncreatable_output_directory_is_fatal() {
        let tmp = TempDir::new().unwrap();
        // A file where the output directory's parent should be
        std::fs::write(tmp.path().join("static"), "not a dir").unwrap();
        let renderer = MockRenderer::default();
        let result = generate_with_renderer(
            &renderer,
            &OgConfig::default(),
            tmp.path(),
            &[],
            &mut |_| {},
        );
        assert!(matches!(result, Err(GenerateError::OutputDir { .. })));
    }

    #[test]
    fn real_renderer_writes_cards() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "content/blog/hello-world.md", &post("Hello World"));
        let config = fixture_config();

        let summary = generate(&config, tmp.path(), &[], &mut |_| {}).unwrap();
        assert!(summary.is_success());
        let out = tmp.path().join("static/og_images/hello-world.png");
        assert_eq!(image::image_dimensions(&out).unwrap(), (1200, 630));
    }

    #[test]
    fn real_renderer_missing_fonts_fail_each_item() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        write_file(&content, "blog/one.md", &post("One"));
        write_file(&content, "blog/two.md", &post("Two"));

        // Stock config points at <root>/static/fonts, which does not exist
        let summary = generate(&OgConfig::default(), tmp.path(), &[], &mut |_| {}).unwrap();
        assert_eq!(summary.generated, 0);
        assert_eq!(summary.failed.len(), 2);
        assert!(summary.failed[0].error.contains("Missing asset"));
    }
}
