//! Content discovery and card metadata derivation.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── _index.md                  # Section index (underscore = skipped)
//! ├── about.md                   # Validated, but outside any card section
//! ├── blog/                      # Card section → category "Blog"
//! │   ├── _index.md
//! │   ├── my-post.md             # → static/og_images/my-post.png
//! │   └── 2024/
//! │       └── notes.md           # Nested files are found too
//! └── projects/                  # Card section → category "Project"
//!     ├── ogkit.md
//!     └── assets/                # Excluded directory name
//!         └── readme.md
//! ```
//!
//! Files are yielded in lexicographic path order so generation output is
//! stable between runs.

use crate::frontmatter::{self, Frontmatter, FrontmatterError};
use crate::naming;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Markdown file whose name does not start with `_`.
pub fn is_eligible(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    !name.starts_with('_') && MARKDOWN_EXTENSIONS.contains(&ext.as_str())
}

/// Recursively list eligible markdown files under `dir`, sorted by path.
///
/// Directories named in `exclude_dirs` are pruned at any depth below `dir`.
/// A missing or unreadable `dir` yields an empty list; callers that care
/// check for existence first.
pub fn discover(dir: &Path, exclude_dirs: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !exclude_dirs
                    .iter()
                    .any(|x| e.file_name().to_str() == Some(x.as_str()))
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_eligible(e.path()))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "discovered content files");
    files
}

/// Card category, derived from where a file lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Blog,
    Project,
    Content,
}

impl Category {
    /// `blog` anywhere in the path wins over `projects`; anything else is
    /// generic content.
    pub fn from_path(path: &Path) -> Self {
        let path = path.to_string_lossy();
        if path.contains("blog") {
            Category::Blog
        } else if path.contains("projects") {
            Category::Project
        } else {
            Category::Content
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Blog => "Blog",
            Category::Project => "Project",
            Category::Content => "Content",
        }
    }
}

/// Everything a card shows about one content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMetadata {
    pub title: String,
    pub description: String,
    /// Raw date text; see [`format_date`] for display.
    pub date: String,
    pub category: Category,
    pub tags: Vec<String>,
}

impl ContentMetadata {
    /// Derive metadata from parsed frontmatter.
    ///
    /// `relative` is the source path below the content directory; it picks
    /// the category and, when the title is missing or blank, the title.
    pub fn derive(relative: &Path, frontmatter: &Frontmatter) -> Self {
        let title = frontmatter
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(String::from)
            .unwrap_or_else(|| naming::title_from_stem(&naming::stem(relative)));
        Self {
            title,
            description: frontmatter.description.clone().unwrap_or_default(),
            date: frontmatter.date_text(),
            category: Category::from_path(relative),
            tags: frontmatter.tags.clone(),
        }
    }
}

/// Read a content file and derive its card metadata.
///
/// Frontmatter problems never fail: a missing or broken block falls back to
/// filename-derived defaults. Only reading the file can fail.
pub fn read_metadata(source: &Path, content_root: &Path) -> io::Result<ContentMetadata> {
    let text = fs::read_to_string(source)?;
    let frontmatter = match frontmatter::parse(&text) {
        Ok(fm) => fm,
        Err(FrontmatterError::Missing) => {
            debug!(path = %source.display(), "no frontmatter block, using filename defaults");
            Frontmatter::default()
        }
        Err(e) => {
            warn!(path = %source.display(), error = %e, "unparseable frontmatter, using filename defaults");
            Frontmatter::default()
        }
    };
    let relative = source.strip_prefix(content_root).unwrap_or(source);
    Ok(ContentMetadata::derive(relative, &frontmatter))
}

/// Best-effort `YYYY-MM-DD` rendering of a frontmatter date.
///
/// Accepts RFC 3339 style dates and datetimes (`2024-03-02`,
/// `2024-03-02T10:00:00Z`, `2024-03-02 10:00:00+02:00`). Anything else is
/// returned verbatim; empty stays empty.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match trimmed.parse::<toml::value::Datetime>() {
        Ok(toml::value::Datetime {
            date: Some(date), ..
        }) => format!("{:04}-{:02}-{:02}", date.year, date.month, date.day),
        _ => raw.to_string(),
    }
}
