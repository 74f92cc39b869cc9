//! Centralized filename conventions shared by the generator and the auditor.
//!
//! Every content file maps to exactly one preview image named after its stem:
//!
//! - `content/blog/my-post.md` → `my-post.png`
//! - `content/projects/2024/rust_tools.md` → `rust_tools.png`
//!
//! The mapping ignores directories and content, so the generator and the
//! auditor always agree on the expected path.
//!
//! ## Display Titles
//!
//! When a file has no `title` in its frontmatter, the stem becomes the title:
//! dashes and underscores turn into spaces and every word is capitalized.
//! - `my-first-post` → "My First Post"
//! - `rust_2024-notes` → "Rust 2024 Notes"

use std::path::Path;

/// Extension of every generated preview image.
pub const IMAGE_EXTENSION: &str = "png";

/// File stem of a content path, lossily converted to UTF-8.
pub fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Name of the preview image for a content file (`{stem}.png`).
pub fn image_filename(source: &Path) -> String {
    format!("{}.{}", stem(source), IMAGE_EXTENSION)
}

/// Synthesize a display title from a file stem.
///
/// Separators become spaces, then each alphabetic run is capitalized: the
/// first letter upper-cased and the rest lower-cased. Digits break runs, so
/// `web3-notes` → "Web3 Notes".
pub fn title_from_stem(stem: &str) -> String {
    let spaced = stem.replace(['-', '_'], " ");
    let mut title = String::with_capacity(spaced.len());
    let mut in_word = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }
    title
}
