//! Shared test utilities for the ogkit test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_file(tmp.path(), "content/blog/post.md", "+++\ntitle = \"Post\"\n+++\n");
//!
//! // Stock config, but with fonts from fixtures/fonts/
//! let config = fixture_config();
//! ```

use crate::config::{FontsConfig, OgConfig};
use std::path::{Path, PathBuf};

// =========================================================================
// Filesystem
// =========================================================================

/// Write `contents` to `dir/rel`, creating parent directories. Returns the
/// full path.
pub fn write_file(dir: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

// =========================================================================
// Fonts
// =========================================================================

/// Absolute path of the committed DejaVu fonts.
pub fn fixture_fonts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/fonts")
}

/// Font names matching [`fixture_fonts_dir`].
pub fn fixture_fonts() -> FontsConfig {
    FontsConfig {
        sans_bold: "DejaVuSans-Bold.ttf".to_string(),
        sans_regular: "DejaVuSans.ttf".to_string(),
        mono_regular: "DejaVuSansMono.ttf".to_string(),
    }
}

/// Stock config with fonts pointed at the fixtures. Since the fonts path is
/// absolute it survives being joined onto any project root.
pub fn fixture_config() -> OgConfig {
    let mut config = OgConfig::default();
    config.paths.fonts = fixture_fonts_dir().display().to_string();
    config.fonts = fixture_fonts();
    config
}
