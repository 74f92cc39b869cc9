//! Project configuration module.
//!
//! Handles loading and validating `ogkit.toml`. Stock defaults describe the
//! bgslabs site layout; a user file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── ogkit.toml               # Optional, overrides stock defaults
//! ├── content/
//! │   ├── blog/
//! │   └── projects/
//! └── static/
//!     ├── fonts/               # Card fonts
//!     └── og_images/           # Generated cards
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! [paths]
//! content = "content"            # Content tree, relative to the project root
//! output = "static/og_images"    # Where cards are written
//! fonts = "static/fonts"         # Where card fonts are read from
//!
//! [site]
//! brand_primary = "bg"           # Brand mark, first run (primary text color)
//! brand_secondary = "slabs"      # Brand mark, second run (secondary color)
//! name = "bgslabs"               # Footer site name
//! author = "Burak Güngör"        # Footer author
//!
//! [scan]
//! sections = ["blog", "projects"]
//! exclude_dirs = ["assets", "static"]
//!
//! [card]
//! words_per_minute = 200
//! max_tags = 4
//!
//! [fonts]
//! sans_bold = "IBMPlexSans-Bold.ttf"
//! sans_regular = "IBMPlexSans-Regular.ttf"
//! mono_regular = "IBMPlexMono-Regular.ttf"
//!
//! [palette]
//! background = "#FFFFFF"
//! text_primary = "#161616"
//! text_secondary = "#525252"
//! text_tertiary = "#8D8D8D"
//! accent_blue = "#0F62FE"
//! accent_green = "#198038"
//!
//! [validate]
//! required = ["title", "date"]
//! recommended = ["description"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILENAME: &str = "ogkit.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Project configuration loaded from `ogkit.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OgConfig {
    /// Directory layout, relative to the project root.
    pub paths: PathsConfig,
    /// Brand, author and site name printed on every card.
    pub site: SiteInfo,
    /// Which parts of the content tree get cards.
    pub scan: ScanConfig,
    /// Card text derivation knobs.
    pub card: CardConfig,
    /// Font file names inside `paths.fonts`.
    pub fonts: FontsConfig,
    /// Card colors.
    pub palette: Palette,
    /// Frontmatter validation rules.
    pub validate: ValidateConfig,
}

impl OgConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card.words_per_minute == 0 {
            return Err(ConfigError::Validation(
                "card.words_per_minute must be greater than 0".into(),
            ));
        }
        if self.scan.sections.is_empty() {
            return Err(ConfigError::Validation(
                "scan.sections must not be empty".into(),
            ));
        }
        for (key, name) in [
            ("fonts.sans_bold", &self.fonts.sans_bold),
            ("fonts.sans_regular", &self.fonts.sans_regular),
            ("fonts.mono_regular", &self.fonts.mono_regular),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Resolve the configured directories against a project root.
    pub fn resolve_paths(&self, root: &Path) -> ProjectPaths {
        ProjectPaths {
            content: root.join(&self.paths.content),
            output: root.join(&self.paths.output),
            fonts: root.join(&self.paths.fonts),
        }
    }
}

/// Directory layout, as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub content: String,
    pub output: String,
    pub fonts: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            output: "static/og_images".to_string(),
            fonts: "static/fonts".to_string(),
        }
    }
}

/// Absolute (root-joined) directories used by every command.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPaths {
    pub content: PathBuf,
    pub output: PathBuf,
    pub fonts: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub brand_primary: String,
    pub brand_secondary: String,
    pub name: String,
    pub author: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            brand_primary: "bg".to_string(),
            brand_secondary: "slabs".to_string(),
            name: "bgslabs".to_string(),
            author: "Burak Güngör".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Top-level content directories that get cards and are audited.
    pub sections: Vec<String>,
    /// Directory names skipped anywhere below a section.
    pub exclude_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sections: vec!["blog".to_string(), "projects".to_string()],
            exclude_dirs: vec!["assets".to_string(), "static".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    /// Reading speed used for the "N min read" estimate.
    pub words_per_minute: u32,
    /// Tags shown on the meta line; the rest are dropped.
    pub max_tags: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
            max_tags: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    pub sans_bold: String,
    pub sans_regular: String,
    pub mono_regular: String,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            sans_bold: "IBMPlexSans-Bold.ttf".to_string(),
            sans_regular: "IBMPlexSans-Regular.ttf".to_string(),
            mono_regular: "IBMPlexMono-Regular.ttf".to_string(),
        }
    }
}

/// An opaque RGB color, written as `#RRGGBB` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value).ok_or_else(|| format!("invalid color '{value}', expected #RRGGBB"))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Card color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub background: Rgb,
    /// Brand run, title, dividers, author.
    pub text_primary: Rgb,
    /// Second brand run, description.
    pub text_secondary: Rgb,
    /// Date, info line, site name.
    pub text_tertiary: Rgb,
    /// Category/tag line.
    pub accent_blue: Rgb,
    /// Left accent bar.
    pub accent_green: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb([0xFF, 0xFF, 0xFF]),
            text_primary: Rgb([0x16, 0x16, 0x16]),
            text_secondary: Rgb([0x52, 0x52, 0x52]),
            text_tertiary: Rgb([0x8D, 0x8D, 0x8D]),
            accent_blue: Rgb([0x0F, 0x62, 0xFE]),
            accent_green: Rgb([0x19, 0x80, 0x38]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateConfig {
    /// Fields that must be present and non-empty (errors).
    pub required: Vec<String>,
    /// Fields whose absence is reported as a warning.
    pub recommended: Vec<String>,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            required: vec!["title".to_string(), "date".to_string()],
            recommended: vec!["description".to_string()],
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse config text, then validate it.
pub fn parse_config(content: &str) -> Result<OgConfig, ConfigError> {
    let config: OgConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `ogkit.toml` in the given project root.
///
/// Returns the stock defaults if the file doesn't exist.
pub fn load_config(root: &Path) -> Result<OgConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(OgConfig::default());
    }
    load_config_file(&config_path)
}

/// Load config from an explicit file. A missing file is an error.
pub fn load_config_file(path: &Path) -> Result<OgConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock `ogkit.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# ogkit configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Directories (relative to the project root)
# ---------------------------------------------------------------------------
[paths]
content = "content"
output = "static/og_images"
fonts = "static/fonts"

# ---------------------------------------------------------------------------
# Text printed on every card
# ---------------------------------------------------------------------------
[site]
# Brand mark, drawn as two runs in primary and secondary text colors.
brand_primary = "bg"
brand_secondary = "slabs"
# Footer, left side.
name = "bgslabs"
# Footer, right side.
author = "Burak Güngör"

# ---------------------------------------------------------------------------
# Content discovery
# ---------------------------------------------------------------------------
[scan]
# Content subdirectories that get cards (and are audited by `ogkit check`).
sections = ["blog", "projects"]
# Directory names skipped anywhere inside a section.
exclude_dirs = ["assets", "static"]

# ---------------------------------------------------------------------------
# Card text
# ---------------------------------------------------------------------------
[card]
# Reading speed for the "N min read" estimate.
words_per_minute = 200
# Tags shown next to the category; extra tags are dropped.
max_tags = 4

# ---------------------------------------------------------------------------
# Fonts (file names inside paths.fonts)
# ---------------------------------------------------------------------------
[fonts]
sans_bold = "IBMPlexSans-Bold.ttf"
sans_regular = "IBMPlexSans-Regular.ttf"
mono_regular = "IBMPlexMono-Regular.ttf"

# ---------------------------------------------------------------------------
# Colors (#RRGGBB)
# ---------------------------------------------------------------------------
[palette]
background = "#FFFFFF"
text_primary = "#161616"
text_secondary = "#525252"
text_tertiary = "#8D8D8D"
accent_blue = "#0F62FE"
accent_green = "#198038"

# ---------------------------------------------------------------------------
# Frontmatter validation (`ogkit validate`)
# ---------------------------------------------------------------------------
[validate]
# Missing or empty -> error.
required = ["title", "date"]
# Missing -> warning.
recommended = ["description"]
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_site_layout() {
        let config = OgConfig::default();
        assert_eq!(config.paths.content, "content");
        assert_eq!(config.paths.output, "static/og_images");
        assert_eq!(config.scan.sections, vec!["blog", "projects"]);
        assert_eq!(config.card.words_per_minute, 200);
        assert_eq!(config.card.max_tags, 4);
        assert_eq!(config.validate.required, vec!["title", "date"]);
    }

    #[test]
    fn default_palette_colors() {
        let palette = Palette::default();
        assert_eq!(palette.background.to_string(), "#FFFFFF");
        assert_eq!(palette.accent_green.to_string(), "#198038");
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r##"
[site]
author = "Someone Else"

[palette]
accent_green = "#00ff00"
"##,
        )
        .unwrap();
        assert_eq!(config.site.author, "Someone Else");
        assert_eq!(config.site.name, "bgslabs");
        assert_eq!(config.palette.accent_green, Rgb([0, 0xFF, 0]));
        assert_eq!(config.palette.background, Rgb([0xFF, 0xFF, 0xFF]));
    }

    #[test]
    fn unknown_keys_rejected() {
        let result = parse_config("[site]\nauthr = \"typo\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_color_rejected() {
        let result = parse_config("[palette]\nbackground = \"white\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn zero_words_per_minute_rejected() {
        let result = parse_config("[card]\nwords_per_minute = 0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_sections_rejected() {
        let result = parse_config("[scan]\nsections = []\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_font_name_rejected() {
        let result = parse_config("[fonts]\nsans_bold = \" \"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn rgb_from_hex_variants() {
        assert_eq!(Rgb::from_hex("#0F62FE"), Some(Rgb([0x0F, 0x62, 0xFE])));
        assert_eq!(Rgb::from_hex("0f62fe"), Some(Rgb([0x0F, 0x62, 0xFE])));
        assert_eq!(Rgb::from_hex("#FFF"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn resolve_paths_joins_root() {
        let paths = OgConfig::default().resolve_paths(Path::new("/site"));
        assert_eq!(paths.content, PathBuf::from("/site/content"));
        assert_eq!(paths.output, PathBuf::from("/site/static/og_images"));
        assert_eq!(paths.fonts, PathBuf::from("/site/static/fonts"));
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, OgConfig::default());
    }

    #[test]
    fn load_config_reads_root_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "[paths]\noutput = \"public/og\"\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.paths.output, "public/og");
    }

    #[test]
    fn load_config_file_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config_file(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config = parse_config(stock_config_toml()).unwrap();
        assert_eq!(config, OgConfig::default());
    }
}
