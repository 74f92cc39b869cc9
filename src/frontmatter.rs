//! `+++`-delimited TOML frontmatter.
//!
//! ```text
//! +++
//! title = "Writing a tiny allocator"
//! date = 2024-03-02
//! description = "Bump, free lists and what I learned."
//!
//! [taxonomies]
//! tags = ["rust", "memory"]
//! +++
//!
//! Body...
//! ```
//!
//! The block must start on the first line; it ends at the next line that is
//! exactly the delimiter (trailing whitespace and `\r` are tolerated). Two
//! views of the block exist:
//!
//! - [`parse`] reads it into the typed [`Frontmatter`] the generator uses,
//!   field by field, so one badly shaped value only loses itself.
//! - [`parse_table`] keeps the raw TOML table for the validator, which needs
//!   to inspect arbitrary field names.

use thiserror::Error;

pub const DELIMITER: &str = "+++";

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("no +++ frontmatter block")]
    Missing,
    #[error("invalid TOML in frontmatter: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Typed view of the fields the card generator reads.
///
/// Everything is optional; unknown keys (`template`, `extra`, ...) are ignored.
/// A field with the wrong shape falls back to its own default and leaves
/// the others alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub description: Option<String>,
    /// A TOML date/datetime or a plain string; kept loose until display.
    pub date: Option<toml::Value>,
    /// `taxonomies.tags`, from a list or one comma-separated string.
    pub tags: Vec<String>,
}

impl Frontmatter {
    /// Pick the generator fields out of a raw frontmatter table.
    pub fn from_table(table: &toml::Table) -> Self {
        let text = |key: &str| {
            table
                .get(key)
                .and_then(toml::Value::as_str)
                .map(String::from)
        };
        let tags = table
            .get("taxonomies")
            .and_then(toml::Value::as_table)
            .and_then(|taxonomies| taxonomies.get("tags"))
            .map(string_list)
            .unwrap_or_default();
        Self {
            title: text("title"),
            description: text("description"),
            date: table.get("date").cloned(),
            tags,
        }
    }

    /// The date as written, or empty when absent.
    pub fn date_text(&self) -> String {
        match &self.date {
            None => String::new(),
            Some(toml::Value::String(s)) => s.clone(),
            Some(toml::Value::Datetime(d)) => d.to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Strings from a list (non-string entries skipped) or from one
/// comma-separated string. Anything else is empty.
fn string_list(value: &toml::Value) -> Vec<String> {
    match value {
        toml::Value::Array(items) => items
            .iter()
            .filter_map(toml::Value::as_str)
            .map(String::from)
            .collect(),
        toml::Value::String(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Return the text between the opening and closing delimiter lines.
pub fn extract(source: &str) -> Option<String> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.lines();
    if lines.next()?.trim_end() != DELIMITER {
        return None;
    }
    let mut block = Vec::new();
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some(block.join("\n"));
        }
        block.push(line);
    }
    None
}

/// Parse the frontmatter block into the typed generator view.
pub fn parse(source: &str) -> Result<Frontmatter, FrontmatterError> {
    Ok(Frontmatter::from_table(&parse_table(source)?))
}

/// Parse the frontmatter block into a raw TOML table.
pub fn parse_table(source: &str) -> Result<toml::Table, FrontmatterError> {
    let block = extract(source).ok_or(FrontmatterError::Missing)?;
    Ok(toml::from_str(&block)?)
}

/// Whether a field value counts as "set": non-empty strings, arrays and
/// tables, `true`, non-zero numbers, and any date.
pub fn is_truthy(value: &toml::Value) -> bool {
    match value {
        toml::Value::String(s) => !s.is_empty(),
        toml::Value::Integer(i) => *i != 0,
        toml::Value::Float(f) => *f != 0.0,
        toml::Value::Boolean(b) => *b,
        toml::Value::Datetime(_) => true,
        toml::Value::Array(items) => !items.is_empty(),
        toml::Value::Table(table) => !table.is_empty(),
    }
}
