//! # ogkit
//!
//! Build-time helpers for a Zola-style static site: render Open Graph
//! preview cards from markdown frontmatter, check that every post has one,
//! and validate frontmatter fields before commit.
//!
//! # Commands
//!
//! ```text
//! ogkit generate    content/{blog,projects}/**.md  →  static/og_images/{stem}.png
//! ogkit check       every card-section file has its {stem}.png       (exit 0/1)
//! ogkit validate    every content file has title + date frontmatter  (exit 0/1)
//! ```
//!
//! The three commands share content discovery and frontmatter parsing but
//! nothing else. `check` never looks at image contents, and `validate` never
//! renders.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Walks the content tree, derives card metadata from frontmatter |
//! | [`frontmatter`] | `+++` TOML block extraction, typed and raw views |
//! | [`naming`] | Stem → output file name, stem → fallback title |
//! | [`card`] | Text fitting, layout, font rasterization, PNG encoding |
//! | [`generate`] | Batch card rendering with per-item failure isolation |
//! | [`audit`] | Existence check of generated images |
//! | [`validate`] | Required/recommended frontmatter field check |
//! | [`config`] | `ogkit.toml` loading, validation and stock defaults |
//! | [`output`] | CLI report formatting |
//! | [`logging`] | stderr diagnostics via `tracing` |
//!
//! # Design Decisions
//!
//! ## One Fixed Card
//!
//! The card is a single 1200×630 layout. Text boxes have fixed positions;
//! only the title divider moves, following the number of title lines. The
//! brand, author and palette come from config, the geometry does not.
//!
//! ## Layout Is Pure
//!
//! [`card::layout::compose`] turns metadata into a list of draw operations
//! without touching fonts directly: measurement goes through the
//! [`card::layout::TextMetrics`] trait. Tests lay out cards with a
//! fixed-advance measurer, and only the raster step needs real font files.
//!
//! ## Fail Per Item
//!
//! A missing font or unreadable source fails that one card. The run keeps
//! going and exits 1 at the end. Only an output directory that cannot be
//! created, or a broken config file, aborts a command.
//!
//! ## Stem-Only Naming
//!
//! An image's name is `{stem}.png`, no matter the section or nesting depth.
//! `check` relies on this to compute expected names without reading
//! anything.

pub mod audit;
pub mod card;
pub mod config;
pub mod content;
pub mod frontmatter;
pub mod generate;
pub mod logging;
pub mod naming;
pub mod output;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
