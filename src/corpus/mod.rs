//! Note corpus: the typed input every build runs over.
//!
//! - [`note`] - `Note`, `NoteMeta` and the ordered `Corpus`
//! - [`frontmatter`] - YAML frontmatter splitting and schema validation
//! - [`loader`] - Reads a content directory into a `Corpus`

pub mod frontmatter;
pub mod loader;
pub mod note;

pub use loader::load_corpus;
pub use note::*;
