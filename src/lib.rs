//! # notegraph - search index and backlinks for a notes site
//!
//! notegraph reads a directory of markdown notes with YAML frontmatter and
//! derives the two JSON artifacts a static notes site fetches on the client:
//!
//! - `search-index.json` - one flattened record per published note
//! - `backlinks.json` - for every note, the notes that reference it through
//!   `[[Title]]` wikilinks
//!
//! ## Architecture
//!
//! - [`corpus`] - Note model and the content-directory loader
//! - [`index`] - Reference extraction, title resolution, backlink and search
//!   index building, artifact writing
//! - [`output`] - Terminal reports
//! - [`utils`] - Site configuration and progress spinners
//!
//! ## Quick Start
//!
//! ```
//! use notegraph::corpus::{Corpus, Note};
//! use notegraph::index::{build, BuildOptions};
//!
//! let corpus = Corpus::new(vec![
//!     Note::new("x", "X", "Hello"),
//!     Note::new("y", "Y", "Links to [[X]]"),
//! ]);
//!
//! let output = build(&corpus, &BuildOptions::default());
//! assert_eq!(output.search_index.len(), 2);
//! assert_eq!(output.backlinks["x"][0].slug, "y");
//! ```
//!
//! The builder is a pure function of the corpus: running it twice over the
//! same notes produces byte-identical artifacts.

pub mod corpus;
pub mod index;
pub mod output;
pub mod utils;
