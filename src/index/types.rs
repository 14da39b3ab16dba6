use crate::corpus::Slug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File name of the search index artifact
pub const SEARCH_INDEX_FILE: &str = "search-index.json";

/// File name of the backlink map artifact
pub const BACKLINKS_FILE: &str = "backlinks.json";

/// Appended to a note's title when it has no description
pub const DEFAULT_DESCRIPTION_SUFFIX: &str = " - Personal notes and thoughts";

/// One entry of `search-index.json`, one per published note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndexRecord {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub content: String,
    #[serde(rename = "pubDate", default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
}

/// A note that references some other note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklinkEntry {
    pub slug: Slug,
    pub title: String,
    pub excerpt: String,
}

/// Target slug -> referencing notes, in scan order.
///
/// Keys serialize in sorted order so output bytes only depend on the corpus.
pub type BacklinkMap = BTreeMap<Slug, Vec<BacklinkEntry>>;

/// Everything a build derives from a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    pub search_index: Vec<SearchIndexRecord>,
    pub backlinks: BacklinkMap,
}

impl BuildOutput {
    /// Summary counts reported after a build
    pub fn stats(&self) -> BuildStats {
        BuildStats {
            indexed_notes: self.search_index.len(),
            backlink_targets: self.backlinks.len(),
            backlink_entries: self.backlinks.values().map(Vec::len).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub indexed_notes: usize,
    pub backlink_targets: usize,
    pub backlink_entries: usize,
}

/// Options shaping the derived records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Suffix used to generate descriptions for notes that have none
    pub default_description_suffix: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            default_description_suffix: DEFAULT_DESCRIPTION_SUFFIX.to_string(),
        }
    }
}
