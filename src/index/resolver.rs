//! Title -> note resolution for references.

use crate::corpus::{Corpus, Note};
use std::collections::HashMap;

/// Lookup from exact title to every note carrying it, in corpus order.
///
/// Built once per build and shared across all notes.
pub struct TitleResolver<'a> {
    notes: &'a [Note],
    by_title: HashMap<&'a str, Vec<usize>>,
}

/// A title shared by more than one note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCollision {
    pub title: String,
    /// Slugs in corpus order; references resolve to the first non-self one
    pub slugs: Vec<String>,
}

impl<'a> TitleResolver<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        let notes = corpus.notes();
        let mut by_title: HashMap<&'a str, Vec<usize>> = HashMap::with_capacity(notes.len());
        for (idx, note) in notes.iter().enumerate() {
            by_title.entry(note.title()).or_default().push(idx);
        }
        Self { notes, by_title }
    }

    /// Resolve `target` to the first note titled exactly `target` whose slug
    /// is not `from_slug`.
    ///
    /// Returns `None` when nothing matches; that is not an error.
    pub fn resolve(&self, target: &str, from_slug: &str) -> Option<&'a Note> {
        self.by_title
            .get(target)?
            .iter()
            .map(|&idx| &self.notes[idx])
            .find(|note| note.slug != from_slug)
    }

    /// Titles carried by two or more notes, ordered by first appearance
    pub fn collisions(&self) -> Vec<TitleCollision> {
        let mut collisions: Vec<(usize, TitleCollision)> = self
            .by_title
            .iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(title, indices)| {
                (
                    indices[0],
                    TitleCollision {
                        title: title.to_string(),
                        slugs: indices.iter().map(|&i| self.notes[i].slug.clone()).collect(),
                    },
                )
            })
            .collect();
        collisions.sort_by_key(|(first, _)| *first);
        collisions.into_iter().map(|(_, c)| c).collect()
    }
}
