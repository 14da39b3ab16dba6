//! Read-only link diagnostics over a corpus.

use crate::corpus::{Corpus, Slug};
use crate::index::links::extract_references;
use crate::index::resolver::{TitleCollision, TitleResolver};

/// A reference whose target title matches no other note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub source: Slug,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    pub dangling: Vec<DanglingReference>,
    pub collisions: Vec<TitleCollision>,
    /// Notes that link to their own title and nothing else carries it
    pub self_references: Vec<Slug>,
}

impl LinkReport {
    /// True when `--strict` should fail the run
    pub fn has_problems(&self) -> bool {
        !self.dangling.is_empty() || !self.collisions.is_empty()
    }
}

pub fn check_links(corpus: &Corpus) -> LinkReport {
    let resolver = TitleResolver::new(corpus);
    let mut report = LinkReport {
        collisions: resolver.collisions(),
        ..Default::default()
    };

    for note in corpus {
        let mut self_linked = false;
        for target in extract_references(&note.body) {
            if resolver.resolve(target, &note.slug).is_some() {
                continue;
            }
            if target == note.title() {
                self_linked = true;
            } else {
                report.dangling.push(DanglingReference {
                    source: note.slug.clone(),
                    target: target.to_string(),
                });
            }
        }
        if self_linked {
            report.self_references.push(note.slug.clone());
        }
    }

    report
}
