use crate::corpus::Corpus;
use crate::index::links::extract_references;
use crate::index::resolver::TitleResolver;
use crate::index::types::{BacklinkEntry, BacklinkMap};

/// Build the backlink map over every note in the corpus (drafts included).
///
/// For each reference in each body, in corpus order, the referencing note is
/// appended under the resolved target's slug. Duplicate references produce
/// duplicate entries; unresolved references are dropped.
pub fn build_backlinks(corpus: &Corpus, resolver: &TitleResolver<'_>) -> BacklinkMap {
    let mut backlinks = BacklinkMap::new();

    for note in corpus {
        for target in extract_references(&note.body) {
            let Some(linked) = resolver.resolve(target, &note.slug) else {
                log::debug!("unresolved reference [[{}]] in {}", target, note.slug);
                continue;
            };

            backlinks
                .entry(linked.slug.clone())
                .or_default()
                .push(BacklinkEntry {
                    slug: note.slug.clone(),
                    title: note.title().to_string(),
                    excerpt: note.description().unwrap_or_default().to_string(),
                });
        }
    }

    backlinks
}
