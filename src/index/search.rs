use crate::corpus::{Corpus, Note};
use crate::index::types::SearchIndexRecord;

/// Shape one record per published note, in corpus order
pub fn build_search_index(corpus: &Corpus, description_suffix: &str) -> Vec<SearchIndexRecord> {
    corpus
        .iter()
        .filter(|note| note.is_published())
        .map(|note| search_record(note, description_suffix))
        .collect()
}

fn search_record(note: &Note, description_suffix: &str) -> SearchIndexRecord {
    let description = match note.description() {
        Some(description) => description.to_string(),
        None => format!("{}{}", note.title(), description_suffix),
    };

    SearchIndexRecord {
        slug: note.slug.clone(),
        title: note.title().to_string(),
        description,
        tags: note.meta.tags.clone(),
        content: note.body.clone(),
        pub_date: note.meta.pub_date.clone(),
    }
}
