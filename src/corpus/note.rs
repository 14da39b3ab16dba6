use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a note (the join key across artifacts)
pub type Slug = String;

/// Publication stage of a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Idea,
    Draft,
    Published,
}

/// Author's confidence in a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Med,
    High,
}

/// Mood tag carried in frontmatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excited,
    Curious,
    Focused,
    Neutral,
}

/// Validated frontmatter of a note.
///
/// Mirrors the content collection schema: `title` and `tags` are required,
/// everything else is optional. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteMeta {
    pub title: String,
    /// Replaces the slug derived from the file path
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Kept as the raw string the author wrote
    #[serde(default)]
    pub pub_date: Option<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub links: Option<Vec<String>>,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub noindex: Option<bool>,
}

/// A single note document as supplied by the corpus loader.
///
/// Read-only for the builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub slug: Slug,
    pub body: String,
    pub meta: NoteMeta,
}

impl Note {
    pub fn new(slug: impl Into<Slug>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            body: body.into(),
            meta: NoteMeta {
                title: title.into(),
                ..Default::default()
            },
        }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.meta.stage = Some(stage);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pub_date(mut self, pub_date: impl Into<String>) -> Self {
        self.meta.pub_date = Some(pub_date.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    /// The description, with an empty string treated as missing
    pub fn description(&self) -> Option<&str> {
        self.meta.description.as_deref().filter(|d| !d.is_empty())
    }

    /// A note with no stage counts as published
    pub fn is_published(&self) -> bool {
        matches!(self.meta.stage, None | Some(Stage::Published))
    }
}

/// The full, ordered set of notes for one build.
///
/// Iteration order is the corpus order every derived artifact follows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    notes: Vec<Note>,
}

impl Corpus {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.slug == slug)
    }
}

impl From<Vec<Note>> for Corpus {
    fn from(notes: Vec<Note>) -> Self {
        Self::new(notes)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
