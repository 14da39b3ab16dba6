use crate::corpus::frontmatter::parse_note_source;
use crate::corpus::note::{Corpus, Note, Slug};
use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Load every note under `content_dir` whose extension is in `extensions`.
///
/// Files are parsed in parallel, then sorted by slug so the corpus order is
/// identical across runs and platforms. Any unreadable file, invalid
/// frontmatter or duplicate slug fails the whole load.
pub fn load_corpus(content_dir: &Path, extensions: &[String]) -> Result<Corpus> {
    if !content_dir.is_dir() {
        bail!("Content directory not found: {}", content_dir.display());
    }

    let files = discover_note_files(content_dir, extensions);
    log::debug!("discovered {} note files in {}", files.len(), content_dir.display());

    let mut notes: Vec<Note> = files
        .par_iter()
        .map(|(full_path, rel_path)| load_note(full_path, rel_path))
        .collect::<Result<_>>()?;

    notes.sort_by(|a, b| a.slug.cmp(&b.slug));

    if let Some(pair) = notes.windows(2).find(|w| w[0].slug == w[1].slug) {
        bail!("Duplicate note slug: {}", pair[0].slug);
    }

    Ok(Corpus::new(notes))
}

/// Walk the content directory, returning (full path, path relative to root)
fn discover_note_files(root: &Path, extensions: &[String]) -> Vec<(PathBuf, PathBuf)> {
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_exclude(true)
        .build();

    walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| has_note_extension(entry.path(), extensions))
        .filter_map(|entry| {
            let path = entry.path().to_path_buf();
            let rel_path = path.strip_prefix(root).ok()?.to_path_buf();
            Some((path, rel_path))
        })
        .collect()
}

fn has_note_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

fn load_note(full_path: &Path, rel_path: &Path) -> Result<Note> {
    let source = fs::read_to_string(full_path)
        .with_context(|| format!("Failed to read note {}", full_path.display()))?;
    let (meta, body) = parse_note_source(&source)
        .with_context(|| format!("Invalid note {}", full_path.display()))?;

    let slug = match meta.slug.as_deref() {
        Some("") => bail!("Empty slug override in {}", full_path.display()),
        Some(custom) => custom.to_string(),
        None => slug_for_path(rel_path),
    };

    Ok(Note { slug, body, meta })
}

/// Derive a slug from a path relative to the content directory.
///
/// Each segment is lowercased, punctuation is dropped and every space becomes
/// a `-`, so `Garden/What's New?.md` becomes `garden/whats-new`.
pub fn slug_for_path(rel_path: &Path) -> Slug {
    let without_ext = rel_path.with_extension("");
    without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(slugify_segment(&part.to_string_lossy())),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

fn slugify_segment(segment: &str) -> String {
    segment
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}
