use crate::index::types::{BACKLINKS_FILE, BuildOutput, SEARCH_INDEX_FILE};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Serialized artifact bytes, ready to be written anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    pub search_index: String,
    pub backlinks: String,
}

impl RenderedArtifacts {
    pub fn render(output: &BuildOutput) -> Result<Self> {
        Ok(Self {
            search_index: to_pretty_json(&output.search_index)
                .context("Failed to serialize search index")?,
            backlinks: to_pretty_json(&output.backlinks)
                .context("Failed to serialize backlinks map")?,
        })
    }

    fn files(&self) -> [(&'static str, &str); 2] {
        [
            (SEARCH_INDEX_FILE, self.search_index.as_str()),
            (BACKLINKS_FILE, self.backlinks.as_str()),
        ]
    }
}

/// Where a build's artifacts ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub primary: PathBuf,
    /// `None` when the mirror is not configured, missing, or failed to write
    pub mirrored: Option<PathBuf>,
}

/// Writes both artifacts to a primary directory and an optional mirror
pub struct ArtifactWriter {
    out_dir: PathBuf,
    mirror_dir: Option<PathBuf>,
}

impl ArtifactWriter {
    pub fn new(out_dir: impl Into<PathBuf>, mirror_dir: Option<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            mirror_dir,
        }
    }

    /// Write the artifacts.
    ///
    /// The primary directory is created if missing and any failure there is
    /// returned. The mirror is only written when its directory already exists;
    /// a failure there is logged and leaves `mirrored` as `None`.
    pub fn write(&self, output: &BuildOutput) -> Result<WriteSummary> {
        let rendered = RenderedArtifacts::render(output)?;

        fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("Failed to create output directory {}", self.out_dir.display())
        })?;
        write_all(&self.out_dir, &rendered)?;
        log::info!("wrote artifacts to {}", self.out_dir.display());

        let mirrored = match self.existing_mirror() {
            Some(mirror) => match write_all(mirror, &rendered) {
                Ok(()) => {
                    log::info!("mirrored artifacts to {}", mirror.display());
                    Some(mirror.to_path_buf())
                }
                Err(err) => {
                    log::warn!("skipping mirror {}: {:#}", mirror.display(), err);
                    None
                }
            },
            None => None,
        };

        Ok(WriteSummary {
            primary: self.out_dir.clone(),
            mirrored,
        })
    }

    fn existing_mirror(&self) -> Option<&Path> {
        let mirror = self.mirror_dir.as_deref()?;
        if mirror.is_dir() {
            Some(mirror)
        } else {
            log::info!(
                "mirror directory {} not found, artifacts only in {}",
                mirror.display(),
                self.out_dir.display()
            );
            None
        }
    }
}

/// Pretty JSON with two-space indent and a trailing newline
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn write_all(dir: &Path, rendered: &RenderedArtifacts) -> Result<()> {
    for (name, contents) in rendered.files() {
        write_replacing(&dir.join(name), contents)?;
    }
    Ok(())
}

/// Write through a temporary sibling and rename it into place, so readers
/// never see a half-written artifact.
fn write_replacing(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = tmp_sibling(path);
    let result = write_tmp(&tmp_path, contents).and_then(|()| {
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to move artifact into place at {}", path.display()))
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_tmp(tmp_path: &Path, contents: &str) -> Result<()> {
    let file = File::create(tmp_path)
        .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", tmp_path.display()))
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}
