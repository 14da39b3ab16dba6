use crate::corpus::{Corpus, load_corpus};
use crate::index::backlinks::build_backlinks;
use crate::index::resolver::TitleResolver;
use crate::index::search::build_search_index;
use crate::index::types::{BuildOptions, BuildOutput, BuildStats};
use crate::index::writer::{ArtifactWriter, WriteSummary};
use crate::utils::progress::{finish_phase, phase_spinner};
use crate::utils::{SiteConfig, SitePaths, find_site_root};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Derive the search index and backlink map from a fully loaded corpus.
///
/// Pure and deterministic: the same corpus always yields the same output.
pub fn build(corpus: &Corpus, options: &BuildOptions) -> BuildOutput {
    let resolver = TitleResolver::new(corpus);

    for collision in resolver.collisions() {
        log::warn!(
            "title {:?} is shared by {}; references resolve to the first",
            collision.title,
            collision.slugs.join(", ")
        );
    }

    BuildOutput {
        search_index: build_search_index(corpus, &options.default_description_suffix),
        backlinks: build_backlinks(corpus, &resolver),
    }
}

/// A site build as requested from the command line.
///
/// Directory overrides take precedence over `notegraph.json`.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    pub root: PathBuf,
    pub content_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub mirror_dir: Option<PathBuf>,
    pub no_mirror: bool,
    pub quiet: bool,
}

impl BuildRequest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Resolve the effective site directories
    pub fn site_paths(&self) -> Result<(SiteConfig, SitePaths)> {
        let config = SiteConfig::load(&self.root)?;
        let mut paths = config.resolve(&self.root);

        if let Some(content_dir) = &self.content_dir {
            paths.content_dir = content_dir.clone();
        }
        if let Some(out_dir) = &self.out_dir {
            paths.out_dir = out_dir.clone();
        }
        if let Some(mirror_dir) = &self.mirror_dir {
            paths.mirror_dir = Some(mirror_dir.clone());
        }
        if self.no_mirror {
            paths.mirror_dir = None;
        }

        Ok((config, paths))
    }
}

/// Outcome of a site build
#[derive(Debug, Clone)]
pub struct SiteBuild {
    pub stats: BuildStats,
    pub written: WriteSummary,
}

/// Load the corpus, build both artifacts and write them out
pub fn build_site(request: &BuildRequest) -> Result<SiteBuild> {
    let (config, paths) = request.site_paths()?;
    let quiet = request.quiet;

    if !quiet {
        println!("Indexing notes in: {}", paths.content_dir.display());
    }

    let spinner = phase_spinner("Loading notes...", quiet);
    let corpus = load_corpus(&paths.content_dir, &config.extensions)
        .context("Failed to load note corpus")?;
    finish_phase(spinner, format!("Loaded {} notes", corpus.len()));

    let options = BuildOptions {
        default_description_suffix: config.default_description_suffix.clone(),
    };
    let output = build(&corpus, &options);
    let stats = output.stats();

    let spinner = phase_spinner("Writing artifacts...", quiet);
    let written = ArtifactWriter::new(&paths.out_dir, paths.mirror_dir.clone())
        .write(&output)
        .context("Failed to write artifacts")?;
    finish_phase(spinner, "Artifacts written".to_string());

    if !quiet {
        println!("Search index created with {} notes", stats.indexed_notes);
        println!(
            "Backlinks map created with {} entries ({} links)",
            stats.backlink_targets, stats.backlink_entries
        );
        println!("Artifacts stored at: {}", written.primary.display());
        match &written.mirrored {
            Some(mirror) => println!("Copied to: {}", mirror.display()),
            None => println!("Not mirrored, files only in {}", written.primary.display()),
        }
    }

    Ok(SiteBuild { stats, written })
}

/// Build a site, detecting its root from a starting path
pub fn build_site_auto(start_path: &Path, mut request: BuildRequest) -> Result<SiteBuild> {
    request.root = find_site_root(start_path)?;
    if !request.quiet {
        println!("Detected site root: {}", request.root.display());
    }
    build_site(&request)
}

/// Load the corpus of a site using its configuration
pub fn load_site_corpus(root: &Path) -> Result<Corpus> {
    let (config, paths) = BuildRequest::new(root).site_paths()?;
    load_corpus(&paths.content_dir, &config.extensions).context("Failed to load note corpus")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Note, Stage};
    use crate::index::types::BacklinkEntry;
    use crate::index::writer::RenderedArtifacts;

    fn scenario() -> Corpus {
        Corpus::new(vec![
            Note::new("x", "X", "Hello").with_stage(Stage::Published),
            Note::new("y", "Y", "Links to [[X]] and [[Z]]").with_stage(Stage::Draft),
        ])
    }

    #[test]
    fn test_scenario() {
        let output = build(&scenario(), &BuildOptions::default());

        assert_eq!(output.search_index.len(), 1);
        assert_eq!(output.search_index[0].slug, "x");
        assert_eq!(output.search_index[0].description, "X - Personal notes and thoughts");

        assert_eq!(output.backlinks.len(), 1);
        assert_eq!(
            output.backlinks["x"],
            vec![BacklinkEntry {
                slug: "y".into(),
                title: "Y".into(),
                excerpt: String::new(),
            }]
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let corpus = scenario();
        let first = RenderedArtifacts::render(&build(&corpus, &BuildOptions::default())).unwrap();
        let second = RenderedArtifacts::render(&build(&corpus, &BuildOptions::default())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_description_suffix() {
        let options = BuildOptions {
            default_description_suffix: " (notes)".into(),
        };
        let output = build(&scenario(), &options);
        assert_eq!(output.search_index[0].description, "X (notes)");
    }

    #[test]
    fn test_empty_corpus() {
        let output = build(&Corpus::default(), &BuildOptions::default());
        assert_eq!(output, BuildOutput::default());
    }

    #[test]
    fn test_request_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut request = BuildRequest::new(dir.path());
        request.out_dir = Some(PathBuf::from("/elsewhere"));
        request.no_mirror = true;

        let (_, paths) = request.site_paths().unwrap();
        assert_eq!(paths.out_dir, PathBuf::from("/elsewhere"));
        assert_eq!(paths.content_dir, dir.path().join("src/content/notes"));
        assert!(paths.mirror_dir.is_none());
    }
}
