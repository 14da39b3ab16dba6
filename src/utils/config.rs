use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional per-site configuration file
pub const CONFIG_FILE: &str = "notegraph.json";

/// Site configuration stored at the site root.
///
/// Relative paths are resolved against the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the note files
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Primary output directory (created if missing)
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Secondary output directory, only written when it already exists
    #[serde(default = "default_mirror_dir")]
    pub mirror_dir: Option<PathBuf>,

    /// Note file extensions, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Appended to a note's title when it has no description
    #[serde(default = "default_description_suffix")]
    pub default_description_suffix: String,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("src/content/notes")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_mirror_dir() -> Option<PathBuf> {
    Some(PathBuf::from("public"))
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "mdx".to_string()]
}

fn default_description_suffix() -> String {
    crate::index::types::DEFAULT_DESCRIPTION_SUFFIX.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            out_dir: default_out_dir(),
            mirror_dir: default_mirror_dir(),
            extensions: default_extensions(),
            default_description_suffix: default_description_suffix(),
        }
    }
}

impl SiteConfig {
    /// Load `notegraph.json` from the site root, or return defaults if absent
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: SiteConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Absolute locations of every configured directory
    pub fn resolve(&self, root: &Path) -> SitePaths {
        SitePaths {
            root: root.to_path_buf(),
            content_dir: root.join(&self.content_dir),
            out_dir: root.join(&self.out_dir),
            mirror_dir: self.mirror_dir.as_ref().map(|m| root.join(m)),
        }
    }
}

/// Directories of one site, resolved against its root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub root: PathBuf,
    pub content_dir: PathBuf,
    pub out_dir: PathBuf,
    pub mirror_dir: Option<PathBuf>,
}

/// Astro config file names that mark a site directory
const ASTRO_CONFIGS: [&str; 5] = [
    "astro.config.mjs",
    "astro.config.js",
    "astro.config.ts",
    "astro.config.mts",
    "astro.config.cjs",
];

/// Find the root of a site starting from a given path.
///
/// Walks up the directory tree looking for a `notegraph.json`, then for a
/// directory that holds the default content directory or an Astro config,
/// then for a `.git` directory. Falls back to the start path.
pub fn find_site_root(start_path: &Path) -> Result<PathBuf> {
    let start = start_path
        .canonicalize()
        .with_context(|| format!("Invalid path: {}", start_path.display()))?;

    let markers: [fn(&Path) -> bool; 3] = [
        |dir| dir.join(CONFIG_FILE).is_file(),
        is_site_dir,
        |dir| dir.join(".git").exists(),
    ];
    for is_root in markers {
        if let Some(root) = start.ancestors().find(|dir| is_root(dir)) {
            return Ok(root.to_path_buf());
        }
    }

    Ok(start)
}

fn is_site_dir(dir: &Path) -> bool {
    dir.join(default_content_dir()).is_dir()
        || ASTRO_CONFIGS.iter().any(|name| dir.join(name).is_file())
}
