//! YAML frontmatter splitting and validation for note files.

use crate::corpus::note::NoteMeta;
use anyhow::{Context, Result, bail};

/// Split a note file into its raw frontmatter and body.
///
/// The first line must be `---` (a leading BOM is allowed). The block ends at
/// the next line that is exactly `---` or `...`. Returns `None` when the file
/// has no frontmatter or the block is never closed.
pub fn split_frontmatter(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start_matches('\u{feff}');
    let first_end = input.find('\n').unwrap_or(input.len());
    if input[..first_end].trim_end() != "---" {
        return None;
    }

    let yaml_start = (first_end + 1).min(input.len());
    let mut offset = yaml_start;
    for line in input[yaml_start..].split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let yaml = &input[yaml_start..offset];
            let body = &input[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }

    None
}

/// Parse and validate a full note file into metadata and body
pub fn parse_note_source(input: &str) -> Result<(NoteMeta, String)> {
    let Some((yaml, body)) = split_frontmatter(input) else {
        bail!("missing frontmatter block");
    };

    let meta: NoteMeta = serde_yaml::from_str(yaml).context("invalid frontmatter")?;
    Ok((meta, body.to_string()))
}
