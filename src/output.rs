//! Colored terminal reports for `check` and `backlinks`

use crate::index::check::LinkReport;
use crate::index::types::BacklinkEntry;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout_for(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print a link check report
pub fn print_link_report(report: &LinkReport, note_count: usize, color: bool) -> io::Result<()> {
    let mut stdout = stdout_for(color);
    write_link_report(&mut stdout, report, note_count)
}

pub fn write_link_report<W: WriteColor>(
    out: &mut W,
    report: &LinkReport,
    note_count: usize,
) -> io::Result<()> {
    writeln!(out, "Checked {} notes", note_count)?;

    if !report.dangling.is_empty() {
        writeln!(out)?;
        heading(out, "Dangling references", report.dangling.len())?;
        for dangling in &report.dangling {
            slug(out, &dangling.source)?;
            write!(out, " -> ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(out, "[[{}]]", dangling.target)?;
            out.reset()?;
        }
    }

    if !report.collisions.is_empty() {
        writeln!(out)?;
        heading(out, "Shared titles", report.collisions.len())?;
        for collision in &report.collisions {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "{:?}", collision.title)?;
            out.reset()?;
            writeln!(out, ": {}", collision.slugs.join(", "))?;
        }
    }

    if !report.self_references.is_empty() {
        writeln!(out)?;
        heading(out, "Self references", report.self_references.len())?;
        for self_ref in &report.self_references {
            slug(out, self_ref)?;
            writeln!(out)?;
        }
    }

    if report == &LinkReport::default() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "All references resolve")?;
        out.reset()?;
    }

    Ok(())
}

/// Print the notes referencing `target`
pub fn print_backlinks(target: &str, entries: &[BacklinkEntry], color: bool) -> io::Result<()> {
    let mut stdout = stdout_for(color);
    write_backlinks(&mut stdout, target, entries)
}

pub fn write_backlinks<W: WriteColor>(
    out: &mut W,
    target: &str,
    entries: &[BacklinkEntry],
) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No notes link to {}", target)?;
        return Ok(());
    }

    heading(out, target, entries.len())?;
    for entry in entries {
        slug(out, &entry.slug)?;
        write!(out, "  {}", entry.title)?;
        if !entry.excerpt.is_empty() {
            out.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(out, "  {}", entry.excerpt)?;
            out.reset()?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn heading<W: WriteColor>(out: &mut W, label: &str, count: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{} ({})", label, count)?;
    out.reset()
}

fn slug<W: WriteColor>(out: &mut W, slug: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(out, "  {}", slug)?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::check::DanglingReference;
    use termcolor::NoColor;

    fn render(f: impl FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>) -> String {
        let mut out = NoColor::new(Vec::new());
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_clean_report() {
        let text = render(|out| write_link_report(out, &LinkReport::default(), 3));
        assert_eq!(text, "Checked 3 notes\nAll references resolve\n");
    }

    #[test]
    fn test_dangling_report() {
        let report = LinkReport {
            dangling: vec![DanglingReference {
                source: "y".into(),
                target: "Z".into(),
            }],
            ..Default::default()
        };
        let text = render(|out| write_link_report(out, &report, 2));
        assert!(text.contains("Dangling references (1)"));
        assert!(text.contains("  y -> [[Z]]"));
        assert!(!text.contains("All references resolve"));
    }

    #[test]
    fn test_backlinks_listing() {
        let entries = vec![BacklinkEntry {
            slug: "y".into(),
            title: "Y".into(),
            excerpt: "why".into(),
        }];
        let text = render(|out| write_backlinks(out, "x", &entries));
        assert_eq!(text, "x (1)\n  y  Y  why\n");
    }

    #[test]
    fn test_no_backlinks() {
        let text = render(|out| write_backlinks(out, "x", &[]));
        assert_eq!(text, "No notes link to x\n");
    }
}
