//! End-to-end builds of the fixture site through the library API.

use notegraph::index::build::{BuildRequest, build_site, load_site_corpus};
use notegraph::index::check::check_links;
use notegraph::index::{BACKLINKS_FILE, SEARCH_INDEX_FILE};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_site() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("site")
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Copy the fixture site into a fresh temp dir so builds never touch the repo
fn site_copy() -> TempDir {
    let dir = TempDir::new().unwrap();
    copy_dir(&fixture_site(), dir.path());
    dir
}

fn quiet_request(root: &Path) -> BuildRequest {
    BuildRequest {
        quiet: true,
        ..BuildRequest::new(root)
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_search_index_contains_published_notes_only() {
    let site = site_copy();
    build_site(&quiet_request(site.path())).unwrap();

    let index = read_json(&site.path().join("dist").join(SEARCH_INDEX_FILE));
    assert_eq!(
        index,
        json!([
            {
                "slug": "gardening",
                "title": "Gardening",
                "description": "Gardening - Personal notes and thoughts",
                "tags": ["plants"],
                "content": "Back to [[Welcome]]. Self [[Gardening]].\n"
            },
            {
                "slug": "welcome",
                "title": "Welcome",
                "description": "Start here",
                "tags": ["intro"],
                "content": "Read [[Gardening]] and [[Compost]]. Also [[Missing Note]].\n",
                "pubDate": "2024-01-01"
            }
        ])
    );
}

#[test]
fn test_backlinks_cover_all_stages() {
    let site = site_copy();
    let result = build_site(&quiet_request(site.path())).unwrap();

    let backlinks = read_json(&site.path().join("dist").join(BACKLINKS_FILE));
    assert_eq!(
        backlinks,
        json!({
            "compost": [
                {"slug": "ideas/seed-bank", "title": "Seed Bank", "excerpt": ""},
                {"slug": "welcome", "title": "Welcome", "excerpt": "Start here"}
            ],
            "gardening": [
                {"slug": "compost", "title": "Compost", "excerpt": "Rotting well"},
                {"slug": "compost", "title": "Compost", "excerpt": "Rotting well"},
                {"slug": "welcome", "title": "Welcome", "excerpt": "Start here"}
            ],
            "welcome": [
                {"slug": "gardening", "title": "Gardening", "excerpt": ""}
            ]
        })
    );

    assert_eq!(result.stats.indexed_notes, 2);
    assert_eq!(result.stats.backlink_targets, 3);
    assert_eq!(result.stats.backlink_entries, 6);
}

#[test]
fn test_rebuild_is_byte_identical() {
    let site = site_copy();
    let dist = site.path().join("dist");

    build_site(&quiet_request(site.path())).unwrap();
    let first_index = fs::read(dist.join(SEARCH_INDEX_FILE)).unwrap();
    let first_links = fs::read(dist.join(BACKLINKS_FILE)).unwrap();

    build_site(&quiet_request(site.path())).unwrap();
    assert_eq!(first_index, fs::read(dist.join(SEARCH_INDEX_FILE)).unwrap());
    assert_eq!(first_links, fs::read(dist.join(BACKLINKS_FILE)).unwrap());
}

#[test]
fn test_mirror_written_only_when_present() {
    let site = site_copy();
    let public = site.path().join("public");

    let result = build_site(&quiet_request(site.path())).unwrap();
    assert!(result.written.mirrored.is_none());
    assert!(!public.exists());

    fs::create_dir_all(&public).unwrap();
    let result = build_site(&quiet_request(site.path())).unwrap();
    assert_eq!(result.written.mirrored.as_deref(), Some(public.as_path()));
    assert_eq!(
        fs::read(public.join(SEARCH_INDEX_FILE)).unwrap(),
        fs::read(site.path().join("dist").join(SEARCH_INDEX_FILE)).unwrap()
    );
}

#[test]
fn test_blocked_mirror_does_not_fail_build() {
    let site = site_copy();
    let public = site.path().join("public");
    fs::create_dir_all(public.join(SEARCH_INDEX_FILE).join("stale")).unwrap();

    let result = build_site(&quiet_request(site.path())).unwrap();
    assert!(result.written.mirrored.is_none());
    assert!(site.path().join("dist").join(BACKLINKS_FILE).is_file());
    assert!(!public.join(".search-index.json.tmp").exists());
}

#[test]
fn test_config_file_redirects_output() {
    let site = site_copy();
    fs::write(
        site.path().join("notegraph.json"),
        r#"{"out_dir": "build/static", "mirror_dir": null}"#,
    )
    .unwrap();

    build_site(&quiet_request(site.path())).unwrap();
    assert!(site.path().join("build/static").join(SEARCH_INDEX_FILE).is_file());
    assert!(!site.path().join("dist").exists());
}

#[test]
fn test_invalid_note_fails_build() {
    let site = site_copy();
    fs::write(
        site.path().join("src/content/notes/broken.md"),
        "---\ntitle: Broken\nstage: someday\ntags: []\n---\n",
    )
    .unwrap();

    let err = build_site(&quiet_request(site.path())).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.md"));
    assert!(!site.path().join("dist").exists());
}

#[test]
fn test_check_reports_fixture_problems() {
    let site = site_copy();
    let corpus = load_site_corpus(site.path()).unwrap();
    let report = check_links(&corpus);

    assert_eq!(report.dangling.len(), 1);
    assert_eq!(report.dangling[0].source, "welcome");
    assert_eq!(report.dangling[0].target, "Missing Note");
    assert_eq!(report.self_references, vec!["gardening".to_string()]);
    assert!(report.collisions.is_empty());
}
