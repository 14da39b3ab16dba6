#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary note files must parse or fail, never panic
    let _ = notegraph::corpus::frontmatter::split_frontmatter(data);
    let _ = notegraph::corpus::frontmatter::parse_note_source(data);
});
