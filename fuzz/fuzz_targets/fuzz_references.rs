#![no_main]

use libfuzzer_sys::fuzz_target;
use notegraph::corpus::{Corpus, Note};
use notegraph::index::{BuildOptions, build, extract_references};

fuzz_target!(|data: &str| {
    // Every extracted target must be a non-empty slice without "]"
    for target in extract_references(data) {
        assert!(!target.is_empty());
        assert!(!target.contains(']'));
    }

    // A body that links to its own title never backlinks to itself
    let corpus = Corpus::new(vec![Note::new("self", data, data)]);
    let output = build(&corpus, &BuildOptions::default());
    assert!(output.backlinks.is_empty());
});
