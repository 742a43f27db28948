//! Integration tests for the SWC codec round trip.
//!
//! These tests validate the parse -> serialize -> parse pipeline through the public
//! API only: semantic equality of the reconstructed graph, stripping of comments and
//! blank lines, preservation of node insertion order, and strict all-or-nothing
//! behavior on malformed input.

use morphoscope::prelude::*;

const SAMPLE_PATH: &str = "tests/samples/dendrite.swc";

/// Structural equality: same samples in the same order with the same parent links.
fn assert_same_morphology(a: &NeuronMorphology, b: &NeuronMorphology) {
    assert_eq!(a.len(), b.len());
    for (left, right) in a.nodes().iter().zip(b.nodes()) {
        assert_eq!(left, right);
        assert_eq!(a.parent_of(left.id), b.parent_of(right.id));
        assert_eq!(a.children_of(left.id), b.children_of(right.id));
    }
}

#[test]
fn round_trip_preserves_sample_file() {
    let morphology = load(SAMPLE_PATH).unwrap();
    assert_eq!(morphology.len(), 10);

    let text = write_swc(&morphology);
    let reparsed = parse_swc(&text).unwrap();
    assert_same_morphology(&morphology, &reparsed);

    // a second trip is byte-identical, the first serialization is canonical
    assert_eq!(write_swc(&reparsed), text);
}

#[test]
fn round_trip_drops_comments_and_blank_lines() {
    let text = "# header comment\n\n1 1 0 0 0 1 -1\n\n# inline\n2 3 0 0 5 1 1\n";
    let morphology = parse_swc(text).unwrap();
    let serialized = write_swc(&morphology);

    assert!(!serialized.contains('#'));
    assert_eq!(serialized, "1 1 0 0 0 1 -1\n2 3 0 0 5 1 1\n");
}

#[test]
fn round_trip_keeps_non_numeric_insertion_order() {
    // declaration order 7, 3, 5 with forward parent references
    let text = "7 1 0 0 0 2 -1\n3 3 1 0 0 1 5\n5 3 2 0 0 1 7\n";
    let morphology = parse_swc(text).unwrap();

    let ids: Vec<NodeId> = morphology.nodes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![7, 3, 5]);
    assert_eq!(write_swc(&morphology), text);
}

#[test]
fn round_trip_is_lossless_for_fractional_coordinates() {
    let text = "1 1 0.1 0.2 0.30000000000000004 3.9999999999 -1\n";
    let morphology = parse_swc(text).unwrap();
    let reparsed = parse_swc(&write_swc(&morphology)).unwrap();
    assert_same_morphology(&morphology, &reparsed);
}

#[test]
fn round_trip_through_save_and_load() {
    let morphology = load(SAMPLE_PATH).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = save(dir.path().join("copy.swc"), &morphology).unwrap();

    let reloaded = load(path).unwrap();
    assert_same_morphology(&morphology, &reloaded);
}

#[test]
fn malformed_input_fails_without_partial_result() {
    // the bad record comes last; a best-effort parser would already have built
    // most of the graph, ours must surface the error instead
    let text = "1 1 0 0 0 1 -1\n2 3 0 0 5 1 1\n3 3 0 0 ten 1 2\n";
    match parse_swc(text) {
        Err(Error::MalformedLine { number, line }) => {
            assert_eq!(number, 3);
            assert!(line.contains("ten"));
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}
