// tests/cid_snapshot_tests.rs
//
// Snapshot-tests the CID JSON schema's shape and key order (§4.4), mirroring
// the teacher's own use of `insta` for other formatted output
// (tests/ir_generator_snapshot_tests.rs, tests/ast_snapshot_tests.rs).
use coveron::ast::NodeKind;
use coveron::extractor::CoverageExtractor;
use coveron::fixtures::{leaf, pos, TestCursor};
use coveron::marker_plan::{build_plan, rewrite};
use coveron::model::CidDocument;
use coveron::serializer::serialize;
use coveron::store::CidStore;

const SOURCE: &str = "int f(void) {\n    int x = 1;\n    return x;\n}\n";
const FILE: &str = "snap.c";

fn function_fixture() -> TestCursor {
    let stmt = leaf(NodeKind::Other, pos(2, 5), pos(2, 15));
    let ret = leaf(NodeKind::ReturnStmt, pos(3, 5), pos(3, 14));
    let body = TestCursor::new(NodeKind::CompoundStmt, pos(1, 13), pos(4, 1)).with_file_basename(FILE).with_children(vec![stmt, ret]);
    TestCursor::new(NodeKind::FunctionDecl, pos(1, 5), pos(1, 6)).with_name("f").with_file_basename(FILE).with_children(vec![body])
}

fn translation_unit() -> TestCursor {
    TestCursor::new(NodeKind::TranslationUnit, pos(1, 1), pos(4, 2)).with_file_basename(FILE).with_children(vec![function_fixture()])
}

fn build_document() -> CidDocument {
    let mut store = CidStore::new(SOURCE.as_bytes(), true, true);
    let mut extractor = CoverageExtractor::new(&mut store, FILE, true, true);
    extractor.extract_translation_unit(&translation_unit()).unwrap();

    CidDocument {
        source_path: FILE.to_string(),
        source_sha256_hex: store.source_sha256().to_string(),
        source_base64: store.source_base64().to_string(),
        instrumentation_random_hex: store.instrumentation_random().to_string(),
        cri_path: "snap.cri".to_string(),
        checkpoint_markers_enabled: true,
        evaluation_markers_enabled: true,
        marker_data: store.marker_data(),
        code_data: store.code_data(),
    }
}

#[test]
fn cid_document_json_shape_is_stable() {
    let document = build_document();
    insta::assert_json_snapshot!(document, {
        ".instrumentation_random_hex" => "[random]",
    });
}

#[test]
fn plain_serialize_round_trips_through_redacted_snapshot() {
    let document = build_document();
    let bytes = serialize(&document, true).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    insta::assert_json_snapshot!(value, {
        ".instrumentation_random_hex" => "[random]",
    });
}

#[test]
fn gzip_and_plain_serialize_agree_once_decompressed() {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let document = build_document();
    let plain = serialize(&document, true).unwrap();
    let gzipped = serialize(&document, false).unwrap();

    let mut decoder = GzDecoder::new(&gzipped[..]);
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded).unwrap();
    assert_eq!(decoded, plain);
}

#[test]
fn rewritten_source_snapshot_matches_marker_plan() {
    let mut store = CidStore::new(SOURCE.as_bytes(), true, true);
    let mut extractor = CoverageExtractor::new(&mut store, FILE, true, true);
    extractor.extract_translation_unit(&translation_unit()).unwrap();

    let marker_data = store.marker_data();
    let plan = build_plan(&marker_data, extractor.compound_wraps(), "___COVERON_FILE_SNAP");
    let rewritten = rewrite(SOURCE, &plan, "#include \"coveron_runtime.h\"\n");

    insta::assert_snapshot!(rewritten);
}
