//! # CIDSerializer
//!
//! Emits a [`CidDocument`] as UTF-8 JSON, optionally gzip-wrapped (§4.4).
use crate::error::CoveronError;
use crate::model::CidDocument;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Serializes `document` to JSON; gzip-wraps the payload unless `nocomp` is set.
pub fn serialize(document: &CidDocument, nocomp: bool) -> Result<Vec<u8>, CoveronError> {
    let json = serde_json::to_vec(document)?;
    if nocomp {
        return Ok(json);
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodeData, MarkerData};
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn sample_document() -> CidDocument {
        CidDocument {
            source_path: "foo.c".into(),
            source_sha256_hex: "a".repeat(64),
            source_base64: "eA==".into(),
            instrumentation_random_hex: "b".repeat(32),
            cri_path: "foo.cri".into(),
            checkpoint_markers_enabled: true,
            evaluation_markers_enabled: true,
            marker_data: MarkerData::default(),
            code_data: CodeData::default(),
        }
    }

    #[test]
    fn nocomp_produces_plain_utf8_json() {
        let bytes = serialize(&sample_document(), true).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"source_path\":\"foo.c\""));
    }

    #[test]
    fn default_gzip_wraps_the_same_json() {
        let plain = serialize(&sample_document(), true).unwrap();
        let gzipped = serialize(&sample_document(), false).unwrap();
        assert_ne!(plain, gzipped);

        let mut decoder = GzDecoder::new(&gzipped[..]);
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, plain);
    }

    #[test]
    fn root_object_key_order_is_stable() {
        let bytes = serialize(&sample_document(), true).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let source_path_idx = text.find("\"source_path\"").unwrap();
        let code_data_idx = text.find("\"code_data\"").unwrap();
        assert!(source_path_idx < code_data_idx);
    }
}
