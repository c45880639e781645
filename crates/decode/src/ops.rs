//! Decode Operations

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use flate2::read::GzDecoder;
use std::io::Read;
use tracing::instrument;
use xmltree::Element;

/// Inflate a single-member gzip stream and decode it as UTF-8 text.
#[instrument(skip(input), fields(input_size = input.len(), output_size))]
pub fn decompress(input: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(input);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output).or_raise(|| ErrorKind::Gzip)?;
    tracing::Span::current().record("output_size", output.len());
    String::from_utf8(output).or_raise(|| ErrorKind::Utf8)
}

/// Parse document text into a generic element tree.
///
/// This is markup parsing only; nothing here validates the OVAL schema.
pub fn parse(text: &str) -> Result<Element> {
    Element::parse(text.as_bytes()).or_raise(|| ErrorKind::Xml)
}

/// Decode one fetched document: gzip, then UTF-8, then XML.
#[instrument(skip(input), fields(input_size = input.len()))]
pub fn decode(input: &[u8]) -> Result<Element> {
    let text = decompress(input)?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::{decode, decompress, parse};
    use crate::error::ErrorKind;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use rstest::rstest;
    use std::io::Write;

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
        <oval_definitions>
            <generator><product_name>SUSE OVAL</product_name></generator>
            <definitions/>
        </oval_definitions>"#;

    #[test]
    fn decodes_a_compressed_document() {
        let element = decode(&gzip(DOCUMENT.as_bytes())).unwrap();
        assert_eq!(element.name, "oval_definitions");
        assert!(element.get_child("generator").is_some());
    }

    #[test]
    fn decompress_round_trips_text() {
        let text = decompress(&gzip(DOCUMENT.as_bytes())).unwrap();
        assert_eq!(text, DOCUMENT);
    }

    #[rstest]
    #[case(b"this is not compressed data")]
    #[case(b"")]
    // A bare deflate stream has no gzip header.
    #[case(&[0x78, 0x9c, 0x03, 0x00, 0x00, 0x00, 0x00, 0x01])]
    fn invalid_gzip_data(#[case] input: &[u8]) {
        let err = decompress(input).unwrap_err();
        assert_eq!(*err, ErrorKind::Gzip);
    }

    #[test]
    fn invalid_utf8_after_inflation() {
        let err = decompress(&gzip(&[0xff, 0xfe, 0xfd])).unwrap_err();
        assert_eq!(*err, ErrorKind::Utf8);
    }

    #[rstest]
    #[case("<oval_definitions><unclosed></oval_definitions>")]
    #[case("not markup at all")]
    #[case("")]
    fn malformed_xml(#[case] text: &str) {
        let err = parse(text).unwrap_err();
        assert_eq!(*err, ErrorKind::Xml);
    }

    #[test]
    fn decode_surfaces_the_failing_stage() {
        let err = decode(b"garbage").unwrap_err();
        assert_eq!(*err, ErrorKind::Gzip);

        let err = decode(&gzip(b"<broken")).unwrap_err();
        assert_eq!(*err, ErrorKind::Xml);
    }
}
