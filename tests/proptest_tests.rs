//! Property-based tests using proptest.
//!
//! These tests verify invariants of the decoding pipeline using randomly
//! generated inputs: header fields survive an encode-then-parse round
//! trip, arbitrary entry names and ids survive the full pipeline, and
//! traversal order always equals document order.

mod common;

use std::io::Cursor;

use proptest::prelude::*;
use unxar::format::header::Header;
use unxar::format::reader::ByteCursor;
use unxar::{Archive, Error};

use common::{build_archive, build_header};

/// Strategy for entry names: 1-20 characters that need no XML escaping.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9_. -]{0,19}"
}

proptest! {
    /// Header fields always round-trip through encode-then-parse.
    #[test]
    fn header_fields_round_trip(
        header_size in 28u16..=512,
        version in any::<u16>(),
        compressed_size in any::<u64>(),
        uncompressed_size in any::<u64>(),
        algorithm in 0u32..=4,
    ) {
        let data = build_header(header_size, version, compressed_size, uncompressed_size, algorithm);
        let mut cursor = ByteCursor::new(Cursor::new(data)).unwrap();
        let header = Header::parse(&mut cursor).unwrap();

        prop_assert_eq!(header.header_size, header_size);
        prop_assert_eq!(header.version, version);
        prop_assert_eq!(header.toc_compressed_size, compressed_size);
        prop_assert_eq!(header.toc_size, uncompressed_size);
        prop_assert_eq!(header.checksum_algorithm.code(), algorithm);
        prop_assert_eq!(header.toc_offset(), u64::from(header_size));
    }

    /// Unknown algorithm codes always fail with the dedicated variant.
    #[test]
    fn unknown_algorithm_codes_always_rejected(code in 5u32..) {
        let data = build_header(28, 1, 0, 0, code);
        let err = Archive::open(Cursor::new(data)).unwrap_err();
        prop_assert!(
            matches!(err, Error::UnknownChecksumAlgorithm { code: c } if c == code),
            "code {} gave: {:?}",
            code,
            err
        );
    }

    /// Arbitrary ids and names survive the full pipeline.
    #[test]
    fn entries_survive_pipeline(id in 0u64.., name in name_strategy()) {
        let toc = format!(
            r#"<xar><toc><file id="{id}"><name>{name}</name></file></toc></xar>"#
        );
        let archive = Archive::open(Cursor::new(build_archive(&toc))).unwrap();

        prop_assert_eq!(archive.files().len(), 1);
        prop_assert_eq!(archive.files()[0].id, id);
        prop_assert_eq!(&archive.files()[0].name, &name);
    }

    /// Traversal order equals document order for any id permutation.
    #[test]
    fn document_order_is_preserved(ids in proptest::collection::vec(0u64..1000, 1..12)) {
        let body: String = ids
            .iter()
            .enumerate()
            .map(|(i, id)| format!(r#"<file id="{id}"><name>f{i}</name></file>"#))
            .collect();
        let toc = format!("<xar><toc>{body}</toc></xar>");
        let archive = Archive::open(Cursor::new(build_archive(&toc))).unwrap();

        let decoded: Vec<u64> = archive.walk().map(|e| e.id).collect();
        prop_assert_eq!(decoded, ids);
    }

    /// The decoded TOC length always matches the header's declared size,
    /// so any declared size that differs by one is rejected.
    #[test]
    fn size_mismatch_always_detected(delta in prop_oneof![Just(-1i64), Just(1i64)]) {
        let toc = "<xar><toc></toc></xar>";
        let declared = (toc.len() as i64 + delta) as u64;
        let data = common::build_archive_with(toc, 28, 1, Some(declared));

        let err = Archive::open(Cursor::new(data)).unwrap_err();
        prop_assert!(
            matches!(err, Error::TocSizeMismatch { .. }),
            "delta {} gave: {:?}",
            delta,
            err
        );
    }
}
