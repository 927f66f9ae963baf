//! Shared test utilities for integration tests.
//!
//! This module provides common helper functions used across multiple test
//! files. Archive construction helpers are consolidated here to avoid
//! duplication: building a XAR archive for the reader needs only zlib
//! compression and an XML string, so tests craft their own fixtures byte
//! by byte.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test
//! file compiles as a separate crate and may only use a subset of these
//! helpers.

#![allow(dead_code)]

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

/// Checksum algorithm code used by default in built headers (SHA-1).
pub const DEFAULT_ALGORITHM: u32 = 1;

/// Compresses a TOC document with zlib at the default level.
pub fn compress_toc(toc_xml: &str) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(toc_xml.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

/// Builds the 28-byte fixed header with explicit field values.
///
/// `header_size` may exceed 28 to exercise reserved padding; the caller is
/// responsible for appending the padding bytes.
pub fn build_header(
    header_size: u16,
    version: u16,
    toc_compressed_size: u64,
    toc_size: u64,
    checksum_algorithm: u32,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(28);
    data.extend_from_slice(b"xar!");
    data.extend_from_slice(&header_size.to_be_bytes());
    data.extend_from_slice(&version.to_be_bytes());
    data.extend_from_slice(&toc_compressed_size.to_be_bytes());
    data.extend_from_slice(&toc_size.to_be_bytes());
    data.extend_from_slice(&checksum_algorithm.to_be_bytes());
    data
}

/// Builds a complete archive around the given TOC document.
///
/// Header fields are derived from the document: `header_size` 28,
/// version 1, sizes computed, SHA-1 checksum algorithm.
pub fn build_archive(toc_xml: &str) -> Vec<u8> {
    build_archive_with(toc_xml, 28, DEFAULT_ALGORITHM, None)
}

/// Builds an archive with explicit header size, algorithm code, and an
/// optional override of the declared uncompressed TOC size.
///
/// When `header_size` exceeds 28 the gap is filled with zero padding.
/// `declared_toc_size` replaces the real decompressed length in the
/// header, for size-mismatch tests.
pub fn build_archive_with(
    toc_xml: &str,
    header_size: u16,
    checksum_algorithm: u32,
    declared_toc_size: Option<u64>,
) -> Vec<u8> {
    let compressed = compress_toc(toc_xml);
    let toc_size = declared_toc_size.unwrap_or(toc_xml.len() as u64);

    let mut data = build_header(
        header_size,
        1,
        compressed.len() as u64,
        toc_size,
        checksum_algorithm,
    );
    data.resize(header_size as usize, 0);
    data.extend_from_slice(&compressed);
    data
}

/// Extracts the error from a Result, panicking if it's Ok.
///
/// This helper is useful for tests that expect an error. It provides a
/// cleaner alternative to `unwrap_err()` when the Ok type doesn't
/// implement Debug.
pub fn expect_err<T, E>(result: Result<T, E>) -> E {
    match result {
        Ok(_) => panic!("Expected error but got Ok"),
        Err(e) => e,
    }
}
