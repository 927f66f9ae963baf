//! XAR container format constants, definitions, and low-level parsing
//! utilities.
//!
//! This module contains the magic number, header layout, and TOC element
//! names defined by the XAR archive format, plus the binary reading
//! primitives the header decoder is built on.

pub mod header;
pub mod reader;
pub mod toc;

/// The XAR file signature (magic bytes).
///
/// Every valid XAR archive starts with these 4 bytes: `'x' 'a' 'r' '!'`,
/// i.e. `0x78617221` decoded big-endian.
pub const SIGNATURE: u32 = 0x7861_7221;

/// Size in bytes of the fixed header fields.
///
/// The fixed portion contains:
/// - 4 bytes: signature
/// - 2 bytes: header size
/// - 2 bytes: format version
/// - 8 bytes: compressed TOC size
/// - 8 bytes: uncompressed TOC size
/// - 4 bytes: checksum algorithm code
///
/// `header_size` in the header may exceed this to allow format extension;
/// the extra bytes are reserved padding, skipped when locating the TOC.
pub const HEADER_FIXED_SIZE: u64 = 28;

/// Checksum algorithm codes used in the XAR header.
pub mod checksum_code {
    /// No archive checksum.
    pub const NONE: u32 = 0;
    /// SHA-1.
    pub const SHA1: u32 = 1;
    /// MD5.
    pub const MD5: u32 = 2;
    /// SHA-256.
    pub const SHA256: u32 = 3;
    /// SHA-512.
    pub const SHA512: u32 = 4;
}

/// Element and attribute names used in the TOC document.
pub mod element {
    /// Document root.
    pub const XAR: &str = "xar";
    /// Table of contents container.
    pub const TOC: &str = "toc";
    /// One archived file or directory.
    pub const FILE: &str = "file";
    /// File entry name.
    pub const NAME: &str = "name";
    /// File entry identifier attribute.
    pub const ID: &str = "id";
    /// Archive-level checksum record.
    pub const CHECKSUM: &str = "checksum";
    /// Archive-level signature record.
    pub const SIGNATURE: &str = "signature";
    /// Secondary (CMS) signature record.
    pub const X_SIGNATURE: &str = "x-signature";
    /// Record style attribute (algorithm or signature scheme label).
    pub const STYLE: &str = "style";
    /// Heap offset child of checksum/signature records.
    pub const OFFSET: &str = "offset";
    /// Heap size child of checksum/signature records.
    pub const SIZE: &str = "size";
    /// Base64 DER certificate inside a signature record.
    pub const X509_CERTIFICATE: &str = "X509Certificate";
}
