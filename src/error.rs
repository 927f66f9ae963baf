//! Error types for XAR archive decoding.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when decoding a XAR archive, along with a convenient
//! [`Result<T>`] type alias.
//!
//! Every error is terminal for the archive being read: each variant reflects
//! a malformed input or a truncated/corrupted stream, not a transient
//! condition, so nothing in this crate retries. Errors propagate to the
//! caller via `?`; no layer catches and suppresses an error from a lower
//! layer.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`:
//!
//! ```rust,no_run
//! use unxar::{Archive, Result};
//!
//! fn list_files(path: &str) -> Result<()> {
//!     let archive = Archive::open_path(path)?;
//!     for entry in archive.walk() {
//!         println!("{} (id {})", entry.name, entry.id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Exhaustive Error Matching
//!
//! For fine-grained handling, match on specific variants:
//!
//! ```rust,no_run
//! use unxar::{Archive, Error};
//! use std::io::Cursor;
//!
//! fn open(data: Vec<u8>) {
//!     match Archive::open(Cursor::new(data)) {
//!         Ok(archive) => println!("{} files", archive.file_count()),
//!         Err(Error::SignatureMismatch { found }) => {
//!             eprintln!("not a XAR archive (leading bytes {:#010x})", found);
//!         }
//!         Err(Error::TocSizeMismatch { expected, actual }) => {
//!             eprintln!("TOC corrupted: declared {} bytes, got {}", expected, actual);
//!         }
//!         Err(e) => eprintln!("decode failed: {}", e),
//!     }
//! }
//! ```

use std::io;

/// The main error type for XAR archive decoding.
///
/// # Error Categories
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | I/O & bounds | [`Io`][Self::Io], [`Truncated`][Self::Truncated], [`InvalidOffset`][Self::InvalidOffset] | Short or unreadable source |
/// | Header | [`SignatureMismatch`][Self::SignatureMismatch], [`UnknownChecksumAlgorithm`][Self::UnknownChecksumAlgorithm] | Not a XAR, or an unknown format extension |
/// | TOC integrity | [`TocDecompression`][Self::TocDecompression], [`TocSizeMismatch`][Self::TocSizeMismatch] | Corrupted compressed TOC block |
/// | TOC structure | [`TocParse`][Self::TocParse], [`MissingField`][Self::MissingField] | Malformed TOC document |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while reading the byte source.
    ///
    /// Short reads are reported as [`Truncated`][Self::Truncated] instead;
    /// this variant covers every other kind of I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source ended before a required read could be satisfied.
    #[error("truncated archive: needed {needed} bytes at offset {offset:#x}")]
    Truncated {
        /// Byte offset at which the read started.
        offset: u64,
        /// Number of bytes the read required.
        needed: usize,
    },

    /// A seek target lies beyond the end of the byte source.
    ///
    /// Out-of-range seeks are rejected rather than clamped: the header's
    /// size fields are authoritative, and a target past the end means the
    /// archive is shorter than those fields claim.
    #[error("invalid offset {offset:#x}: source is {len} bytes")]
    InvalidOffset {
        /// The rejected seek target.
        offset: u64,
        /// Total length of the byte source.
        len: u64,
    },

    /// The first four bytes are not the `xar!` magic signature.
    #[error("signature mismatch: expected 'xar!', found {found:#010x}")]
    SignatureMismatch {
        /// The four leading bytes, decoded big-endian.
        found: u32,
    },

    /// The header's checksum-algorithm code has no known mapping.
    ///
    /// An unknown code is a decode failure, not a silently-accepted
    /// default; see [`ChecksumAlgorithm`](crate::ChecksumAlgorithm).
    #[error("unknown checksum algorithm code {code}")]
    UnknownChecksumAlgorithm {
        /// The unmapped algorithm code from the header.
        code: u32,
    },

    /// The compressed TOC block is not a valid zlib stream.
    #[error("TOC decompression failed: {reason}")]
    TocDecompression {
        /// Description of the inflation failure.
        reason: String,
    },

    /// The decompressed TOC length differs from the header's declared size.
    ///
    /// This check is mandatory: it is the only structural guarantee that
    /// the decompressed stream is the TOC and not truncated or corrupted
    /// data.
    #[error("TOC size mismatch: header declares {expected} bytes, decompressed to {actual}")]
    TocSizeMismatch {
        /// `toc_size` as declared in the header.
        expected: u64,
        /// Actual decompressed length.
        actual: u64,
    },

    /// The decompressed TOC is not a well-formed document of the expected
    /// shape.
    #[error("TOC parse error: {reason}")]
    TocParse {
        /// Description of the structural problem.
        reason: String,
    },

    /// A file entry lacks a required field (`id` or `name`).
    ///
    /// The whole parse fails; entries are never skipped.
    #[error("file entry missing required field '{field}'")]
    MissingField {
        /// Name of the absent (or unparseable) field.
        field: &'static str,
    },
}

impl Error {
    /// Returns `true` if this error indicates corrupted or truncated data
    /// in an archive that otherwise identified itself as XAR.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Error::Truncated { .. }
                | Error::InvalidOffset { .. }
                | Error::TocDecompression { .. }
                | Error::TocSizeMismatch { .. }
        )
    }

    /// Returns `true` if this error indicates the input is structurally not
    /// a (supported) XAR archive.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::SignatureMismatch { .. }
                | Error::UnknownChecksumAlgorithm { .. }
                | Error::TocParse { .. }
                | Error::MissingField { .. }
        )
    }

    /// Returns `true` if this error was caused by the source ending early.
    pub fn is_truncation(&self) -> bool {
        match self {
            Error::Truncated { .. } => true,
            Error::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }

    /// Creates a TocDecompression error.
    pub(crate) fn toc_decompression(reason: impl Into<String>) -> Self {
        Error::TocDecompression {
            reason: reason.into(),
        }
    }

    /// Creates a TocParse error.
    pub(crate) fn toc_parse(reason: impl Into<String>) -> Self {
        Error::TocParse {
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for XAR decoding.
///
/// This is defined as `std::result::Result<T, Error>` for convenience.
pub type Result<T> = std::result::Result<T, Error>;
