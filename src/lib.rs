//! # unxar
//!
//! A pure-Rust reader for the XAR archive container format.
//!
//! XAR archives start with a fixed big-endian binary header that locates a
//! zlib-compressed, XML-encoded table of contents (TOC). This crate decodes
//! that pipeline — header parsing, TOC inflation, structural validation —
//! and exposes a typed, navigable model of the TOC: the file entry tree,
//! archive-level checksum records, and archive-level signature records.
//!
//! Extracting file payloads, computing digests, and verifying signatures
//! are deliberately out of scope: consumers combine the decoded metadata
//! with the archive's byte source (see [`Archive::get_ref`]) to do that
//! work themselves.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unxar::{Archive, Result};
//!
//! fn main() -> Result<()> {
//!     let archive = Archive::open_path("installer.pkg")?;
//!
//!     println!("checksum algorithm: {}", archive.header().checksum_algorithm);
//!     for entry in archive.walk() {
//!         println!("{:>6}  {}", entry.id, entry.name);
//!     }
//!     for sig in archive.signatures() {
//!         println!("signed: {} ({} certificates)", sig.style, sig.certificates.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Any seekable byte source works; in-memory data goes through
//! [`std::io::Cursor`]:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use unxar::Archive;
//!
//! # fn main() -> unxar::Result<()> {
//! # let bytes: Vec<u8> = vec![];
//! let archive = Archive::open(Cursor::new(bytes))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Decoding guarantees
//!
//! - The decoded TOC's length is validated against the header's declared
//!   size; a mismatch is an error, never a warning.
//! - File entries are surfaced in document order, exactly as the archive
//!   producer serialized them.
//! - Construction is all-or-nothing: the first decode error propagates
//!   and no partially-decoded archive is ever returned.
//! - Decoding is single-threaded and synchronous; once constructed, the
//!   decoded model is immutable and freely shareable across threads.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod read;
pub mod toc;

pub use error::{Error, Result};
pub use format::header::{ChecksumAlgorithm, Header};
pub use read::Archive;
pub use toc::{ChecksumRecord, DecodedToc, FileEntry, FileWalk, SignatureRecord};
