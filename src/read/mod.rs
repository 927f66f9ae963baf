//! Archive reading API.
//!
//! This module provides the public API for decoding XAR archives: opening
//! a byte source, then navigating the decoded table of contents.
//!
//! # Example
//!
//! ```rust,ignore
//! use unxar::Archive;
//!
//! let archive = Archive::open_path("installer.pkg")?;
//! for entry in archive.walk() {
//!     println!("{} (id {})", entry.name, entry.id);
//! }
//! ```

mod archive_open;
mod archive_query;

use crate::format::header::Header;
use crate::toc::DecodedToc;

/// A decoded XAR archive.
///
/// Holds the byte source alongside the immutable decoded header and table
/// of contents. Construction either fully decodes the header and TOC or
/// fails; a partially-built archive is never exposed. After construction,
/// all exposed state is read-only.
///
/// The decoded model is freely shareable across threads. The byte source's
/// read position is not: it is external state, so a source handed out via
/// [`Archive::get_ref`] must not be shared across concurrent readers
/// without external synchronization.
#[derive(Debug)]
pub struct Archive<R> {
    pub(crate) reader: R,
    pub(crate) header: Header,
    pub(crate) toc: DecodedToc,
}
