//! Typed model of the decompressed table of contents.
//!
//! [`DecodedToc::parse`] is a stateless transformation from the inflated
//! TOC bytes to an owned value tree, scoped to one decode call. The model
//! is immutable after construction and safe to share across threads.

mod file;
mod records;

pub use file::{FileEntry, FileWalk};
pub use records::{ChecksumRecord, SignatureRecord};

use roxmltree::{Document, Node};

use crate::format::element;
use crate::{Error, Result};

/// The decoded table of contents: file tree, checksum records, and
/// signature records.
///
/// Constructed once from the inflated TOC bytes and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToc {
    /// Top-level file entries in document order.
    pub files: Vec<FileEntry>,
    /// Archive-level checksum records in document order.
    pub checksums: Vec<ChecksumRecord>,
    /// Archive-level signature records (`signature` and `x-signature`)
    /// in document order.
    pub signatures: Vec<SignatureRecord>,
}

impl DecodedToc {
    /// Parses the decompressed TOC bytes into the typed model.
    ///
    /// The document root must be a `xar` element containing a `toc`
    /// element; a bare `toc` root is also accepted. Absent checksum and
    /// signature sections yield empty sequences, not errors.
    ///
    /// # Errors
    ///
    /// - [`Error::TocParse`] on invalid UTF-8, malformed XML, an
    ///   unexpected root element, or an undecodable record payload
    /// - [`Error::MissingField`] if any file entry lacks a valid `id` or
    ///   `name`
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::toc_parse(format!("TOC is not valid UTF-8: {e}")))?;
        let doc = Document::parse(text).map_err(|e| Error::toc_parse(e.to_string()))?;

        let root = doc.root_element();
        let toc = match root.tag_name().name() {
            element::XAR => root
                .children()
                .find(|n| n.is_element() && n.tag_name().name() == element::TOC)
                .ok_or_else(|| Error::toc_parse("xar root has no toc element"))?,
            element::TOC => root,
            other => {
                return Err(Error::toc_parse(format!("unexpected root element '{other}'")));
            }
        };

        let mut files = Vec::new();
        collect_files(toc, &mut files)?;

        let mut checksums = Vec::new();
        let mut signatures = Vec::new();
        for child in toc.children().filter(Node::is_element) {
            match child.tag_name().name() {
                element::CHECKSUM => checksums.push(ChecksumRecord::from_node(child)?),
                element::SIGNATURE | element::X_SIGNATURE => {
                    signatures.push(SignatureRecord::from_node(child)?);
                }
                _ => {}
            }
        }

        log::debug!(
            "decoded TOC: {} top-level files, {} checksums, {} signatures",
            files.len(),
            checksums.len(),
            signatures.len()
        );

        Ok(Self {
            files,
            checksums,
            signatures,
        })
    }

    /// Returns a depth-first walk over all file entries in document order.
    pub fn walk(&self) -> FileWalk<'_> {
        FileWalk::new(&self.files)
    }
}

/// Collects outermost `file` elements below `node` in document order.
///
/// File elements may nest below intermediate wrapper elements, not only as
/// direct children of `toc`; nesting *within* a `file` element is handled
/// by [`FileEntry::from_node`] itself.
fn collect_files(node: Node<'_, '_>, out: &mut Vec<FileEntry>) -> Result<()> {
    for child in node.children().filter(Node::is_element) {
        if child.tag_name().name() == element::FILE {
            out.push(FileEntry::from_node(child)?);
        } else {
            collect_files(child, out)?;
        }
    }
    Ok(())
}
