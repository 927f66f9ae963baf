//! Archive query methods.
//!
//! This module provides methods for navigating the decoded table of
//! contents without touching the byte source.

use crate::format::header::Header;
use crate::toc::{ChecksumRecord, DecodedToc, FileEntry, FileWalk, SignatureRecord};

use super::Archive;

impl<R> Archive<R> {
    /// Returns the decoded archive header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the decoded table of contents.
    pub fn toc(&self) -> &DecodedToc {
        &self.toc
    }

    /// Returns the top-level file entries in document order.
    pub fn files(&self) -> &[FileEntry] {
        &self.toc.files
    }

    /// Returns a depth-first walk over all file entries.
    ///
    /// Entries appear in document order, each before its children. The
    /// walk is lazy and finite, and re-walking yields the same sequence
    /// since the decoded TOC is immutable.
    pub fn walk(&self) -> FileWalk<'_> {
        self.toc.walk()
    }

    /// Returns the total number of file entries, including nested ones.
    pub fn file_count(&self) -> usize {
        self.walk().count()
    }

    /// Returns `true` if the archive contains no file entries.
    pub fn is_empty(&self) -> bool {
        self.toc.files.is_empty()
    }

    /// Finds an entry by identifier, anywhere in the tree.
    ///
    /// Identifiers are assigned by the archive producer and assumed
    /// unique; if they are not, the first match in document order wins.
    pub fn entry_by_id(&self, id: u64) -> Option<&FileEntry> {
        self.walk().find(|e| e.id == id)
    }

    /// Finds an entry by name, anywhere in the tree.
    ///
    /// Returns the first match in document order.
    pub fn entry_by_name(&self, name: &str) -> Option<&FileEntry> {
        self.walk().find(|e| e.name == name)
    }

    /// Returns the archive-level checksum records.
    pub fn checksums(&self) -> &[ChecksumRecord] {
        &self.toc.checksums
    }

    /// Returns the archive-level signature records.
    pub fn signatures(&self) -> &[SignatureRecord] {
        &self.toc.signatures
    }

    /// Returns a reference to the underlying byte source.
    ///
    /// Payload extraction is out of scope for this crate; a consumer can
    /// combine this source with an entry's extended `offset`/`length`
    /// metadata to extract file contents.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consumes the archive, returning the underlying byte source.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChecksumAlgorithm;

    fn make_entry(id: u64, name: &str, children: Vec<FileEntry>) -> FileEntry {
        FileEntry {
            id,
            name: name.to_string(),
            extended: Vec::new(),
            children,
        }
    }

    fn make_archive(files: Vec<FileEntry>) -> Archive<()> {
        Archive {
            reader: (),
            header: Header {
                header_size: 28,
                version: 1,
                toc_compressed_size: 0,
                toc_size: 0,
                checksum_algorithm: ChecksumAlgorithm::Sha1,
            },
            toc: DecodedToc {
                files,
                checksums: Vec::new(),
                signatures: Vec::new(),
            },
        }
    }

    #[test]
    fn test_entry_lookup() {
        let archive = make_archive(vec![make_entry(
            1,
            "dir",
            vec![make_entry(2, "inner.txt", vec![])],
        )]);

        assert_eq!(archive.file_count(), 2);
        assert_eq!(archive.entry_by_id(2).unwrap().name, "inner.txt");
        assert_eq!(archive.entry_by_name("dir").unwrap().id, 1);
        assert!(archive.entry_by_id(9).is_none());
        assert!(archive.entry_by_name("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let archive = make_archive(vec![
            make_entry(5, "first", vec![]),
            make_entry(5, "second", vec![]),
        ]);
        assert_eq!(archive.entry_by_id(5).unwrap().name, "first");
    }

    #[test]
    fn test_walk_restartable_through_archive() {
        let archive = make_archive(vec![
            make_entry(3, "b", vec![]),
            make_entry(1, "a", vec![]),
            make_entry(2, "c", vec![]),
        ]);
        let first: Vec<u64> = archive.walk().map(|e| e.id).collect();
        let second: Vec<u64> = archive.walk().map(|e| e.id).collect();
        assert_eq!(first, vec![3, 1, 2]);
        assert_eq!(first, second);
    }
}
