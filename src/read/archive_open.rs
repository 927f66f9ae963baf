//! Archive opening methods.
//!
//! This module provides methods for opening XAR archives from files and
//! arbitrary seekable readers.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::format::header::Header;
use crate::format::reader::ByteCursor;
use crate::format::toc::read_toc;
use crate::toc::DecodedToc;
use crate::{Error, Result};

use super::Archive;

impl Archive<BufReader<File>> {
    /// Opens an archive from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the archive is
    /// invalid.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(Error::Io)?;
        Self::open(BufReader::new(file))
    }
}

impl<R: Read + Seek> Archive<R> {
    /// Opens an archive from a seekable reader positioned at offset 0.
    ///
    /// Decoding runs the full pipeline in order: header decode, seek to
    /// the header's end, TOC inflation, declared-size validation, TOC
    /// parse. The first failure propagates unchanged and nothing partial
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive is invalid or cannot be read; see
    /// [`Error`] for the failure taxonomy.
    pub fn open(reader: R) -> Result<Self> {
        let mut cursor = ByteCursor::new(reader)?;

        let header = Header::parse(&mut cursor)?;
        log::debug!(
            "parsed header: version {}, TOC {} -> {} bytes, checksum {}",
            header.version,
            header.toc_compressed_size,
            header.toc_size,
            header.checksum_algorithm
        );

        let toc_bytes = read_toc(&mut cursor, &header)?;
        let toc = DecodedToc::parse(&toc_bytes)?;

        Ok(Self {
            reader: cursor.into_inner(),
            header,
            toc,
        })
    }
}
