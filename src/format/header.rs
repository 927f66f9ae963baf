//! XAR archive header structure and parsing.

use std::fmt;
use std::io::{Read, Seek};

use crate::format::reader::ByteCursor;
use crate::format::{SIGNATURE, checksum_code};
use crate::{Error, Result};

/// The checksum algorithm declared in the archive header.
///
/// This is a closed enumeration: a header code outside the known set fails
/// decoding with [`Error::UnknownChecksumAlgorithm`] rather than mapping to
/// a catch-all variant. Digest computation itself is out of scope for this
/// crate; the value is surfaced for the verification collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    /// No archive checksum.
    None,
    /// SHA-1.
    Sha1,
    /// MD5.
    Md5,
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
}

impl ChecksumAlgorithm {
    /// Maps a header algorithm code to its enumeration member.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownChecksumAlgorithm`] for any unmapped code.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            checksum_code::NONE => Ok(Self::None),
            checksum_code::SHA1 => Ok(Self::Sha1),
            checksum_code::MD5 => Ok(Self::Md5),
            checksum_code::SHA256 => Ok(Self::Sha256),
            checksum_code::SHA512 => Ok(Self::Sha512),
            _ => Err(Error::UnknownChecksumAlgorithm { code }),
        }
    }

    /// Returns the header code for this algorithm.
    pub fn code(self) -> u32 {
        match self {
            Self::None => checksum_code::NONE,
            Self::Sha1 => checksum_code::SHA1,
            Self::Md5 => checksum_code::MD5,
            Self::Sha256 => checksum_code::SHA256,
            Self::Sha512 => checksum_code::SHA512,
        }
    }

    /// Returns the conventional lowercase name, as used by TOC `style`
    /// attributes.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed binary header at the start of a XAR archive.
///
/// All fields are decoded big-endian. The header locates and sizes the
/// compressed table of contents that immediately follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Total header length in bytes, including the magic.
    ///
    /// May exceed [`HEADER_FIXED_SIZE`](crate::format::HEADER_FIXED_SIZE);
    /// the surplus is reserved padding.
    pub header_size: u16,
    /// Format version. Recorded but not constrained.
    pub version: u16,
    /// Length in bytes of the compressed TOC block on disk.
    pub toc_compressed_size: u64,
    /// Length in bytes of the TOC after decompression.
    pub toc_size: u64,
    /// Algorithm for the archive-wide checksum.
    pub checksum_algorithm: ChecksumAlgorithm,
}

impl Header {
    /// Parses the header from a cursor positioned at offset 0.
    ///
    /// Reads exactly the six fixed fields; any remaining bytes up to
    /// `header_size` are reserved padding and left for the TOC reader's
    /// seek to skip.
    ///
    /// # Errors
    ///
    /// - [`Error::SignatureMismatch`] if the magic is not `xar!`
    /// - [`Error::UnknownChecksumAlgorithm`] if the algorithm code is
    ///   unmapped (raised before any TOC bytes are read)
    /// - [`Error::Truncated`] if the source ends inside the fixed fields
    pub fn parse<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let magic = cursor.read_u32_be()?;
        if magic != SIGNATURE {
            return Err(Error::SignatureMismatch { found: magic });
        }

        let header_size = cursor.read_u16_be()?;
        let version = cursor.read_u16_be()?;
        let toc_compressed_size = cursor.read_u64_be()?;
        let toc_size = cursor.read_u64_be()?;
        let checksum_algorithm = ChecksumAlgorithm::from_code(cursor.read_u32_be()?)?;

        Ok(Self {
            header_size,
            version,
            toc_compressed_size,
            toc_size,
            checksum_algorithm,
        })
    }

    /// Returns the byte position where the compressed TOC block starts.
    ///
    /// The TOC immediately follows the header, so this is `header_size`.
    pub fn toc_offset(&self) -> u64 {
        u64::from(self.header_size)
    }
}
