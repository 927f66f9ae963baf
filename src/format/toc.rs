//! Compressed TOC block reading and inflation.
//!
//! The TOC block sits immediately after the header, occupies exactly
//! `toc_compressed_size` bytes on disk, and is a zlib stream that must
//! inflate to exactly `toc_size` bytes.

use std::io::{Read, Seek};

use flate2::read::ZlibDecoder;

use crate::format::header::Header;
use crate::format::reader::ByteCursor;
use crate::{Error, Result};

/// Reads and inflates the compressed TOC block located by `header`.
///
/// Seeks to `header.toc_offset()`, reads exactly
/// `header.toc_compressed_size` bytes, and inflates them. The decompressed
/// length must equal `header.toc_size` exactly; this is a mandatory
/// integrity check, the only structural guarantee that the inflated stream
/// is the TOC and not truncated or corrupted data.
///
/// # Errors
///
/// - [`Error::InvalidOffset`] if `header_size` lies past the end of the
///   source
/// - [`Error::Truncated`] if fewer than `toc_compressed_size` bytes remain
/// - [`Error::TocDecompression`] if the block is not a valid zlib stream
/// - [`Error::TocSizeMismatch`] if the inflated length differs from
///   `toc_size`
pub fn read_toc<R: Read + Seek>(cursor: &mut ByteCursor<R>, header: &Header) -> Result<Vec<u8>> {
    cursor.seek_to(header.toc_offset())?;

    let compressed_len = usize::try_from(header.toc_compressed_size)
        .map_err(|_| Error::toc_decompression("compressed TOC size exceeds addressable memory"))?;
    let compressed = cursor.read_exact(compressed_len)?;

    // Inflate one byte past the declared size so an oversized stream is
    // detected without buffering it in full.
    let mut toc = Vec::with_capacity(header.toc_size.min(1 << 20) as usize);
    let mut decoder = ZlibDecoder::new(&compressed[..]).take(header.toc_size.saturating_add(1));
    decoder
        .read_to_end(&mut toc)
        .map_err(|e| Error::toc_decompression(e.to_string()))?;

    if toc.len() as u64 != header.toc_size {
        return Err(Error::TocSizeMismatch {
            expected: header.toc_size,
            actual: toc.len() as u64,
        });
    }

    log::debug!(
        "inflated TOC: {} -> {} bytes",
        header.toc_compressed_size,
        toc.len()
    );
    Ok(toc)
}
