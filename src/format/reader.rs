//! Low-level binary reading utilities for XAR format parsing.
//!
//! All multi-byte integers in the XAR header are big-endian.

use std::io::{Read, Seek, SeekFrom};

use crate::{Error, Result};

/// A sequential big-endian reader over a seekable byte source.
///
/// The cursor records the source's total length at construction and tracks
/// the current read position, so short reads and out-of-range seeks can be
/// reported with their exact offsets. Reads never retry: any I/O error is
/// surfaced immediately.
pub struct ByteCursor<R> {
    source: R,
    /// Total length of the source in bytes.
    len: u64,
    /// Current read position.
    position: u64,
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Creates a cursor over `source`, positioned at offset 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the source's length cannot be determined.
    pub fn new(mut source: R) -> Result<Self> {
        let len = source.seek(SeekFrom::End(0))?;
        source.seek(SeekFrom::Start(0))?;
        Ok(Self {
            source,
            len,
            position: 0,
        })
    }

    /// Returns the total length of the source in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current read position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Seeks to an absolute byte offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOffset`] if `offset` exceeds the source
    /// bounds. Out-of-range seeks are rejected, not clamped.
    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        if offset > self.len {
            return Err(Error::InvalidOffset {
                offset,
                len: self.len,
            });
        }
        self.source.seek(SeekFrom::Start(offset))?;
        self.position = offset;
        Ok(())
    }

    /// Reads exactly `count` bytes, advancing the position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Truncated`] if fewer than `count` bytes remain.
    pub fn read_exact(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads an unsigned 16-bit big-endian integer.
    pub fn read_u16_be(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Reads an unsigned 32-bit big-endian integer.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Reads an unsigned 64-bit big-endian integer.
    pub fn read_u64_be(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(u64::from_be_bytes(buf))
    }

    /// Consumes the cursor, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Returns a mutable reference to the underlying source.
    ///
    /// Reading or seeking through this reference desynchronizes the
    /// cursor's recorded position; callers must `seek_to` afterwards.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let offset = self.position;
        self.source.read_exact(buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                Error::Truncated {
                    offset,
                    needed: buf.len(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        self.position += buf.len() as u64;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cursor(data: &[u8]) -> ByteCursor<Cursor<&[u8]>> {
        ByteCursor::new(Cursor::new(data)).unwrap()
    }

    #[test]
    fn test_len_and_position() {
        let c = cursor(&[1, 2, 3, 4]);
        assert_eq!(c.len(), 4);
        assert_eq!(c.position(), 0);
        assert!(!c.is_empty());
    }

    #[test]
    fn test_read_u16_be() {
        let mut c = cursor(&[0x12, 0x34]);
        assert_eq!(c.read_u16_be().unwrap(), 0x1234);
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn test_read_u32_be() {
        let mut c = cursor(&[0x78, 0x61, 0x72, 0x21]);
        assert_eq!(c.read_u32_be().unwrap(), 0x78617221);
    }

    #[test]
    fn test_read_u64_be() {
        let mut c = cursor(&[0, 0, 0, 0, 0, 0, 0x01, 0x00]);
        assert_eq!(c.read_u64_be().unwrap(), 256);
    }

    #[test]
    fn test_read_exact() {
        let mut c = cursor(&[1, 2, 3, 4, 5]);
        assert_eq!(c.read_exact(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(c.position(), 3);
    }

    #[test]
    fn test_read_past_end_is_truncated() {
        let mut c = cursor(&[1, 2]);
        let err = c.read_exact(4).unwrap_err();
        assert!(
            matches!(err, Error::Truncated { offset: 0, needed: 4 }),
            "got: {:?}",
            err
        );
    }

    #[test]
    fn test_truncated_reports_offset() {
        let mut c = cursor(&[1, 2, 3, 4, 5, 6]);
        c.read_exact(4).unwrap();
        let err = c.read_exact(4).unwrap_err();
        assert!(matches!(err, Error::Truncated { offset: 4, needed: 4 }));
    }

    #[test]
    fn test_seek_to() {
        let mut c = cursor(&[1, 2, 3, 4, 5]);
        c.seek_to(3).unwrap();
        assert_eq!(c.position(), 3);
        assert_eq!(c.read_exact(2).unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_seek_to_end_is_allowed() {
        let mut c = cursor(&[1, 2, 3]);
        c.seek_to(3).unwrap();
        assert_eq!(c.position(), 3);
    }

    #[test]
    fn test_seek_past_end_is_rejected() {
        let mut c = cursor(&[1, 2, 3]);
        let err = c.seek_to(4).unwrap_err();
        assert!(matches!(err, Error::InvalidOffset { offset: 4, len: 3 }));
        // Position unchanged by the rejected seek
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn test_into_inner() {
        let c = cursor(&[1, 2, 3]);
        let inner = c.into_inner();
        assert_eq!(inner.into_inner(), &[1, 2, 3]);
    }
}
