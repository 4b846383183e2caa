use std::io;

use byteorder::{BigEndian, ReadBytesExt};
use bytes::Bytes;

use crate::error::{AvcError, Result};

/// Length-checked reads on a [`io::Cursor<Bytes>`].
///
/// Every read verifies the remaining length first so a short buffer is
/// reported as [`AvcError::TruncatedInput`] with the exact shortfall rather
/// than a bare end-of-file.
pub(crate) trait AvcCursorExt {
    /// Bytes left between the cursor position and the end of the buffer.
    fn bytes_left(&self) -> usize;

    /// Fails unless at least `required` bytes remain.
    fn require(&self, required: usize) -> Result<()>;

    fn read_checked_u8(&mut self) -> Result<u8>;

    fn read_checked_u16(&mut self) -> Result<u16>;

    /// Slices the next `size` bytes out of the buffer without copying them.
    fn extract_bytes(&mut self, size: usize) -> Result<Bytes>;
}

impl AvcCursorExt for io::Cursor<Bytes> {
    fn bytes_left(&self) -> usize {
        self.get_ref()
            .len()
            .saturating_sub(self.position() as usize)
    }

    fn require(&self, required: usize) -> Result<()> {
        let available = self.bytes_left();
        if available < required {
            return Err(AvcError::TruncatedInput {
                required,
                available,
            });
        }

        Ok(())
    }

    fn read_checked_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        Ok(self.read_u8()?)
    }

    fn read_checked_u16(&mut self) -> Result<u16> {
        self.require(2)?;
        Ok(self.read_u16::<BigEndian>()?)
    }

    fn extract_bytes(&mut self, size: usize) -> Result<Bytes> {
        if size == 0 {
            return Ok(Bytes::new());
        }

        self.require(size)?;

        let position = self.position() as usize;

        // O(1): only bumps the reference count of the shared buffer.
        let slice = self.get_ref().slice(position..position + size);
        self.set_position((position + size) as u64);

        Ok(slice)
    }
}
