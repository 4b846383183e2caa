use std::io;

use byteorder::WriteBytesExt;
use bytes::{Bytes, BytesMut};

use crate::error::{AvcError, Result};

/// The one byte NAL unit header.
/// ISO/IEC 14496-10 - 7.3.1, 7.4.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NaluHeader {
    /// The `nal_ref_idc` is comprised of 2 bits.
    ///
    /// A nonzero value marks a NAL unit needed to decode reference pictures
    /// (parameter sets, reference slices).
    pub nal_ref_idc: u8,

    /// The `nal_unit_type` is comprised of 5 bits and selects the kind of
    /// payload the NAL unit carries.
    pub nal_unit_type: u8,
}

impl NaluHeader {
    /// Builds a header, masking both fields to their bit widths.
    pub const fn new(nal_ref_idc: u8, nal_unit_type: u8) -> Self {
        Self {
            nal_ref_idc: nal_ref_idc & 0b11,
            nal_unit_type: nal_unit_type & 0b11111,
        }
    }
}

impl From<u8> for NaluHeader {
    fn from(byte: u8) -> Self {
        Self {
            nal_ref_idc: (byte >> 5) & 0b11,
            nal_unit_type: byte & 0b11111,
        }
    }
}

impl From<NaluHeader> for u8 {
    /// Packs the header as `ref_idc << 5 | type`.
    ///
    /// The fields are not re-validated here; use [`NaluHeader::new`] to mask them.
    fn from(header: NaluHeader) -> Self {
        (header.nal_ref_idc << 5) | header.nal_unit_type
    }
}

/// A single NAL unit: the header byte and everything after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nalu {
    /// The decoded header byte.
    pub header: NaluHeader,
    /// The raw bytes following the header, possibly empty.
    pub payload: Bytes,
}

impl Nalu {
    /// Creates a NAL unit from its header and payload.
    pub fn new(header: NaluHeader, payload: impl Into<Bytes>) -> Self {
        Self {
            header,
            payload: payload.into(),
        }
    }

    /// Parses a raw NAL unit. The first byte is the header and the rest is
    /// taken as the payload without copying.
    pub fn parse(data: Bytes) -> Result<Self> {
        let Some(&first) = data.first() else {
            return Err(AvcError::EmptyInput);
        };

        Ok(Self {
            header: NaluHeader::from(first),
            payload: data.slice(1..),
        })
    }

    /// Returns the encoded size in bytes (header plus payload).
    pub fn size(&self) -> usize {
        1 + self.payload.len()
    }

    /// Writes the header byte followed by the payload.
    pub fn build<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self.header.into())?;
        writer.write_all(&self.payload)?;

        Ok(())
    }

    /// Encodes the NAL unit into a fresh buffer.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.size());
        buf.extend_from_slice(&[u8::from(self.header)]);
        buf.extend_from_slice(&self.payload);
        buf.freeze()
    }
}
