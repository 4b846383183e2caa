use std::io;

use byteorder::{BigEndian, WriteBytesExt};
use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::enums::{AvcLevel, AvcProfile};
use crate::error::{AvcError, Result};
use crate::io::AvcCursorExt;
use crate::nalu::Nalu;

/// Version byte every known writer emits.
const CONFIGURATION_VERSION: u8 = 1;

/// Fixed part: version, profile, compatibility, level, length size, SPS count.
const FIXED_HEADER_SIZE: usize = 6;

const MAX_SPS_COUNT: usize = 0b11111;
const MAX_PPS_COUNT: usize = u8::MAX as usize;
const MAX_ENTRY_SIZE: usize = u16::MAX as usize;

/// The AVC (H.264) Decoder Configuration Record.
/// ISO/IEC 14496-15 - 5.2.4.1.1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AVCDecoderConfigurationRecord {
    /// The `configuration_version` is expected to be 1. Other values are
    /// preserved as read.
    pub configuration_version: u8,

    /// The `avc_profile_indication` (aka AVCProfileIndication) contains the
    /// `profile_idc` from the SPS.
    ///
    /// Only the low byte of the profile code is carried on the wire.
    pub avc_profile_indication: AvcProfile,

    /// The `profile_compatibility` is the byte between `profile_idc` and
    /// `level_idc` in the SPS (the constraint flags).
    pub profile_compatibility: u8,

    /// The `avc_level_indication` (aka AVCLevelIndication) contains the
    /// `level_idc` from the SPS.
    pub avc_level_indication: AvcLevel,

    /// The `length_size_minus_one` is the size in bytes of the NALUnitLength
    /// field of the samples in the paired stream, minus one. 2 bits.
    pub length_size_minus_one: u8,

    /// The sequence parameter set NAL units, in ascending SPS id order.
    ///
    /// The order is kept as read; ids are not checked.
    pub sps: Vec<Nalu>,

    /// The picture parameter set NAL units, in ascending PPS id order.
    pub pps: Vec<Nalu>,
}

#[derive(Debug, Clone, Copy)]
enum ParameterSetKind {
    Sps,
    Pps,
}

impl ParameterSetKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Sps => "SPS",
            Self::Pps => "PPS",
        }
    }

    const fn max_count(self) -> usize {
        match self {
            Self::Sps => MAX_SPS_COUNT,
            Self::Pps => MAX_PPS_COUNT,
        }
    }

    fn malformed(self, index: usize, source: AvcError) -> AvcError {
        let source = Box::new(source);
        match self {
            Self::Sps => AvcError::MalformedSps { index, source },
            Self::Pps => AvcError::MalformedPps { index, source },
        }
    }
}

impl AVCDecoderConfigurationRecord {
    /// Parses an AVCDecoderConfigurationRecord from a byte stream.
    ///
    /// On success the cursor is left right after the last PPS entry. Anything
    /// beyond it (such as the SPS extension block of the High profiles) is not
    /// read.
    pub fn parse(reader: &mut io::Cursor<Bytes>) -> Result<Self> {
        reader.require(FIXED_HEADER_SIZE)?;

        let configuration_version = reader.read_checked_u8()?;
        let avc_profile_indication = AvcProfile::from(reader.read_checked_u8()?);
        let profile_compatibility = reader.read_checked_u8()?;
        let avc_level_indication = AvcLevel::from(reader.read_checked_u8()?);
        let length_size_minus_one = reader.read_checked_u8()? & 0b00000011;
        let num_of_sequence_parameter_sets = reader.read_checked_u8()? & 0b00011111;

        if configuration_version != CONFIGURATION_VERSION {
            warn!(configuration_version, "unexpected avcC configuration version");
        }

        let sps = Self::parse_parameter_sets(
            reader,
            num_of_sequence_parameter_sets as usize,
            ParameterSetKind::Sps,
        )?;

        if reader.bytes_left() == 0 {
            return Err(AvcError::MissingPpsCount);
        }
        let num_of_picture_parameter_sets = reader.read_checked_u8()?;

        let pps = Self::parse_parameter_sets(
            reader,
            num_of_picture_parameter_sets as usize,
            ParameterSetKind::Pps,
        )?;

        let trailing = reader.bytes_left();
        if trailing > 0 {
            debug!(trailing, "ignoring bytes after the PPS list");
        }

        debug!(
            profile = %avc_profile_indication,
            level = %avc_level_indication,
            sps = sps.len(),
            pps = pps.len(),
            "parsed avcC record"
        );

        Ok(Self {
            configuration_version,
            avc_profile_indication,
            profile_compatibility,
            avc_level_indication,
            length_size_minus_one,
            sps,
            pps,
        })
    }

    /// Parses a record held entirely in `data`.
    pub fn from_bytes(data: Bytes) -> Result<Self> {
        Self::parse(&mut io::Cursor::new(data))
    }

    fn parse_parameter_sets(
        reader: &mut io::Cursor<Bytes>,
        count: usize,
        kind: ParameterSetKind,
    ) -> Result<Vec<Nalu>> {
        let mut sets = Vec::with_capacity(count);
        for index in 0..count {
            let length = reader.read_checked_u16()? as usize;
            let data = reader.extract_bytes(length)?;
            let nalu = Nalu::parse(data).map_err(|err| kind.malformed(index, err))?;

            trace!(
                kind = kind.name(),
                index,
                length,
                nal_unit_type = nalu.header.nal_unit_type,
                "parameter set"
            );
            sets.push(nalu);
        }

        Ok(sets)
    }

    /// Returns the size in bytes of the NALUnitLength field (1, 2 or 4).
    pub fn nal_length_size(&self) -> u8 {
        (self.length_size_minus_one & 0b11) + 1
    }

    /// Returns the total byte size of the encoded record.
    pub fn size(&self) -> u64 {
        FIXED_HEADER_SIZE as u64
        + self.sps.iter().map(|sps| {
            2 // sps_length
            + sps.size() as u64
        }).sum::<u64>()
        + 1 // num_of_picture_parameter_sets
        + self.pps.iter().map(|pps| {
            2 // pps_length
            + pps.size() as u64
        }).sum::<u64>()
    }

    fn check_parameter_sets(sets: &[Nalu], kind: ParameterSetKind) -> Result<()> {
        if sets.len() > kind.max_count() {
            return Err(AvcError::TooManyParameterSets {
                kind: kind.name(),
                count: sets.len(),
                max: kind.max_count(),
            });
        }

        if let Some((index, nalu)) = sets
            .iter()
            .enumerate()
            .find(|(_, nalu)| nalu.size() > MAX_ENTRY_SIZE)
        {
            return Err(AvcError::EntryTooLarge {
                index,
                size: nalu.size(),
            });
        }

        Ok(())
    }

    /// Returns the byte written as AVCProfileIndication.
    ///
    /// Named profiles wider than 8 bits carry their `profile_idc` in the low
    /// byte. An unknown code has no such meaning and must fit as is.
    fn profile_indication_byte(profile: AvcProfile) -> Result<u8> {
        match profile {
            AvcProfile::Unknown(code) => {
                u8::try_from(code).map_err(|_| AvcError::ProfileOutOfRange(code))
            }
            known => Ok(known.code() as u8),
        }
    }

    fn build_parameter_sets<T: io::Write>(sets: &[Nalu], writer: &mut T) -> Result<()> {
        for nalu in sets {
            writer.write_u16::<BigEndian>(nalu.size() as u16)?;
            nalu.build(writer)?;
        }

        Ok(())
    }

    /// Builds the AVCDecoderConfigurationRecord into a byte stream.
    ///
    /// The record is validated before anything is written, so a failure
    /// leaves the writer untouched.
    pub fn build<T: io::Write>(&self, writer: &mut T) -> Result<()> {
        Self::check_parameter_sets(&self.sps, ParameterSetKind::Sps)?;
        Self::check_parameter_sets(&self.pps, ParameterSetKind::Pps)?;
        let profile_indication = Self::profile_indication_byte(self.avc_profile_indication)?;

        writer.write_u8(self.configuration_version)?;
        writer.write_u8(profile_indication)?;
        writer.write_u8(self.profile_compatibility)?;
        writer.write_u8(self.avc_level_indication.code())?;
        // reserved bits are all ones
        writer.write_u8(0b11111100 | (self.length_size_minus_one & 0b11))?;

        writer.write_u8(0b11100000 | self.sps.len() as u8)?;
        Self::build_parameter_sets(&self.sps, writer)?;

        writer.write_u8(self.pps.len() as u8)?;
        Self::build_parameter_sets(&self.pps, writer)?;

        debug!(
            profile = %self.avc_profile_indication,
            level = %self.avc_level_indication,
            sps = self.sps.len(),
            pps = self.pps.len(),
            "built avcC record"
        );

        Ok(())
    }

    /// Encodes the record into a fresh buffer.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = Vec::with_capacity(self.size() as usize);
        self.build(&mut buf)?;
        Ok(Bytes::from(buf))
    }
}
