use std::io;

use thiserror::Error;

/// Errors produced while decoding or encoding NAL units and avcC records.
///
/// Every variant is permanent for the input that produced it; there is no
/// partially decoded value to recover.
#[derive(Error, Debug)]
pub enum AvcError {
    /// A NAL unit needs at least its header byte.
    #[error("empty NAL unit")]
    EmptyInput,

    /// Fewer bytes remain than a fixed or declared field needs.
    #[error("requires {required} bytes, only {available} available")]
    TruncatedInput {
        /// Bytes the field needs.
        required: usize,
        /// Bytes left in the buffer.
        available: usize,
    },

    /// A sequence parameter set entry could not be decoded as a NAL unit.
    #[error("malformed SPS at index {index}")]
    MalformedSps {
        /// Position of the entry in the SPS list.
        index: usize,
        /// The underlying NAL unit error.
        source: Box<AvcError>,
    },

    /// A picture parameter set entry could not be decoded as a NAL unit.
    #[error("malformed PPS at index {index}")]
    MalformedPps {
        /// Position of the entry in the PPS list.
        index: usize,
        /// The underlying NAL unit error.
        source: Box<AvcError>,
    },

    /// The buffer ended before `numOfPictureParameterSets`.
    #[error("no PPS count")]
    MissingPpsCount,

    /// A parameter set does not fit the 16-bit length field.
    #[error("parameter set at index {index} is {size} bytes, exceeds 65535")]
    EntryTooLarge {
        /// Position of the entry in its list.
        index: usize,
        /// Encoded size of the NAL unit.
        size: usize,
    },

    /// More parameter sets than the count field can express.
    #[error("too many {kind} entries: {count} > {max}")]
    TooManyParameterSets {
        /// `"SPS"` or `"PPS"`.
        kind: &'static str,
        /// Number of entries in the record.
        count: usize,
        /// Largest count the field can hold.
        max: usize,
    },

    /// An unknown profile code does not fit the 8-bit AVCProfileIndication.
    #[error("profile code {0} does not fit in AVCProfileIndication")]
    ProfileOutOfRange(u16),

    /// The destination writer failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Shorthand for results carrying an [`AvcError`].
pub type Result<T> = std::result::Result<T, AvcError>;
