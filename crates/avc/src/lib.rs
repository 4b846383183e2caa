//! A pure Rust codec for H.264 NAL units and the AVC decoder configuration record.
//!
//! This crate decodes and encodes the two structures that carry AVC video
//! metadata between container and transport formats:
//!
//! - the NAL unit ([`Nalu`]) with its one byte header ([`NaluHeader`]),
//!   ISO/IEC 14496-10 - 7.3.1
//! - the `avcC` record ([`AVCDecoderConfigurationRecord`]) used by MP4 and FLV to
//!   ship the profile, level and parameter sets of a stream,
//!   ISO/IEC 14496-15 - 5.2.4.1.1
//!
//! It does not look inside the SPS/PPS payloads, and AnnexB or RTP framing is
//! left to the caller: both produce or consume the same [`Nalu`] value.
//!
//! ## Examples
//!
//! ### Parsing
//!
//! ```rust
//! use bytes::Bytes;
//!
//! use avc::{AVCDecoderConfigurationRecord, AvcLevel, AvcProfile};
//!
//! let data = Bytes::from_static(b"\x01\x42\xc0\x1e\xff\xe1\x00\x04\x67\x42\xc0\x1e\x01\x00\x04\x68\xce\x3c\x80");
//!
//! let config = AVCDecoderConfigurationRecord::from_bytes(data).unwrap();
//!
//! assert_eq!(config.avc_profile_indication, AvcProfile::Baseline);
//! assert_eq!(config.avc_level_indication, AvcLevel::Level3);
//! assert_eq!(config.sps[0].header.nal_unit_type, 7);
//! ```
//!
//! ### Building
//!
//! ```rust
//! use bytes::Bytes;
//!
//! use avc::{AVCDecoderConfigurationRecord, AvcLevel, AvcProfile, Nalu, NaluHeader};
//!
//! let config = AVCDecoderConfigurationRecord {
//!     configuration_version: 1,
//!     avc_profile_indication: AvcProfile::High,
//!     profile_compatibility: 0,
//!     avc_level_indication: AvcLevel::Level31,
//!     length_size_minus_one: 3,
//!     sps: vec![Nalu::new(NaluHeader::new(3, 7), Bytes::from_static(b"spsdata"))],
//!     pps: vec![Nalu::new(NaluHeader::new(3, 8), Bytes::from_static(b"ppsdata"))],
//! };
//!
//! let mut built = Vec::new();
//! config.build(&mut built).unwrap();
//!
//! assert_eq!(built.len() as u64, config.size());
//! ```
//!
//! ## License
//!
//! This project is licensed under the [MIT](./LICENSE.MIT) or [Apache-2.0](./LICENSE.Apache-2.0) license.
//! You can choose between one of them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod config;
mod enums;
mod error;
mod io;
mod nalu;

pub use enums::*;

pub use self::config::AVCDecoderConfigurationRecord;
pub use self::error::{AvcError, Result};
pub use self::nalu::{Nalu, NaluHeader};

/// Installs a test subscriber once. `RUST_LOG` overrides the given level.
#[cfg(test)]
#[macro_export]
macro_rules! init_test_tracing {
    () => {
        $crate::init_test_tracing!(DEBUG);
    };
    ($level:ident) => {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing_subscriber::filter::LevelFilter::$level.into())
                    .from_env_lossy(),
            )
            .with_test_writer()
            .try_init();
    };
}
