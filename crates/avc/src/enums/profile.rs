use std::fmt;

/// AVC profiles as listed in ISO/IEC 14496-10 Annex A.
///
/// The codes follow the values used by libavcodec: the plain profiles are the
/// `profile_idc` byte itself, while the constrained and intra variants fold
/// their constraint flag into bit 9 or bit 11, which is why the code is 16 bits
/// wide even though an avcC record only carries 8.
///
/// Codes that are not listed here are kept as [`AvcProfile::Unknown`] and
/// display as `Forbidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvcProfile {
    /// 66
    Baseline,
    /// 578 (Baseline with constraint_set1_flag)
    ConstrainedBaseline,
    /// 77
    Main,
    /// 88
    Extended,
    /// 100
    High,
    /// 110
    High10,
    /// 2158 (High 10 with the intra flag)
    High10Intra,
    /// 122
    High422,
    /// 2170 (High 4:2:2 with the intra flag)
    High422Intra,
    /// 144
    High444,
    /// 244
    High444Predictive,
    /// 2192 (High 4:4:4 with the intra flag)
    High444Intra,
    /// Any other code.
    Unknown(u16),
}

impl AvcProfile {
    /// Returns the numeric profile code.
    pub const fn code(self) -> u16 {
        match self {
            Self::Baseline => 66,
            Self::ConstrainedBaseline => 578,
            Self::Main => 77,
            Self::Extended => 88,
            Self::High => 100,
            Self::High10 => 110,
            Self::High10Intra => 2158,
            Self::High422 => 122,
            Self::High422Intra => 2170,
            Self::High444 => 144,
            Self::High444Predictive => 244,
            Self::High444Intra => 2192,
            Self::Unknown(code) => code,
        }
    }

    /// Returns the canonical name, `Forbidden` for unknown codes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::ConstrainedBaseline => "ConstrainedBaseline",
            Self::Main => "Main",
            Self::Extended => "Extended",
            Self::High => "High",
            Self::High10 => "High10",
            Self::High10Intra => "High10Intra",
            Self::High422 => "High422",
            Self::High422Intra => "High422Intra",
            Self::High444 => "High444",
            Self::High444Predictive => "High444Predictive",
            Self::High444Intra => "High444Intra",
            Self::Unknown(_) => "Forbidden",
        }
    }
}

impl From<u16> for AvcProfile {
    fn from(code: u16) -> Self {
        match code {
            66 => Self::Baseline,
            578 => Self::ConstrainedBaseline,
            77 => Self::Main,
            88 => Self::Extended,
            100 => Self::High,
            110 => Self::High10,
            2158 => Self::High10Intra,
            122 => Self::High422,
            2170 => Self::High422Intra,
            144 => Self::High444,
            244 => Self::High444Predictive,
            2192 => Self::High444Intra,
            _ => Self::Unknown(code),
        }
    }
}

impl From<u8> for AvcProfile {
    fn from(profile_idc: u8) -> Self {
        Self::from(profile_idc as u16)
    }
}

impl From<AvcProfile> for u16 {
    fn from(profile: AvcProfile) -> Self {
        profile.code()
    }
}

impl fmt::Display for AvcProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_profile_names() {
        let cases: [(u16, &str); 14] = [
            (66, "Baseline"),
            (578, "ConstrainedBaseline"),
            (77, "Main"),
            (88, "Extended"),
            (100, "High"),
            (110, "High10"),
            (2158, "High10Intra"),
            (122, "High422"),
            (2170, "High422Intra"),
            (144, "High444"),
            (244, "High444Predictive"),
            (2192, "High444Intra"),
            (9999, "Forbidden"),
            (0, "Forbidden"),
        ];

        for (code, name) in cases {
            let profile = AvcProfile::from(code);
            assert_eq!(profile.to_string(), name, "code {code}");
            assert_eq!(u16::from(profile), code);
        }
    }

    #[test]
    fn test_profile_from_idc_byte() {
        assert_eq!(AvcProfile::from(100u8), AvcProfile::High);
        assert_eq!(AvcProfile::from(244u8), AvcProfile::High444Predictive);
        assert_eq!(AvcProfile::from(1u8), AvcProfile::Unknown(1));
    }
}
