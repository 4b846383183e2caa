use std::fmt;

/// AVC levels as listed in ISO/IEC 14496-10 Annex A (Table A-1).
///
/// The code is `level_idc`, ten times the level number. Unlisted codes are
/// kept as [`AvcLevel::Unknown`] and display as `Forbidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvcLevel {
    /// 10
    Level1,
    /// 11
    Level11,
    /// 12
    Level12,
    /// 13
    Level13,
    /// 20
    Level2,
    /// 21
    Level21,
    /// 22
    Level22,
    /// 30
    Level3,
    /// 31
    Level31,
    /// 32
    Level32,
    /// 40
    Level4,
    /// 41
    Level41,
    /// 50
    Level5,
    /// 51
    Level51,
    /// Any other code.
    Unknown(u8),
}

impl AvcLevel {
    /// Returns the `level_idc` code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Level1 => 10,
            Self::Level11 => 11,
            Self::Level12 => 12,
            Self::Level13 => 13,
            Self::Level2 => 20,
            Self::Level21 => 21,
            Self::Level22 => 22,
            Self::Level3 => 30,
            Self::Level31 => 31,
            Self::Level32 => 32,
            Self::Level4 => 40,
            Self::Level41 => 41,
            Self::Level5 => 50,
            Self::Level51 => 51,
            Self::Unknown(code) => code,
        }
    }

    /// Returns the canonical name, `Forbidden` for unknown codes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Level1 => "Level_1",
            Self::Level11 => "Level_11",
            Self::Level12 => "Level_12",
            Self::Level13 => "Level_13",
            Self::Level2 => "Level_2",
            Self::Level21 => "Level_21",
            Self::Level22 => "Level_22",
            Self::Level3 => "Level_3",
            Self::Level31 => "Level_31",
            Self::Level32 => "Level_32",
            Self::Level4 => "Level_4",
            Self::Level41 => "Level_41",
            Self::Level5 => "Level_5",
            Self::Level51 => "Level_51",
            Self::Unknown(_) => "Forbidden",
        }
    }
}

impl From<u8> for AvcLevel {
    fn from(code: u8) -> Self {
        match code {
            10 => Self::Level1,
            11 => Self::Level11,
            12 => Self::Level12,
            13 => Self::Level13,
            20 => Self::Level2,
            21 => Self::Level21,
            22 => Self::Level22,
            30 => Self::Level3,
            31 => Self::Level31,
            32 => Self::Level32,
            40 => Self::Level4,
            41 => Self::Level41,
            50 => Self::Level5,
            51 => Self::Level51,
            _ => Self::Unknown(code),
        }
    }
}

impl From<AvcLevel> for u8 {
    fn from(level: AvcLevel) -> Self {
        level.code()
    }
}

impl fmt::Display for AvcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        let cases: [(u8, &str); 16] = [
            (10, "Level_1"),
            (11, "Level_11"),
            (12, "Level_12"),
            (13, "Level_13"),
            (20, "Level_2"),
            (21, "Level_21"),
            (22, "Level_22"),
            (30, "Level_3"),
            (31, "Level_31"),
            (32, "Level_32"),
            (40, "Level_4"),
            (41, "Level_41"),
            (50, "Level_5"),
            (51, "Level_51"),
            (52, "Forbidden"),
            (9, "Forbidden"),
        ];

        for (code, name) in cases {
            let level = AvcLevel::from(code);
            assert_eq!(level.to_string(), name, "code {code}");
            assert_eq!(u8::from(level), code);
        }
    }

    #[test]
    fn test_unknown_level_keeps_code() {
        assert_eq!(AvcLevel::from(0xFF), AvcLevel::Unknown(0xFF));
        assert_eq!(AvcLevel::Unknown(0xFF).code(), 0xFF);
    }
}
