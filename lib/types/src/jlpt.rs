use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Japanese-Language Proficiency Test level. `N5` is easiest, `N1` hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl JlptLevel {
    /// `jlpt` feature table, §4.4.2: N5 scores highest, N1 lowest, absent scores 0.
    #[inline]
    pub fn feature_points(self) -> f64 {
        match self {
            JlptLevel::N5 => 10.0,
            JlptLevel::N4 => 7.0,
            JlptLevel::N3 => 4.0,
            JlptLevel::N2 => 2.0,
            JlptLevel::N1 => 0.0,
        }
    }

    pub fn parse_loose(s: &str) -> Option<JlptLevel> {
        JlptLevel::from_str(&s.to_uppercase()).ok()
    }
}
