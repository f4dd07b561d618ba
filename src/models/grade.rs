//! School grade a problem is aimed at

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_GRADE, MIN_GRADE};

/// Target audience of a problem.
///
/// Stored as free text: `juniors`, `seniors`, or a grade number written with
/// digits only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Juniors,
    Seniors,
    Class(u8),
}

impl Grade {
    /// Parse a stored grade. The whole string must be consumed; `"5a"` is not a grade.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "juniors" => return Some(Self::Juniors),
            "seniors" => return Some(Self::Seniors),
            _ => {}
        }

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // Overlong digit strings overflow and are rejected like any other out-of-range value
        let value: u8 = raw.parse().ok()?;
        (MIN_GRADE..=MAX_GRADE)
            .contains(&value)
            .then_some(Self::Class(value))
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Juniors => write!(f, "juniors"),
            Self::Seniors => write!(f, "seniors"),
            Self::Class(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_grades() {
        assert_eq!(Grade::parse("juniors"), Some(Grade::Juniors));
        assert_eq!(Grade::parse("seniors"), Some(Grade::Seniors));
        assert_eq!(Grade::parse("Juniors"), None);
    }

    #[test]
    fn test_numeric_grades() {
        assert_eq!(Grade::parse("11"), Some(Grade::Class(11)));
        assert_eq!(Grade::parse("5"), Some(Grade::Class(5)));
        assert_eq!(Grade::parse("12"), Some(Grade::Class(12)));
        assert_eq!(Grade::parse("05"), Some(Grade::Class(5)));
        assert_eq!(Grade::parse("4"), None);
        assert_eq!(Grade::parse("13"), None);
        assert_eq!(Grade::parse("300"), None);
    }

    #[test]
    fn test_partial_numbers_rejected() {
        assert_eq!(Grade::parse("5a"), None);
        assert_eq!(Grade::parse(" 7"), None);
        assert_eq!(Grade::parse("-6"), None);
        assert_eq!(Grade::parse(""), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for grade in [Grade::Juniors, Grade::Seniors, Grade::Class(9)] {
            assert_eq!(Grade::parse(&grade.to_string()), Some(grade));
        }
    }
}
