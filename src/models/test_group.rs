//! Test groups
//!
//! Tests of a problem are scored in contiguous groups. Groups are written in a
//! compact form such as `1-3;4;5-10`: groups are separated by `;`, and each
//! group is either a single test number or a `first-last` range. Together the
//! groups must cover `1..=num_tests` in order, without gaps or overlaps.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_TESTS;

const MAX_TEST_COUNT: u32 = MAX_TESTS as u32;

/// An inclusive range of test numbers scored as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestGroup {
    pub first: u32,
    pub last: u32,
}

impl TestGroup {
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Number of tests in the group
    pub fn test_count(&self) -> u32 {
        self.last - self.first + 1
    }

    pub fn contains(&self, test: u32) -> bool {
        (self.first..=self.last).contains(&test)
    }
}

/// A test group specification that does not partition the tests.
///
/// Every variant but `TooManyTests` carries the 1-based index of the offending
/// group. A specification that stops short reports the index of its last group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TestGroupError {
    #[error("Too many dashes in group {group}.")]
    TooManyDashes { group: usize },

    #[error("Illegal character in group {group}.")]
    IllegalCharacter { group: usize },

    #[error("Wrong order in group {group}.")]
    WrongOrder { group: usize },

    #[error("Group {group} should start at test {expected}.")]
    WrongStart { group: usize, expected: u32 },

    #[error("Value exceeds number of tests in group {group}.")]
    ExceedsTests { group: usize },

    #[error("Tests {first} through {last} are missing.")]
    MissingTests { group: usize, first: u32, last: u32 },

    #[error("Cannot group {num_tests} tests, at most {max} are allowed.")]
    TooManyTests { num_tests: u32, max: u32 },
}

impl TestGroupError {
    /// 1-based index of the group the error refers to
    pub fn group(&self) -> Option<usize> {
        match *self {
            Self::TooManyDashes { group }
            | Self::IllegalCharacter { group }
            | Self::WrongOrder { group }
            | Self::WrongStart { group, .. }
            | Self::ExceedsTests { group }
            | Self::MissingTests { group, .. } => Some(group),
            Self::TooManyTests { .. } => None,
        }
    }
}

/// Parse a test group specification against `num_tests` tests.
///
/// An absent or empty specification means every test is its own group.
/// Counts above the per-problem test limit are refused before anything is built.
pub fn parse_test_groups(
    spec: Option<&str>,
    num_tests: u32,
) -> Result<Vec<TestGroup>, TestGroupError> {
    if num_tests > MAX_TEST_COUNT {
        return Err(TestGroupError::TooManyTests {
            num_tests,
            max: MAX_TEST_COUNT,
        });
    }

    let spec = match spec {
        Some(spec) if !spec.is_empty() => spec,
        _ => return Ok((1..=num_tests).map(|i| TestGroup::new(i, i)).collect()),
    };

    let mut groups = Vec::new();
    let mut prev = 0u32;
    let mut index = 0usize;

    for (i, token) in spec.split(';').enumerate() {
        let group = i + 1;
        index = group;

        let parts: Vec<&str> = token.split('-').collect();
        let (first, last) = match parts.as_slice() {
            [single] => (*single, *single),
            [first, last] => (*first, *last),
            _ => return Err(TestGroupError::TooManyDashes { group }),
        };

        let (first, last) = match (parse_test_number(first), parse_test_number(last)) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(TestGroupError::IllegalCharacter { group }),
        };

        if first > last {
            return Err(TestGroupError::WrongOrder { group });
        }

        let expected = prev.saturating_add(1);
        if first != expected {
            return Err(TestGroupError::WrongStart { group, expected });
        }

        if last > num_tests {
            return Err(TestGroupError::ExceedsTests { group });
        }

        groups.push(TestGroup::new(first, last));
        prev = last;
    }

    if prev != num_tests {
        return Err(TestGroupError::MissingTests {
            group: index,
            first: prev + 1,
            last: num_tests,
        });
    }

    Ok(groups)
}

/// Digits only; values too large for `u32` saturate, which is always out of range.
fn parse_test_number(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(spec: &str, num_tests: u32) -> TestGroupError {
        parse_test_groups(Some(spec), num_tests).unwrap_err()
    }

    #[test]
    fn test_empty_spec_yields_singletons() {
        for n in 1..=12 {
            let groups = parse_test_groups(None, n).unwrap();
            assert_eq!(groups.len(), n as usize);
            for (i, group) in groups.iter().enumerate() {
                let test = i as u32 + 1;
                assert_eq!(*group, TestGroup::new(test, test));
            }
        }
        assert_eq!(
            parse_test_groups(Some(""), 3).unwrap(),
            vec![TestGroup::new(1, 1), TestGroup::new(2, 2), TestGroup::new(3, 3)]
        );
    }

    #[test]
    fn test_mixed_groups() {
        let groups = parse_test_groups(Some("1-3;4;5-10"), 10).unwrap();
        assert_eq!(
            groups,
            vec![TestGroup::new(1, 3), TestGroup::new(4, 4), TestGroup::new(5, 10)]
        );
        assert_eq!(groups.iter().map(TestGroup::test_count).sum::<u32>(), 10);
    }

    #[test]
    fn test_single_group_covering_everything() {
        assert_eq!(
            parse_test_groups(Some("1-20"), 20).unwrap(),
            vec![TestGroup::new(1, 20)]
        );
    }

    #[test]
    fn test_leading_zeros_are_numbers() {
        assert_eq!(
            parse_test_groups(Some("01-02;03"), 3).unwrap(),
            vec![TestGroup::new(1, 2), TestGroup::new(3, 3)]
        );
    }

    #[test]
    fn test_gap_between_groups() {
        let err = parse_err("1-3;5-10", 10);
        assert_eq!(err, TestGroupError::WrongStart { group: 2, expected: 4 });
        assert_eq!(err.to_string(), "Group 2 should start at test 4.");
    }

    #[test]
    fn test_must_start_at_one() {
        let err = parse_err("2-10", 10);
        assert_eq!(err, TestGroupError::WrongStart { group: 1, expected: 1 });
        assert_eq!(err.to_string(), "Group 1 should start at test 1.");
    }

    #[test]
    fn test_overlap_is_a_wrong_start() {
        assert_eq!(
            parse_err("1-5;5-10", 10),
            TestGroupError::WrongStart { group: 2, expected: 6 }
        );
    }

    #[test]
    fn test_missing_tail() {
        let err = parse_err("1-5;6-8", 10);
        assert_eq!(err.group(), Some(2));
        assert_eq!(
            err,
            TestGroupError::MissingTests { group: 2, first: 9, last: 10 }
        );
        assert_eq!(err.to_string(), "Tests 9 through 10 are missing.");
    }

    #[test]
    fn test_too_many_dashes() {
        assert_eq!(parse_err("1-2-3", 3), TestGroupError::TooManyDashes { group: 1 });
        assert_eq!(
            parse_err("1;2-3-4", 4).to_string(),
            "Too many dashes in group 2."
        );
    }

    #[test]
    fn test_illegal_characters() {
        for (spec, group) in [("1-a", 1), ("1; 2", 2), ("1-", 1), ("1;;2", 2), ("1-2;", 2)] {
            assert_eq!(
                parse_err(spec, 2),
                TestGroupError::IllegalCharacter { group },
                "spec {:?}",
                spec
            );
        }
        assert_eq!(parse_err("x", 1).to_string(), "Illegal character in group 1.");
    }

    #[test]
    fn test_wrong_order() {
        let err = parse_err("3-1", 3);
        assert_eq!(err, TestGroupError::WrongOrder { group: 1 });
        assert_eq!(err.to_string(), "Wrong order in group 1.");
    }

    #[test]
    fn test_exceeds_number_of_tests() {
        assert_eq!(parse_err("1-3;4-11", 10), TestGroupError::ExceedsTests { group: 2 });
        assert_eq!(
            parse_err("1-99999999999999999999", 10),
            TestGroupError::ExceedsTests { group: 1 }
        );
        assert_eq!(
            parse_err("1-3;4-11", 10).to_string(),
            "Value exceeds number of tests in group 2."
        );
    }

    #[test]
    fn test_group_contains() {
        let group = TestGroup::new(4, 6);
        assert!(group.contains(4));
        assert!(group.contains(6));
        assert!(!group.contains(7));
        assert_eq!(group.test_count(), 3);
    }

    #[test]
    fn test_count_above_limit_is_refused() {
        let err = parse_test_groups(None, u32::MAX).unwrap_err();
        assert_eq!(
            err,
            TestGroupError::TooManyTests { num_tests: u32::MAX, max: 100 }
        );
        assert_eq!(err.group(), None);
        assert_eq!(
            parse_test_groups(Some("1-101"), 101).unwrap_err().to_string(),
            "Cannot group 101 tests, at most 100 are allowed."
        );
        assert_eq!(parse_test_groups(None, 100).unwrap().len(), 100);
    }
}
