//! Input validation utilities
//!
//! One function per problem field. Each returns the message shown next to the
//! field in the edit form.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{self, MAX_TESTS, MIN_TESTS, MIN_YEAR};
use crate::models::Grade;

static PROBLEM_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(constants::PROBLEM_NAME_PATTERN).expect("problem name pattern is valid")
});

/// Validate problem name format (uniqueness is checked against the store)
pub fn validate_problem_name(name: &str) -> Result<(), &'static str> {
    if !PROBLEM_NAME_RE.is_match(name) {
        return Err("The problem name must be between 2 and 15 symbols long and contain lowercase letters and digits only.");
    }
    Ok(())
}

/// Validate the problem statement
pub fn validate_statement(statement: &str) -> Result<(), &'static str> {
    if statement.is_empty() {
        return Err("The statement cannot be empty.");
    }
    Ok(())
}

/// Validate the number of tests
pub fn validate_num_tests(num_tests: i32) -> Result<(), String> {
    if !(MIN_TESTS..=MAX_TESTS).contains(&num_tests) {
        return Err(format!(
            "Problems must have between {} and {} tests.",
            MIN_TESTS, MAX_TESTS
        ));
    }
    Ok(())
}

/// Validate time limit (in milliseconds)
pub fn validate_time_limit(ms: i32) -> Result<(), &'static str> {
    if ms <= 0 {
        return Err("The time limit must be positive.");
    }
    Ok(())
}

/// Validate memory limit (in KB)
pub fn validate_memory_limit(kb: i32) -> Result<(), &'static str> {
    if kb <= 0 {
        return Err("The memory limit must be positive.");
    }
    Ok(())
}

/// A problem is judged by a grader, by `.ok` witness files, or both
pub fn validate_judging(grader: Option<&str>, has_witness: bool) -> Result<(), &'static str> {
    let has_grader = grader.is_some_and(|g| !g.is_empty());
    if !has_grader && !has_witness {
        return Err("Problems must either use a grader or .ok files (or both).");
    }
    Ok(())
}

/// Validate the public sources flag
pub fn validate_public_sources(flag: i16) -> Result<(), &'static str> {
    if !is_flag(flag) {
        return Err("Public sources field has to be true or false.");
    }
    Ok(())
}

/// Validate the public tests flag
pub fn validate_public_tests(flag: i16) -> Result<(), &'static str> {
    if !is_flag(flag) {
        return Err("Public tests field has to be true or false.");
    }
    Ok(())
}

fn is_flag(value: i16) -> bool {
    value == 0 || value == 1
}

/// Validate the year against the current calendar year
pub fn validate_year(year: i32, current_year: i32) -> Result<(), &'static str> {
    if year < MIN_YEAR || year > current_year {
        return Err("Year is invalid.");
    }
    Ok(())
}

/// Validate grade (`juniors`, `seniors` or 5 to 12)
pub fn validate_grade(grade: &str) -> Result<(), &'static str> {
    match Grade::parse(grade) {
        Some(_) => Ok(()),
        None => Err("Grade must range from 5 to 12, or be either juniors or seniors."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_problem_name() {
        assert!(validate_problem_name("ab").is_ok());
        assert!(validate_problem_name("sum2").is_ok());
        assert!(validate_problem_name("abcdefghijklmno").is_ok()); // 15 chars
        assert!(validate_problem_name("A1").is_err()); // Uppercase
        assert!(validate_problem_name("abcdefghijklmnop").is_err()); // 16 chars
        assert!(validate_problem_name("a").is_err()); // Too short
        assert!(validate_problem_name("with-dash").is_err());
        assert!(validate_problem_name("").is_err());
    }

    #[test]
    fn test_validate_num_tests() {
        assert!(validate_num_tests(1).is_ok());
        assert!(validate_num_tests(100).is_ok());
        assert_eq!(
            validate_num_tests(0).unwrap_err(),
            "Problems must have between 1 and 100 tests."
        );
        assert!(validate_num_tests(101).is_err());
    }

    #[test]
    fn test_validate_limits() {
        assert!(validate_time_limit(1).is_ok());
        assert!(validate_time_limit(0).is_err());
        assert!(validate_memory_limit(-5).is_err());
        assert!(validate_memory_limit(65536).is_ok());
    }

    #[test]
    fn test_validate_judging() {
        assert!(validate_judging(Some("eval.cpp"), false).is_ok());
        assert!(validate_judging(None, true).is_ok());
        assert!(validate_judging(Some("eval.cpp"), true).is_ok());
        assert!(validate_judging(None, false).is_err());
        assert!(validate_judging(Some(""), false).is_err());
    }

    #[test]
    fn test_validate_flags() {
        assert!(validate_public_sources(0).is_ok());
        assert!(validate_public_sources(1).is_ok());
        assert!(validate_public_sources(2).is_err());
        assert!(validate_public_tests(-1).is_err());
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(1970, 2024).is_ok());
        assert!(validate_year(2024, 2024).is_ok());
        assert!(validate_year(1969, 2024).is_err());
        assert!(validate_year(2025, 2024).is_err());
    }

    #[test]
    fn test_validate_grade() {
        assert!(validate_grade("11").is_ok());
        assert!(validate_grade("juniors").is_ok());
        assert!(validate_grade("13").is_err());
        assert!(validate_grade("5a").is_err());
        assert_eq!(
            validate_grade("4"),
            Err("Grade must range from 5 to 12, or be either juniors or seniors.")
        );
    }
}
