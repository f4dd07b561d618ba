//! Attachment model
//!
//! Test data and graders are uploaded as attachments of a problem and found
//! again purely by file name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Attachment database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub name: String,
    pub size: i64,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    /// File name of the input for test `num`
    pub fn test_input_name(num: u32) -> String {
        format!("grader_test{}.in", num)
    }

    /// File name of the witness (expected output) for test `num`
    pub fn test_witness_name(num: u32) -> String {
        format!("grader_test{}.ok", num)
    }

    /// File name of a grader; graders are uploaded under their own name
    pub fn grader_name(grader: &str) -> String {
        grader.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_convention() {
        assert_eq!(Attachment::test_input_name(3), "grader_test3.in");
        assert_eq!(Attachment::test_witness_name(12), "grader_test12.ok");
        assert_eq!(Attachment::grader_name("eval.cpp"), "eval.cpp");
    }
}
