//! Tag repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Tag};

/// Repository for problem tags
pub struct TagRepository;

impl TagRepository {
    /// Tags of a problem, ordered by their rank on that problem
    pub async fn find_by_problem(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT t.id, t.value
            FROM tags t
            JOIN problem_tag pt ON t.id = pt.tag_id
            WHERE pt.problem_id = $1
            ORDER BY pt.rank ASC
            "#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(tags)
    }
}
