//! Attachment repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Attachment};

/// Repository for problem attachments
pub struct AttachmentRepository;

impl AttachmentRepository {
    /// Find the attachment of a problem with the given file name
    pub async fn find_by_problem_and_name(
        pool: &PgPool,
        problem_id: &Uuid,
        name: &str,
    ) -> AppResult<Option<Attachment>> {
        let attachment = sqlx::query_as::<_, Attachment>(
            r#"SELECT * FROM attachments WHERE problem_id = $1 AND name = $2"#,
        )
        .bind(problem_id)
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(attachment)
    }
}
