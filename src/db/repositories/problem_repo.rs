//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Problem};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Insert a problem, or update every column of an existing one
    pub async fn upsert(pool: &PgPool, problem: &Problem) -> AppResult<Problem> {
        tracing::debug!(problem = %problem.name, id = %problem.id, "Upserting problem");

        let stored = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (
                id, name, statement, num_tests, time_limit_ms, memory_limit_kb,
                grader, has_witness, public_sources, public_tests, year, grade,
                test_groups, visibility, user_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (id) DO UPDATE
            SET
                name = EXCLUDED.name,
                statement = EXCLUDED.statement,
                num_tests = EXCLUDED.num_tests,
                time_limit_ms = EXCLUDED.time_limit_ms,
                memory_limit_kb = EXCLUDED.memory_limit_kb,
                grader = EXCLUDED.grader,
                has_witness = EXCLUDED.has_witness,
                public_sources = EXCLUDED.public_sources,
                public_tests = EXCLUDED.public_tests,
                year = EXCLUDED.year,
                grade = EXCLUDED.grade,
                test_groups = EXCLUDED.test_groups,
                visibility = EXCLUDED.visibility,
                user_id = EXCLUDED.user_id,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(problem.id)
        .bind(&problem.name)
        .bind(&problem.statement)
        .bind(problem.num_tests)
        .bind(problem.time_limit_ms)
        .bind(problem.memory_limit_kb)
        .bind(&problem.grader)
        .bind(problem.has_witness)
        .bind(problem.public_sources)
        .bind(problem.public_tests)
        .bind(problem.year)
        .bind(&problem.grade)
        .bind(&problem.test_groups)
        .bind(problem.visibility)
        .bind(problem.user_id)
        .fetch_one(pool)
        .await?;

        Ok(stored)
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Find problem by name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE name = $1"#)
            .bind(name)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Find a problem with the given name that is not `exclude_id`
    pub async fn find_by_name_excluding(
        pool: &PgPool,
        name: &str,
        exclude_id: &Uuid,
    ) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"SELECT * FROM problems WHERE name = $1 AND id <> $2 LIMIT 1"#,
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_optional(pool)
        .await?;

        Ok(problem)
    }

    /// List every problem ordered by name
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(problems)
    }

    /// Delete problem
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM problems WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
