//! Collaborator traits
//!
//! Problems never talk to the database directly. They go through these
//! traits, which `PgPool` implements by delegating to the repositories.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::{
    db::repositories::{AttachmentRepository, ProblemRepository, TagRepository, UserRepository},
    error::AppResult,
    models::{Attachment, Problem, Tag, User},
};

/// Problem persistence and queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProblemStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Problem>>;

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Problem>>;

    /// A problem called `name` other than the one with id `exclude_id`
    async fn find_by_name_excluding(
        &self,
        name: &str,
        exclude_id: Uuid,
    ) -> AppResult<Option<Problem>>;

    async fn list_all(&self) -> AppResult<Vec<Problem>>;

    /// Insert or update, returning the stored row
    async fn save(&self, problem: &Problem) -> AppResult<Problem>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// User lookup
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>>;
}

/// Problem tags
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Tags of a problem ordered by their rank
    async fn tags_for_problem(&self, problem_id: Uuid) -> AppResult<Vec<Tag>>;
}

/// Attachment lookup by file name
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    async fn find_by_problem_and_name(
        &self,
        problem_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Attachment>>;
}

#[async_trait]
impl ProblemStore for PgPool {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Problem>> {
        ProblemRepository::find_by_id(self, &id).await
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Problem>> {
        ProblemRepository::find_by_name(self, name).await
    }

    async fn find_by_name_excluding(
        &self,
        name: &str,
        exclude_id: Uuid,
    ) -> AppResult<Option<Problem>> {
        ProblemRepository::find_by_name_excluding(self, name, &exclude_id).await
    }

    async fn list_all(&self) -> AppResult<Vec<Problem>> {
        ProblemRepository::list_all(self).await
    }

    async fn save(&self, problem: &Problem) -> AppResult<Problem> {
        ProblemRepository::upsert(self, problem).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        ProblemRepository::delete(self, &id).await
    }
}

#[async_trait]
impl UserStore for PgPool {
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(self, &id).await
    }
}

#[async_trait]
impl TagStore for PgPool {
    async fn tags_for_problem(&self, problem_id: Uuid) -> AppResult<Vec<Tag>> {
        TagRepository::find_by_problem(self, &problem_id).await
    }
}

#[async_trait]
impl AttachmentStore for PgPool {
    async fn find_by_problem_and_name(
        &self,
        problem_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Attachment>> {
        AttachmentRepository::find_by_problem_and_name(self, &problem_id, name).await
    }
}
