//! Database module
//!
//! This module handles database connections, migrations, repositories, and
//! the collaborator traits problems use to reach them.

pub mod connection;
pub mod repositories;
pub mod store;

use sqlx::PgPool;

pub use connection::*;
pub use store::{AttachmentStore, ProblemStore, TagStore, UserStore};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
