//! problemset - Problem descriptors for AlgoJudge
//!
//! This library models the problems of the AlgoJudge platform: their
//! metadata, how their tests are grouped and scored, which values are valid,
//! and who may view or edit them.
//!
//! # Features
//!
//! - Test group parsing for specifications such as `1-3;4;5-10`
//! - Field validation reported per form field
//! - Visibility and edit rules for anonymous users, authors and editors
//! - Cached statement rendering and author lookup
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//! - **Services**: Business logic
//! - **Stores**: Collaborator traits, implemented for `PgPool`
//! - **Repositories**: Database access
//! - **Models**: Domain models and their rules

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{FieldErrors, Problem, TestGroup, TestGroupError};
