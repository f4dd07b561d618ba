//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod attachment_repo;
pub mod problem_repo;
pub mod tag_repo;
pub mod user_repo;

pub use attachment_repo::AttachmentRepository;
pub use problem_repo::ProblemRepository;
pub use tag_repo::TagRepository;
pub use user_repo::UserRepository;
