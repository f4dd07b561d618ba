//! Domain models
//!
//! This module contains all domain models used throughout the crate.

pub mod attachment;
pub mod grade;
pub mod permission;
pub mod problem;
pub mod tag;
pub mod test_group;
pub mod user;
pub mod visibility;

pub use attachment::*;
pub use grade::*;
pub use permission::*;
pub use problem::*;
pub use tag::*;
pub use test_group::*;
pub use user::*;
pub use visibility::*;
