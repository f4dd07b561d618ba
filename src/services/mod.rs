//! Business logic services
//!
//! Services sit between a presentation layer and the stores.

pub mod problem_service;

pub use problem_service::ProblemService;
