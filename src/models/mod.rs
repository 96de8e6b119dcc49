//! Data models for the team roster dashboard.
//!
//! These models match the frontend TypeScript interfaces so snapshots can be
//! posted as-is.

mod announcement;
mod badge;
mod member;
mod project;

pub use announcement::*;
pub use badge::*;
pub use member::*;
pub use project::*;
