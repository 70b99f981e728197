//! v1 API Data Transfer Objects.
//!
//! Wire format for the v1 REST API, kept separate from the domain types in
//! `src/models/`, `src/flow/` and `src/intelligence/`. All field names are
//! camelCase on the wire.

pub mod insights;
pub mod moods;
pub mod onboarding;
pub mod sessions;
pub mod suggestions;
pub mod tasks;

pub use insights::*;
pub use moods::*;
pub use onboarding::*;
pub use sessions::*;
pub use suggestions::*;
pub use tasks::*;
