//! Pulse: mood-aware task planning.
//!
//! A session walks through a splash screen, a five-step onboarding wizard
//! and mood capture (picked on a grid or detected from an image). The
//! confirmed mood then drives everything downstream: task ordering, the
//! daily plan of suggested tasks and nudges, the companion card and the
//! insights banner.

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod flow;
pub mod intelligence;
pub mod models;
pub mod session;
