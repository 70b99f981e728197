mod emotion;
mod mood;
mod profile;
mod task;

pub use emotion::*;
pub use mood::*;
pub use profile::*;
pub use task::*;
