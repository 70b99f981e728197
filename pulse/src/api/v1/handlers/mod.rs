pub mod companion;
pub(crate) mod health;
pub mod insights;
pub mod mood;
pub mod moods;
pub mod onboarding;
pub mod sessions;
pub mod suggestions;
pub mod tasks;

pub use health::health_check;

use uuid::Uuid;

use crate::api::AppState;
use crate::error::{PulseError, Result};
use crate::session::SessionHandle;

/// Parse a path id. Malformed ids are a validation error, not a 404.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| PulseError::Validation(format!("Invalid {what} id: {raw}")))
}

pub(crate) async fn load_session(state: &AppState, raw_id: &str) -> Result<SessionHandle> {
    let id = parse_id(raw_id, "session")?;
    state.sessions.get(id).await
}
