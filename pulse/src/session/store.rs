use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::classifier::ClassifierProvider;
use crate::error::{PulseError, Result};
use crate::models::EmotionResult;

use super::state::Session;

/// Shared handle on one session. All mutation goes through this mutex.
pub type SessionHandle = Arc<Mutex<Session>>;

/// In-memory session registry keyed by session id.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(Session::new(id)));
        self.sessions.write().await.insert(id, Arc::clone(&handle));
        tracing::info!(session_id = %id, "Session created");
        (id, handle)
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionHandle> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PulseError::NotFound(format!("Session {id} not found")))
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                tracing::info!(session_id = %id, "Session ended");
                Ok(())
            }
            None => Err(PulseError::NotFound(format!("Session {id} not found"))),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop every session idle for longer than `max_idle`. Sessions that are
    /// locked right now are in use and always kept.
    pub async fn remove_idle(&self, max_idle: Duration) -> usize {
        let now = Utc::now();

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, handle| match handle.try_lock() {
            Ok(session) => {
                let keep = (now - session.last_active())
                    .to_std()
                    .map(|idle| idle <= max_idle)
                    .unwrap_or(true);
                if !keep {
                    tracing::debug!(session_id = %id, "Removing idle session");
                }
                keep
            }
            Err(_) => true,
        });
        before - sessions.len()
    }
}

/// Classify an image for a session.
///
/// The session is marked pending and then unlocked while the classifier
/// runs, so other requests against the same session are not blocked. The
/// classification runs on its own task and always clears the pending flag,
/// even when the caller stops waiting for it.
pub async fn analyze_mood(
    handle: &SessionHandle,
    classifier: &ClassifierProvider,
    image: &[u8],
) -> Result<EmotionResult> {
    handle.lock().await.begin_analysis()?;

    let session = Arc::clone(handle);
    let classifier = classifier.clone();
    let image = image.to_vec();
    let task = tokio::spawn(async move {
        let result = classifier.analyze(&image).await;
        let mut session = session.lock().await;
        session.finish_analysis(result.clone());
        session.touch();
        result
    });

    match task.await {
        Ok(result) => Ok(result),
        Err(e) => {
            tracing::error!(error = %e, "Mood analysis task failed, using fallback result");
            let result = EmotionResult::fallback();
            handle.lock().await.finish_analysis(result.clone());
            Ok(result)
        }
    }
}

/// Simulated plan refresh: waits `delay` with the session unlocked, then
/// clears every tick. Like [`analyze_mood`], the wait runs on its own task.
pub async fn refresh_plan(handle: &SessionHandle, delay: Duration) -> Result<()> {
    handle.lock().await.begin_refresh()?;

    let session = Arc::clone(handle);
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let mut session = session.lock().await;
        session.finish_refresh();
        session.touch();
    });

    if let Err(e) = task.await {
        handle.lock().await.finish_refresh();
        return Err(PulseError::Internal(format!("Plan refresh task failed: {e}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::MockClassifier;
    use crate::flow::{ProfilePatch, View};
    use crate::models::Gender;

    const PNG_HEADER: &[u8] = &[
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
        b'R',
    ];

    async fn onboarded(store: &SessionStore) -> SessionHandle {
        let (_, handle) = store.create().await;
        let mut session = handle.lock().await;
        session.start().unwrap();
        session
            .patch_onboarding(ProfilePatch {
                name: Some("Kai".to_string()),
                age: Some(41),
                gender: Some(Gender::Male),
                occupation: Some("Nurse".to_string()),
                ..Default::default()
            })
            .unwrap();
        for _ in 0..4 {
            session.onboarding_next().unwrap();
        }
        session.finish_onboarding().unwrap();
        drop(session);
        handle
    }

    #[tokio::test]
    async fn create_get_remove() {
        let store = SessionStore::new();
        let (id, _) = store.create().await;
        assert_eq!(store.len().await, 1);
        assert!(store.get(id).await.is_ok());

        store.remove(id).await.unwrap();
        assert!(matches!(store.get(id).await, Err(PulseError::NotFound(_))));
        assert!(store.remove(id).await.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_idle_keeps_fresh_sessions() {
        let store = SessionStore::new();
        store.create().await;
        assert_eq!(store.remove_idle(Duration::from_secs(60)).await, 0);
        assert_eq!(store.len().await, 1);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(store.remove_idle(Duration::from_millis(5)).await, 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_idle_skips_locked_sessions() {
        let store = SessionStore::new();
        let (_, handle) = store.create().await;
        let _guard = handle.lock().await;
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(store.remove_idle(Duration::ZERO).await, 0);
    }

    #[tokio::test]
    async fn session_is_unlocked_while_refreshing() {
        let store = SessionStore::new();
        let handle = onboarded(&store).await;
        handle.lock().await.toggle_nudge(0).unwrap();

        let refresh = {
            let handle = Arc::clone(&handle);
            tokio::spawn(async move { refresh_plan(&handle, Duration::from_millis(100)).await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        {
            let session = handle.lock().await;
            assert!(session.plan().is_refreshing());
        }

        refresh.await.unwrap().unwrap();
        let session = handle.lock().await;
        assert!(!session.plan().is_refreshing());
        assert!(!session.plan().nudge_done(0));
    }

    #[tokio::test]
    async fn analyze_records_detection() {
        let store = SessionStore::new();
        let handle = onboarded(&store).await;
        let classifier = ClassifierProvider::new(&crate::config::ClassifierConfig {
            simulated_delay_ms: 0,
            ..Default::default()
        });

        // Not an image, so the fallback comes back.
        let result = analyze_mood(&handle, &classifier, b"text").await.unwrap();
        assert!(result.is_fallback());

        let mut session = handle.lock().await;
        assert!(!session.capture().pending);
        assert_eq!(session.capture().detected, Some(result));
        assert_eq!(session.accept_detected().unwrap(), View::Tasks);
    }

    #[tokio::test]
    async fn dropped_analysis_still_clears_pending() {
        let store = SessionStore::new();
        let handle = onboarded(&store).await;
        let classifier = ClassifierProvider::with_classifier(
            Arc::new(MockClassifier::new(Duration::from_millis(200))),
            Duration::from_secs(5),
        );

        let call = {
            let handle = Arc::clone(&handle);
            let classifier = classifier.clone();
            tokio::spawn(async move { analyze_mood(&handle, &classifier, PNG_HEADER).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(handle.lock().await.capture().pending);
        call.abort();
        assert!(call.await.is_err());

        tokio::time::sleep(Duration::from_millis(400)).await;
        {
            let session = handle.lock().await;
            assert!(!session.capture().pending);
            assert!(session.capture().detected.is_some());
        }

        let retry = ClassifierProvider::with_classifier(
            Arc::new(MockClassifier::new(Duration::ZERO)),
            Duration::from_secs(5),
        );
        let result = analyze_mood(&handle, &retry, PNG_HEADER).await.unwrap();
        assert!(!result.is_fallback());
    }

    #[tokio::test]
    async fn dropped_refresh_still_clears_refreshing() {
        let store = SessionStore::new();
        let handle = onboarded(&store).await;
        handle.lock().await.toggle_nudge(1).unwrap();

        let call = {
            let handle = Arc::clone(&handle);
            tokio::spawn(async move { refresh_plan(&handle, Duration::from_millis(200)).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        call.abort();
        assert!(call.await.is_err());

        tokio::time::sleep(Duration::from_millis(400)).await;
        {
            let session = handle.lock().await;
            assert!(!session.plan().is_refreshing());
            assert!(!session.plan().nudge_done(1));
        }

        refresh_plan(&handle, Duration::ZERO).await.unwrap();
    }
}
