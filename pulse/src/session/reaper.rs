use std::time::Duration;

use tracing::{debug, info};

use super::store::SessionStore;

/// Background manager that ends sessions nobody has touched for a while.
#[derive(Clone)]
pub struct SessionReaper {
    store: SessionStore,
    idle_timeout: Duration,
    interval_secs: u64,
}

impl SessionReaper {
    pub fn new(store: SessionStore, idle_timeout_secs: u64, interval_secs: u64) -> Self {
        Self {
            store,
            idle_timeout: Duration::from_secs(idle_timeout_secs),
            interval_secs,
        }
    }

    /// Run a single sweep. Returns the number of sessions removed.
    pub async fn run_once(&self) -> usize {
        debug!("Sweeping idle sessions");
        let removed = self.store.remove_idle(self.idle_timeout).await;
        if removed > 0 {
            let remaining = self.store.len().await;
            info!(removed, remaining, "Idle sessions removed");
        }
        removed
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sweep_removes_only_idle_sessions() {
        let store = SessionStore::new();
        let (stale, _) = store.create().await;
        tokio::time::sleep(Duration::from_millis(1100)).await;
        let (fresh, _) = store.create().await;

        let reaper = SessionReaper::new(store.clone(), 1, 300);
        assert_eq!(reaper.run_once().await, 1);
        assert!(store.get(stale).await.is_err());
        assert!(store.get(fresh).await.is_ok());
        assert_eq!(reaper.interval_secs(), 300);
    }

    #[tokio::test]
    async fn empty_store_is_a_no_op() {
        let reaper = SessionReaper::new(SessionStore::new(), 60, 300);
        assert_eq!(reaper.run_once().await, 0);
    }

    #[tokio::test]
    async fn sweep_runs_on_a_spawned_task() {
        let store = SessionStore::new();
        store.create().await;
        store.create().await;
        tokio::time::sleep(Duration::from_millis(1100)).await;

        let reaper = SessionReaper::new(store.clone(), 1, 300);
        let removed = tokio::spawn(async move { reaper.run_once().await })
            .await
            .unwrap();

        assert_eq!(removed, 2);
        assert!(store.is_empty().await);
    }
}
