use std::sync::Arc;

use crate::classifier::ClassifierProvider;
use crate::config::Config;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
    pub classifier: ClassifierProvider,
}

impl AppState {
    pub fn new(config: Config, classifier: ClassifierProvider) -> Self {
        Self {
            config: Arc::new(config),
            sessions: SessionStore::new(),
            classifier,
        }
    }
}
