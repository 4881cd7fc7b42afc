use std::sync::Arc;

use crate::{
    config::Config,
    database::{FeedbackStore, MongoFeedbackStore},
};

/// Shared, read-only per-process state: the config and the store handle.
/// Built once at startup; handlers receive it through axum state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn FeedbackStore>,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let store = MongoFeedbackStore::connect(&config.mongo_url)
            .await
            .expect("MongoDB misconfigured!");

        Arc::new(Self {
            config,
            store: Arc::new(store),
        })
    }
}
