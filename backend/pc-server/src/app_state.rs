use pc_config::RandomUserConfig;
use pc_random_user::RandomUserClient;
use pc_store::FlatFileStore;

use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FlatFileStore>,
    pub random_users: RandomUserClient,
    pub random_user_config: RandomUserConfig,
}

impl AppState {
    pub fn new(
        store: FlatFileStore,
        random_users: RandomUserClient,
        random_user_config: RandomUserConfig,
    ) -> Self {
        Self {
            store: Arc::new(store),
            random_users,
            random_user_config,
        }
    }
}
