use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::rate_limit::ContactRateLimiter;
use crate::uploads::DocumentStorage;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Store,
    pub config: Config,
    pub storage: DocumentStorage,
    pub contact_limiter: Arc<ContactRateLimiter>,
}
