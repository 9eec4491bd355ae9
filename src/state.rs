use std::sync::Arc;

use crate::config::Config;
use crate::graphql::AppSchema;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub schema: AppSchema,
    pub config: Config,
}
