use std::sync::Arc;

use crate::config::Config;
use crate::sinks::SinkRegistry;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sinks: SinkRegistry,
}
