//! Shared server state.

use adjutant_config::Settings;

/// State injected into every handler.
///
/// The gateway is stateless between requests, so this is just the immutable
/// settings; there is nothing to lock.
pub struct AppState {
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}
