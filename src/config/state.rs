// Application state module
// Immutable runtime state shared by every connection task

use super::types::Config;

/// Application state
///
/// There is no runtime reconfiguration: the config loaded at startup is the
/// config for the life of the process.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}
