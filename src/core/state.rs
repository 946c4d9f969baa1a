pub mod stopwatch;
pub mod system;
pub mod ui;

use crate::infrastructure::config::Config;

pub use stopwatch::{RunSegment, StopwatchState};
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub stopwatch: StopwatchState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Periodic callback interval in milliseconds
    pub fn tick_interval_ms(&self) -> u64 {
        self.config.config.stopwatch.tick_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.stopwatch.elapsed_ms(), 0);
        assert!(!state.stopwatch.is_running());
        assert!(state.stopwatch.laps().is_empty());
        assert!(state.ui.selected_lap().is_none());
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_app_state_with_config() {
        let mut config = Config::default();
        config.stopwatch.tick_interval_ms = 50;

        let state = AppState::new_with_config(config);

        assert_eq!(state.tick_interval_ms(), 50);
    }
}
