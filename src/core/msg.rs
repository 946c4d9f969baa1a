use serde::{Deserialize, Serialize};

pub mod stopwatch;
pub mod system;
pub mod ui;

use stopwatch::StopwatchMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Timing operations (delegated to StopwatchState)
    Stopwatch(StopwatchMsg),

    // Lap list navigation (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Stopwatch(StopwatchMsg::TickerFired { .. }))
    }
}
