use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

/// Raw external events before translation into domain messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,

    // User input
    Key(KeyEvent),
    Mouse(MouseEvent),

    // Periodic callback firing, tagged with the session that registered it
    TickerFired { session: u64 },

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick | RawMsg::Render | RawMsg::TickerFired { .. }
        )
    }
}
