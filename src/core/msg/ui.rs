use serde::{Deserialize, Serialize};

/// Lap list navigation messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
}
