use serde::{Deserialize, Serialize};

/// Messages specific to StopwatchState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopwatchMsg {
    /// Start/Stop press
    ToggleRun,
    /// Lap press
    RecordLap,
    /// The periodic callback registered for `session` fired
    TickerFired { session: u64 },
}
