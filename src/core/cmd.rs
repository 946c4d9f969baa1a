use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated by AppRunner through the render request channel.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects requested by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Periodic callback scheduling
    StartTicker { session: u64, interval_ms: u64 },
    CancelTicker,

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via bounded render_req_sender and coalesced by AppRunner
    RequestRender,
}

impl Cmd {
    pub fn name(&self) -> String {
        match self {
            Cmd::StartTicker { .. } => "StartTicker".to_string(),
            Cmd::CancelTicker => "CancelTicker".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cmd_name() {
        assert_eq!(Cmd::CancelTicker.name(), "CancelTicker");
        assert_eq!(
            Cmd::StartTicker {
                session: 3,
                interval_ms: 30
            }
            .name(),
            "StartTicker"
        );
        assert_eq!(
            Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })
            .name(),
            "Tui(Resize)"
        );
    }
}
