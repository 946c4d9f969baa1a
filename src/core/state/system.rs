use ratatui::layout::Rect;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Last known terminal area, used for mouse hit-testing
    pub viewport: Option<Rect>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Some(Rect::new(0, 0, width, height));
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message.replace('\n', " "));
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {}", error.replace('\n', " ")));
                vec![Cmd::RequestRender]
            }
        }
    }
}
