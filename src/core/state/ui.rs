use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// Lap list selection state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    selected_lap: Option<usize>,
}

impl UiState {
    pub fn selected_lap(&self) -> Option<usize> {
        self.selected_lap
    }

    /// Keep the same lap selected after a new one is prepended
    pub fn on_lap_recorded(&mut self) {
        if let Some(index) = self.selected_lap {
            self.selected_lap = Some(index + 1);
        }
    }

    /// UI-specific update function
    /// `lap_count` bounds the selection cursor
    pub fn update(&mut self, msg: UiMsg, lap_count: usize) -> Vec<Cmd> {
        if lap_count == 0 {
            self.selected_lap = None;
            return vec![];
        }
        let last = lap_count - 1;

        let next = match msg {
            UiMsg::ScrollUp => match self.selected_lap {
                Some(index) => index.saturating_sub(1),
                None => 0,
            },
            UiMsg::ScrollDown => match self.selected_lap {
                Some(index) => (index + 1).min(last),
                None => 0,
            },
            UiMsg::ScrollToTop => 0,
            UiMsg::ScrollToBottom => last,
        };

        if self.selected_lap == Some(next) {
            vec![]
        } else {
            self.selected_lap = Some(next);
            vec![Cmd::RequestRender]
        }
    }
}
