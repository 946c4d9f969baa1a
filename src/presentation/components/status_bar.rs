//! Status bar component

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        config::{keybindings::Action, styles::keys},
        widgets::status_bar::StatusBarWidget,
    },
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Self::widget(state), area);
    }

    pub fn widget(state: &AppState) -> StatusBarWidget<'_> {
        let config = &state.config.config;
        let bindings = &config.keybindings;
        StatusBarWidget::new(
            state.system.status_message.as_deref(),
            config.styles.style(keys::STATUS),
        )
        .hint(bindings.hint_for(Action::ToggleRun), "start/stop")
        .hint(bindings.hint_for(Action::RecordLap), "lap")
        .hint(bindings.hint_for(Action::ScrollDown), "scroll")
        .hint(bindings.hint_for(Action::Quit), "quit")
    }
}
