//! Stopwatch component
//!
//! Renders the timer display and the control row (Lap / Start-Stop).

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::duration::format_duration,
    presentation::{
        config::{keybindings::Action, styles::keys},
        layout::StopwatchLayout,
        widgets::{control_button::ControlButton, timer_display::TimerDisplay},
    },
};

/// Stateless view of the timer and its controls
#[derive(Debug, Clone, Default)]
pub struct StopwatchComponent;

impl StopwatchComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &StopwatchLayout) {
        let config = &state.config.config;

        let elapsed = format_duration(state.stopwatch.elapsed_ms(), &config.stopwatch.format);
        frame.render_widget(
            TimerDisplay::new(elapsed, config.styles.style(keys::TIMER)),
            layout.timer,
        );

        let lap = ControlButton::new("Lap", config.styles.style(keys::LAP))
            .hint(config.keybindings.hint_for(Action::RecordLap));
        frame.render_widget(lap, layout.lap_button);

        frame.render_widget(Self::toggle_button(state), layout.toggle_button);
    }

    /// "Stop" while running, "Start" otherwise
    pub fn toggle_button(state: &AppState) -> ControlButton {
        let config = &state.config.config;
        let (label, style_key) = if state.stopwatch.is_running() {
            ("Stop", keys::STOP)
        } else {
            ("Start", keys::START)
        };
        ControlButton::new(label, config.styles.style(style_key))
            .hint(config.keybindings.hint_for(Action::ToggleRun))
    }
}
