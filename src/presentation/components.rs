//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::layout::StopwatchLayout};

pub mod lap_list;
pub mod status_bar;
pub mod stopwatch;

pub use lap_list::LapListComponent;
pub use status_bar::StatusBarComponent;
pub use stopwatch::StopwatchComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub stopwatch: StopwatchComponent,
    pub laps: LapListComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point; regions come from [`StopwatchLayout`] so
    /// they match mouse hit-testing
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let layout = StopwatchLayout::new(frame.area());

        self.stopwatch.view(state, frame, &layout);
        self.laps.view(state, frame, layout.laps);
        self.status_bar.view(state, frame, layout.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::msg::{stopwatch::StopwatchMsg, system::SystemMsg, ui::UiMsg};
    use crate::infrastructure::config::Config;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> Vec<String> {
        let mut terminal =
            Terminal::new(TestBackend::new(60, 16)).expect("test backend never fails");
        let mut components = Components::new();
        terminal
            .draw(|frame| components.render(frame, state))
            .expect("test backend never fails");

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    fn state() -> AppState {
        AppState::new_with_config(Config::embedded().expect("embedded config should parse"))
    }

    #[test]
    fn test_initial_screen() {
        let lines = render(&state());

        assert!(lines[2].contains("0:00"));
        assert!(contains(&lines, "Start"));
        assert!(contains(&lines, "Lap"));
        assert!(contains(&lines, "No laps yet"));
        assert!(contains(&lines, "q: quit"));
    }

    #[test]
    fn test_running_shows_stop() {
        let mut state = state();
        state.stopwatch.update(StopwatchMsg::ToggleRun, 0, 30);
        let lines = render(&state);

        assert!(contains(&lines, "Stop"));
        assert!(!contains(&lines, "Start"));
    }

    #[test]
    fn test_laps_are_listed_most_recent_first() {
        let mut state = state();
        state.stopwatch.update(StopwatchMsg::ToggleRun, 0, 30);
        state.stopwatch.update(StopwatchMsg::TickerFired { session: 0 }, 1_500, 30);
        state.stopwatch.update(StopwatchMsg::RecordLap, 1_500, 30);
        state.stopwatch.update(StopwatchMsg::TickerFired { session: 0 }, 61_000, 30);
        state.stopwatch.update(StopwatchMsg::RecordLap, 61_000, 30);
        let lines = render(&state);

        let lap2 = lines.iter().position(|line| line.contains("Lap 2"));
        let lap1 = lines.iter().position(|line| line.contains("Lap 1"));
        assert!(lap2.is_some() && lap1.is_some());
        assert!(lap2 < lap1);
        assert!(contains(&lines, "Laps (2)"));
        assert!(contains(&lines, "1:01"));
        assert!(contains(&lines, "0:01.5"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut state = state();
        state.system.update(SystemMsg::ShowError("ticker lost".into()));
        let lines = render(&state);

        assert!(contains(&lines, "Error: ticker lost"));
        assert!(!contains(&lines, "q: quit"));
    }

    #[test]
    fn test_selected_lap_is_highlighted() {
        let mut state = state();
        state.stopwatch.update(StopwatchMsg::RecordLap, 0, 30);
        state.ui.update(UiMsg::ScrollDown, 1);

        let rows = LapListComponent::rows(&state);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label(), "Lap 1");
        assert!(contains(&render(&state), "Lap 1"));
    }
}
