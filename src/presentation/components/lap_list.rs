//! Lap list component
//!
//! Scrollable list of recorded laps, most recent first.

use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListState, ListView};

use crate::{
    core::state::AppState,
    domain::duration::format_duration,
    presentation::{config::styles::keys, widgets::lap_row::LapRow},
};

#[derive(Debug, Clone, Default)]
pub struct LapListComponent;

impl LapListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::TOP)
            .title(format!(" Laps ({}) ", state.stopwatch.laps().len()));
        let laps = state.stopwatch.laps();

        if laps.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new("No laps yet")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let rows = Self::rows(state);
        let item_count = rows.len();
        let builder = ListBuilder::new(move |context| {
            let mut row = rows[context.index].clone();
            row.highlight = context.is_selected;
            (row, LapRow::HEIGHT)
        });

        let mut list_state = ListState::default();
        list_state.select(state.ui.selected_lap());

        let list = ListView::new(builder, item_count).block(block);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// One row per lap in display order
    pub fn rows(state: &AppState) -> Vec<LapRow> {
        let config = &state.config.config;
        let style = config.styles.style(keys::LAP_ROW);
        let highlight_style = config.styles.style(keys::LAP_ROW_SELECTED);

        state
            .stopwatch
            .laps()
            .iter()
            .enumerate()
            .map(|(position, lap)| {
                LapRow::new(
                    state.stopwatch.lap_number(position),
                    format_duration(*lap, &config.stopwatch.format),
                )
                .styles(style, highlight_style)
            })
            .collect()
    }
}
