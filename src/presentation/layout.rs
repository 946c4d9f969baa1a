//! Screen geometry shared by rendering and mouse hit-testing

use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

const TIMER_HEIGHT: u16 = 5;
const CONTROLS_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const BUTTON_WIDTH: u16 = 16;

/// A pressable control in the control row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Lap,
    StartStop,
}

/// The regions of the stopwatch screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopwatchLayout {
    pub timer: Rect,
    pub lap_button: Rect,
    pub toggle_button: Rect,
    pub laps: Rect,
    pub status: Rect,
}

impl StopwatchLayout {
    pub fn new(area: Rect) -> Self {
        let [timer, controls, laps, status] = Layout::vertical([
            Constraint::Length(TIMER_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        let [lap_button, toggle_button] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 2])
            .flex(Flex::SpaceAround)
            .areas(controls);

        Self {
            timer,
            lap_button,
            toggle_button,
            laps,
            status,
        }
    }

    /// The control under the given cell, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        if self.lap_button.contains(position) {
            Some(Control::Lap)
        } else if self.toggle_button.contains(position) {
            Some(Control::StartStop)
        } else {
            None
        }
    }

    pub fn in_laps(&self, column: u16, row: u16) -> bool {
        self.laps.contains(Position::new(column, row))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_regions_stack_vertically() {
        let layout = StopwatchLayout::new(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.timer, Rect::new(0, 0, 80, TIMER_HEIGHT));
        assert_eq!(layout.lap_button.y, TIMER_HEIGHT);
        assert_eq!(layout.lap_button.height, CONTROLS_HEIGHT);
        assert_eq!(layout.laps.y, TIMER_HEIGHT + CONTROLS_HEIGHT);
        assert_eq!(layout.status, Rect::new(0, 23, 80, STATUS_HEIGHT));
    }

    #[test]
    fn test_lap_button_left_of_toggle() {
        let layout = StopwatchLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.lap_button.width, BUTTON_WIDTH);
        assert_eq!(layout.toggle_button.width, BUTTON_WIDTH);
        assert!(layout.lap_button.right() <= layout.toggle_button.left());
    }

    #[test]
    fn test_hit() {
        let layout = StopwatchLayout::new(Rect::new(0, 0, 80, 24));
        let lap = layout.lap_button;
        let toggle = layout.toggle_button;

        assert_eq!(layout.hit(lap.x, lap.y), Some(Control::Lap));
        assert_eq!(
            layout.hit(toggle.right() - 1, toggle.bottom() - 1),
            Some(Control::StartStop)
        );
        assert_eq!(layout.hit(0, 0), None);
        assert_eq!(layout.hit(toggle.right(), toggle.y), None);
    }

    #[test]
    fn test_in_laps() {
        let layout = StopwatchLayout::new(Rect::new(0, 0, 80, 24));
        assert!(layout.in_laps(0, layout.laps.y));
        assert!(!layout.in_laps(0, layout.status.y));
    }
}
