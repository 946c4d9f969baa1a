use ratatui::{prelude::*, widgets::*};

/// One row of the lap list: `Lap <n>` on the left, the lap time on the right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapRow {
    pub number: usize,
    pub time: String,
    pub style: Style,
    pub highlight_style: Style,
    pub highlight: bool,
}

impl LapRow {
    pub const HEIGHT: u16 = 1;

    pub fn new(number: usize, time: impl Into<String>) -> Self {
        Self {
            number,
            time: time.into(),
            style: Style::default(),
            highlight_style: Style::default().reversed(),
            highlight: false,
        }
    }

    pub fn styles(mut self, style: Style, highlight_style: Style) -> Self {
        self.style = style;
        self.highlight_style = highlight_style;
        self
    }

    pub fn label(&self) -> String {
        format!("Lap {}", self.number)
    }
}

impl Widget for LapRow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.highlight {
            self.highlight_style
        } else {
            self.style
        };
        buf.set_style(area, style);

        let time_width = u16::try_from(self.time.chars().count()).unwrap_or(u16::MAX);
        let [label, time] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(time_width)])
                .areas(area.inner(Margin::new(1, 0)));
        Paragraph::new(self.label()).render(label, buf);
        Paragraph::new(self.time).render(time, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_layout() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        LapRow::new(3, "0:01.5").render(area, &mut buf);

        let line: String = (0..20).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(line, " Lap 3       0:01.5 ");
    }

    #[test]
    fn test_highlight_uses_highlight_style() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        let mut row = LapRow::new(1, "0:00").styles(
            Style::default().fg(Color::White),
            Style::default().fg(Color::Black).bg(Color::Gray),
        );
        row.highlight = true;
        row.render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::Gray);
        assert_eq!(buf[(0, 0)].fg, Color::Black);
    }
}
