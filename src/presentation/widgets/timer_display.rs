use ratatui::{layout::Flex, prelude::*, widgets::*};

/// The formatted elapsed time, centered in a bordered block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerDisplay {
    text: String,
    style: Style,
}

impl TimerDisplay {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

impl Widget for TimerDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_type(BorderType::Rounded);
        let inner = block.inner(area);
        block.render(area, buf);

        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        Paragraph::new(Span::styled(self.text, self.style))
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_is_centered() {
        let area = Rect::new(0, 0, 14, 5);
        let mut buf = Buffer::empty(area);
        TimerDisplay::new("1:01", Style::default()).render(area, &mut buf);

        let middle: String = (0..14).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert_eq!(middle, "│    1:01    │");
    }
}
