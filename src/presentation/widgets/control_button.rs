use ratatui::{prelude::*, widgets::*};

/// A pressable control: a bordered label with an optional key hint in the border
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlButton {
    label: String,
    hint: Option<String>,
    style: Style,
}

impl ControlButton {
    pub fn new(label: impl Into<String>, style: Style) -> Self {
        Self {
            label: label.into(),
            hint: None,
            style,
        }
    }

    pub fn hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }
}

impl Widget for ControlButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style);
        if let Some(hint) = self.hint {
            block = block.title_bottom(Line::from(format!(" {hint} ")).centered().dim());
        }

        Paragraph::new(Span::styled(self.label, self.style))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_label_and_hint() {
        let area = Rect::new(0, 0, 16, 3);
        let mut buf = Buffer::empty(area);
        ControlButton::new("Start", Style::default().green())
            .hint(Some("space".into()))
            .render(area, &mut buf);

        assert!(row(&buf, 1).contains("Start"));
        assert!(row(&buf, 2).contains("space"));
        assert_eq!(buf[(6, 1)].fg, Color::Green);
    }

    #[test]
    fn test_without_hint() {
        let area = Rect::new(0, 0, 16, 3);
        let mut buf = Buffer::empty(area);
        ControlButton::new("Lap", Style::default()).render(area, &mut buf);

        assert!(row(&buf, 1).contains("Lap"));
        assert!(row(&buf, 2).starts_with("╰──────"));
    }
}
