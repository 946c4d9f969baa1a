use ratatui::{prelude::*, widgets::Paragraph};

/// Bottom line: the last status or error message, otherwise key hints
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    hints: Vec<(String, &'static str)>,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, style: Style) -> Self {
        Self {
            message,
            hints: vec![],
            style,
        }
    }

    pub fn hint(mut self, key: Option<String>, description: &'static str) -> Self {
        if let Some(key) = key {
            self.hints.push((key, description));
        }
        self
    }

    pub fn text(&self) -> String {
        match self.message {
            Some(message) => message.to_string(),
            None => self
                .hints
                .iter()
                .map(|(key, description)| format!("{key}: {description}"))
                .collect::<Vec<_>>()
                .join("  "),
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text())
            .style(self.style)
            .render(area, buf);
    }
}
