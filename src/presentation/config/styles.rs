use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Style keys looked up by the stopwatch widgets
pub mod keys {
    pub const TIMER: &str = "timer";
    pub const START: &str = "start";
    pub const STOP: &str = "stop";
    pub const LAP: &str = "lap";
    pub const LAP_ROW: &str = "lap_row";
    pub const LAP_ROW_SELECTED: &str = "lap_row_selected";
    pub const STATUS: &str = "status";
}

/// Named styles, e.g. `"start": "bold green"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, raw)| {
                parse_style(&raw)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style for `key`, or the terminal default when unset
    pub fn style(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }
}

/// Parses `"bold green on black"` style strings
pub fn parse_style(line: &str) -> Result<Style, String> {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => (lower.as_str(), None),
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => style = style.add_modifier(modifier),
            None => style = style.fg(parse_color(word)?),
        }
    }
    if let Some(background) = background {
        let background = background.trim();
        style = style.bg(parse_color(background)?);
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "blink" => Some(Modifier::SLOW_BLINK),
        _ => None,
    }
}

fn parse_color(word: &str) -> Result<Color, String> {
    word.parse::<Color>()
        .map_err(|_| format!("Unable to parse color `{word}`"))
}
