use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-facing actions a key sequence can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, Deserialize)]
pub enum Action {
    ToggleRun,
    RecordLap,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Quit,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                let sequence = parse_key_sequence(&key_str).map_err(serde::de::Error::custom)?;
                if sequence.len() != 1 {
                    return Err(serde::de::Error::custom(format!(
                        "`{key_str}` binds {} keys; only single-key bindings are supported",
                        sequence.len()
                    )));
                }
                Ok((sequence, action))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

impl KeyBindings {
    /// First key sequence bound to `action`, rendered for hints (e.g. `space`)
    pub fn hint_for(&self, action: Action) -> Option<String> {
        self.iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(sequence, _)| {
                sequence
                    .iter()
                    .map(key_event_to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .min_by_key(|hint| (hint.len(), hint.clone()))
    }
}

/// Parses `<a>`, `<Ctrl-c>`, `<space><l>` style sequences
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };

    raw.split("><")
        .map(|seq| {
            let seq = seq.strip_prefix('<').unwrap_or(seq);
            let seq = seq.strip_suffix('>').unwrap_or(seq);
            parse_key_event(seq)
        })
        .collect()
}

/// Parses a single key such as `space`, `ctrl-c`, `G` or `f5`
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let (remaining, modifiers) = extract_modifiers(raw);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        let lower = current.to_ascii_lowercase();
        if lower.starts_with("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = &current[5..];
        } else if lower.starts_with("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = &current[4..];
        } else if lower.starts_with("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = &current[6..];
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let code = match raw.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        lower if lower.len() > 1 && lower.starts_with('f') => {
            let number = lower[1..]
                .parse::<u8>()
                .map_err(|_| format!("Unable to parse `{raw}`"))?;
            KeyCode::F(number)
        }
        _ => {
            let mut chars = raw.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(format!("Unable to parse `{raw}`"));
            };
            if c.is_ascii_uppercase() {
                modifiers.insert(KeyModifiers::SHIFT);
            }
            KeyCode::Char(c)
        }
    };
    Ok(KeyEvent::new(code, modifiers))
}

/// Inverse of [`parse_key_event`] for display purposes
pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        _ => "?".to_string(),
    };

    let mut prefix = String::new();
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push_str("ctrl-");
    }
    if key_event.modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("alt-");
    }
    format!("{prefix}{code}")
}
