use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{
    core::{
        msg::{stopwatch::StopwatchMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::{
        config::keybindings::Action,
        layout::{Control, StopwatchLayout},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on key bindings and control layout
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        // Periodic callback
        RawMsg::TickerFired { session } => {
            vec![Msg::Stopwatch(StopwatchMsg::TickerFired { session })]
        }

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Host pacing events carry no domain meaning
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Ctrl-C always quits, even if the user rebinds everything else
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(action),
        None => vec![],
    }
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    match action {
        Action::ToggleRun => vec![Msg::Stopwatch(StopwatchMsg::ToggleRun)],
        Action::RecordLap => vec![Msg::Stopwatch(StopwatchMsg::RecordLap)],
        Action::ScrollUp => vec![Msg::Ui(UiMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Ui(UiMsg::ScrollDown)],
        Action::ScrollToTop => vec![Msg::Ui(UiMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::Ui(UiMsg::ScrollToBottom)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
    }
}

/// Translates mouse presses on the controls and wheel scrolling over the lap list
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let Some(viewport) = state.system.viewport else {
        return vec![];
    };
    let layout = StopwatchLayout::new(viewport);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match layout.hit(mouse.column, mouse.row) {
            Some(Control::Lap) => vec![Msg::Stopwatch(StopwatchMsg::RecordLap)],
            Some(Control::StartStop) => vec![Msg::Stopwatch(StopwatchMsg::ToggleRun)],
            None => vec![],
        },
        MouseEventKind::ScrollDown if layout.in_laps(mouse.column, mouse.row) => {
            vec![Msg::Ui(UiMsg::ScrollDown)]
        }
        MouseEventKind::ScrollUp if layout.in_laps(mouse.column, mouse.row) => {
            vec![Msg::Ui(UiMsg::ScrollUp)]
        }
        _ => vec![],
    }
}
