use crate::{
    core::cmd::Cmd,
    core::msg::{stopwatch::StopwatchMsg, Msg},
    core::state::AppState,
    infrastructure::clock::Clock,
};

/// Host collaborators the update function reads from
pub struct UpdateContext<'a> {
    pub clock: &'a dyn Clock,
}

/// Elm-like update function with injected collaborators
/// Returns new state and list of commands from current state and message
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Stopwatch messages (delegated to StopwatchState)
        Msg::Stopwatch(stopwatch_msg) => {
            let is_lap = matches!(stopwatch_msg, StopwatchMsg::RecordLap);
            let interval_ms = state.tick_interval_ms();
            let commands = state
                .stopwatch
                .update(stopwatch_msg, ctx.clock.now_ms(), interval_ms);
            if is_lap {
                state.ui.on_lap_recorded();
            }
            (state, commands)
        }

        // Lap list navigation (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let lap_count = state.stopwatch.laps().len();
            let commands = state.ui.update(ui_msg, lap_count);
            (state, commands)
        }
    }
}
