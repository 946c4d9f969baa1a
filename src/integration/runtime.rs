use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::{system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::clock::{Clock, SystemClock},
};

/// Owns the application state, message queues and command executor.
///
/// All state mutation happens inside [`Runtime::run_update_cycle`]. The
/// active ticker is released by [`Runtime::shutdown`], which also runs on drop.
pub struct Runtime {
    clock: Arc<dyn Clock>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
    shut_down: bool,
}

impl Runtime {
    /// Create a Runtime without a command executor; commands only queue up
    pub fn new(initial_state: AppState) -> Self {
        Self::new_with_clock(initial_state, Arc::new(SystemClock::new()))
    }

    pub fn new_with_clock(initial_state: AppState, clock: Arc<dyn Clock>) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        Self {
            clock,
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
            shut_down: false,
        }
    }

    /// Create a Runtime whose executor drives the ticker service
    pub fn new_with_executor(initial_state: AppState, clock: Arc<dyn Clock>) -> Self {
        let mut runtime = Self::new_with_clock(initial_state, clock);
        runtime.set_executor();
        runtime
    }

    pub fn set_executor(&mut self) {
        self.cmd_executor = Some(CmdExecutor::new(self.raw_msg_tx.clone()));
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_tui_sender(tui_sender);
                Ok(())
            }
            None => Err("No executor available. Use set_executor() first.".to_string()),
        }
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::Sender<()>,
    ) -> Result<(), String> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_render_request_sender(render_sender);
                Ok(())
            }
            None => Err("No executor available. Use set_executor() first.".to_string()),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Queue a host event behind every channelled message that arrived before it
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.pull_channelled();
        self.raw_msg_queue.push_back(raw_msg);
    }

    fn pull_channelled(&mut self) {
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.raw_msg_queue.push_back(raw_msg);
        }
    }

    /// Sender for services running outside the update loop (the ticker)
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        if self.cmd_executor.is_none() {
            return Err("No command executor available. Use set_executor() to configure.".to_string());
        }

        let commands = self.pending_commands();
        match &mut self.cmd_executor {
            Some(executor) if !commands.is_empty() => Ok(executor.execute_commands(&commands)),
            _ => Ok(vec![]),
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let ctx = UpdateContext {
            clock: self.clock.as_ref(),
        };
        let (new_state, commands) = update_with_context(msg, self.state.clone(), &ctx);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate queued and channelled raw messages, then apply every domain message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        if self.shut_down {
            return vec![];
        }

        self.pull_channelled();
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.enqueue_translated(raw_msg);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    fn enqueue_translated(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::debug!("Runtime: raw message {raw_msg:?}");
        }
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
    }

    /// Process all messages and execute commands in one step.
    ///
    /// Failed commands are surfaced in the status bar on the next cycle.
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        let log = self.execute_pending_commands()?;
        if let Some(failure) = log.iter().find(|line| line.starts_with('✗')) {
            self.send_msg(Msg::System(SystemMsg::ShowError(failure.clone())));
        }
        Ok(log)
    }

    /// Release the active ticker and stop processing further messages.
    ///
    /// Idempotent; also invoked on drop.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        if let Some(executor) = &mut self.cmd_executor {
            executor.shutdown();
        }
        self.cmd_queue.clear();
        self.msg_queue.clear();
        self.raw_msg_queue.clear();
        log::info!("Runtime shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            elapsed_ms: self.state.stopwatch.elapsed_ms(),
            is_running: self.state.stopwatch.is_running(),
            laps_count: self.state.stopwatch.laps().len(),
            selected_lap: self.state.ui.selected_lap(),
            has_executor: self.cmd_executor.is_some(),
            ticker_active: self
                .cmd_executor
                .as_ref()
                .is_some_and(CmdExecutor::ticker_active),
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub elapsed_ms: u64,
    pub is_running: bool,
    pub laps_count: usize,
    pub selected_lap: Option<usize>,
    pub has_executor: bool,
    pub ticker_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::msg::{stopwatch::StopwatchMsg, ui::UiMsg};
    use crate::infrastructure::{clock::ManualClock, config::Config};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn create_test_runtime() -> (Runtime, ManualClock) {
        let clock = ManualClock::new(1_000);
        let runtime = Runtime::new_with_clock(AppState::default(), Arc::new(clock.clone()));
        (runtime, clock)
    }

    #[test]
    fn test_runtime_creation() {
        let (runtime, _) = create_test_runtime();
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert_eq!(stats.elapsed_ms, 0);
        assert!(!stats.is_running);
        assert!(!stats.has_executor);
    }

    #[test]
    fn test_send_message_is_processed_in_order() {
        let (mut runtime, clock) = create_test_runtime();

        runtime.send_msg(Msg::Stopwatch(StopwatchMsg::ToggleRun));
        assert_eq!(runtime.get_stats().queued_messages, 1);
        runtime.process_all_messages();

        clock.advance(250);
        runtime.send_msg(Msg::Stopwatch(StopwatchMsg::TickerFired { session: 0 }));
        runtime.send_msg(Msg::Stopwatch(StopwatchMsg::RecordLap));
        runtime.process_all_messages();

        let stats = runtime.get_stats();
        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.elapsed_ms, 250);
        assert_eq!(runtime.state().stopwatch.laps(), &[250]);
    }

    #[test]
    fn test_commands_are_queued_without_executor() {
        let (mut runtime, _) = create_test_runtime();
        let commands = runtime.process_message(Msg::Stopwatch(StopwatchMsg::ToggleRun));

        assert!(commands
            .iter()
            .any(|cmd| matches!(cmd, Cmd::StartTicker { session: 0, .. })));
        assert_eq!(runtime.get_stats().queued_commands, commands.len());
        assert!(runtime.execute_pending_commands().is_err());
    }

    #[test]
    fn test_raw_messages_from_channel_are_translated() {
        let (mut runtime, clock) = create_test_runtime();
        runtime.process_message(Msg::Stopwatch(StopwatchMsg::ToggleRun));

        clock.advance(40);
        let tx = runtime.get_raw_sender();
        tx.send(RawMsg::TickerFired { session: 0 })
            .expect("channel should be open");
        runtime.process_all_messages();

        assert_eq!(runtime.state().stopwatch.elapsed_ms(), 40);
    }

    #[test]
    fn test_channelled_firing_is_applied_before_later_key_press() {
        let clock = ManualClock::new(0);
        let config = Config::embedded().expect("embedded config should parse");
        let mut runtime =
            Runtime::new_with_clock(AppState::new_with_config(config), Arc::new(clock.clone()));
        runtime.process_message(Msg::Stopwatch(StopwatchMsg::ToggleRun));
        let tx = runtime.get_raw_sender();

        clock.set(100);
        tx.send(RawMsg::TickerFired { session: 0 })
            .expect("channel should be open");
        clock.set(110);
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('l'),
            KeyModifiers::NONE,
        )));
        runtime.process_all_messages();
        assert_eq!(runtime.state().stopwatch.laps(), &[100]);

        clock.set(200);
        tx.send(RawMsg::TickerFired { session: 0 })
            .expect("channel should be open");
        clock.set(210);
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
        )));
        runtime.process_all_messages();
        assert!(!runtime.state().stopwatch.is_running());
        assert_eq!(runtime.state().stopwatch.elapsed_ms(), 200);
    }

    #[test]
    fn test_quit_sets_should_quit() {
        let (mut runtime, _) = create_test_runtime();
        runtime.send_raw_msg(RawMsg::Quit);
        runtime.process_all_messages();
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_lap_navigation_via_messages() {
        let (mut runtime, _) = create_test_runtime();
        runtime.process_message(Msg::Stopwatch(StopwatchMsg::RecordLap));
        runtime.process_message(Msg::Stopwatch(StopwatchMsg::RecordLap));
        runtime.process_message(Msg::Ui(UiMsg::ScrollDown));
        runtime.process_message(Msg::Ui(UiMsg::ScrollToBottom));

        assert_eq!(runtime.get_stats().selected_lap, Some(1));
    }

    #[tokio::test]
    async fn test_update_cycle_starts_and_stops_ticker() {
        let clock = ManualClock::new(0);
        let mut runtime = Runtime::new_with_executor(AppState::default(), Arc::new(clock));

        runtime.send_msg(Msg::Stopwatch(StopwatchMsg::ToggleRun));
        let log = runtime.run_update_cycle().expect("executor configured");
        assert!(log.iter().any(|line| line.contains("StartTicker")));
        assert!(runtime.get_stats().ticker_active);

        runtime.send_msg(Msg::Stopwatch(StopwatchMsg::ToggleRun));
        runtime.run_update_cycle().expect("executor configured");
        assert!(!runtime.get_stats().ticker_active);
    }

    #[tokio::test]
    async fn test_shutdown_releases_ticker_and_freezes_state() {
        let clock = ManualClock::new(0);
        let mut runtime =
            Runtime::new_with_executor(AppState::default(), Arc::new(clock.clone()));
        runtime.send_msg(Msg::Stopwatch(StopwatchMsg::ToggleRun));
        runtime.run_update_cycle().expect("executor configured");

        runtime.shutdown();
        assert!(runtime.is_shut_down());
        assert!(!runtime.get_stats().ticker_active);

        clock.advance(500);
        runtime.send_raw_msg(RawMsg::TickerFired { session: 0 });
        runtime.run_update_cycle().expect("executor configured");
        assert_eq!(runtime.state().stopwatch.elapsed_ms(), 0);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (mut runtime, _) = create_test_runtime();
        runtime.shutdown();
        runtime.shutdown();
        assert!(runtime.is_shut_down());
    }
}
