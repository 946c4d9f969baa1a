use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    core::raw_msg::RawMsg,
    infrastructure::ticker::TickerService,
};

/// Command executor that bridges Elm commands to the ticker service and the
/// runner's TUI / render request channels
pub struct CmdExecutor {
    ticker: TickerService,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
}

impl CmdExecutor {
    /// Create an executor whose ticker feeds `raw_msg_tx`
    pub fn new(raw_msg_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            ticker: TickerService::new(raw_msg_tx),
            tui_sender: None,
            render_req_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn ticker_active(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn active_ticker_session(&self) -> Option<u64> {
        self.ticker.active_session()
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::StartTicker {
                session,
                interval_ms,
            } => {
                self.ticker.start(*session, *interval_ms);
            }

            Cmd::CancelTicker => {
                if !self.ticker.cancel() {
                    log::debug!("CancelTicker with no active ticker");
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    // A full channel already holds a pending request
                    let _ = rtx.try_send(());
                } else {
                    log::debug!("CmdExecutor: render request dropped (no render sender configured)");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, recording the outcome of each
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }

    /// Release every resource the executed commands acquired
    pub fn shutdown(&mut self) {
        if self.ticker.cancel() {
            log::info!("CmdExecutor: active ticker released on shutdown");
        }
    }
}
