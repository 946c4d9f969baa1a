use crate::core::{cmd::Cmd, msg::stopwatch::StopwatchMsg};

/// An active run segment: the periodic callback is registered for `session`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSegment {
    /// Wall-clock instant such that `now - virtual_start_ms` is the elapsed time
    pub virtual_start_ms: u64,
    pub session: u64,
}

/// Timing state: elapsed time, running flag and lap history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchState {
    elapsed_ms: u64,
    run: Option<RunSegment>,
    next_session: u64,
    /// Most recent lap first
    laps: Vec<u64>,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn run_segment(&self) -> Option<RunSegment> {
        self.run
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// 1-based lap number of the lap shown at `position` (0 is the most recent)
    pub fn lap_number(&self, position: usize) -> usize {
        self.laps.len().saturating_sub(position)
    }

    /// Stopwatch-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: StopwatchMsg, now_ms: u64, interval_ms: u64) -> Vec<Cmd> {
        match msg {
            StopwatchMsg::ToggleRun => {
                if let Some(run) = self.run.take() {
                    log::info!(
                        "Stopwatch stopped at {}ms (session {})",
                        self.elapsed_ms,
                        run.session
                    );
                    vec![Cmd::CancelTicker, Cmd::RequestRender]
                } else {
                    let session = self.next_session;
                    self.next_session += 1;
                    self.run = Some(RunSegment {
                        virtual_start_ms: now_ms.saturating_sub(self.elapsed_ms),
                        session,
                    });
                    log::info!(
                        "Stopwatch started from {}ms (session {session})",
                        self.elapsed_ms
                    );
                    vec![
                        Cmd::StartTicker {
                            session,
                            interval_ms,
                        },
                        Cmd::RequestRender,
                    ]
                }
            }

            StopwatchMsg::RecordLap => {
                self.laps.insert(0, self.elapsed_ms);
                log::info!("Lap {} recorded at {}ms", self.laps.len(), self.elapsed_ms);
                vec![Cmd::RequestRender]
            }

            StopwatchMsg::TickerFired { session } => match self.run {
                Some(run) if run.session == session => {
                    let elapsed = now_ms.saturating_sub(run.virtual_start_ms);
                    self.elapsed_ms = self.elapsed_ms.max(elapsed);
                    vec![Cmd::RequestRender]
                }
                _ => {
                    log::debug!("Ignoring stale ticker firing for session {session}");
                    vec![]
                }
            },
        }
    }
}
