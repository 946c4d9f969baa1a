use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::core::raw_msg::RawMsg;

/// A registered periodic callback.
///
/// Dropping the handle cancels it: the token fires and the task is aborted,
/// so no further `TickerFired` messages for this session are produced.
#[derive(Debug)]
pub struct TickerHandle {
    session: u64,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn session(&self) -> u64 {
        self.session
    }

    fn cancel(&self) {
        self.token.cancel();
        self.task.abort();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Periodic callback scheduler feeding the runtime's raw message channel.
///
/// At most one ticker is active at a time.
pub struct TickerService {
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    active: Option<TickerHandle>,
}

impl TickerService {
    pub fn new(raw_msg_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_msg_tx,
            active: None,
        }
    }

    /// Register a ticker firing every `interval_ms` (at least 1 ms), replacing
    /// any active one. Must be called from within a tokio runtime.
    pub fn start(&mut self, session: u64, interval_ms: u64) {
        if let Some(previous) = self.active.take() {
            log::debug!("Replacing ticker for session {}", previous.session());
        }

        let period = Duration::from_millis(interval_ms.max(1));
        let token = CancellationToken::new();
        let child = token.clone();
        let tx = self.raw_msg_tx.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // first tick completes immediately
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = child.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(RawMsg::TickerFired { session }).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        log::info!("Ticker started: session={session}, interval={period:?}");
        self.active = Some(TickerHandle {
            session,
            token,
            task,
        });
    }

    /// Release the active ticker. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                log::info!("Ticker cancelled: session={}", handle.session());
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_session(&self) -> Option<u64> {
        self.active.as_ref().map(TickerHandle::session)
    }
}

impl Drop for TickerService {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drain(rx: &mut mpsc::UnboundedReceiver<RawMsg>) -> Vec<RawMsg> {
        let mut msgs = vec![];
        while let Ok(msg) = rx.try_recv() {
            msgs.push(msg);
        }
        msgs
    }

    #[tokio::test]
    async fn test_ticker_fires_with_session() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TickerService::new(tx);
        ticker.start(7, 5);
        assert_eq!(ticker.active_session(), Some(7));

        let first = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await;
        assert_eq!(first.ok().flatten(), Some(RawMsg::TickerFired { session: 7 }));
    }

    #[tokio::test]
    async fn test_cancel_stops_firings() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TickerService::new(tx);
        ticker.start(1, 2);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(ticker.cancel());
        assert!(!ticker.is_active());
        // let an in-flight send settle before draining
        tokio::time::sleep(Duration::from_millis(5)).await;
        drain(&mut rx);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_cancel_without_active_ticker() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut ticker = TickerService::new(tx);
        assert!(!ticker.cancel());
        assert_eq!(ticker.active_session(), None);
    }

    #[tokio::test]
    async fn test_start_replaces_previous_session() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TickerService::new(tx);
        ticker.start(1, 2);
        ticker.start(2, 2);
        assert_eq!(ticker.active_session(), Some(2));

        tokio::time::sleep(Duration::from_millis(5)).await;
        drain(&mut rx);
        tokio::time::sleep(Duration::from_millis(30)).await;
        let msgs = drain(&mut rx);
        assert!(!msgs.is_empty());
        assert!(msgs
            .iter()
            .all(|msg| *msg == RawMsg::TickerFired { session: 2 }));
    }

    #[tokio::test]
    async fn test_dropping_service_stops_firings() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TickerService::new(tx);
        ticker.start(3, 2);
        drop(ticker);

        // all senders are gone once the aborted task is reaped
        let closed = tokio::time::timeout(Duration::from_secs(1), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(closed.is_ok());
    }
}
