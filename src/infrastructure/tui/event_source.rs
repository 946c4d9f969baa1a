use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the runner pulls host events from: the live terminal or a scripted queue.
pub enum EventSource {
    Real(Arc<Mutex<dyn TuiLike + Send>>),
    Test(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    /// `None` means no event is available right now; scripted sources also
    /// report exhaustion this way.
    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => tui.lock().await.next().await,
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}
