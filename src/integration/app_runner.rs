use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        clock::{Clock, SystemClock},
        config::Config,
        tui::{self, event_source::EventSource, real::RealTui},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the application: host events -> runtime update cycle -> coalesced render.
///
/// Every exit path of [`AppRunner::run`] shuts the runtime down (releasing the
/// ticker) and restores the terminal.
pub struct AppRunner {
    runtime: Runtime,
    renderer: Renderer,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::Receiver<()>,
}

impl AppRunner {
    pub fn new_with_config(
        config: Config,
        clock: Arc<dyn Clock>,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = Runtime::new_with_executor(initial_state, clock);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        // One pending request is enough; further requests coalesce into it
        let (render_req_tx, render_req_rx) = mpsc::channel(1);
        runtime
            .add_tui_sender(tui_cmd_tx)
            .map_err(color_eyre::eyre::Report::msg)?;
        runtime
            .add_render_request_sender(render_req_tx)
            .map_err(color_eyre::eyre::Report::msg)?;

        Ok(Self {
            runtime,
            renderer: Renderer::new(),
            tui,
            event_source,
            tui_cmd_rx,
            render_req_rx,
        })
    }

    /// Runner over the real terminal and the system clock
    pub fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = tui;
        let event_source = EventSource::real(Arc::clone(&tui));
        Self::new_with_config(config, Arc::new(SystemClock::new()), tui, event_source)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn frames_rendered(&self) -> u64 {
        self.renderer.frames()
    }

    /// Run the main loop until quit is requested or the event source closes.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let result = self.run_loop().await;

        self.runtime.shutdown();
        let exit = self.tui.lock().await.exit();
        if let Err(e) = &result {
            log::error!("AppRunner stopped with error: {e:?}");
        }
        result.and(exit)
    }

    async fn run_loop(&mut self) -> Result<()> {
        let size = self.tui.lock().await.size()?;
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        self.update_and_render(true).await?;

        while !self.runtime.state().system.should_quit {
            let raw = match self.event_source.next().await {
                Some(event) => Self::translate_event(event),
                None => Some(RawMsg::Quit),
            };
            if let Some(raw) = raw {
                self.runtime.send_raw_msg(raw);
            }
            self.update_and_render(false).await?;
        }

        log::info!("AppRunner: quit requested");
        Ok(())
    }

    /// Host event -> raw message. Events without meaning for the stopwatch map to `None`.
    fn translate_event(event: tui::Event) -> Option<RawMsg> {
        match event {
            tui::Event::Quit | tui::Event::Closed => Some(RawMsg::Quit),
            tui::Event::Tick => Some(RawMsg::Tick),
            tui::Event::Render => Some(RawMsg::Render),
            tui::Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => Some(RawMsg::Key(key)),
            tui::Event::Mouse(mouse) => Some(RawMsg::Mouse(mouse)),
            tui::Event::Error => Some(RawMsg::Error("terminal event stream error".to_string())),
            tui::Event::Init | tui::Event::FocusGained | tui::Event::FocusLost => None,
        }
    }

    async fn update_and_render(&mut self, force_render: bool) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        let mut should_render = force_render;
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    should_render = true;
                }
            }
        }
        while self.render_req_rx.try_recv().is_ok() {
            should_render = true;
        }

        if should_render {
            self.renderer.render(&self.tui, self.runtime.state()).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{clock::ManualClock, tui::test::TestTui};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(c: char) -> tui::Event {
        tui::Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn runner(
        events: impl IntoIterator<Item = tui::Event>,
        clock: ManualClock,
    ) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(60, 16)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> =
            Arc::<Mutex<TestTui>>::clone(&test_tui);
        let runner = AppRunner::new_with_config(
            Config::embedded()?,
            Arc::new(clock),
            tui,
            EventSource::test(events),
        )?;
        Ok((runner, test_tui))
    }

    #[tokio::test]
    async fn test_quit_key_ends_loop_and_restores_terminal() -> Result<()> {
        let (mut runner, test_tui) = runner([key('q')], ManualClock::new(0))?;
        runner.run().await?;

        let tui = test_tui.lock().await;
        assert!(!tui.is_entered());
        assert_eq!(tui.exit_count(), 1);
        assert!(tui.draw_count() >= 1);
        assert!(runner.runtime().is_shut_down());
        Ok(())
    }

    #[tokio::test]
    async fn test_exhausted_source_quits() -> Result<()> {
        let (mut runner, _) = runner([], ManualClock::new(0))?;
        runner.run().await?;
        assert!(runner.runtime().state().system.should_quit);
        Ok(())
    }

    #[tokio::test]
    async fn test_start_lap_and_quit_releases_ticker() -> Result<()> {
        let clock = ManualClock::new(0);
        let (mut runner, test_tui) = runner([key(' '), key('l'), key('q')], clock)?;
        runner.run().await?;

        let stats = runner.runtime().get_stats();
        assert!(stats.is_running);
        assert_eq!(stats.laps_count, 1);
        assert!(!stats.ticker_active);
        assert!(test_tui.lock().await.contains_text("Lap 1"));
        Ok(())
    }

    #[tokio::test]
    async fn test_initial_resize_sets_viewport() -> Result<()> {
        let (mut runner, _) = runner([tui::Event::Resize(70, 20), key('q')], ManualClock::new(0))?;
        runner.run().await?;
        assert_eq!(
            runner.runtime().state().system.viewport,
            Some(Rect::new(0, 0, 70, 20))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_renders_are_coalesced() -> Result<()> {
        let events = [key('l'), key('l'), key('l'), key('q')];
        let (mut runner, test_tui) = runner(events, ManualClock::new(0))?;
        runner.run().await?;

        // initial frame plus at most one per loop iteration
        let draws = test_tui.lock().await.draw_count();
        assert!(draws <= 1 + 4);
        assert_eq!(runner.frames_rendered(), draws as u64);
        Ok(())
    }

    #[test]
    fn test_translate_event() {
        assert_eq!(AppRunner::translate_event(tui::Event::Closed), Some(RawMsg::Quit));
        assert_eq!(AppRunner::translate_event(tui::Event::Init), None);
        assert_eq!(
            AppRunner::translate_event(tui::Event::Resize(1, 2)),
            Some(RawMsg::Resize(1, 2))
        );
    }
}
