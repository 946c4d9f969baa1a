use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::Components};

/// Draws the whole screen from the current state
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
    frames: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let components = &mut self.components;
        guard.draw(&mut |f: &mut ratatui::Frame<'_>| components.render(f, state))?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::Config, tui::test::TestTui};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_renderer_renders_with_test_tui() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(60, 16)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> =
            Arc::<Mutex<TestTui>>::clone(&test_tui);
        let state = AppState::new_with_config(Config::embedded()?);

        let mut renderer = Renderer::new();
        renderer.render(&tui, &state).await?;

        assert_eq!(renderer.frames(), 1);
        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        assert!(guard.contains_text("0:00"));
        Ok(())
    }
}
