use crate::api::ApiClient;
use crate::app::App;
use crate::config::MaschineConfig;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::channel;
use super::actions::{run_action, EffectRunner};
use super::views::handle_search_key;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: ApiClient,
    config: &MaschineConfig,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let effects = EffectRunner::new(
        client,
        action_tx,
        config.debounce(),
        config.profile_url.clone(),
    );

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.search.is_loading() {
            app.throbber_state.calc_next();
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let effect = handle_search_key(key, app);
                    effects.observe(app);
                    if let Some(effect) = effect {
                        effects.run(effect, app);
                    }
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app);
        }

        if !app.running {
            break;
        }

        // Let spawned searches make progress between frames.
        tokio::task::yield_now().await;
    }

    Ok(())
}
