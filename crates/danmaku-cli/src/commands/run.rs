use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use danmaku_core::AppConfig;
use danmaku_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::{DanmakuWidget, StatusBarWidget},
    App,
};

use super::feed::{spawn_feeder, CommentSource};
use super::samples::random_comment;

pub async fn run(config: AppConfig, source: CommentSource, interval: Duration) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(&config, theme)?;

    let (comment_tx, mut comment_rx) = mpsc::unbounded_channel::<String>();
    let feeder = spawn_feeder(source, interval, comment_tx);
    let mut rng = StdRng::from_os_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Danmaku"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    app.resize(terminal.size()?.width);

    let event_handler = EventHandler::new(config.ui.frame_rate_ms);
    info!(
        "Playing on {} lanes ({:?})",
        config.danmaku.max_lanes, config.danmaku.strategy
    );

    let result = main_loop(
        &mut terminal,
        &mut app,
        &event_handler,
        &keymap,
        &mut comment_rx,
        &mut rng,
    );

    feeder.abort();

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        "Session ended: {} placed, {} completed, {} dropped",
        app.stats.placed, app.stats.completed, app.stats.dropped
    );

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
    comment_rx: &mut mpsc::UnboundedReceiver<String>,
    rng: &mut StdRng,
) -> Result<()> {
    loop {
        // The loop is the only owner of the player; feeders go through the channel
        while let Ok(text) = comment_rx.try_recv() {
            app.submit(&text);
        }

        app.tick_at(Instant::now());

        terminal.draw(|frame| {
            let size = frame.area();
            let constraints = if app.show_status_bar {
                [Constraint::Min(1), Constraint::Length(1)]
            } else {
                [Constraint::Min(1), Constraint::Length(0)]
            };
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(size);

            app.resize(main_layout[0].width);
            DanmakuWidget::render(frame, main_layout[0], app);
            if app.show_status_bar {
                StatusBarWidget::render(frame, main_layout[1], app);
            }
        })?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => match handle_key_event(key, keymap) {
                    Action::Send => {
                        app.submit(random_comment(rng));
                    }
                    action => app.handle_action(action),
                },
                AppEvent::Resize(width, _) => app.resize(width),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
