use std::time::{Duration, Instant};

use danmaku_core::{
    Admission, AppConfig, DanmakuEvent, DanmakuPlayer, KeymapConfig, PlaybackState,
};
use tokio::sync::mpsc;

use crate::input::Action;
use crate::stage::TerminalStage;
use crate::theme::Theme;

/// Running totals gathered from player events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub placed: u64,
    pub completed: u64,
    pub dropped: u64,
}

/// Terminal player state
pub struct App {
    player: DanmakuPlayer<TerminalStage>,
    events: mpsc::UnboundedReceiver<DanmakuEvent>,
    pub theme: Theme,
    pub stats: Stats,
    pub show_status_bar: bool,
    /// Key hint shown in the status bar
    pub help_hint: String,
    pub status_message: Option<String>,
    pub should_quit: bool,
    last_frame: Option<Instant>,
}

impl App {
    /// Build the player from configuration; the viewport width is set on the first resize
    pub fn new(config: &AppConfig, theme: Theme) -> danmaku_core::Result<Self> {
        let stage = TerminalStage::new(0, config.ui.padding);
        let player = DanmakuPlayer::new(config.danmaku.clone(), stage)?;
        let mut app = Self::with_player(player, theme);
        app.show_status_bar = config.ui.show_status_bar;
        app.help_hint = help_hint(&config.keymap);
        Ok(app)
    }

    /// Wrap an existing player, subscribing to its events
    pub fn with_player(player: DanmakuPlayer<TerminalStage>, theme: Theme) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        Self {
            player: player.with_event_sender(tx),
            events,
            theme,
            stats: Stats::default(),
            show_status_bar: true,
            help_hint: help_hint(&KeymapConfig::default()),
            status_message: None,
            should_quit: false,
            last_frame: None,
        }
    }

    #[inline]
    pub fn player(&self) -> &DanmakuPlayer<TerminalStage> {
        &self.player
    }

    pub fn submit(&mut self, text: &str) -> Admission {
        let admission = self.player.submit(text);
        if let Admission::Dropped(_) = admission {
            self.stats.dropped += 1;
        }
        self.drain_events();
        admission
    }

    /// Advance the frame clock to `now`
    pub fn tick_at(&mut self, now: Instant) -> usize {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        self.advance(dt)
    }

    /// Advance every comment by `dt`
    pub fn advance(&mut self, dt: Duration) -> usize {
        let completed = self.player.advance(dt);
        self.drain_events();
        completed
    }

    pub fn resize(&mut self, width: u16) {
        self.player.stage_mut().set_viewport_width(width);
    }

    /// Apply a playback action; `Send` is left to the caller, which owns the comment source
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.player.destroy();
                self.should_quit = true;
            }
            Action::Pause => {
                self.player.pause();
            }
            Action::Resume => {
                self.player.resume();
            }
            Action::TogglePlayback => match self.player.state() {
                PlaybackState::Playing => {
                    self.player.pause();
                }
                PlaybackState::Paused => {
                    self.player.resume();
                }
                PlaybackState::Destroyed => {}
            },
            Action::Send | Action::None => {}
        }
        self.drain_events();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                DanmakuEvent::Placed { .. } => self.stats.placed += 1,
                DanmakuEvent::Completed { .. } => self.stats.completed += 1,
                DanmakuEvent::Paused => {
                    self.status_message = Some("Paused".to_string());
                }
                DanmakuEvent::Backlogged { pending } => {
                    self.status_message = Some(format!("Paused, {} queued", pending));
                }
                DanmakuEvent::Resumed { drained } => {
                    self.status_message = (drained > 0)
                        .then(|| format!("Resumed, released {} queued", drained));
                }
                DanmakuEvent::Destroyed => {
                    self.status_message = Some("Stopped".to_string());
                }
            }
        }
    }
}

fn help_hint(keymap: &KeymapConfig) -> String {
    format!(
        " {}:send {}:pause {}:resume {}:toggle {}:quit ",
        keymap.send, keymap.pause, keymap.resume, keymap.toggle, keymap.quit
    )
}
