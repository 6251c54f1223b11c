use danmaku_core::PlaybackState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = Self::status_text(app);
        let help_hint = app.help_hint.as_str();

        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let state_fg = match app.player().state() {
            PlaybackState::Paused => theme.paused,
            _ => theme.status_fg,
        };

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(state_fg).bg(theme.status_bg)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status_bg)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.hint_fg).bg(theme.status_bg),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Left-hand status text
    pub fn status_text(app: &App) -> String {
        let player = app.player();
        if let Some(msg) = &app.status_message {
            if player.is_playing() {
                return format!(" {}", msg);
            }
        }

        let mode_str = match player.state() {
            PlaybackState::Playing => "PLAYING",
            PlaybackState::Paused => "PAUSED",
            PlaybackState::Destroyed => "STOPPED",
        };

        format!(
            " {} | Lanes: {} ({}) | On screen: {} | Queued: {} | Pool: {}/{} | Sent: {} | Done: {}",
            mode_str,
            player.lanes().lane_count(),
            player.selector().strategy(),
            player.lanes().active_count(),
            player.backlog_len(),
            player.pool().len(),
            player.pool().capacity(),
            app.stats.placed,
            app.stats.completed,
        )
    }
}

#[cfg(test)]
mod tests {
    use danmaku_core::AppConfig;

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_status_text_reports_counts() {
        let mut app = App::new(&AppConfig::default(), Theme::default()).unwrap();
        app.resize(40);
        app.submit("one");
        app.submit("two");
        let text = StatusBarWidget::status_text(&app);
        assert!(text.starts_with(" PLAYING"));
        assert!(text.contains("Lanes: 3 (sequential)"));
        assert!(text.contains("On screen: 2"));
        assert!(text.contains("Pool: 0/20"));
        assert!(text.contains("Sent: 2"));
    }

    #[test]
    fn test_status_text_while_paused() {
        let mut app = App::new(&AppConfig::default(), Theme::default()).unwrap();
        app.handle_action(crate::input::Action::Pause);
        app.submit("wait");
        let text = StatusBarWidget::status_text(&app);
        assert!(text.starts_with(" PAUSED"));
        assert!(text.contains("Queued: 1"));
    }

    #[test]
    fn test_resume_message_shown_while_playing() {
        let mut app = App::new(&AppConfig::default(), Theme::default()).unwrap();
        app.handle_action(crate::input::Action::Pause);
        app.submit("wait");
        app.handle_action(crate::input::Action::Resume);
        assert_eq!(
            StatusBarWidget::status_text(&app),
            " Resumed, released 1 queued"
        );
    }
}
