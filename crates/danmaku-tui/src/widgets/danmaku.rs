use danmaku_core::DanmakuPlayer;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::stage::TerminalStage;
use crate::theme::Theme;

/// Draws every comment in flight on its lane row
pub struct DanmakuWidget;

impl DanmakuWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        Self::draw(frame.buffer_mut(), area, app.player(), &app.theme);
    }

    /// Draw into a buffer; comments are clipped at both edges of `area`
    pub fn draw(
        buf: &mut Buffer,
        area: Rect,
        player: &DanmakuPlayer<TerminalStage>,
        theme: &Theme,
    ) {
        for item in player.items() {
            let row = item.y().floor();
            if row < 0.0 || row >= area.height as f32 {
                continue;
            }

            let col = item.x().floor() as i32;
            if col >= area.width as i32 {
                continue;
            }
            let skip = col.min(0).unsigned_abs() as usize;
            let start = col.max(0) as u16;
            let available = (area.width - start) as usize;

            let visible = clip_columns(item.visual().text(), skip, available);
            if visible.is_empty() {
                continue;
            }

            let style = Style::default().fg(theme.comment_color(item.id()));
            buf.set_stringn(
                area.x + start,
                area.y + row as u16,
                &visible,
                available,
                style,
            );
        }
    }
}

/// Drop the first `skip` columns of `text` and keep at most `max` columns
///
/// A wide glyph cut by either edge is replaced with spaces for its visible
/// half so the remaining text stays column-aligned.
pub fn clip_columns(text: &str, skip: usize, max: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    let mut used = 0usize;

    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        let end = col + width;

        if end <= skip {
            col = end;
            continue;
        }
        if col < skip {
            let visible = (end - skip).min(max - used);
            out.extend(std::iter::repeat(' ').take(visible));
            used += visible;
            col = end;
            continue;
        }
        if used + width > max {
            out.extend(std::iter::repeat(' ').take(max - used));
            break;
        }

        out.push(ch);
        used += width;
        col = end;
    }

    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use danmaku_core::DanmakuConfig;

    use super::*;

    fn player(width: u16) -> DanmakuPlayer<TerminalStage> {
        let config = DanmakuConfig {
            max_lanes: 3,
            line_height: 1.0,
            line_margin: 1.0,
            item_min_margin: 2.0,
            velocity: 0.01,
            ..Default::default()
        };
        DanmakuPlayer::new(config, TerminalStage::new(width, 0)).unwrap()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_clip_columns_ascii() {
        assert_eq!(clip_columns("hello", 0, 10), "hello");
        assert_eq!(clip_columns("hello", 2, 10), "llo");
        assert_eq!(clip_columns("hello", 0, 3), "hel");
        assert_eq!(clip_columns("hello", 5, 3), "");
    }

    #[test]
    fn test_clip_columns_wide_glyphs() {
        assert_eq!(clip_columns("弹幕护体", 0, 8), "弹幕护体");
        assert_eq!(clip_columns("弹幕护体", 1, 8), " 幕护体");
        assert_eq!(clip_columns("弹幕护体", 2, 8), "幕护体");
        assert_eq!(clip_columns("弹幕护体", 0, 3), "弹 ");
    }

    #[test]
    fn test_offscreen_comment_not_drawn() {
        let mut player = player(18);
        player.submit("hi");
        let area = Rect::new(0, 0, 18, 5);
        let mut buf = Buffer::empty(area);
        DanmakuWidget::draw(&mut buf, area, &player, &Theme::mono());
        assert_eq!(row(&buf, 0).trim(), "");
    }

    #[test]
    fn test_comments_drawn_on_lane_rows() {
        let mut player = player(18);
        player.submit("hi");
        player.submit("yo");
        // Both travel 20 cells in 2000ms; halfway they sit at column 8
        player.advance(Duration::from_millis(1000));

        let area = Rect::new(0, 0, 18, 5);
        let mut buf = Buffer::empty(area);
        DanmakuWidget::draw(&mut buf, area, &player, &Theme::mono());
        assert_eq!(row(&buf, 0), format!("{:8}hi{:8}", "", ""));
        assert_eq!(row(&buf, 1).trim(), "");
        assert_eq!(row(&buf, 2), format!("{:8}yo{:8}", "", ""));
    }

    #[test]
    fn test_comment_clipped_at_left_edge() {
        let mut player = player(18);
        player.submit("abcd");
        // 22 cells over 2200ms; after 2000ms x = -2
        player.advance(Duration::from_millis(2000));

        let area = Rect::new(0, 0, 18, 1);
        let mut buf = Buffer::empty(area);
        DanmakuWidget::draw(&mut buf, area, &player, &Theme::mono());
        assert!(row(&buf, 0).starts_with("cd "));
    }

    #[test]
    fn test_rows_beyond_area_skipped() {
        let mut player = player(10);
        for text in ["a", "b", "c"] {
            player.submit(text);
        }
        player.advance(Duration::from_millis(500));

        // Lane 2 sits on row 4, outside a two-row area
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        DanmakuWidget::draw(&mut buf, area, &player, &Theme::mono());
        assert_eq!(row(&buf, 0).trim(), "a");
    }
}
