use danmaku_core::ItemId;
use ratatui::style::Color;
use tracing::warn;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Status bar
    pub status_fg: Color,
    pub status_bg: Color,
    pub hint_fg: Color,
    pub paused: Color,

    /// Comment colors, cycled by comment id
    pub palette: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            status_fg: Color::Rgb(0xd4, 0xbe, 0x98),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
            hint_fg: Color::Rgb(0xa8, 0x99, 0x84),
            paused: Color::Rgb(0xe7, 0x8a, 0x4e),
            palette: vec![
                Color::Rgb(0xdd, 0xc7, 0xa1), // fg1
                Color::Rgb(0xea, 0x69, 0x62), // red
                Color::Rgb(0xd8, 0xa6, 0x57), // yellow
                Color::Rgb(0xa9, 0xb6, 0x65), // green
                Color::Rgb(0x89, 0xb4, 0x82), // aqua
                Color::Rgb(0x7d, 0xae, 0xa3), // blue
                Color::Rgb(0xd3, 0x86, 0x9b), // purple
            ],
        }
    }
}

impl Theme {
    /// Terminal default colors only
    pub fn mono() -> Self {
        Self {
            status_fg: Color::Reset,
            status_bg: Color::Reset,
            hint_fg: Color::DarkGray,
            paused: Color::Reset,
            palette: vec![Color::Reset],
        }
    }

    /// Color for a given comment
    pub fn comment_color(&self, id: ItemId) -> Color {
        if self.palette.is_empty() {
            return Color::Reset;
        }
        self.palette[(id.0 % self.palette.len() as u64) as usize]
    }
}

/// Resolve a theme by name, falling back to the default
pub fn load_theme(name: &str) -> Theme {
    match name.trim().to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" | "default" => Theme::default(),
        "mono" | "none" => Theme::mono(),
        other => {
            warn!("Unknown theme '{}', using gruvbox-dark", other);
            Theme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_theme_by_name() {
        assert_eq!(load_theme("mono").palette, vec![Color::Reset]);
        assert_eq!(load_theme("Gruvbox-Dark").palette.len(), 7);
        assert_eq!(load_theme("solarized").palette.len(), 7);
    }

    #[test]
    fn test_comment_color_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.comment_color(ItemId(1)), theme.comment_color(ItemId(8)));
        assert_ne!(theme.comment_color(ItemId(1)), theme.comment_color(ItemId(2)));
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let theme = Theme {
            palette: Vec::new(),
            ..Theme::mono()
        };
        assert_eq!(theme.comment_color(ItemId(3)), Color::Reset);
    }
}
