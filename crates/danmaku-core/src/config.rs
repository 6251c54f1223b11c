use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::lane::LaneStrategy;
use crate::pool::MAX_POOL_SIZE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub danmaku: DanmakuConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (holds the log file)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Scheduler configuration, fixed for the lifetime of a player.
///
/// Geometry is expressed in viewport units (pixels for a graphical host,
/// cells for the terminal stage) and velocity in units per millisecond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DanmakuConfig {
    /// Number of horizontal lanes
    #[serde(default = "default_max_lanes")]
    pub max_lanes: usize,
    /// Height of a single lane
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    /// Vertical gap between lanes
    #[serde(default = "default_line_margin")]
    pub line_margin: f32,
    /// Minimum horizontal gap between two comments in the same lane
    #[serde(default = "default_item_min_margin")]
    pub item_min_margin: f32,
    /// Scroll velocity in units per millisecond
    #[serde(default = "default_velocity")]
    pub velocity: f32,
    /// Lane selection policy
    #[serde(default)]
    pub strategy: LaneStrategy,
    /// Number of released visuals kept for reuse
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

impl Default for DanmakuConfig {
    fn default() -> Self {
        Self {
            max_lanes: default_max_lanes(),
            line_height: default_line_height(),
            line_margin: default_line_margin(),
            item_min_margin: default_item_min_margin(),
            velocity: default_velocity(),
            strategy: LaneStrategy::default(),
            pool_size: default_pool_size(),
        }
    }
}

impl DanmakuConfig {
    /// Reject configurations the scheduler cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_lanes == 0 {
            return Err(crate::Error::InvalidConfiguration(
                "max_lanes must be at least 1".to_string(),
            ));
        }
        if !self.velocity.is_finite() || self.velocity <= 0.0 {
            return Err(crate::Error::InvalidConfiguration(format!(
                "velocity must be a positive number, got {}",
                self.velocity
            )));
        }
        for (name, value) in [
            ("line_height", self.line_height),
            ("line_margin", self.line_margin),
            ("item_min_margin", self.item_min_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::Error::InvalidConfiguration(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Vertical distance between the tops of two adjacent lanes
    #[inline]
    pub fn lane_pitch(&self) -> f32 {
        self.line_height + self.line_margin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frame interval in milliseconds
    #[serde(default = "default_frame_rate")]
    pub frame_rate_ms: u64,
    /// Interval between automatically sent comments in milliseconds
    #[serde(default = "default_send_interval")]
    pub send_interval_ms: u64,
    /// Show the status bar below the overlay
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Theme name ("gruvbox-dark" or "mono")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Blank cells drawn on each side of a comment
    #[serde(default = "default_padding")]
    pub padding: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_rate_ms: default_frame_rate(),
            send_interval_ms: default_send_interval(),
            show_status_bar: default_true(),
            theme: default_theme_name(),
            padding: default_padding(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "p", "<C-p>" (Ctrl+p), "<S-p>" (Shift+p), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the player
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Pause playback
    #[serde(default = "default_key_pause")]
    pub pause: String,
    /// Resume playback
    #[serde(default = "default_key_resume")]
    pub resume: String,
    /// Toggle between playing and paused
    #[serde(default = "default_key_toggle")]
    pub toggle: String,
    /// Send a random sample comment
    #[serde(default = "default_key_send")]
    pub send: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            pause: default_key_pause(),
            resume: default_key_resume(),
            toggle: default_key_toggle(),
            send: default_key_send(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_pause() -> String { "p".to_string() }
fn default_key_resume() -> String { "r".to_string() }
fn default_key_toggle() -> String { "<Space>".to_string() }
fn default_key_send() -> String { "s".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("danmaku")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_lanes() -> usize {
    3
}

fn default_line_height() -> f32 {
    1.0
}

fn default_line_margin() -> f32 {
    1.0
}

fn default_item_min_margin() -> f32 {
    4.0
}

fn default_velocity() -> f32 {
    0.03 // 30 cells per second
}

fn default_pool_size() -> usize {
    MAX_POOL_SIZE
}

fn default_frame_rate() -> u64 {
    16 // ~60fps
}

fn default_send_interval() -> u64 {
    800
}

fn default_true() -> bool {
    true
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_padding() -> u16 {
    1
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.danmaku.validate()?;
        Ok(config)
    }

    /// Render configuration as TOML text
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/danmaku/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("danmaku")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("danmaku.log")
    }
}
