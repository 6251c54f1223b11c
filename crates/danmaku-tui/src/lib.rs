//! Terminal front end for the danmaku player
//!
//! Supplies the [`stage::TerminalStage`] the scheduler draws through, the
//! widgets that paint comments and status, and the input plumbing.

pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod stage;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use stage::{Label, TerminalStage};
pub use theme::{load_theme, Theme};
