mod danmaku;
mod status_bar;

pub use danmaku::{clip_columns, DanmakuWidget};
pub use status_bar::StatusBarWidget;
