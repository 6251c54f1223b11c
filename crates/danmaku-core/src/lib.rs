//! Bullet-comment (danmaku) scheduling
//!
//! Comments scroll right to left across a fixed number of lanes. The
//! [`DanmakuPlayer`] picks a lane for each comment, places it so it never
//! overlaps the comment ahead of it, drives its motion frame by frame and
//! recycles its visual once it has left the screen. Drawing is delegated to a
//! [`Stage`] implementation.

pub mod config;
pub mod error;
pub mod lane;
pub mod motion;
pub mod placement;
pub mod player;
pub mod pool;
pub mod stage;

pub use config::{AppConfig, DanmakuConfig, KeymapConfig, UiConfig};
pub use error::{Error, Result};
pub use lane::{Item, ItemId, LaneStrategy};
pub use placement::Placement;
pub use player::{Admission, DanmakuEvent, DanmakuPlayer, DropReason, PlaybackState};
pub use pool::{VisualPool, MAX_POOL_SIZE};
pub use stage::Stage;
