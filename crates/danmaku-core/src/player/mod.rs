mod controller;
mod events;

pub use controller::{Admission, DanmakuPlayer, DropReason, PlaybackState};
pub use events::DanmakuEvent;
