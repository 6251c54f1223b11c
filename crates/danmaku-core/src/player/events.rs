use std::time::Duration;

use crate::lane::ItemId;

/// Notifications emitted by the player to whoever renders or observes it
#[derive(Debug, Clone, PartialEq)]
pub enum DanmakuEvent {
    /// A comment entered a lane
    Placed {
        id: ItemId,
        lane: usize,
        x: f32,
        duration: Duration,
    },
    /// A comment was queued while paused
    Backlogged { pending: usize },
    /// A comment scrolled fully off screen and its visual was recycled
    Completed { id: ItemId, lane: usize },
    /// Playback was paused
    Paused,
    /// Playback resumed; sent after the backlog has been drained
    Resumed { drained: usize },
    /// The player was torn down
    Destroyed,
}
