use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::DanmakuConfig;
use crate::lane::{Item, ItemId, Lane, LaneRegistry, LaneSelector};
use crate::motion::Motion;
use crate::placement::{place, Placement};
use crate::pool::VisualPool;
use crate::stage::Stage;
use crate::Result;

use super::events::DanmakuEvent;

/// Playback state machine
///
/// `Playing` and `Paused` toggle freely; `Destroyed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Destroyed,
}

/// Why a submission was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Empty or whitespace-only text
    Blank,
    /// The player has been torn down
    Destroyed,
}

/// Outcome of [`DanmakuPlayer::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    Dropped(DropReason),
    /// Queued while paused; `pending` is the backlog length afterwards
    Backlogged { pending: usize },
    Placed {
        id: ItemId,
        lane: usize,
        placement: Placement,
    },
}

/// Bullet-comment scheduler
///
/// Owns lanes, pool, backlog and playback state. All mutation goes through
/// `&mut self`, so a host sharing the player across threads has to funnel
/// submissions and frame ticks through one owner.
pub struct DanmakuPlayer<S: Stage> {
    config: DanmakuConfig,
    stage: S,
    state: PlaybackState,
    selector: LaneSelector,
    lanes: LaneRegistry<S::Visual>,
    pool: VisualPool<S::Visual>,
    backlog: VecDeque<String>,
    next_id: u64,
    event_tx: Option<mpsc::UnboundedSender<DanmakuEvent>>,
}

impl<S: Stage> DanmakuPlayer<S> {
    /// Create a player in the `Playing` state
    pub fn new(config: DanmakuConfig, stage: S) -> Result<Self> {
        config.validate()?;
        let selector = LaneSelector::new(config.strategy, config.max_lanes);
        Ok(Self::assemble(config, stage, selector))
    }

    /// Create a player whose random lane policy is reproducible
    pub fn with_seed(config: DanmakuConfig, stage: S, seed: u64) -> Result<Self> {
        config.validate()?;
        let selector = LaneSelector::seeded(config.strategy, config.max_lanes, seed);
        Ok(Self::assemble(config, stage, selector))
    }

    fn assemble(config: DanmakuConfig, stage: S, selector: LaneSelector) -> Self {
        Self {
            lanes: LaneRegistry::new(config.max_lanes),
            pool: VisualPool::new(config.pool_size),
            config,
            stage,
            state: PlaybackState::Playing,
            selector,
            backlog: VecDeque::new(),
            next_id: 1,
            event_tx: None,
        }
    }

    /// Set the event sender for observers
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<DanmakuEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn send_event(&mut self, event: DanmakuEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send danmaku event: receiver dropped");
                self.event_tx = None;
            }
        }
    }

    /// Offer a comment to the player
    ///
    /// Blank text and anything arriving after teardown is dropped. While
    /// paused the text is queued and placed on resume.
    pub fn submit(&mut self, text: &str) -> Admission {
        if text.trim().is_empty() {
            debug!("Dropping blank comment");
            return Admission::Dropped(DropReason::Blank);
        }

        match self.state {
            PlaybackState::Destroyed => {
                debug!("Dropping comment submitted after teardown");
                Admission::Dropped(DropReason::Destroyed)
            }
            PlaybackState::Paused => {
                self.backlog.push_back(text.to_string());
                let pending = self.backlog.len();
                debug!(pending, "Comment queued while paused");
                self.send_event(DanmakuEvent::Backlogged { pending });
                Admission::Backlogged { pending }
            }
            PlaybackState::Playing => self.launch(text),
        }
    }

    fn launch(&mut self, text: &str) -> Admission {
        let lane = self.selector.next_lane();

        let mut visual = match self.pool.acquire() {
            Some(visual) => visual,
            None => self.stage.create_visual(),
        };
        let width = self.stage.bind(&mut visual, text);

        let tail_right = self.lanes.get(lane).and_then(Lane::tail).map(Item::right);
        let placement = place(
            &self.config,
            lane,
            self.stage.viewport_width(),
            tail_right,
            width,
        );

        self.stage.attach(&visual);

        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.lanes.push(Item {
            id,
            lane,
            text: text.to_string(),
            visual,
            width,
            y: placement.y,
            motion: Motion::start(placement.x, placement.exit_x, placement.duration),
        });

        debug!(
            %id,
            lane,
            x = placement.x,
            width,
            duration_ms = placement.duration.as_secs_f64() * 1000.0,
            "Placed comment"
        );
        self.send_event(DanmakuEvent::Placed {
            id,
            lane,
            x: placement.x,
            duration: placement.duration,
        });

        Admission::Placed {
            id,
            lane,
            placement,
        }
    }

    /// Freeze every comment in place and start queueing submissions
    ///
    /// Returns `false` when already paused or destroyed.
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        self.state = PlaybackState::Paused;
        for item in self.lanes.items_mut() {
            item.motion.pause();
        }
        info!(active = self.lanes.active_count(), "Playback paused");
        self.send_event(DanmakuEvent::Paused);
        true
    }

    /// Resume every comment, then place the backlog in submission order
    ///
    /// Returns `false` when already playing or destroyed.
    pub fn resume(&mut self) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        self.state = PlaybackState::Playing;
        for item in self.lanes.items_mut() {
            item.motion.resume();
        }

        let drained = self.backlog.len();
        while let Some(text) = self.backlog.pop_front() {
            self.submit(&text);
        }

        info!(drained, "Playback resumed");
        self.send_event(DanmakuEvent::Resumed { drained });
        true
    }

    /// Tear down: cancel all motion, clear lanes and backlog
    ///
    /// Visuals of cancelled comments are abandoned rather than pooled since
    /// the viewport is going away. Returns `false` when already destroyed.
    pub fn destroy(&mut self) -> bool {
        if self.state == PlaybackState::Destroyed {
            return false;
        }
        self.state = PlaybackState::Destroyed;
        for item in self.lanes.items_mut() {
            item.motion.cancel();
        }
        let cancelled = self.lanes.active_count();
        self.lanes.clear_all();
        self.backlog.clear();

        info!(cancelled, "Danmaku player destroyed");
        self.send_event(DanmakuEvent::Destroyed);
        true
    }

    /// Advance every motion by one frame and retire finished comments
    ///
    /// Returns the number of comments that completed during this frame.
    pub fn advance(&mut self, dt: Duration) -> usize {
        if self.state == PlaybackState::Destroyed {
            return 0;
        }

        let finished: Vec<(usize, ItemId)> = self
            .lanes
            .items_mut()
            .filter_map(|item| item.motion.advance(dt).then_some((item.lane, item.id)))
            .collect();

        for &(lane, id) in &finished {
            self.complete(lane, id);
        }
        finished.len()
    }

    fn complete(&mut self, lane: usize, id: ItemId) {
        // A completion that lands after teardown must not touch the stage or pool
        if self.state == PlaybackState::Destroyed {
            return;
        }
        let Some(item) = self.lanes.remove(lane, id) else {
            return;
        };

        self.stage.detach(item.visual());
        let recycled = self.pool.release(item.into_visual());
        debug!(%id, lane, recycled, "Comment completed");
        self.send_event(DanmakuEvent::Completed { id, lane });
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.state == PlaybackState::Destroyed
    }

    #[inline]
    pub fn config(&self) -> &DanmakuConfig {
        &self.config
    }

    #[inline]
    pub fn lanes(&self) -> &LaneRegistry<S::Visual> {
        &self.lanes
    }

    /// Every active comment, lane by lane
    pub fn items(&self) -> impl Iterator<Item = &Item<S::Visual>> {
        self.lanes.items()
    }

    /// Queued texts, oldest first
    pub fn backlog(&self) -> impl Iterator<Item = &str> {
        self.backlog.iter().map(String::as_str)
    }

    #[inline]
    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    #[inline]
    pub fn pool(&self) -> &VisualPool<S::Visual> {
        &self.pool
    }

    #[inline]
    pub fn selector(&self) -> &LaneSelector {
        &self.selector
    }

    #[inline]
    pub fn stage(&self) -> &S {
        &self.stage
    }

    #[inline]
    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }
}
