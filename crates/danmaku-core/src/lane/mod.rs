//! Lanes: fixed horizontal tracks holding comments in entry order
//!
//! Placement only ever appends at the tail and every comment travels at the
//! same velocity, so each lane is a plain FIFO queue. Only the tail is
//! consulted when placing the next comment.

mod item;
mod strategy;

use std::collections::VecDeque;

pub use item::{Item, ItemId};
pub use strategy::{LaneSelector, LaneStrategy};

/// One horizontal track
#[derive(Debug)]
pub struct Lane<V> {
    items: VecDeque<Item<V>>,
}

impl<V> Default for Lane<V> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<V> Lane<V> {
    pub(crate) fn push_back(&mut self, item: Item<V>) {
        self.items.push_back(item);
    }

    /// Most recently entered comment
    #[inline]
    pub fn tail(&self) -> Option<&Item<V>> {
        self.items.back()
    }

    /// Oldest comment still on screen
    #[inline]
    pub fn head(&self) -> Option<&Item<V>> {
        self.items.front()
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> Option<Item<V>> {
        let index = self.items.iter().position(|item| item.id == id)?;
        self.items.remove(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item<V>> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item<V>> {
        self.items.iter_mut()
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fixed set of lanes indexed `0..count`
#[derive(Debug)]
pub struct LaneRegistry<V> {
    lanes: Vec<Lane<V>>,
}

impl<V> LaneRegistry<V> {
    pub fn new(count: usize) -> Self {
        Self {
            lanes: (0..count).map(|_| Lane::default()).collect(),
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Lane<V>> {
        self.lanes.get(index)
    }

    /// Append at the tail of the item's own lane
    ///
    /// Lane indices come from the selector and are always below `len()`.
    pub(crate) fn push(&mut self, item: Item<V>) {
        self.lanes[item.lane].push_back(item);
    }

    pub(crate) fn remove(&mut self, lane: usize, id: ItemId) -> Option<Item<V>> {
        self.lanes.get_mut(lane)?.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lane<V>> {
        self.lanes.iter()
    }

    /// Every active comment, lane by lane, oldest first within a lane
    pub fn items(&self) -> impl Iterator<Item = &Item<V>> {
        self.lanes.iter().flat_map(Lane::iter)
    }

    pub(crate) fn items_mut(&mut self) -> impl Iterator<Item = &mut Item<V>> {
        self.lanes.iter_mut().flat_map(|lane| lane.iter_mut())
    }

    /// Number of lanes
    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Number of comments currently on screen
    pub fn active_count(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }

    pub(crate) fn clear_all(&mut self) {
        for lane in &mut self.lanes {
            lane.clear();
        }
    }
}
