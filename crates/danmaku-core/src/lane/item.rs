use std::fmt;

use crate::motion::Motion;

/// Identifier assigned to every placed comment, increasing in placement order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A comment in flight
///
/// Owns its visual and its motion. The lane is fixed at creation; items never
/// migrate between lanes.
#[derive(Debug)]
pub struct Item<V> {
    pub(crate) id: ItemId,
    pub(crate) lane: usize,
    pub(crate) text: String,
    pub(crate) visual: V,
    pub(crate) width: f32,
    pub(crate) y: f32,
    pub(crate) motion: Motion,
}

impl<V> Item<V> {
    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn lane(&self) -> usize {
        self.lane
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn visual(&self) -> &V {
        &self.visual
    }

    /// Measured width
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Live left edge, read from the motion
    #[inline]
    pub fn x(&self) -> f32 {
        self.motion.position()
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Live right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x() + self.width
    }

    #[inline]
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub(crate) fn into_visual(self) -> V {
        self.visual
    }
}
