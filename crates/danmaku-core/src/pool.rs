//! Bounded cache of reusable visuals
//!
//! Comments live for a few seconds at most, so their visuals are recycled
//! instead of being rebuilt for every submission. The pool is purely an
//! optimization: releasing into a full pool drops the visual.

/// Default number of visuals kept for reuse
pub const MAX_POOL_SIZE: usize = 20;

/// Stack of released visuals, most recently released first
#[derive(Debug)]
pub struct VisualPool<V> {
    free: Vec<V>,
    capacity: usize,
}

impl<V> Default for VisualPool<V> {
    fn default() -> Self {
        Self::new(MAX_POOL_SIZE)
    }
}

impl<V> VisualPool<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Take a cached visual, or `None` when the caller must create one
    #[inline]
    pub fn acquire(&mut self) -> Option<V> {
        self.free.pop()
    }

    /// Return a visual for reuse
    ///
    /// Returns `false` when the pool was full and the visual was dropped.
    pub fn release(&mut self, visual: V) -> bool {
        if self.free.len() >= self.capacity {
            return false;
        }
        self.free.push(visual);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
