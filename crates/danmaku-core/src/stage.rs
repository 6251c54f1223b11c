//! Rendering collaborator required by the player
//!
//! The player decides lanes, positions and timing; the stage owns everything
//! that depends on how comments are actually drawn: creating visuals,
//! measuring text and attaching visuals to the viewport.

/// Host surface comments are drawn on
pub trait Stage {
    /// On-screen representation of one comment
    type Visual;

    /// Current viewport width, read at placement time
    fn viewport_width(&self) -> f32;

    /// Build a fresh visual when the pool has none to offer
    fn create_visual(&mut self) -> Self::Visual;

    /// Write `text` into `visual` with the current styling and return its measured width
    fn bind(&mut self, visual: &mut Self::Visual, text: &str) -> f32;

    /// Make a placed visual part of the viewport
    fn attach(&mut self, visual: &Self::Visual);

    /// Remove a visual from the viewport before it goes back to the pool
    fn detach(&mut self, visual: &Self::Visual);
}
