//! Entry position and travel time for a new comment
//!
//! Every comment in a lane moves at the same constant velocity, so spacing
//! fixed at entry is kept for the whole traversal. That makes checking the
//! lane's tail alone sufficient to rule out overlap.

use std::time::Duration;

use crate::config::DanmakuConfig;

/// Where a comment enters and how long it travels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Entry x (left edge)
    pub x: f32,
    /// Top edge, fixed by lane index
    pub y: f32,
    /// Exit x, reached when the comment has fully left the viewport
    pub exit_x: f32,
    /// Time to travel from `x` to `exit_x`
    pub duration: Duration,
}

impl Placement {
    /// Distance covered from entry to exit
    #[inline]
    pub fn travel(&self) -> f32 {
        self.x - self.exit_x
    }
}

/// Compute the placement of a comment of measured `width` entering `lane`
///
/// `tail_right` is the live right edge of the lane's most recent comment, or
/// `None` when the lane is empty.
pub fn place(
    config: &DanmakuConfig,
    lane: usize,
    viewport_width: f32,
    tail_right: Option<f32>,
    width: f32,
) -> Placement {
    let x = match tail_right {
        None => viewport_width,
        Some(tail_right) => {
            let gap = viewport_width - config.item_min_margin - tail_right;
            if gap <= 0.0 {
                // Predecessor has not cleared the minimum spacing yet: queue
                // up right behind it
                tail_right + config.item_min_margin
            } else {
                viewport_width
            }
        }
    };

    let y = lane as f32 * config.lane_pitch();
    let travel = (x + width).max(0.0);

    Placement {
        x,
        y,
        exit_x: -width,
        duration: travel_duration(travel, config.velocity),
    }
}

/// Travel time at `velocity` units per millisecond
///
/// Resolved to the nanosecond. Whole milliseconds would give each comment a
/// slightly different real speed and let a follower creep into the margin
/// ahead of it.
pub fn travel_duration(distance: f32, velocity: f32) -> Duration {
    let millis = (distance as f64 / velocity as f64).max(0.0);
    Duration::from_nanos((millis * 1_000_000.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DanmakuConfig {
        DanmakuConfig {
            max_lanes: 3,
            line_height: 20.0,
            line_margin: 4.0,
            item_min_margin: 10.0,
            velocity: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_lane_enters_from_right_edge() {
        let placement = place(&config(), 0, 400.0, None, 60.0);
        assert_eq!(placement.x, 400.0);
        assert_eq!(placement.exit_x, -60.0);
        assert_eq!(placement.travel(), 460.0);
        assert_eq!(placement.duration, Duration::from_millis(920));
    }

    #[test]
    fn test_follows_tail_that_has_not_cleared_margin() {
        // Tail still partly off screen
        let placement = place(&config(), 1, 400.0, Some(430.0), 50.0);
        assert_eq!(placement.x, 440.0);

        // Tail fully on screen but closer than the margin to the edge
        let placement = place(&config(), 1, 400.0, Some(395.0), 50.0);
        assert_eq!(placement.x, 405.0);
    }

    #[test]
    fn test_gap_of_exactly_zero_follows_tail() {
        let placement = place(&config(), 0, 400.0, Some(390.0), 50.0);
        assert_eq!(placement.x, 400.0);
    }

    #[test]
    fn test_cleared_tail_enters_fresh() {
        let placement = place(&config(), 2, 400.0, Some(200.0), 50.0);
        assert_eq!(placement.x, 400.0);
    }

    #[test]
    fn test_y_follows_lane_index() {
        let config = config();
        assert_eq!(place(&config, 0, 400.0, None, 10.0).y, 0.0);
        assert_eq!(place(&config, 1, 400.0, None, 10.0).y, 24.0);
        assert_eq!(place(&config, 2, 400.0, None, 10.0).y, 48.0);
    }

    #[test]
    fn test_duration_keeps_sub_millisecond_precision() {
        assert_eq!(travel_duration(101.0, 0.5), Duration::from_millis(202));
        assert_eq!(travel_duration(3.0, 2.0), Duration::from_micros(1500));

        let third = travel_duration(10.0, 3.0);
        assert!((third.as_secs_f64() * 1000.0 - 10.0 / 3.0).abs() < 1e-6);
        assert!(third > Duration::from_millis(3));
    }

    #[test]
    fn test_speed_is_the_same_for_every_width() {
        // 450 / 0.375 is whole, 470 / 0.375 is not
        let velocity = 0.375;
        for distance in [450.0f32, 470.0, 123.0] {
            let duration = travel_duration(distance, velocity);
            let speed = distance as f64 / (duration.as_secs_f64() * 1000.0);
            assert!((speed - velocity as f64).abs() < 1e-9, "{} -> {}", distance, speed);
        }
    }

    #[test]
    fn test_zero_width_viewport() {
        let placement = place(&config(), 0, 0.0, None, 12.0);
        assert_eq!(placement.x, 0.0);
        assert_eq!(placement.duration, Duration::from_millis(24));
    }
}
