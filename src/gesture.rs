use crate::config::SWIPE_MIN_DISTANCE;
use crate::input::Direction;

/// A pointer location in whatever units the input surface reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPos {
    pub x: f32,
    pub y: f32,
}

impl PointerPos {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Classifies a pointer-down/pointer-up pair into a swipe direction.
///
/// The axis with the larger travel wins; equal travel is treated as
/// vertical. Travel along the winning axis must strictly exceed
/// `min_distance`, otherwise the gesture is a tap and yields `None`.
#[must_use]
pub fn classify_swipe(start: PointerPos, end: PointerPos, min_distance: f32) -> Option<Direction> {
    let delta_x = end.x - start.x;
    let delta_y = end.y - start.y;

    if delta_x.abs() > delta_y.abs() {
        if delta_x.abs() <= min_distance {
            return None;
        }
        Some(if delta_x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        if delta_y.abs() <= min_distance {
            return None;
        }
        Some(if delta_y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

/// Remembers where a drag began until the matching release arrives.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    start: Option<PointerPos>,
    min_distance: f32,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(min_distance: f32) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    pub fn pointer_down(&mut self, pos: PointerPos) {
        self.start = Some(pos);
    }

    /// Completes the gesture. A release without a recorded press is ignored.
    pub fn pointer_up(&mut self, pos: PointerPos) -> Option<Direction> {
        let start = self.start.take()?;
        classify_swipe(start, pos, self.min_distance)
    }
}

impl Default for SwipeTracker {
    /// Tracker using the pointer-surface threshold.
    fn default() -> Self {
        Self::new(SWIPE_MIN_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SWIPE_MIN_DISTANCE;
    use crate::input::Direction;

    use super::{PointerPos, SwipeTracker, classify_swipe};

    fn swipe(dx: f32, dy: f32) -> Option<Direction> {
        classify_swipe(
            PointerPos::new(100.0, 100.0),
            PointerPos::new(100.0 + dx, 100.0 + dy),
            SWIPE_MIN_DISTANCE,
        )
    }

    #[test]
    fn dominant_axis_decides_direction() {
        assert_eq!(swipe(80.0, 10.0), Some(Direction::Right));
        assert_eq!(swipe(-80.0, 25.0), Some(Direction::Left));
        assert_eq!(swipe(5.0, 60.0), Some(Direction::Down));
        assert_eq!(swipe(-12.0, -45.0), Some(Direction::Up));
    }

    #[test]
    fn short_drags_are_ignored() {
        assert_eq!(swipe(30.0, 0.0), None);
        assert_eq!(swipe(0.0, -30.0), None);
        assert_eq!(swipe(12.0, 4.0), None);
    }

    #[test]
    fn equal_travel_counts_as_vertical() {
        assert_eq!(swipe(40.0, 40.0), Some(Direction::Down));
        assert_eq!(swipe(-40.0, -40.0), Some(Direction::Up));
    }

    #[test]
    fn default_tracker_uses_pointer_threshold() {
        let mut tracker = SwipeTracker::default();

        tracker.pointer_down(PointerPos::new(0.0, 0.0));
        assert_eq!(tracker.pointer_up(PointerPos::new(30.0, 0.0)), None);

        tracker.pointer_down(PointerPos::new(0.0, 0.0));
        assert_eq!(
            tracker.pointer_up(PointerPos::new(0.0, -31.0)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn tracker_requires_press_before_release() {
        let mut tracker = SwipeTracker::default();

        assert_eq!(tracker.pointer_up(PointerPos::new(200.0, 0.0)), None);

        tracker.pointer_down(PointerPos::new(0.0, 0.0));
        assert_eq!(
            tracker.pointer_up(PointerPos::new(200.0, 0.0)),
            Some(Direction::Right)
        );

        // The press is consumed by the release.
        assert_eq!(tracker.pointer_up(PointerPos::new(0.0, 200.0)), None);
    }
}
