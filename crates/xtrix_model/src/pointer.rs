//! Drag gesture tracking over a track measured once at gesture start.
//!
//! The tracker is generic over a snapshot `S` captured when the gesture begins
//! (nothing for a slider, the two adjacent panel sizes for a resize handle), so
//! every move can be computed from the gesture origin instead of accumulating
//! per-event deltas.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Primary axis a track or panel group runs along.
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    /// Token used for `data-ui-orientation` and `aria-orientation`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Client-space pointer coordinate.
pub struct PointerPosition {
    /// Horizontal client coordinate.
    pub x: f64,
    /// Vertical client coordinate.
    pub y: f64,
}

impl PointerPosition {
    /// Coordinate along `axis`.
    pub fn along(self, axis: Orientation) -> f64 {
        match axis {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Bounding rectangle of the element the pointer is dragged across.
pub struct TrackRect {
    /// Left edge in client space.
    pub left: f64,
    /// Top edge in client space.
    pub top: f64,
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl TrackRect {
    /// Edge the ratio is measured from.
    pub fn origin(&self, axis: Orientation) -> f64 {
        match axis {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }

    /// Length along `axis`.
    pub fn extent(&self, axis: Orientation) -> f64 {
        match axis {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &TrackRect) -> TrackRect {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = (self.left + self.width).max(other.left + other.width);
        let bottom = (self.top + self.height).max(other.top + other.height);
        TrackRect {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// DOM `PointerEvent.pointerId`.
pub struct PointerId(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// One pointer event reduced to the fields the tracker needs.
pub struct PointerSample {
    /// Pointer that produced the event.
    pub id: PointerId,
    /// Client-space position.
    pub position: PointerPosition,
}

#[derive(Debug, Clone, PartialEq)]
/// State captured for the lifetime of one drag gesture.
pub struct DragSession<S> {
    /// Pointer that owns the gesture.
    pub pointer: PointerId,
    /// Axis the track runs along.
    pub axis: Orientation,
    /// Pointer position at gesture start.
    pub pointer_start: PointerPosition,
    /// Track rectangle measured at gesture start.
    pub track: TrackRect,
    /// Owner state captured at gesture start.
    pub snapshot: S,
}

impl<S> DragSession<S> {
    /// Position of `pointer` along the track, clamped to `0..=1`.
    pub fn ratio(&self, pointer: PointerPosition) -> f64 {
        let extent = self.track.extent(self.axis);
        ((pointer.along(self.axis) - self.track.origin(self.axis)) / extent).clamp(0.0, 1.0)
    }

    /// Signed travel since gesture start as a fraction of the track extent.
    pub fn delta_ratio(&self, pointer: PointerPosition) -> f64 {
        let extent = self.track.extent(self.axis);
        (pointer.along(self.axis) - self.pointer_start.along(self.axis)) / extent
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Projection of a move event onto the track.
pub struct DragUpdate {
    /// Absolute position along the track in `0..=1`.
    pub ratio: f64,
    /// Signed travel since gesture start relative to the track extent.
    pub delta_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
/// `Idle` / `Dragging` state machine for a single-pointer drag.
pub enum PointerTracker<S> {
    /// No active gesture.
    Idle,
    /// A gesture is in progress.
    Dragging(DragSession<S>),
}

impl<S> Default for PointerTracker<S> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<S> PointerTracker<S> {
    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Active gesture, if any.
    pub fn session(&self) -> Option<&DragSession<S>> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// Starts a gesture and returns the initial projection.
    ///
    /// Returns `None` without changing state when a gesture is already active
    /// (first pointer wins) or the track has no extent along `axis`.
    pub fn begin(
        &mut self,
        sample: PointerSample,
        axis: Orientation,
        track: TrackRect,
        snapshot: S,
    ) -> Option<DragUpdate> {
        if self.is_dragging() {
            return None;
        }
        let extent = track.extent(axis);
        if !(extent.is_finite() && extent > 0.0) {
            return None;
        }
        let session = DragSession {
            pointer: sample.id,
            axis,
            pointer_start: sample.position,
            track,
            snapshot,
        };
        let update = DragUpdate {
            ratio: session.ratio(sample.position),
            delta_ratio: 0.0,
        };
        *self = Self::Dragging(session);
        Some(update)
    }

    /// Projects a move of the captured pointer. Other pointers are ignored.
    pub fn update(&self, sample: PointerSample) -> Option<DragUpdate> {
        let session = self.session()?;
        if session.pointer != sample.id {
            return None;
        }
        Some(DragUpdate {
            ratio: session.ratio(sample.position),
            delta_ratio: session.delta_ratio(sample.position),
        })
    }

    /// Ends the gesture on release or cancel of the captured pointer and
    /// returns the finished session.
    pub fn end(&mut self, pointer: PointerId) -> Option<DragSession<S>> {
        if self.session()?.pointer != pointer {
            return None;
        }
        self.release()
    }

    /// Drops any active gesture unconditionally (teardown path).
    pub fn release(&mut self) -> Option<DragSession<S>> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn track() -> TrackRect {
        TrackRect {
            left: 100.0,
            top: 20.0,
            width: 200.0,
            height: 40.0,
        }
    }

    fn sample(id: i32, x: f64, y: f64) -> PointerSample {
        PointerSample {
            id: PointerId(id),
            position: PointerPosition { x, y },
        }
    }

    #[test]
    fn begin_projects_initial_ratio() {
        let mut tracker = PointerTracker::<()>::Idle;
        let update = tracker
            .begin(sample(1, 150.0, 30.0), Orientation::Horizontal, track(), ())
            .expect("gesture starts");
        assert_eq!(update.ratio, 0.25);
        assert_eq!(update.delta_ratio, 0.0);
        assert!(tracker.is_dragging());
    }

    #[test]
    fn moves_use_track_measured_at_start() {
        let mut tracker = PointerTracker::<()>::Idle;
        tracker.begin(sample(1, 150.0, 30.0), Orientation::Horizontal, track(), ());

        let update = tracker.update(sample(1, 250.0, 80.0)).unwrap();
        assert_eq!(update.ratio, 0.75);
        assert_eq!(update.delta_ratio, 0.5);

        let past_end = tracker.update(sample(1, 900.0, 30.0)).unwrap();
        assert_eq!(past_end.ratio, 1.0);
        let before_start = tracker.update(sample(1, 0.0, 30.0)).unwrap();
        assert_eq!(before_start.ratio, 0.0);
        assert_eq!(before_start.delta_ratio, -0.75);
    }

    #[test]
    fn vertical_axis_reads_y() {
        let mut tracker = PointerTracker::<()>::Idle;
        let update = tracker
            .begin(sample(1, 0.0, 30.0), Orientation::Vertical, track(), ())
            .unwrap();
        assert_eq!(update.ratio, 0.25);
    }

    #[test]
    fn second_pointer_is_ignored_while_dragging() {
        let mut tracker = PointerTracker::<()>::Idle;
        tracker.begin(sample(1, 150.0, 30.0), Orientation::Horizontal, track(), ());

        assert_eq!(
            tracker.begin(sample(2, 280.0, 30.0), Orientation::Horizontal, track(), ()),
            None
        );
        assert_eq!(tracker.update(sample(2, 280.0, 30.0)), None);
        assert!(tracker.end(PointerId(2)).is_none());
        assert!(tracker.is_dragging());

        let finished = tracker.end(PointerId(1)).expect("owner ends gesture");
        assert_eq!(finished.pointer, PointerId(1));
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.update(sample(1, 200.0, 30.0)), None);
    }

    #[test]
    fn zero_width_track_cannot_start() {
        let mut tracker = PointerTracker::<()>::Idle;
        let flat = TrackRect {
            width: 0.0,
            ..track()
        };
        assert_eq!(
            tracker.begin(sample(1, 100.0, 30.0), Orientation::Horizontal, flat, ()),
            None
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn release_drops_gesture_regardless_of_pointer() {
        let mut tracker = PointerTracker::Idle;
        tracker.begin(
            sample(7, 150.0, 30.0),
            Orientation::Horizontal,
            track(),
            (40.0, 60.0),
        );
        let session = tracker.release().expect("active session");
        assert_eq!(session.snapshot, (40.0, 60.0));
        assert!(tracker.release().is_none());
    }

    #[test]
    fn union_spans_both_rects() {
        let a = TrackRect {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 50.0,
        };
        let b = TrackRect {
            left: 101.0,
            top: 0.0,
            width: 99.0,
            height: 60.0,
        };
        assert_eq!(
            a.union(&b),
            TrackRect {
                left: 0.0,
                top: 0.0,
                width: 200.0,
                height: 60.0
            }
        );
    }
}
