use crate::{ListOptions, Thumb};

/// Projects virtual scroll geometry onto a synthetic scrollbar track.
///
/// All inputs are in the same units as the list (`total_extent`, `offset`) and the track
/// (`track_extent`, positions). The thumb is sized by `track² / total`, floored at
/// `min_thumb_extent` and never longer than the track itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarProjector {
    min_thumb_extent: f64,
}

impl ScrollbarProjector {
    pub fn new(min_thumb_extent: f64) -> Self {
        Self {
            min_thumb_extent: min_thumb_extent.max(0.0),
        }
    }

    pub fn from_options(options: &ListOptions) -> Self {
        Self::new(options.thumb_min_extent as f64)
    }

    pub fn min_thumb_extent(&self) -> f64 {
        self.min_thumb_extent
    }

    /// Thumb length for the given geometry, or `None` when the content fits in the track and
    /// no thumb should be drawn.
    pub fn thumb_extent(&self, total_extent: f64, track_extent: f64) -> Option<f64> {
        if !total_extent.is_finite() || !track_extent.is_finite() || track_extent >= total_extent {
            return None;
        }
        let track = track_extent.max(0.0);
        let proportional = track * track / total_extent;
        Some(proportional.max(self.min_thumb_extent).min(track))
    }

    /// Thumb position for a scroll `offset`, clamped to `[0, track - thumb]`.
    pub fn thumb_position(&self, offset: f64, total_extent: f64, track_extent: f64) -> f64 {
        let Some(thumb) = self.thumb_extent(total_extent, track_extent) else {
            return 0.0;
        };
        let travel = (track_extent - thumb).max(0.0);
        let scroll_range = total_extent - track_extent;
        if travel == 0.0 {
            return 0.0;
        }
        (offset * travel / scroll_range).clamp(0.0, travel)
    }

    /// Inverse of [`Self::thumb_position`]: the scroll offset for a thumb dragged to
    /// `drag_position`, clamped to `[0, total - track]`.
    pub fn offset_from_drag(&self, drag_position: f64, total_extent: f64, track_extent: f64) -> f64 {
        let Some(thumb) = self.thumb_extent(total_extent, track_extent) else {
            return 0.0;
        };
        let travel = (track_extent - thumb).max(0.0);
        let scroll_range = total_extent - track_extent;
        if travel == 0.0 {
            return 0.0;
        }
        (drag_position * scroll_range / travel).clamp(0.0, scroll_range)
    }

    /// Thumb geometry for the current state, or `None` if the thumb should be removed.
    pub fn project(&self, offset: f64, total_extent: f64, track_extent: f64) -> Option<Thumb> {
        let extent = self.thumb_extent(total_extent, track_extent)?;
        Some(Thumb {
            extent,
            position: self.thumb_position(offset, total_extent, track_extent),
        })
    }
}

impl Default for ScrollbarProjector {
    fn default() -> Self {
        Self::from_options(&ListOptions::default())
    }
}
