/// Cached geometry of one item along the scroll axis.
///
/// `end == start + extent` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionEntry {
    pub index: usize,
    pub extent: u32,
    pub start: u64,
    pub end: u64,
}

impl PositionEntry {
    pub fn new(index: usize, start: u64, extent: u32) -> Self {
        Self {
            index,
            extent,
            start,
            end: start.saturating_add(extent as u64),
        }
    }
}

/// The half-open index range `[start_index, end_index)` materialized by one render cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderWindow {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl RenderWindow {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index: end_index.max(start_index),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn range(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// Current scroll displacement plus how many nominal-size items fit in the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub offset: u64,
    pub client_extent_count: usize,
}

/// Which side of a window an overscan buffer is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Leading,
    Trailing,
}

/// Synthetic scrollbar thumb geometry, in track coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thumb {
    pub extent: f64,
    pub position: f64,
}

impl Thumb {
    /// Trailing edge of the thumb; `track_extent` when scrolled to the bottom.
    pub fn end(&self) -> f64 {
        self.position + self.extent
    }
}

/// Presentation hints for drawing the thumb.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbStyle {
    pub width: u32,
    pub border_radius: u32,
    pub min_extent: u32,
}

/// Number of nominal-size items needed to cover `client_extent`.
///
/// A partially covered trailing item counts as a whole item.
pub fn client_extent_count(client_extent: u32, item_extent: u32) -> usize {
    let item_extent = item_extent.max(1);
    client_extent.div_ceil(item_extent) as usize
}
