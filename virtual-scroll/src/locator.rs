use core::cmp;

use crate::{Edge, PositionIndex, RenderWindow, ViewportState};

/// Maps a scroll offset to the window of items that should be materialized.
#[derive(Clone, Copy, Debug)]
pub struct WindowLocator<'a> {
    positions: &'a PositionIndex,
}

impl<'a> WindowLocator<'a> {
    pub fn new(positions: &'a PositionIndex) -> Self {
        Self { positions }
    }

    /// Index of the first item visible at `offset`.
    ///
    /// - Fixed mode: `floor(offset / item_extent)`, not clamped to the data length.
    /// - Dynamic mode: the smallest index whose `end` is strictly greater than `offset`, or
    ///   `None` when no entry qualifies (empty index, or `offset >= total_extent`).
    pub fn locate_start(&self, offset: u64) -> Option<usize> {
        if !self.positions.is_dynamic() {
            let extent = self.positions.item_extent() as u64;
            return Some(usize::try_from(offset / extent).unwrap_or(usize::MAX));
        }

        // Entries are sorted by `end`, so this is a plain lower-bound search.
        let entries = self.positions.entries();
        let index = entries.partition_point(|e| e.end <= offset);
        (index < entries.len()).then_some(index)
    }

    /// Exclusive end index for a window starting at `start_index`.
    pub fn locate_end(start_index: usize, client_extent_count: usize, data_len: usize) -> usize {
        cmp::min(start_index.saturating_add(client_extent_count), data_len)
    }

    /// Widens `index` by `ceil(client_extent_count * buffer_scale)` items on the given edge.
    ///
    /// The result is always within `[0, data_len]`. A non-finite `buffer_scale` disables
    /// buffering for this call.
    pub fn apply_buffer(
        edge: Edge,
        index: usize,
        client_extent_count: usize,
        buffer_scale: f64,
        data_len: usize,
    ) -> usize {
        if !buffer_scale.is_finite() {
            vwarn!(
                buffer_scale = ?buffer_scale,
                "apply_buffer: buffer scale is not a valid number; buffering skipped"
            );
            return index.min(data_len);
        }

        let amount = ceil_to_i128(client_extent_count as f64 * buffer_scale);
        let index = index as i128;
        let shifted = match edge {
            Edge::Leading => index.saturating_sub(amount),
            Edge::Trailing => index.saturating_add(amount),
        };
        shifted.clamp(0, data_len as i128) as usize
    }

    /// Computes the buffered render window for `viewport` over `data_len` items.
    ///
    /// A missing start match is treated as index 0.
    pub fn locate(
        &self,
        viewport: ViewportState,
        buffer_scale: f64,
        data_len: usize,
    ) -> RenderWindow {
        if data_len == 0 {
            return RenderWindow::default();
        }

        let count = viewport.client_extent_count;
        let start = self
            .locate_start(viewport.offset)
            .unwrap_or(0)
            .min(data_len);
        let end = Self::locate_end(start, count, data_len);

        let window = if buffer_scale == 0.0 {
            RenderWindow::new(start, end)
        } else {
            RenderWindow::new(
                Self::apply_buffer(Edge::Leading, start, count, buffer_scale, data_len),
                Self::apply_buffer(Edge::Trailing, end, count, buffer_scale, data_len),
            )
        };
        vtrace!(
            offset = viewport.offset,
            start = window.start_index,
            end = window.end_index,
            "WindowLocator::locate"
        );
        window
    }
}

// `f64::ceil` is not available in `core`.
fn ceil_to_i128(value: f64) -> i128 {
    let truncated = value as i128;
    if (truncated as f64) < value {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}
