use crate::ThumbStyle;

/// Configuration for a virtual list.
///
/// The record is fixed once a list is constructed. Every field has a default, so hosts only set
/// what they care about, either with the `with_*` builders or (with `feature = "serde"`) by
/// deserializing the camelCase options table:
///
/// ```json
/// { "itemExtent": 40, "dynamicExtent": true, "bufferScale": 0.2 }
/// ```
///
/// Missing keys take their defaults; unknown keys are ignored.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ListOptions {
    /// Nominal size of one item in the scroll axis.
    ///
    /// In fixed mode this is the exact size of every item. In dynamic mode it is the estimate
    /// used until an item has been rendered and measured.
    pub item_extent: u32,

    /// Selects variable (measured) extents instead of uniform ones.
    pub dynamic_extent: bool,

    /// Fraction of the viewport's item count added as overscan at each edge.
    pub buffer_scale: f64,

    /// Render at most once per host frame instead of debouncing by `throttle_delay_ms`.
    pub use_frame_aligned_throttle: bool,

    /// Debounce window for scroll/resize renders when frame alignment is off.
    pub throttle_delay_ms: u64,

    /// Whether the list drives a synthetic scrollbar thumb.
    pub custom_scrollbar: bool,

    pub thumb_min_extent: u32,
    pub thumb_border_radius: u32,
    pub thumb_width: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            item_extent: 50,
            dynamic_extent: false,
            buffer_scale: 0.1,
            use_frame_aligned_throttle: false,
            throttle_delay_ms: 0,
            custom_scrollbar: true,
            thumb_min_extent: 150,
            thumb_border_radius: 6,
            thumb_width: 6,
        }
    }
}

impl ListOptions {
    pub fn new(item_extent: u32) -> Self {
        Self::default().with_item_extent(item_extent)
    }

    /// The nominal extent actually used for arithmetic (never zero).
    pub fn effective_item_extent(&self) -> u32 {
        self.item_extent.max(1)
    }

    pub fn thumb_style(&self) -> ThumbStyle {
        ThumbStyle {
            width: self.thumb_width,
            border_radius: self.thumb_border_radius,
            min_extent: self.thumb_min_extent,
        }
    }

    pub fn with_item_extent(mut self, item_extent: u32) -> Self {
        self.item_extent = item_extent;
        self
    }

    pub fn with_dynamic_extent(mut self, dynamic_extent: bool) -> Self {
        self.dynamic_extent = dynamic_extent;
        self
    }

    pub fn with_buffer_scale(mut self, buffer_scale: f64) -> Self {
        self.buffer_scale = buffer_scale;
        self
    }

    pub fn with_frame_aligned_throttle(mut self, enabled: bool) -> Self {
        self.use_frame_aligned_throttle = enabled;
        self
    }

    pub fn with_throttle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.throttle_delay_ms = delay_ms;
        self
    }

    pub fn with_custom_scrollbar(mut self, custom_scrollbar: bool) -> Self {
        self.custom_scrollbar = custom_scrollbar;
        self
    }

    pub fn with_thumb_min_extent(mut self, min_extent: u32) -> Self {
        self.thumb_min_extent = min_extent;
        self
    }

    pub fn with_thumb_border_radius(mut self, border_radius: u32) -> Self {
        self.thumb_border_radius = border_radius;
        self
    }

    pub fn with_thumb_width(mut self, width: u32) -> Self {
        self.thumb_width = width;
        self
    }
}
