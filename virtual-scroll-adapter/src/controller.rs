use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use virtual_scroll::{
    Error, ListOptions, PositionIndex, RenderWindow, Result, ScrollbarProjector, Thumb,
    ThumbStyle, ViewportState, WindowLocator, client_extent_count,
};

use crate::{HostViewport, RateLimiter, Renderer, ThumbDrag, limiter_for};

/// A framework-neutral controller that owns the list state and runs render cycles.
///
/// This type does not hold any UI objects itself; presentation goes through the injected
/// [`Renderer`] and [`HostViewport`]. Hosts drive it by calling:
/// - `on_scroll` / `on_resize` when the viewport reports a change,
/// - `tick(now_ms)` on each frame or timer tick, so deferred renders can run,
/// - `append_data` when more items are loaded,
/// - `on_thumb_*` / `on_pointer_leave` for synthetic scrollbar drags.
///
/// One render cycle picks a buffered window, materializes it, places the block at the leading
/// item's start, reflows measured extents (dynamic mode), then refreshes the total extent
/// marker and the thumb.
pub struct ListController<T, R, H> {
    data: Vec<T>,
    options: ListOptions,
    positions: PositionIndex,
    projector: ScrollbarProjector,
    viewport: ViewportState,
    window: RenderWindow,
    thumb: Option<Thumb>,
    drag: ThumbDrag,
    limiter: Box<dyn RateLimiter>,
    renderer: R,
    host: H,
    measured: Vec<u32>, // scratch for read-back extents
}

impl<T, R: Renderer<T>, H: HostViewport> ListController<T, R, H> {
    /// Creates a controller using the rate limiter selected by `options` and renders once.
    pub fn new(data: Vec<T>, renderer: R, host: H, options: ListOptions) -> Result<Self> {
        let limiter = limiter_for(&options);
        Self::with_limiter(data, renderer, host, options, limiter)
    }

    /// Same as [`Self::new`], with an injected rate limiter.
    pub fn with_limiter(
        data: Vec<T>,
        renderer: R,
        host: H,
        options: ListOptions,
        limiter: Box<dyn RateLimiter>,
    ) -> Result<Self> {
        vdebug!(
            len = data.len(),
            dynamic = options.dynamic_extent,
            custom_scrollbar = options.custom_scrollbar,
            "ListController::new"
        );
        let positions = PositionIndex::from_options(data.len(), &options);
        let projector = ScrollbarProjector::from_options(&options);
        let mut controller = Self {
            data,
            options,
            positions,
            projector,
            viewport: ViewportState::default(),
            window: RenderWindow::default(),
            thumb: None,
            drag: ThumbDrag::default(),
            limiter,
            renderer,
            host,
            measured: Vec::new(),
        };
        controller.sync_viewport();
        controller.render()?;
        Ok(controller)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn positions(&self) -> &PositionIndex {
        &self.positions
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// The window materialized by the last render cycle.
    pub fn window(&self) -> RenderWindow {
        self.window
    }

    /// Current thumb geometry, or `None` when there is no synthetic scrollbar to draw.
    pub fn thumb(&self) -> Option<Thumb> {
        self.thumb
    }

    pub fn thumb_style(&self) -> ThumbStyle {
        self.options.thumb_style()
    }

    pub fn total_extent(&self) -> u64 {
        self.positions.total_extent()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to change its size before calling `on_resize`.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Runs one render cycle immediately, bypassing the rate limiter.
    pub fn render(&mut self) -> Result<RenderWindow> {
        let len = self.data.len();
        if len == 0 {
            self.window = RenderWindow::default();
            self.refresh_track();
            return Ok(self.window);
        }

        let window = WindowLocator::new(&self.positions).locate(
            self.viewport,
            self.options.buffer_scale,
            len,
        );
        self.renderer.materialize(window, &self.data[window.range()]);

        if !window.is_empty() {
            let leading = self.positions.get(window.start_index)?;
            self.renderer.place_block(leading.start);

            if self.positions.is_dynamic() {
                self.renderer.measured_extents(&mut self.measured);
                if self.measured.len() != window.len() {
                    vwarn!(
                        expected = window.len(),
                        reported = self.measured.len(),
                        "renderer reported a different number of extents than items rendered"
                    );
                    self.measured.truncate(window.len());
                }
                let report = self.positions.reflow(&self.measured, window.start_index)?;
                if !report.is_noop() {
                    vtrace!(
                        changed = report.changed,
                        delta = report.delta,
                        "render: reflowed measured extents"
                    );
                }
            }
        }

        vtrace!(
            offset = self.viewport.offset,
            start = window.start_index,
            end = window.end_index,
            "render"
        );
        self.window = window;
        self.refresh_track();
        Ok(window)
    }

    /// Call this when the host reports a scroll offset change.
    ///
    /// The thumb follows immediately; the render runs now or later depending on the rate
    /// limiter. Returns whether a render ran.
    pub fn on_scroll(&mut self, now_ms: u64) -> Result<bool> {
        self.viewport.offset = normalize_offset(self.host.scroll_offset());
        self.refresh_thumb();
        self.render_if_admitted(now_ms)
    }

    /// Call this when the host viewport changes size.
    pub fn on_resize(&mut self, now_ms: u64) -> Result<bool> {
        self.sync_viewport();
        self.refresh_thumb();
        self.render_if_admitted(now_ms)
    }

    /// Advances the rate limiter; runs a deferred render if one is due.
    pub fn tick(&mut self, now_ms: u64) -> Result<bool> {
        if !self.limiter.flush(now_ms) {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Inserts `items` at `insertion_index` (`0..=len`) and extends the position table.
    ///
    /// Entries before `insertion_index` keep their measured extents; entries from there on are
    /// rebuilt at the nominal extent, anchored at the previous item's end. The visible nodes are
    /// re-rendered only when the insertion point lies inside the current window (or extends a
    /// window that already reaches the end of the data); otherwise only the total extent marker
    /// and the thumb are refreshed.
    ///
    /// Returns whether a render ran.
    pub fn append_data(
        &mut self,
        items: impl IntoIterator<Item = T>,
        insertion_index: usize,
    ) -> Result<bool> {
        let old_len = self.data.len();
        if insertion_index > old_len {
            return Err(Error::IndexOutOfRange {
                index: insertion_index,
                len: old_len,
            });
        }

        let mut tail = self.data.split_off(insertion_index);
        self.data.extend(items);
        self.data.append(&mut tail);
        let new_len = self.data.len();
        self.positions
            .extend_from(insertion_index, new_len - insertion_index)?;
        vdebug!(
            insertion_index,
            added = new_len - old_len,
            len = new_len,
            "append_data"
        );

        let window = self.window;
        let touches_window = window.contains(insertion_index)
            || (insertion_index == old_len && window.end_index == old_len);
        if touches_window {
            self.render()?;
            return Ok(true);
        }

        vtrace!(insertion_index, "append_data: outside the render window");
        self.refresh_track();
        Ok(false)
    }

    /// Starts a thumb drag. Ignored (returns `false`) while no thumb is shown.
    pub fn on_thumb_press(&mut self, pointer: f64) -> bool {
        let Some(thumb) = self.thumb else {
            return false;
        };
        self.drag.press(pointer, thumb.position);
        true
    }

    /// Moves a dragged thumb and scrolls the host to the matching virtual offset.
    ///
    /// Returns whether a render ran; does nothing while not dragging.
    pub fn on_thumb_move(&mut self, pointer: f64, now_ms: u64) -> Result<bool> {
        let Some(position) = self.drag.drag_to(pointer) else {
            return Ok(false);
        };
        let total = self.positions.total_extent() as f64;
        let track = self.host.client_extent() as f64;
        let offset = self.projector.offset_from_drag(position, total, track);
        self.host.set_scroll_offset(offset);
        self.on_scroll(now_ms)
    }

    pub fn on_thumb_release(&mut self) {
        self.drag.release();
    }

    pub fn on_pointer_leave(&mut self) {
        self.drag.cancel();
    }

    fn render_if_admitted(&mut self, now_ms: u64) -> Result<bool> {
        if !self.limiter.admit(now_ms) {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    fn sync_viewport(&mut self) {
        self.viewport = ViewportState {
            offset: normalize_offset(self.host.scroll_offset()),
            client_extent_count: client_extent_count(
                self.host.client_extent(),
                self.options.item_extent,
            ),
        };
    }

    fn refresh_track(&mut self) {
        self.host.set_total_extent(self.positions.total_extent());
        self.viewport.client_extent_count =
            client_extent_count(self.host.client_extent(), self.options.item_extent);
        self.refresh_thumb();
    }

    fn refresh_thumb(&mut self) {
        if !self.options.custom_scrollbar {
            self.thumb = None;
            return;
        }
        let total = self.positions.total_extent() as f64;
        let track = self.host.client_extent() as f64;
        let next = self
            .projector
            .project(self.viewport.offset as f64, total, track);
        if next.is_none() && self.thumb.is_some() {
            vdebug!(total, track, "thumb removed: content fits in the track");
            self.drag.cancel();
        }
        self.thumb = next;
    }
}

impl<T, R: fmt::Debug, H: fmt::Debug> fmt::Debug for ListController<T, R, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListController")
            .field("len", &self.data.len())
            .field("options", &self.options)
            .field("viewport", &self.viewport)
            .field("window", &self.window)
            .field("thumb", &self.thumb)
            .field("drag", &self.drag)
            .field("renderer", &self.renderer)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

// Negative, fractional and non-finite host offsets collapse onto whole non-negative units.
fn normalize_offset(raw: f64) -> u64 {
    if raw.is_finite() && raw > 0.0 {
        raw as u64
    } else {
        0
    }
}
