use alloc::vec::Vec;

use virtual_scroll::RenderWindow;

/// The rendering collaborator: turns a slice of items into visual nodes.
///
/// The controller never touches presentation directly. Per render cycle it calls, in order:
/// 1. [`Renderer::materialize`] with the window and its items (replacing whatever was mounted);
/// 2. [`Renderer::place_block`] with the virtual offset of the window's first item;
/// 3. in dynamic mode, [`Renderer::measured_extents`] to read back real drawn sizes.
pub trait Renderer<T> {
    /// Replaces the mounted nodes with nodes for `items` (the items of `window`, in order).
    fn materialize(&mut self, window: RenderWindow, items: &[T]);

    /// Translates the mounted block so its first node sits at `offset` in virtual content space.
    fn place_block(&mut self, offset: u64);

    /// Pushes the real drawn extent of each mounted node, in window order (clears `out` first).
    fn measured_extents(&self, out: &mut Vec<u32>);
}

/// The scrollable host area the list is drawn into.
pub trait HostViewport {
    /// Visible extent along the scroll axis.
    fn client_extent(&self) -> u32;

    /// Current scroll displacement as reported by the host.
    ///
    /// Hosts may report negative or fractional values (e.g. elastic overscroll); the controller
    /// normalizes them before use.
    fn scroll_offset(&self) -> f64;

    fn set_scroll_offset(&mut self, offset: f64);

    /// Sets the extent of the scrollable content so native ranges match the virtual extent.
    fn set_total_extent(&mut self, total_extent: u64);
}
