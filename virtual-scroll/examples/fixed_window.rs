// Example: fixed-extent window lookup with overscan and a thumb projection.
use virtual_scroll::{
    ListOptions, PositionIndex, ScrollbarProjector, ViewportState, WindowLocator,
    client_extent_count,
};

fn main() {
    let options = ListOptions::new(24).with_buffer_scale(0.25);
    let positions = PositionIndex::from_options(1_000_000, &options);

    let viewport = ViewportState {
        offset: 123_456,
        client_extent_count: client_extent_count(480, options.item_extent),
    };
    let window = WindowLocator::new(&positions).locate(viewport, options.buffer_scale, positions.len());
    println!("total_extent={}", positions.total_extent());
    println!("client_extent_count={}", viewport.client_extent_count);
    println!("window={:?} ({} items)", window.range(), window.len());

    let projector = ScrollbarProjector::from_options(&options);
    let thumb = projector.project(viewport.offset as f64, positions.total_extent() as f64, 480.0);
    println!("thumb={thumb:?}");
}
