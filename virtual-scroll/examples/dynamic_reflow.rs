// Example: dynamic extents corrected after measurement, then appended to.
use virtual_scroll::{PositionIndex, ViewportState, WindowLocator};

fn main() -> virtual_scroll::Result<()> {
    let mut positions = PositionIndex::dynamic(8, 50);
    println!("nominal total_extent={}", positions.total_extent());

    // Pretend the first three items were drawn taller than estimated.
    let report = positions.reflow(&[50, 80, 64], 0)?;
    println!("reflow: changed={} delta={}", report.changed, report.delta);
    println!("measured total_extent={}", positions.total_extent());

    let viewport = ViewportState {
        offset: 140,
        client_extent_count: 2,
    };
    let window = WindowLocator::new(&positions).locate(viewport, 0.0, positions.len());
    println!("window at offset 140: {:?}", window.range());

    // Load four more items at the end; measured entries stay as they are.
    positions.extend_from(positions.len(), 4)?;
    for entry in positions.entries() {
        println!("  #{:<2} start={:<4} end={:<4}", entry.index, entry.start, entry.end);
    }
    Ok(())
}
