// Example: drive a ListController with a fake host and a text renderer.
use virtual_scroll_adapter::{HostViewport, ListController, ListOptions, RenderWindow, Renderer};

#[derive(Debug, Default)]
struct TextRenderer {
    lines: Vec<String>,
    block_offset: u64,
}

impl Renderer<String> for TextRenderer {
    fn materialize(&mut self, _window: RenderWindow, items: &[String]) {
        self.lines = items.to_vec();
    }

    fn place_block(&mut self, offset: u64) {
        self.block_offset = offset;
    }

    fn measured_extents(&self, out: &mut Vec<u32>) {
        out.clear();
        // One row per 20 characters, 18 units per row.
        out.extend(self.lines.iter().map(|l| 18 * (1 + l.len() as u32 / 20)));
    }
}

#[derive(Debug)]
struct Host {
    client: u32,
    offset: f64,
    total: u64,
}

impl HostViewport for Host {
    fn client_extent(&self) -> u32 {
        self.client
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn set_total_extent(&mut self, total_extent: u64) {
        self.total = total_extent;
    }
}

fn main() -> virtual_scroll_adapter::Result<()> {
    let data: Vec<String> = (0..500)
        .map(|i| "message ".repeat(i % 7 + 1) + &i.to_string())
        .collect();
    let host = Host {
        client: 180,
        offset: 0.0,
        total: 0,
    };
    let options = ListOptions::new(18)
        .with_dynamic_extent(true)
        .with_frame_aligned_throttle(true);

    let mut list = ListController::new(data, TextRenderer::default(), host, options)?;
    println!("initial window={:?} total={}", list.window(), list.host().total);

    // Two scroll events in one frame: the second is folded into the next tick.
    let mut now_ms = 0;
    for offset in [400.0, 420.0] {
        list.host_mut().offset = offset;
        let rendered = list.on_scroll(now_ms)?;
        println!("scroll to {offset}: rendered={rendered} window={:?}", list.window());
        now_ms += 4;
    }
    now_ms = 16;
    println!("tick: rendered={} window={:?}", list.tick(now_ms)?, list.window());
    println!("block at {} thumb={:?}", list.renderer().block_offset, list.thumb());

    // Drag the thumb halfway down its track.
    if let Some(thumb) = list.thumb() {
        list.tick(32)?;
        list.on_thumb_press(thumb.position + 1.0);
        list.on_thumb_move(thumb.position + 60.0, 33)?;
        list.on_thumb_release();
        println!("after drag: offset={} window={:?}", list.host().offset, list.window());
    }

    list.append_data((0..50).map(|i| format!("late {i}")), list.data().len())?;
    println!("after append: len={} total={}", list.data().len(), list.host().total);
    Ok(())
}
