use crate::*;

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_f64(&mut self, start: f64, end: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        start + (end - start) * unit
    }
}

fn assert_contiguous(positions: &PositionIndex) {
    let entries = positions.entries();
    assert_eq!(entries.len(), positions.len());
    if let Some(first) = entries.first() {
        assert_eq!(first.start, 0);
    }
    for (i, e) in entries.iter().enumerate() {
        assert_eq!(e.index, i);
        assert_eq!(e.end, e.start + e.extent as u64, "entry {i} end");
        if i > 0 {
            assert_eq!(e.start, entries[i - 1].end, "entry {i} start");
        }
    }
}

fn extents(positions: &PositionIndex) -> Vec<u32> {
    positions.entries().iter().map(|e| e.extent).collect()
}

fn expected_locate_start(extents: &[u32], offset: u64) -> Option<usize> {
    let mut end = 0u64;
    for (i, &extent) in extents.iter().enumerate() {
        end += extent as u64;
        if end > offset {
            return Some(i);
        }
    }
    None
}

#[test]
fn fixed_mode_window_matches_floor_division() {
    // 10 items of 50, four fit in the viewport, scrolled to 125.
    let positions = PositionIndex::fixed(10, 50);
    let locator = WindowLocator::new(&positions);
    assert_eq!(locator.locate_start(125), Some(2));
    assert_eq!(WindowLocator::locate_end(2, 4, 10), 6);

    let window = locator.locate(
        ViewportState {
            offset: 125,
            client_extent_count: 4,
        },
        0.0,
        10,
    );
    assert_eq!(window, RenderWindow::new(2, 6));
}

#[test]
fn fixed_mode_locate_start_is_floor_for_any_offset() {
    let mut rng = Lcg::new(7);
    for _ in 0..500 {
        let extent = rng.gen_range_u32(1, 200);
        let positions = PositionIndex::fixed(rng.gen_range_usize(0, 1000), extent);
        let offset = rng.gen_range_u64(0, 1_000_000);
        assert_eq!(
            WindowLocator::new(&positions).locate_start(offset),
            Some((offset / extent as u64) as usize)
        );
    }
}

#[test]
fn locate_start_at_zero_is_zero_in_both_modes() {
    for dynamic in [false, true] {
        let opts = ListOptions::new(30).with_dynamic_extent(dynamic);
        let positions = PositionIndex::from_options(5, &opts);
        assert_eq!(WindowLocator::new(&positions).locate_start(0), Some(0));
    }
}

#[test]
fn dynamic_build_produces_nominal_contiguous_entries() {
    let positions = PositionIndex::dynamic(3, 50);
    let entries = positions.entries();
    assert_eq!(
        entries.iter().map(|e| (e.start, e.end)).collect::<Vec<_>>(),
        vec![(0, 50), (50, 100), (100, 150)]
    );
    assert_eq!(positions.total_extent(), 150);
    assert_contiguous(&positions);
}

#[test]
fn reflow_propagates_delta_to_later_entries() {
    let mut positions = PositionIndex::dynamic(3, 50);
    let report = positions.reflow(&[50, 80, 50], 0).unwrap();
    assert_eq!(report, Reflow { changed: 1, delta: 30 });

    assert_eq!(positions.get(1).unwrap().end, 130);
    let third = positions.get(2).unwrap();
    assert_eq!((third.start, third.end), (130, 180));
    assert_eq!(positions.total_extent(), 180);
    assert_contiguous(&positions);
}

#[test]
fn reflow_is_idempotent() {
    let mut positions = PositionIndex::dynamic(20, 10);
    let measured = [12, 10, 3, 40, 10];
    let first = positions.reflow(&measured, 6).unwrap();
    assert_eq!(first.changed, 3);
    let snapshot = positions.entries().to_vec();

    let second = positions.reflow(&measured, 6).unwrap();
    assert!(second.is_noop());
    assert_eq!(second.delta, 0);
    assert_eq!(positions.entries(), &snapshot[..]);
}

#[test]
fn reflow_never_touches_entries_before_the_window() {
    let mut positions = PositionIndex::dynamic(10, 20);
    positions.reflow(&[5, 5], 1).unwrap();
    let prefix = positions.entries()[..4].to_vec();

    positions.reflow(&[60, 1, 33], 4).unwrap();
    assert_eq!(&positions.entries()[..4], &prefix[..]);
    assert_contiguous(&positions);
}

#[test]
fn reflow_handles_shrinking_items() {
    let mut positions = PositionIndex::dynamic(4, 50);
    let report = positions.reflow(&[20, 50], 1).unwrap();
    assert_eq!(report.delta, -30);
    assert_eq!(positions.get(1).unwrap().end, 70);
    assert_eq!(positions.get(3).unwrap().start, 120);
    assert_eq!(positions.total_extent(), 170);
    assert_contiguous(&positions);
}

#[test]
fn reflow_rejects_windows_outside_the_index() {
    let mut positions = PositionIndex::dynamic(3, 10);
    assert_eq!(
        positions.reflow(&[10], 3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        positions.reflow(&[10, 10, 10], 1),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    );
    // Nothing was written by the failed calls.
    assert_eq!(extents(&positions), vec![10, 10, 10]);
}

#[test]
fn reflow_is_a_noop_in_fixed_mode() {
    let mut positions = PositionIndex::fixed(3, 10);
    assert!(positions.reflow(&[99, 99], 0).unwrap().is_noop());
    assert_eq!(positions.total_extent(), 30);
}

#[test]
fn extend_from_anchors_new_entries_at_previous_end() {
    let mut positions = PositionIndex::dynamic(5, 50);
    positions.reflow(&[10, 70, 50, 50, 25], 0).unwrap();
    let prefix = positions.entries().to_vec();
    let anchor_end = positions.get(4).unwrap().end;

    positions.extend_from(5, 3).unwrap();
    assert_eq!(positions.len(), 8);
    assert_eq!(&positions.entries()[..5], &prefix[..]);
    assert_eq!(positions.get(5).unwrap().start, anchor_end);
    assert_eq!(positions.get(7).unwrap().end, anchor_end + 150);
    assert_contiguous(&positions);
}

#[test]
fn extend_from_mid_list_rebuilds_the_suffix_at_nominal_extent() {
    let mut positions = PositionIndex::dynamic(4, 10);
    positions.reflow(&[11, 12, 13, 14], 0).unwrap();

    // Two items inserted after index 1: indices 2.. are rebuilt (2 new + 2 shifted).
    positions.extend_from(2, 4).unwrap();
    assert_eq!(extents(&positions), vec![11, 12, 10, 10, 10, 10]);
    assert_contiguous(&positions);
}

#[test]
fn build_on_empty_index_starts_at_zero() {
    let mut positions = PositionIndex::dynamic(0, 10);
    assert_eq!(positions.total_extent(), 0);
    positions.extend_from(0, 2).unwrap();
    assert_eq!(positions.get(0).unwrap().start, 0);
    assert_contiguous(&positions);
}

#[test]
fn build_rejects_start_past_len() {
    let mut positions = PositionIndex::dynamic(2, 10);
    assert_eq!(
        positions.extend_from(3, 1),
        Err(Error::IndexOutOfRange { index: 3, len: 2 })
    );
    let mut fixed = PositionIndex::fixed(2, 10);
    assert_eq!(
        fixed.build(1, 5, None),
        Err(Error::IndexOutOfRange { index: 5, len: 2 })
    );
}

#[test]
fn build_without_anchor_continues_from_the_previous_entry() {
    let mut positions = PositionIndex::dynamic(3, 50);
    positions.reflow(&[50, 50, 70], 0).unwrap();

    positions.build(2, 3, None).unwrap();
    assert_eq!(positions.get(2).unwrap().end, 170);
    assert_eq!(positions.get(3).unwrap().start, 170);
    assert_eq!(positions.total_extent(), 270);
    assert_contiguous(&positions);
}

#[test]
fn build_rejects_an_anchor_other_than_the_previous_entry() {
    let mut positions = PositionIndex::dynamic(3, 50);
    let first = positions.get(0).unwrap();
    assert_eq!(
        positions.build(2, 3, Some(first)),
        Err(Error::AnchorMismatch { index: 0, start_index: 3 })
    );
    // Right index, stale geometry.
    assert_eq!(
        positions.build(2, 3, Some(PositionEntry::new(2, 0, 50))),
        Err(Error::AnchorMismatch { index: 2, start_index: 3 })
    );
    assert_eq!(
        positions.build(1, 0, Some(first)),
        Err(Error::AnchorMismatch { index: 0, start_index: 0 })
    );
    assert_eq!(positions.len(), 3);
    assert_contiguous(&positions);

    let last = positions.get(2).unwrap();
    positions.build(1, 3, Some(last)).unwrap();
    assert_eq!(positions.get(3).unwrap().start, 150);
    assert_contiguous(&positions);

    let mut fixed = PositionIndex::fixed(4, 10);
    assert_eq!(
        fixed.build(1, 4, Some(PositionEntry::new(1, 10, 10))),
        Err(Error::AnchorMismatch { index: 1, start_index: 4 })
    );
    assert_eq!(fixed.len(), 4);
}

#[test]
fn fixed_mode_extend_only_moves_the_length() {
    let mut positions = PositionIndex::fixed(5, 20);
    positions.extend_from(5, 3).unwrap();
    assert_eq!(positions.len(), 8);
    assert!(positions.entries().is_empty());
    assert_eq!(positions.total_extent(), 160);
    assert_eq!(positions.get(7).unwrap(), PositionEntry::new(7, 140, 20));
}

#[test]
fn get_out_of_range_fails_in_both_modes() {
    for dynamic in [false, true] {
        let positions = PositionIndex::from_options(3, &ListOptions::new(5).with_dynamic_extent(dynamic));
        assert_eq!(
            positions.get(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(positions.get(2).is_ok());
    }
}

#[test]
fn random_builds_and_reflows_keep_contiguity() {
    let mut rng = Lcg::new(42);
    for _ in 0..50 {
        let mut positions = PositionIndex::dynamic(rng.gen_range_usize(0, 40), 16);
        for _ in 0..30 {
            let len = positions.len();
            if len == 0 || rng.gen_range_u32(0, 4) == 0 {
                let at = rng.gen_range_usize(0, len + 1);
                let count = rng.gen_range_usize(0, 10);
                positions.extend_from(at, count).unwrap();
            } else {
                let start = rng.gen_range_usize(0, len);
                let n = rng.gen_range_usize(1, (len - start).min(12) + 1);
                let measured: Vec<u32> = (0..n).map(|_| rng.gen_range_u32(0, 64)).collect();
                positions.reflow(&measured, start).unwrap();
            }
            assert_contiguous(&positions);
            let total: u64 = positions.entries().iter().map(|e| e.extent as u64).sum();
            assert_eq!(positions.total_extent(), total);
        }
    }
}

#[test]
fn dynamic_locate_start_matches_linear_scan() {
    let mut rng = Lcg::new(3);
    for _ in 0..100 {
        let len = rng.gen_range_usize(0, 60);
        let mut positions = PositionIndex::dynamic(len, 10);
        if len > 0 {
            let measured: Vec<u32> = (0..len).map(|_| rng.gen_range_u32(0, 30)).collect();
            positions.reflow(&measured, 0).unwrap();
        }
        let ext = extents(&positions);
        let total = positions.total_extent();
        for _ in 0..20 {
            let offset = rng.gen_range_u64(0, total + 20);
            assert_eq!(
                WindowLocator::new(&positions).locate_start(offset),
                expected_locate_start(&ext, offset),
                "offset={offset} extents={ext:?}"
            );
        }
    }
}

#[test]
fn dynamic_locate_start_has_no_match_past_the_end_or_when_empty() {
    let positions = PositionIndex::dynamic(3, 10);
    let locator = WindowLocator::new(&positions);
    assert_eq!(locator.locate_start(29), Some(2));
    assert_eq!(locator.locate_start(30), None);

    let empty = PositionIndex::dynamic(0, 10);
    assert_eq!(WindowLocator::new(&empty).locate_start(0), None);
}

#[test]
fn locate_treats_missing_start_as_zero() {
    let positions = PositionIndex::dynamic(3, 10);
    let window = WindowLocator::new(&positions).locate(
        ViewportState {
            offset: 1_000,
            client_extent_count: 2,
        },
        0.0,
        3,
    );
    assert_eq!(window, RenderWindow::new(0, 2));
}

#[test]
fn empty_data_yields_empty_window() {
    for dynamic in [false, true] {
        let positions = PositionIndex::from_options(0, &ListOptions::new(10).with_dynamic_extent(dynamic));
        let window = WindowLocator::new(&positions).locate(
            ViewportState {
                offset: 40,
                client_extent_count: 3,
            },
            0.5,
            0,
        );
        assert!(window.is_empty());
    }
}

#[test]
fn fixed_mode_offset_past_the_end_yields_empty_window() {
    let positions = PositionIndex::fixed(4, 10);
    let window = WindowLocator::new(&positions).locate(
        ViewportState {
            offset: 500,
            client_extent_count: 3,
        },
        0.0,
        4,
    );
    assert!(window.is_empty());
}

#[test]
fn fixed_mode_offset_past_the_end_keeps_the_leading_buffer() {
    let positions = PositionIndex::fixed(4, 10);
    let window = WindowLocator::new(&positions).locate(
        ViewportState {
            offset: 500,
            client_extent_count: 3,
        },
        ListOptions::default().buffer_scale,
        4,
    );
    // The start clamps to the length; ceil(3 * 0.1) == 1 item is kept before it.
    assert_eq!(window, RenderWindow::new(3, 4));
}

#[test]
fn apply_buffer_widens_both_edges() {
    // ceil(10 * 0.25) = 3
    assert_eq!(WindowLocator::apply_buffer(Edge::Leading, 20, 10, 0.25, 100), 17);
    assert_eq!(WindowLocator::apply_buffer(Edge::Trailing, 30, 10, 0.25, 100), 33);
    assert_eq!(WindowLocator::apply_buffer(Edge::Leading, 2, 10, 0.25, 100), 0);
    assert_eq!(WindowLocator::apply_buffer(Edge::Trailing, 99, 10, 0.25, 100), 100);
}

#[test]
fn apply_buffer_skips_invalid_scale() {
    for scale in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(WindowLocator::apply_buffer(Edge::Leading, 20, 10, scale, 100), 20);
        assert_eq!(WindowLocator::apply_buffer(Edge::Trailing, 30, 10, scale, 100), 30);
    }

    let positions = PositionIndex::fixed(100, 10);
    let window = WindowLocator::new(&positions).locate(
        ViewportState {
            offset: 200,
            client_extent_count: 5,
        },
        f64::NAN,
        100,
    );
    assert_eq!(window, RenderWindow::new(20, 25));
}

#[test]
fn apply_buffer_output_stays_in_bounds_for_any_scale() {
    let mut rng = Lcg::new(11);
    for _ in 0..1000 {
        let len = rng.gen_range_usize(0, 500);
        let index = rng.gen_range_usize(0, len + 1);
        let count = rng.gen_range_usize(0, 100);
        let scale = rng.gen_f64(-1e6, 1e6);
        for edge in [Edge::Leading, Edge::Trailing] {
            let out = WindowLocator::apply_buffer(edge, index, count, scale, len);
            assert!(out <= len, "edge={edge:?} scale={scale} out={out} len={len}");
        }
    }
    assert_eq!(WindowLocator::apply_buffer(Edge::Trailing, 1, 1, f64::MAX, 7), 7);
    assert_eq!(WindowLocator::apply_buffer(Edge::Leading, 6, 1, f64::MAX, 7), 0);
}

#[test]
fn buffered_window_covers_the_visible_window() {
    let positions = PositionIndex::fixed(1_000, 20);
    let window = WindowLocator::new(&positions).locate(
        ViewportState {
            offset: 4_010,
            client_extent_count: 10,
        },
        0.1,
        1_000,
    );
    // Visible [200, 210), one extra item on each side.
    assert_eq!(window, RenderWindow::new(199, 211));
}

#[test]
fn thumb_is_absent_when_content_fits() {
    let projector = ScrollbarProjector::new(10.0);
    assert_eq!(projector.thumb_extent(100.0, 150.0), None);
    assert_eq!(projector.thumb_extent(150.0, 150.0), None);
    assert_eq!(projector.project(0.0, 100.0, 150.0), None);
}

#[test]
fn thumb_extent_is_proportional_and_floored() {
    let projector = ScrollbarProjector::new(20.0);
    assert_eq!(projector.thumb_extent(1_000.0, 200.0), Some(40.0));
    assert_eq!(projector.thumb_extent(100_000.0, 200.0), Some(20.0));

    // The floor never makes the thumb longer than its track.
    let big_floor = ScrollbarProjector::new(500.0);
    assert_eq!(big_floor.thumb_extent(1_000.0, 200.0), Some(200.0));
    assert_eq!(big_floor.thumb_position(300.0, 1_000.0, 200.0), 0.0);
}

#[test]
fn thumb_extent_is_non_increasing_in_total_extent() {
    let mut rng = Lcg::new(5);
    for _ in 0..200 {
        let projector = ScrollbarProjector::new(rng.gen_f64(0.0, 100.0));
        let track = rng.gen_f64(1.0, 1_000.0);
        let mut prev = f64::INFINITY;
        let mut total = track + 1.0;
        for _ in 0..50 {
            let thumb = projector.thumb_extent(total, track).unwrap();
            assert!(thumb <= prev, "track={track} total={total}");
            prev = thumb;
            total += rng.gen_f64(0.0, 5_000.0);
        }
    }
}

#[test]
fn thumb_position_is_clamped_into_the_track() {
    let projector = ScrollbarProjector::new(0.0);
    // thumb = 200² / 1000 = 40, travel = 160, scroll range = 800.
    assert_eq!(projector.thumb_position(0.0, 1_000.0, 200.0), 0.0);
    assert_eq!(projector.thumb_position(400.0, 1_000.0, 200.0), 80.0);
    assert_eq!(projector.thumb_position(800.0, 1_000.0, 200.0), 160.0);
    assert_eq!(projector.thumb_position(5_000.0, 1_000.0, 200.0), 160.0);
    assert_eq!(projector.thumb_position(-5.0, 1_000.0, 200.0), 0.0);

    let bottom = projector.project(5_000.0, 1_000.0, 200.0).unwrap();
    assert_eq!(bottom.end(), 200.0);
}

#[test]
fn offset_from_drag_is_clamped_into_the_scroll_range() {
    let projector = ScrollbarProjector::new(0.0);
    assert_eq!(projector.offset_from_drag(80.0, 1_000.0, 200.0), 400.0);
    assert_eq!(projector.offset_from_drag(-30.0, 1_000.0, 200.0), 0.0);
    assert_eq!(projector.offset_from_drag(190.0, 1_000.0, 200.0), 800.0);
    assert_eq!(projector.offset_from_drag(50.0, 100.0, 200.0), 0.0);
}

#[test]
fn drag_mapping_inverts_thumb_position() {
    let mut rng = Lcg::new(9);
    for _ in 0..1000 {
        let track = rng.gen_f64(10.0, 2_000.0);
        let total = track + rng.gen_f64(1.0, 1_000_000.0);
        let projector = ScrollbarProjector::new(rng.gen_f64(0.0, track * 0.5));
        let offset = rng.gen_f64(0.0, total - track);

        let pos = projector.thumb_position(offset, total, track);
        let back = projector.offset_from_drag(pos, total, track);
        let tolerance = 1e-6 * total.max(1.0);
        assert!(
            (back - offset).abs() <= tolerance,
            "offset={offset} back={back} total={total} track={track}"
        );
    }
}

#[test]
fn projector_from_options_uses_thumb_min_extent() {
    let opts = ListOptions::default().with_thumb_min_extent(30);
    assert_eq!(ScrollbarProjector::from_options(&opts).min_thumb_extent(), 30.0);
    assert_eq!(ScrollbarProjector::default().min_thumb_extent(), 150.0);
}

#[test]
fn client_extent_count_rounds_up() {
    assert_eq!(client_extent_count(200, 50), 4);
    assert_eq!(client_extent_count(201, 50), 5);
    assert_eq!(client_extent_count(0, 50), 0);
    assert_eq!(client_extent_count(10, 0), 10);
}

#[test]
fn options_defaults_and_builders() {
    let opts = ListOptions::default();
    assert_eq!(opts.item_extent, 50);
    assert!(!opts.dynamic_extent);
    assert_eq!(opts.buffer_scale, 0.1);
    assert!(opts.custom_scrollbar);
    assert_eq!(
        opts.thumb_style(),
        ThumbStyle {
            width: 6,
            border_radius: 6,
            min_extent: 150,
        }
    );

    let opts = ListOptions::new(0)
        .with_dynamic_extent(true)
        .with_buffer_scale(0.0)
        .with_custom_scrollbar(false)
        .with_thumb_width(8);
    assert_eq!(opts.effective_item_extent(), 1);
    assert!(opts.dynamic_extent);
    assert_eq!(opts.thumb_width, 8);
}

#[test]
fn render_window_helpers() {
    let w = RenderWindow::new(3, 7);
    assert_eq!(w.len(), 4);
    assert!(w.contains(3));
    assert!(!w.contains(7));
    assert_eq!(w.range(), 3..7);
    assert!(RenderWindow::new(5, 2).is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn options_deserialize_from_camel_case_table() {
    let opts: ListOptions = serde_json::from_str(
        r#"{ "itemExtent": 40, "dynamicExtent": true, "thumbWidth": 9, "unknownKey": 1 }"#,
    )
    .unwrap();
    assert_eq!(opts.item_extent, 40);
    assert!(opts.dynamic_extent);
    assert_eq!(opts.thumb_width, 9);
    // Missing keys keep their defaults.
    assert_eq!(opts.buffer_scale, 0.1);
    assert_eq!(opts.thumb_min_extent, 150);

    let empty: ListOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, ListOptions::default());
}
