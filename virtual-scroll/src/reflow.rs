use crate::{Error, PositionIndex, Result};

/// Outcome of a [`PositionIndex::reflow`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflow {
    /// Number of entries whose cached extent differed from the measurement.
    pub changed: usize,
    /// Net change of the total extent.
    pub delta: i64,
}

impl Reflow {
    pub fn is_noop(&self) -> bool {
        self.changed == 0
    }
}

impl PositionIndex {
    /// Reconciles cached extents with real measurements of the rendered window.
    ///
    /// `measured[k]` is the drawn size of item `start_index + k`. Entries whose measurement
    /// matches the cache are skipped. Each difference is folded into a running delta that shifts
    /// every later entry, so the tail after the window is moved once regardless of how many
    /// items in the window changed. Entries before `start_index` are never touched.
    ///
    /// Calling this again with the same measurements is a no-op. In fixed mode it always is.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if the measured window runs past the data length.
    pub fn reflow(&mut self, measured: &[u32], start_index: usize) -> Result<Reflow> {
        if !self.is_dynamic() || measured.is_empty() {
            return Ok(Reflow::default());
        }
        let len = self.len();
        if start_index >= len {
            return Err(Error::IndexOutOfRange {
                index: start_index,
                len,
            });
        }
        let window_end = start_index + measured.len();
        if window_end > len {
            return Err(Error::IndexOutOfRange {
                index: window_end - 1,
                len,
            });
        }

        let entries = self.entries_mut();
        let mut report = Reflow::default();
        for (entry, &extent) in entries[start_index..window_end].iter_mut().zip(measured) {
            let diff = extent as i64 - entry.extent as i64;
            if diff == 0 && report.delta == 0 {
                continue;
            }
            entry.start = shift(entry.start, report.delta);
            entry.extent = extent;
            entry.end = entry.start.saturating_add(extent as u64);
            if diff != 0 {
                report.changed += 1;
                report.delta += diff;
            }
        }

        if report.delta != 0 {
            for entry in &mut entries[window_end..] {
                entry.start = shift(entry.start, report.delta);
                entry.end = shift(entry.end, report.delta);
            }
        }

        vtrace!(
            start_index,
            measured = measured.len(),
            changed = report.changed,
            delta = report.delta,
            "PositionIndex::reflow"
        );
        Ok(report)
    }
}

fn shift(value: u64, delta: i64) -> u64 {
    if delta >= 0 {
        value.saturating_add(delta as u64)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}
