use alloc::vec::Vec;

use crate::{Error, ListOptions, PositionEntry, Result};

/// Cumulative extent table: the source of truth for where item `i` starts and ends.
///
/// In dynamic mode one [`PositionEntry`] is kept per item. The table is built once over the
/// initial length, then only extended ([`Self::extend_from`]) or locally adjusted
/// ([`Self::reflow`]); it is never rebuilt from scratch. Contiguity holds at all times:
/// `entries[0].start == 0` and `entries[i].start == entries[i - 1].end`.
///
/// In fixed mode no table is kept and entries are derived arithmetically from the nominal
/// item extent.
#[derive(Clone, Debug)]
pub struct PositionIndex {
    item_extent: u32,
    len: usize,
    dynamic: bool,
    entries: Vec<PositionEntry>, // empty in fixed mode
}

impl PositionIndex {
    /// Creates a fixed-mode index of `len` items, each `item_extent` long.
    pub fn fixed(len: usize, item_extent: u32) -> Self {
        vdebug!(len, item_extent, "PositionIndex::fixed");
        Self {
            item_extent: item_extent.max(1),
            len,
            dynamic: false,
            entries: Vec::new(),
        }
    }

    /// Creates a dynamic-mode index of `len` items, all starting at the nominal `item_extent`.
    pub fn dynamic(len: usize, item_extent: u32) -> Self {
        vdebug!(len, item_extent, "PositionIndex::dynamic");
        let mut index = Self {
            item_extent: item_extent.max(1),
            len: 0,
            dynamic: true,
            entries: Vec::new(),
        };
        index.push_nominal(len, 0, 0);
        index
    }

    pub fn from_options(len: usize, options: &ListOptions) -> Self {
        if options.dynamic_extent {
            Self::dynamic(len, options.item_extent)
        } else {
            Self::fixed(len, options.item_extent)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn item_extent(&self) -> u32 {
        self.item_extent
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// The materialized table (empty in fixed mode).
    pub fn entries(&self) -> &[PositionEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [PositionEntry] {
        &mut self.entries
    }

    /// Appends `count` nominal entries for indices `[start_index, start_index + count)`.
    ///
    /// Entries at and after `start_index` are discarded first; entries before it are never
    /// rewritten. The new entries continue from the `end` of entry `start_index - 1` (or from 0
    /// when `start_index == 0`). `anchor` may be passed to name that entry explicitly; when it is
    /// `None` the entry is read from the table.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `start_index > len`, and with
    /// [`Error::AnchorMismatch`] if `anchor` is not the current entry `start_index - 1`.
    pub fn build(
        &mut self,
        count: usize,
        start_index: usize,
        anchor: Option<PositionEntry>,
    ) -> Result<()> {
        if start_index > self.len {
            return Err(Error::IndexOutOfRange {
                index: start_index,
                len: self.len,
            });
        }
        let anchor = self.resolve_anchor(start_index, anchor)?;
        vdebug!(count, start_index, anchored = anchor.is_some(), "PositionIndex::build");

        if !self.dynamic {
            self.len = start_index.saturating_add(count);
            return Ok(());
        }

        let base = anchor.map_or(0, |a| a.end);
        self.push_nominal(count, start_index, base);
        Ok(())
    }

    /// Rebuilds the table from `start_index` onward with `count` nominal entries, anchored at the
    /// existing entry `start_index - 1`.
    ///
    /// This is the append path: the prefix `[0, start_index)` stays untouched.
    pub fn extend_from(&mut self, start_index: usize, count: usize) -> Result<()> {
        self.build(count, start_index, None)
    }

    /// Returns the entry for `index`.
    pub fn get(&self, index: usize) -> Result<PositionEntry> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.dynamic {
            return Ok(self.entries[index]);
        }
        let extent = self.item_extent;
        let start = (index as u64).saturating_mul(extent as u64);
        Ok(PositionEntry::new(index, start, extent))
    }

    /// Virtual extent of the whole list.
    pub fn total_extent(&self) -> u64 {
        if self.dynamic {
            return self.entries.last().map_or(0, |e| e.end);
        }
        (self.len as u64).saturating_mul(self.item_extent as u64)
    }

    // `start_index <= len` is checked by the caller.
    fn resolve_anchor(
        &self,
        start_index: usize,
        anchor: Option<PositionEntry>,
    ) -> Result<Option<PositionEntry>> {
        let expected = match start_index.checked_sub(1) {
            Some(prev) if self.dynamic => Some(self.entries[prev]),
            _ => None,
        };
        match anchor {
            None => Ok(expected),
            Some(given) => {
                let matches = given.index.checked_add(1) == Some(start_index)
                    && expected.is_none_or(|e| e == given);
                if matches {
                    Ok(Some(given))
                } else {
                    Err(Error::AnchorMismatch {
                        index: given.index,
                        start_index,
                    })
                }
            }
        }
    }

    fn push_nominal(&mut self, count: usize, start_index: usize, base: u64) {
        self.entries.truncate(start_index);
        self.entries.reserve_exact(count);
        let extent = self.item_extent;
        let mut start = base;
        for i in start_index..start_index.saturating_add(count) {
            let entry = PositionEntry::new(i, start, extent);
            start = entry.end;
            self.entries.push(entry);
        }
        self.len = self.entries.len();
    }
}
