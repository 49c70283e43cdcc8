//! A headless windowing engine for virtual scrolling lists.
//!
//! Only the slice of a large ordered list that intersects the viewport is materialized. This
//! crate holds the math behind that: a cumulative position table for measured item extents,
//! offset → index lookup with overscan, reflow of measured sizes into the table, and the
//! projection of virtual offsets onto a synthetic scrollbar thumb.
//!
//! Two sizing modes are supported:
//! - fixed: every item is `item_extent` long and positions are derived arithmetically;
//! - dynamic: items start at `item_extent` and are corrected by [`PositionIndex::reflow`] once
//!   their real size is known after the first draw.
//!
//! It is UI-agnostic. The event-driven controller that feeds it scroll offsets, viewport sizes,
//! and measurements lives in the `virtual-scroll-adapter` crate.
//!
//! ```
//! use virtual_scroll::{PositionIndex, ViewportState, WindowLocator};
//!
//! let positions = PositionIndex::fixed(10, 50);
//! let viewport = ViewportState { offset: 125, client_extent_count: 4 };
//! let window = WindowLocator::new(&positions).locate(viewport, 0.0, positions.len());
//! assert_eq!((window.start_index, window.end_index), (2, 6));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod locator;
mod options;
mod position;
mod reflow;
mod scrollbar;
mod types;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use locator::WindowLocator;
pub use options::ListOptions;
pub use position::PositionIndex;
pub use reflow::Reflow;
pub use scrollbar::ScrollbarProjector;
pub use types::{
    Edge, PositionEntry, RenderWindow, Thumb, ThumbStyle, ViewportState, client_extent_count,
};
