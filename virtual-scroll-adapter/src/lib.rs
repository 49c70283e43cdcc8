//! Event-driven controller for the `virtual-scroll` crate.
//!
//! `virtual-scroll` holds the windowing math and stays UI-agnostic. This crate wires it to a host:
//!
//! - [`ListController`] owns the data, the position table, and the current window, and runs one
//!   render cycle per admitted scroll/resize event
//! - [`Renderer`] and [`HostViewport`] are the collaborators a UI layer implements
//! - [`RateLimiter`] implementations ([`Debounce`], [`FrameThrottle`], [`Unthrottled`]) decide
//!   when events turn into renders; deferred renders run from [`ListController::tick`]
//! - [`ThumbDrag`] tracks pointer drags of the synthetic scrollbar thumb
//!
//! Time is passed in as `now_ms`, so the controller works the same in tests, native hosts, and
//! wasm hosts. No framework bindings live here.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod drag;
mod host;
mod throttle;


pub use controller::ListController;
pub use drag::{DragPhase, ThumbDrag};
pub use host::{HostViewport, Renderer};
pub use throttle::{Debounce, FrameThrottle, RateLimiter, Unthrottled, limiter_for};

pub use virtual_scroll::{Error, ListOptions, RenderWindow, Result, Thumb, ThumbStyle};
