//! Small utility library: argument guards, sequence helpers and a sliding window

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

pub mod guard;
pub mod seq;
pub mod text;
#[path = "window/window.rs"]
pub mod window;

pub use seq::{SkipLast, SkipLastExt};
pub use text::Truncate;
pub use window::{SlidingWindow, SlidingWindowExt, source::Source};

/// Errors raised by the guards and by the sliding window
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument or index lies outside its allowed range.
    #[error("argument `{name}` is out of range")]
    OutOfRange { name: &'static str },
    /// A required argument is missing or empty.
    #[error("argument `{name}` must not be null or empty")]
    Null { name: &'static str },
    /// The window has already been released.
    #[error("sliding window has been released")]
    Disposed,
    /// The window holds fewer elements than an in-range index requires.
    #[error("window holds fewer elements than requested")]
    InvalidOperation,
    /// The source cannot be restarted.
    #[error("source does not support restarting")]
    NotSupported,
}
