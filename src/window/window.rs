//! Fixed-size sliding window over a forward-only source

use crate::*;
use core::fmt;
use log::{debug, trace};

pub mod source;

#[cfg(test)]
mod tests;

use source::{IterSource, Source};

// Upper bound on the eager allocation made for a window whose source may run
// dry long before `window_size`.
const PREALLOC_LIMIT: usize = 0x1000;

/// A fixed-size view over a forward-only source, advanced one element at a time
///
/// Elements are held in a ring buffer. Position `0` is always the oldest held
/// element and position `len() - 1` the most recently pulled one. Only the
/// current window is kept; the source is never re-read.
///
/// The source is released by [`SlidingWindow::release`] or when the window is
/// dropped. After release every operation fails with [`Error::Disposed`].
pub struct SlidingWindow<S: Source> {
    source: Option<S>,
    ring: Vec<S::Item>,
    head: usize,
    window_size: usize,
}

impl<S: Source> SlidingWindow<S> {
    /// Creates a window and fills it from `source`.
    ///
    /// Pulls until `window_size` elements are held or the source is
    /// exhausted. Fails with [`Error::OutOfRange`] if `window_size` is
    /// negative. A size of zero gives a window that can never be indexed.
    pub fn new(source: S, window_size: isize) -> Result<Self, Error> {
        guard::non_negative(window_size as i64, "window_size")?;
        let window_size = window_size as usize;
        let mut window = Self {
            source: Some(source),
            ring: Vec::with_capacity(window_size.min(PREALLOC_LIMIT)),
            head: 0,
            window_size,
        };
        for _ in 0..window_size {
            if !window.slide_next()? {
                break;
            }
        }
        debug!(
            "sliding window created: size {} filled {}",
            window_size,
            window.ring.len()
        );
        Ok(window)
    }

    /// The configured window size.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of elements currently held.
    ///
    /// Equal to `window_size()` unless the source ran out while filling.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.source.is_none()
    }

    /// Returns the element at position `index`, `0` being the oldest.
    ///
    /// # Errors
    ///
    /// - [`Error::Disposed`] after release
    /// - [`Error::OutOfRange`] unless `0 <= index < window_size`
    /// - [`Error::InvalidOperation`] if `index` is in range but the window
    ///   holds fewer elements, which happens when the source ran out early
    pub fn get(&self, index: isize) -> Result<&S::Item, Error> {
        if self.is_released() {
            return Err(Error::Disposed);
        }
        guard::non_negative(index as i64, "index")?;
        guard::less_than(index as i64, self.window_size as i64, "index")?;

        let index = index as usize;
        let len = self.ring.len();
        if index >= len {
            return Err(Error::InvalidOperation);
        }
        Ok(&self.ring[(self.head + index) % len])
    }

    /// Pulls one element and advances the window.
    ///
    /// Returns `Ok(false)` when the source is exhausted; the window is left
    /// untouched in that case.
    pub fn slide_next(&mut self) -> Result<bool, Error> {
        let source = self.source.as_mut().ok_or(Error::Disposed)?;
        let Some(item) = source.pull() else {
            trace!("sliding window: source exhausted");
            return Ok(false);
        };

        if self.ring.len() < self.window_size {
            self.ring.push(item);
        } else if self.window_size > 0 {
            // evict the oldest
            self.ring[self.head] = item;
            self.head = (self.head + 1) % self.window_size;
        }
        trace!("sliding window: advanced, head {}", self.head);
        Ok(true)
    }

    /// Restarts the source and empties the window.
    ///
    /// Unlike [`SlidingWindow::new`] this does **not** refill the window:
    /// call [`SlidingWindow::slide_next`] `window_size` times to populate it
    /// again. Fails with [`Error::NotSupported`] if the source cannot
    /// restart, leaving the window as it was.
    pub fn reset(&mut self) -> Result<(), Error> {
        let source = self.source.as_mut().ok_or(Error::Disposed)?;
        source.restart()?;
        self.ring.clear();
        self.head = 0;
        debug!("sliding window reset");
        Ok(())
    }

    /// Releases the source and the held elements. Idempotent.
    pub fn release(&mut self) {
        if let Some(source) = self.source.take() {
            drop(source);
            self.ring.clear();
            self.head = 0;
            debug!("sliding window released");
        }
    }

    /// Iterates the held elements from oldest to newest.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &S::Item> + '_ {
        let (newer, older) = self.ring.split_at(self.head);
        older.iter().chain(newer.iter())
    }
}

impl<S: Source> SlidingWindow<S>
where
    S::Item: Clone,
{
    /// Copies the held elements, oldest first.
    pub fn to_vec(&self) -> Vec<S::Item> {
        self.iter().cloned().collect()
    }
}

impl<S: Source> Drop for SlidingWindow<S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S: Source> fmt::Debug for SlidingWindow<S>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Items<'a, S: Source>(&'a SlidingWindow<S>);

        impl<S: Source> fmt::Debug for Items<'_, S>
        where
            S::Item: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("SlidingWindow")
            .field("window_size", &self.window_size)
            .field("released", &self.is_released())
            .field("items", &Items(self))
            .finish()
    }
}

pub trait SlidingWindowExt: IntoIterator + Sized {
    /// Builds a [`SlidingWindow`] of `window_size` over this sequence.
    fn sliding_window(
        self,
        window_size: isize,
    ) -> Result<SlidingWindow<IterSource<Self::IntoIter>>, Error>;
}

impl<T: IntoIterator> SlidingWindowExt for T {
    #[inline]
    fn sliding_window(
        self,
        window_size: isize,
    ) -> Result<SlidingWindow<IterSource<Self::IntoIter>>, Error> {
        SlidingWindow::new(IterSource::new(self), window_size)
    }
}
