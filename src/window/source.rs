//! Forward-only element sources

use crate::*;

/// A pull-based, forward-only producer of elements
///
/// Restarting is an optional capability. Sources that cannot rewind keep the
/// default [`Source::restart`], which fails with [`Error::NotSupported`].
pub trait Source {
    type Item;

    /// Produces the next element, or `None` once exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    fn can_restart(&self) -> bool {
        false
    }

    /// Rewinds to the first element.
    fn restart(&mut self) -> Result<(), Error> {
        Err(Error::NotSupported)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;

    #[inline]
    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }

    #[inline]
    fn can_restart(&self) -> bool {
        (**self).can_restart()
    }

    #[inline]
    fn restart(&mut self) -> Result<(), Error> {
        (**self).restart()
    }
}

/// Any iterator, consumed once
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<I: Iterator> IterSource<I> {
    #[inline]
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self(iter.into_iter())
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

/// An iterator that restarts from a pristine clone of itself
#[derive(Debug, Clone)]
pub struct RestartableSource<I> {
    origin: I,
    iter: I,
}

impl<I: Iterator + Clone> RestartableSource<I> {
    #[inline]
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        let origin = iter.into_iter();
        Self {
            iter: origin.clone(),
            origin,
        }
    }
}

impl<I: Iterator + Clone> Source for RestartableSource<I> {
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn can_restart(&self) -> bool {
        true
    }

    #[inline]
    fn restart(&mut self) -> Result<(), Error> {
        self.iter = self.origin.clone();
        Ok(())
    }
}

/// A cursor over a borrowed slice
#[derive(Debug, Clone)]
pub struct SliceSource<'a, T> {
    slice: &'a [T],
    cursor: usize,
}

impl<'a, T> SliceSource<'a, T> {
    #[inline]
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, cursor: 0 }
    }

    /// Number of elements pulled so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<T: Clone> Source for SliceSource<'_, T> {
    type Item = T;

    #[inline]
    fn pull(&mut self) -> Option<Self::Item> {
        let item = self.slice.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(item)
    }

    #[inline]
    fn can_restart(&self) -> bool {
        true
    }

    #[inline]
    fn restart(&mut self) -> Result<(), Error> {
        self.cursor = 0;
        Ok(())
    }
}
