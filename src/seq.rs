//! Sequence helpers

use crate::*;

/// Iterator yielding every element except the last `n`
///
/// Holds at most `n + 1` elements of lookahead.
pub struct SkipLast<I: Iterator> {
    iter: I,
    queue: VecDeque<I::Item>,
    n: usize,
}

impl<I: Iterator> SkipLast<I> {
    #[inline]
    fn new(iter: I, n: usize) -> Self {
        Self {
            iter,
            queue: VecDeque::with_capacity(n.saturating_add(1).min(0x1000)),
            n,
        }
    }
}

impl<I: Iterator> Iterator for SkipLast<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            self.queue.push_back(item);
            if self.queue.len() > self.n {
                return self.queue.pop_front();
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.queue.len();
        let (lower, upper) = self.iter.size_hint();
        let sub = |v: usize| v.saturating_add(pending).saturating_sub(self.n);
        (sub(lower), upper.map(sub))
    }
}

pub trait SkipLastExt: IntoIterator + Sized {
    /// Take all elements except the last `n`.
    ///
    /// Fails with [`Error::OutOfRange`] when `n` is negative.
    fn skip_last_n(self, n: isize) -> Result<SkipLast<Self::IntoIter>, Error>;
}

impl<T: IntoIterator> SkipLastExt for T {
    #[inline]
    fn skip_last_n(self, n: isize) -> Result<SkipLast<Self::IntoIter>, Error> {
        guard::non_negative(n as i64, "n")?;
        Ok(SkipLast::new(self.into_iter(), n as usize))
    }
}
