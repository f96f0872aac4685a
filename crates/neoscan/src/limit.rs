//! Capping how many results a consumer pulls from a lazy sequence.

use std::iter::FusedIterator;

/// Yield at most `n` items from `iter`, in order.
///
/// `None` **and `Some(0)`** mean "no limit": the source is passed through
/// unchanged. A zero limit never produces an empty sequence.
///
/// With a positive limit the source is not advanced again once the limit is
/// reached, so this is safe on infinite or expensive sources.
///
/// # Examples
///
/// ```
/// use neoscan::limit::limit;
///
/// let first_two: Vec<_> = limit(1.., Some(2)).collect();
/// assert_eq!(first_two, vec![1, 2]);
///
/// let all: Vec<_> = limit(["a", "b", "c"], Some(0)).collect();
/// assert_eq!(all, vec!["a", "b", "c"]);
/// ```
pub fn limit<I: IntoIterator>(iter: I, n: Option<usize>) -> Limit<I::IntoIter> {
    Limit {
        inner: iter.into_iter(),
        remaining: n.filter(|&n| n > 0),
    }
}

/// Iterator returned by [`limit`].
#[derive(Debug, Clone)]
pub struct Limit<I> {
    inner: I,
    /// `None` when unlimited.
    remaining: Option<usize>,
}

impl<I> Limit<I> {
    /// Items still allowed through, or `None` if unlimited.
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            None => self.inner.next(),
            Some(0) => None,
            Some(remaining) => {
                let item = self.inner.next()?;
                *remaining -= 1;
                Some(item)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match self.remaining {
            None => (lower, upper),
            Some(remaining) => (
                lower.min(remaining),
                Some(upper.map_or(remaining, |upper| upper.min(remaining))),
            ),
        }
    }
}

impl<I: FusedIterator> FusedIterator for Limit<I> {}
