use core::ops::ControlFlow;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Seq

/// A push sequence: the source drives traversal and hands each item to a
/// consumer callback.
///
/// The callback decides whether traversal goes on. Returning `false` stops it,
/// and the source must not produce any further item afterwards.
///
/// Every [`Iterator`] is a `Seq`, so the index based [`Each`](crate::Each)
/// can be consumed the same way as the callback based scans.
///
/// # Examples
///
/// ```
/// use protoiter_seq::Seq;
///
/// let mut sum = 0;
/// [1, 2, 3, 4].into_iter().each(|n| {
///     sum += n;
///     sum < 3
/// });
///
/// assert_eq!(sum, 3);
/// ```
pub trait Seq {
    /// The type of the items produced.
    type Item;

    /// Hands every item to `f` until it returns `false`.
    fn each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool;

    /// Hands every item to `f` until it breaks.
    ///
    /// Returns the break value, or [`ControlFlow::Continue`] if the sequence
    /// was exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use protoiter_seq::Seq;
    ///
    /// let found = ["a", "bb", "ccc"].into_iter().try_each(|s| {
    ///     if s.len() == 2 { ControlFlow::Break(s) } else { ControlFlow::Continue(()) }
    /// });
    ///
    /// assert_eq!(found, ControlFlow::Break("bb"));
    /// ```
    fn try_each<B, F>(self, mut f: F) -> ControlFlow<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> ControlFlow<B>,
    {
        let mut result = ControlFlow::Continue(());
        self.each(|item| match f(item) {
            ControlFlow::Continue(()) => true,
            brk => {
                result = brk;
                false
            }
        });
        result
    }

    /// Hands every item to a fallible `f`, stopping at the first error.
    ///
    /// # Examples
    ///
    /// ```
    /// use protoiter_seq::Seq;
    ///
    /// let mut visited = 0;
    /// let result = [1, -2, 3].into_iter().try_visit(|n: i32| {
    ///     visited += 1;
    ///     u32::try_from(n).map(drop)
    /// });
    ///
    /// assert!(result.is_err());
    /// assert_eq!(visited, 2);
    /// ```
    fn try_visit<E, F>(self, mut f: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        match self.try_each(|item| match f(item) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => ControlFlow::Break(e),
        }) {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(e) => Err(e),
        }
    }

    /// Hands every item to `f`, never stopping early.
    #[inline]
    fn visit<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.each(|item| {
            f(item);
            true
        });
    }

    /// Collects every item into a [`Vec`], in the order they were produced.
    #[cfg(feature = "alloc")]
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut items = Vec::new();
        self.visit(|item| items.push(item));
        items
    }
}

impl<I: Iterator> Seq for I {
    type Item = I::Item;

    #[inline]
    fn each<F>(self, mut f: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        for item in self {
            if !f(item) {
                break;
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
