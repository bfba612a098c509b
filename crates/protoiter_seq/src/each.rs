use core::iter::FusedIterator;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Descriptors

/// A list of descriptors that reports its length and hands out elements by
/// position.
///
/// This is the shape of the descriptor lists of a reflection system, such as
/// the messages declared in a file or the fields of a message.
///
/// # Contract
///
/// [`get`](Descriptors::get) must return `Some` for every index below
/// [`len`](Descriptors::len) and `None` otherwise.
pub trait Descriptors {
    /// The element type, usually a cheap-to-clone descriptor handle.
    type Descriptor;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if it is out of bounds.
    fn get(&self, index: usize) -> Option<Self::Descriptor>;
}

impl<T: Clone> Descriptors for [T] {
    type Descriptor = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }
}

#[cfg(feature = "alloc")]
impl<T: Clone> Descriptors for Vec<T> {
    type Descriptor = T;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

// -----------------------------------------------------------------------------
// Each

/// Creates an iterator over `list`, yielding each descriptor with its index.
///
/// Elements are fetched one at a time with [`Descriptors::get`], starting at
/// index `0`. Nothing past the last element the consumer asks for is fetched.
///
/// # Examples
///
/// ```
/// use protoiter_seq::each;
///
/// let values = [1, 2, 3, 4, 5];
///
/// let mut indices = Vec::new();
/// let mut items = Vec::new();
/// for (i, value) in each(&values[..]) {
///     indices.push(i);
///     items.push(value);
///     if i == 2 {
///         break;
///     }
/// }
///
/// assert_eq!(indices, [0, 1, 2]);
/// assert_eq!(items, [1, 2, 3]);
/// ```
#[inline]
pub const fn each<D: Descriptors + ?Sized>(list: &D) -> Each<'_, D> {
    Each { list, index: 0 }
}

/// An iterator over the elements of a [`Descriptors`] list.
///
/// Created by [`each`]. This is an [`ExactSizeIterator`] that yields
/// `(index, descriptor)` pairs in index order.
///
/// # Performance
///
/// The iterator uses [`Descriptors::get`] internally, so the cost per element
/// is whatever the list charges for a positional lookup. Over a list whose
/// `get` walks from the start, such as the `prost` descriptor list views, a
/// full pass is quadratic in the list length.
pub struct Each<'a, D: ?Sized> {
    list: &'a D,
    index: usize,
}

impl<D: ?Sized> Clone for Each<'_, D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Each<'_, D> {}

impl<D: Descriptors + ?Sized> Iterator for Each<'_, D> {
    type Item = (usize, D::Descriptor);

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.list.len();
        if self.index >= len {
            return None;
        }

        let index = self.index;
        match self.list.get(index) {
            Some(descriptor) => {
                self.index += 1;
                Some((index, descriptor))
            }
            None => {
                log::warn!("descriptor list reported {len} elements but has none at index {index}");
                self.index = len;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.list.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl<D: Descriptors + ?Sized> ExactSizeIterator for Each<'_, D> {}

impl<D: Descriptors + ?Sized> FusedIterator for Each<'_, D> {}

// -----------------------------------------------------------------------------
// Tests
