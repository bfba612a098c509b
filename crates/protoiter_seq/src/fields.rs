use crate::Seq;

// -----------------------------------------------------------------------------
// Fields

/// A record whose populated fields can be scanned with a callback.
///
/// # Contract
///
/// [`range_fields`](Fields::range_fields) visits every populated field once,
/// in an order chosen by the implementor, and returns as soon as `f`
/// returns `false`.
pub trait Fields {
    /// The field descriptor handle.
    type Field;
    /// The type of a field value.
    type Value: ?Sized;

    /// Calls `f` with the descriptor and value of every populated field until
    /// it returns `false`.
    fn range_fields<'a>(&'a self, f: &mut dyn FnMut(Self::Field, &'a Self::Value) -> bool);
}

/// Creates a sequence over the populated fields of `message`.
///
/// Equivalent to calling [`Fields::range_fields`] with the consumer's
/// callback. Items are `(descriptor, value)` pairs.
#[inline]
pub const fn each_field<M: Fields + ?Sized>(message: &M) -> EachField<'_, M> {
    EachField { message }
}

/// A [`Seq`] of the populated fields of a record, created by [`each_field`].
pub struct EachField<'a, M: ?Sized> {
    message: &'a M,
}

impl<'a, M: Fields + ?Sized> Seq for EachField<'a, M> {
    type Item = (M::Field, &'a M::Value);

    #[inline]
    fn each<Y>(self, mut f: Y)
    where
        Y: FnMut((M::Field, &'a M::Value)) -> bool,
    {
        self.message.range_fields(&mut |field, value| f((field, value)));
    }
}

impl<M: ?Sized> Clone for EachField<'_, M> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for EachField<'_, M> {}

// -----------------------------------------------------------------------------
// Tests
