use crate::Seq;

// -----------------------------------------------------------------------------
// Types

/// A registry of runtime types that can be scanned with a callback.
///
/// Every scan calls `f` for each registered type while it returns `true`.
/// Iteration order is defined by the implementor and may be unspecified.
pub trait Types {
    /// The enum type handle.
    type Enum;
    /// The message type handle.
    type Message;
    /// The extension type handle.
    type Extension;

    /// Calls `f` for every registered enum until it returns `false`.
    fn range_enums(&self, f: &mut dyn FnMut(Self::Enum) -> bool);

    /// Calls `f` for every registered message until it returns `false`.
    fn range_messages(&self, f: &mut dyn FnMut(Self::Message) -> bool);

    /// Calls `f` for every registered extension until it returns `false`.
    fn range_extensions(&self, f: &mut dyn FnMut(Self::Extension) -> bool);

    /// Calls `f` for every registered extension of the message with the full
    /// name `message` until it returns `false`.
    fn range_extensions_by_message(
        &self,
        message: &str,
        f: &mut dyn FnMut(Self::Extension) -> bool,
    );
}

// -----------------------------------------------------------------------------
// Adapters

macro_rules! define_scan {
    (
        $(#[$meta:meta])*
        $name:ident, $ctor:ident, $item:ident, $range:ident
    ) => {
        $(#[$meta])*
        pub struct $name<'a, T: ?Sized> {
            types: &'a T,
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] over `types`.")]
        ///
        #[doc = concat!("Equivalent to calling [`Types::", stringify!($range), "`] with the consumer's callback.")]
        #[inline]
        pub const fn $ctor<T: Types + ?Sized>(types: &T) -> $name<'_, T> {
            $name { types }
        }

        impl<T: Types + ?Sized> Seq for $name<'_, T> {
            type Item = T::$item;

            #[inline]
            fn each<Y>(self, mut f: Y)
            where
                Y: FnMut(T::$item) -> bool,
            {
                self.types.$range(&mut f);
            }
        }

        impl<T: ?Sized> Clone for $name<'_, T> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $name<'_, T> {}
    };
}

define_scan! {
    /// A [`Seq`] of every enum type of a [`Types`] registry.
    EachEnum, each_enum, Enum, range_enums
}

define_scan! {
    /// A [`Seq`] of every message type of a [`Types`] registry.
    EachMessage, each_message, Message, range_messages
}

define_scan! {
    /// A [`Seq`] of every extension type of a [`Types`] registry.
    EachExtension, each_extension, Extension, range_extensions
}

/// Creates a sequence over the extensions of the message named `message`.
///
/// Equivalent to calling [`Types::range_extensions_by_message`] with the
/// consumer's callback.
#[inline]
pub const fn each_extension_by_message<'a, T: Types + ?Sized>(
    types: &'a T,
    message: &'a str,
) -> EachExtensionByMessage<'a, T> {
    EachExtensionByMessage { types, message }
}

/// A [`Seq`] of the extension types extending one message, created by
/// [`each_extension_by_message`].
pub struct EachExtensionByMessage<'a, T: ?Sized> {
    types: &'a T,
    message: &'a str,
}

impl<T: Types + ?Sized> Seq for EachExtensionByMessage<'_, T> {
    type Item = T::Extension;

    #[inline]
    fn each<Y>(self, mut f: Y)
    where
        Y: FnMut(T::Extension) -> bool,
    {
        self.types.range_extensions_by_message(self.message, &mut f);
    }
}

impl<T: ?Sized> Clone for EachExtensionByMessage<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for EachExtensionByMessage<'_, T> {}

// -----------------------------------------------------------------------------
// Tests
