//! Indexable views over the descriptor lists of [`prost_reflect`].
//!
//! Each view wraps a descriptor handle and exposes one of its child lists as
//! [`Descriptors`], so it can be walked with [`each`](crate::each).
//!
//! ```
//! use prost_reflect::ReflectMessage;
//! use protoiter_seq::prost::lists::MessageFields;
//! use protoiter_seq::each;
//!
//! let timestamp = prost_types::Timestamp::default().descriptor();
//!
//! let names: Vec<_> = each(&MessageFields(timestamp))
//!     .map(|(i, field)| (i, field.name().to_owned()))
//!     .collect();
//!
//! assert_eq!(names, [(0, "seconds".to_owned()), (1, "nanos".to_owned())]);
//! ```
//!
//! # Performance
//!
//! The handles are reference counted, so building a view is cheap and
//! [`len`](Descriptors::len) is constant time. `prost_reflect` has no
//! positional lookup for these lists, only iterators, so
//! [`get`](Descriptors::get) walks the list up to `index`: a full
//! [`each`](crate::each) over a view is quadratic in the list length. For
//! long lists where indices are not needed, iterate the descriptor's own
//! list (`file.messages()`, `message.fields()`, ...) instead.

use prost_reflect::{
    DescriptorPool, EnumDescriptor, EnumValueDescriptor, ExtensionDescriptor, FieldDescriptor,
    FileDescriptor, MessageDescriptor, MethodDescriptor, OneofDescriptor, ServiceDescriptor,
};

use crate::Descriptors;

macro_rules! define_list {
    ($(
        $(#[$meta:meta])*
        $name:ident($parent:ty) => $item:ty, $list:ident;
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(pub $parent);

        impl Descriptors for $name {
            type Descriptor = $item;

            #[inline]
            fn len(&self) -> usize {
                self.0.$list().len()
            }

            #[inline]
            fn get(&self, index: usize) -> Option<$item> {
                self.0.$list().nth(index)
            }
        }

        impl From<&$parent> for $name {
            #[inline]
            fn from(parent: &$parent) -> Self {
                Self(parent.clone())
            }
        }
    )*};
}

define_list! {
    /// The files of a pool, in the order they were added.
    PoolFiles(DescriptorPool) => FileDescriptor, files;

    /// The top-level messages declared in a file.
    FileMessages(FileDescriptor) => MessageDescriptor, messages;
    /// The top-level enums declared in a file.
    FileEnums(FileDescriptor) => EnumDescriptor, enums;
    /// The top-level extensions declared in a file.
    FileExtensions(FileDescriptor) => ExtensionDescriptor, extensions;
    /// The services declared in a file.
    FileServices(FileDescriptor) => ServiceDescriptor, services;

    /// The fields of a message, in declaration order.
    MessageFields(MessageDescriptor) => FieldDescriptor, fields;
    /// The oneofs of a message.
    MessageOneofs(MessageDescriptor) => OneofDescriptor, oneofs;
    /// The messages nested in a message.
    MessageNested(MessageDescriptor) => MessageDescriptor, child_messages;
    /// The enums nested in a message.
    MessageEnums(MessageDescriptor) => EnumDescriptor, child_enums;
    /// The extensions declared inside a message.
    ///
    /// These may extend any message; the extensions of a given message are
    /// scanned with [`each_extension_by_message`](crate::each_extension_by_message).
    MessageExtensions(MessageDescriptor) => ExtensionDescriptor, child_extensions;

    /// The fields of a oneof.
    OneofFields(OneofDescriptor) => FieldDescriptor, fields;

    /// The values of an enum, in declaration order.
    EnumValues(EnumDescriptor) => EnumValueDescriptor, values;

    /// The methods of a service.
    ServiceMethods(ServiceDescriptor) => MethodDescriptor, methods;
}

// -----------------------------------------------------------------------------
// Tests
