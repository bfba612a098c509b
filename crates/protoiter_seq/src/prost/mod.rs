//! Capabilities for [`prost_reflect`].
//!
//! - [`DescriptorPool`](prost_reflect::DescriptorPool) is a [`Files`](crate::Files)
//!   and a [`Types`](crate::Types) registry.
//! - [`DynamicMessage`](prost_reflect::DynamicMessage) is a [`Fields`](crate::Fields)
//!   record whose fields are [`MessageField`]s: regular fields and set
//!   extensions alike.
//! - The [`lists`] views turn the descriptor lists of files, messages, enums
//!   and services into [`Descriptors`](crate::Descriptors).
//!
//! # Examples
//!
//! ```
//! use prost_reflect::{DescriptorPool, ReflectMessage};
//! use protoiter_seq::prost::lists::FileMessages;
//! use protoiter_seq::{Seq, each, each_field, each_file_by_package};
//!
//! let timestamp = prost_types::Timestamp::default().descriptor();
//! let pool: &DescriptorPool = timestamp.parent_pool();
//!
//! each_file_by_package(pool, "google.protobuf").visit(|file| {
//!     each_field(&file.options()).visit(|(field, _)| {
//!         assert!(field.full_name().starts_with("google.protobuf.FileOptions."));
//!     });
//!     for (_, message) in each(&FileMessages(file)) {
//!         assert!(message.full_name().starts_with("google.protobuf."));
//!     }
//! });
//! ```

// -----------------------------------------------------------------------------
// Modules

mod message;
mod pool;

pub mod lists;

#[cfg(test)]
mod fixture;

// -----------------------------------------------------------------------------
// Top-level exports

pub use message::MessageField;
pub use prost_reflect;
