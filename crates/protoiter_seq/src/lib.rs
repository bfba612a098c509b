//! Uniform sequences over Protocol Buffers reflection collections.
//!
//! Reflection APIs expose their collections in two shapes:
//!
//! - indexable lists that report a length and hand out an element per index,
//!   see [`Descriptors`] and [`each`];
//! - callback based scans, where a callback is invoked for every element
//!   until it returns `false`, see [`Files`], [`Types`] and [`Fields`].
//!
//! This crate adapts both shapes to one [`Seq`] interface. Nothing is
//! buffered: every element is produced by the wrapped collection at the moment
//! the consumer asks for it, and a consumer that stops early stops the wrapped
//! traversal as well.
//!
//! With the `prost` feature, `prost_reflect` pools, messages and descriptor
//! lists implement these capabilities, see the [`prost`] module.
//!
//! # Examples
//!
//! ```
//! use protoiter_seq::{Seq, each};
//!
//! let names = ["Timestamp", "Duration", "Any"];
//!
//! let mut seen = Vec::new();
//! each(&names[..]).each(|(index, name)| {
//!     seen.push((index, name));
//!     index < 1
//! });
//!
//! assert_eq!(seen, [(0, "Timestamp"), (1, "Duration")]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod each;
mod fields;
mod files;
mod seq;
mod types;

#[cfg(feature = "prost")]
pub mod prost;

// -----------------------------------------------------------------------------
// Top-level exports

pub use each::{Descriptors, Each, each};
pub use fields::{EachField, Fields, each_field};
pub use files::{EachFile, EachFileByPackage, Files, each_file, each_file_by_package};
pub use seq::Seq;
pub use types::{
    EachEnum, EachExtension, EachExtensionByMessage, EachMessage, Types, each_enum,
    each_extension, each_extension_by_message, each_message,
};
