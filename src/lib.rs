#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use protoiter_seq as seq;

#[cfg(feature = "prost")]
pub use protoiter_seq::prost;

pub use protoiter_seq::{
    Descriptors, Fields, Files, Seq, Types, each, each_enum, each_extension,
    each_extension_by_message, each_field, each_file, each_file_by_package, each_message,
};
