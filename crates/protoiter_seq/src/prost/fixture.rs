//! A small two-file schema shared by the tests.
//!
//! ```proto
//! // demo/shop.proto
//! syntax = "proto2";
//! package demo.shop;
//! option java_package = "com.demo.shop";
//!
//! message Order {
//!   optional int64 id = 1;
//!   optional string note = 2;
//!   optional Status status = 3;
//!   extensions 100 to 199;
//! }
//! message Item {}
//! enum Status { STATUS_UNKNOWN = 0; STATUS_PLACED = 1; STATUS_SHIPPED = 2; }
//! extend Order { optional int32 priority = 100; }
//! service Orders {
//!   rpc Place(Order) returns (Order);
//!   rpc Cancel(Order) returns (Order);
//! }
//!
//! // demo/billing.proto
//! syntax = "proto2";
//! package demo.billing;
//! import "demo/shop.proto";
//!
//! message Invoice { optional int64 order_id = 1; }
//! extend demo.shop.Order { optional bool invoiced = 101; }
//! ```

use alloc::borrow::ToOwned;
use alloc::vec;

use prost_reflect::{
    DescriptorPool, EnumDescriptor, ExtensionDescriptor, FileDescriptor, MessageDescriptor,
};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, FileOptions, MethodDescriptorProto,
    ServiceDescriptorProto, descriptor_proto::ExtensionRange,
};

pub const SHOP_FILE: &str = "demo/shop.proto";
pub const BILLING_FILE: &str = "demo/billing.proto";

fn field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_owned()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    }
}

fn extension(name: &str, number: i32, ty: Type, extendee: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        extendee: Some(extendee.to_owned()),
        ..field(name, number, ty)
    }
}

fn enum_value(name: &str, number: i32) -> EnumValueDescriptorProto {
    EnumValueDescriptorProto {
        name: Some(name.to_owned()),
        number: Some(number),
        ..Default::default()
    }
}

fn method(name: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_owned()),
        input_type: Some(".demo.shop.Order".to_owned()),
        output_type: Some(".demo.shop.Order".to_owned()),
        ..Default::default()
    }
}

fn shop() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(SHOP_FILE.to_owned()),
        package: Some("demo.shop".to_owned()),
        syntax: Some("proto2".to_owned()),
        options: Some(FileOptions {
            java_package: Some("com.demo.shop".to_owned()),
            ..Default::default()
        }),
        message_type: vec![
            DescriptorProto {
                name: Some("Order".to_owned()),
                field: vec![
                    field("id", 1, Type::Int64),
                    field("note", 2, Type::String),
                    FieldDescriptorProto {
                        type_name: Some(".demo.shop.Status".to_owned()),
                        ..field("status", 3, Type::Enum)
                    },
                ],
                extension_range: vec![ExtensionRange {
                    start: Some(100),
                    end: Some(200),
                    ..Default::default()
                }],
                ..Default::default()
            },
            DescriptorProto {
                name: Some("Item".to_owned()),
                ..Default::default()
            },
        ],
        enum_type: vec![EnumDescriptorProto {
            name: Some("Status".to_owned()),
            value: vec![
                enum_value("STATUS_UNKNOWN", 0),
                enum_value("STATUS_PLACED", 1),
                enum_value("STATUS_SHIPPED", 2),
            ],
            ..Default::default()
        }],
        extension: vec![extension(
            "priority",
            100,
            Type::Int32,
            ".demo.shop.Order",
        )],
        service: vec![ServiceDescriptorProto {
            name: Some("Orders".to_owned()),
            method: vec![method("Place"), method("Cancel")],
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn billing() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(BILLING_FILE.to_owned()),
        package: Some("demo.billing".to_owned()),
        syntax: Some("proto2".to_owned()),
        dependency: vec![SHOP_FILE.to_owned()],
        message_type: vec![DescriptorProto {
            name: Some("Invoice".to_owned()),
            field: vec![field("order_id", 1, Type::Int64)],
            ..Default::default()
        }],
        extension: vec![extension(
            "invoiced",
            101,
            Type::Bool,
            ".demo.shop.Order",
        )],
        ..Default::default()
    }
}

pub fn pool() -> DescriptorPool {
    DescriptorPool::from_file_descriptor_set(FileDescriptorSet {
        file: vec![shop(), billing()],
    })
    .expect("fixture schema is valid")
}

pub fn shop_file() -> FileDescriptor {
    pool()
        .get_file_by_name(SHOP_FILE)
        .expect("shop file is registered")
}

pub fn order() -> MessageDescriptor {
    pool()
        .get_message_by_name("demo.shop.Order")
        .expect("Order is registered")
}

pub fn status() -> EnumDescriptor {
    pool()
        .get_enum_by_name("demo.shop.Status")
        .expect("Status is registered")
}

pub fn priority() -> ExtensionDescriptor {
    pool()
        .get_extension_by_name("demo.shop.priority")
        .expect("priority is registered")
}
