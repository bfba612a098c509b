use prost_reflect::{DynamicMessage, ExtensionDescriptor, FieldDescriptor, Kind, Value};

use crate::{Fields, Seq};

// -----------------------------------------------------------------------------
// MessageField

/// A populated field of a [`DynamicMessage`]: either one of the fields
/// declared by its message type or an extension set on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageField {
    Field(FieldDescriptor),
    Extension(ExtensionDescriptor),
}

impl MessageField {
    /// Returns the short name of the field.
    pub fn name(&self) -> &str {
        match self {
            Self::Field(field) => field.name(),
            Self::Extension(extension) => extension.name(),
        }
    }

    /// Returns the full name, e.g. `google.protobuf.Timestamp.seconds` for a
    /// field or `demo.shop.priority` for an extension.
    pub fn full_name(&self) -> &str {
        match self {
            Self::Field(field) => field.full_name(),
            Self::Extension(extension) => extension.full_name(),
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            Self::Field(field) => field.number(),
            Self::Extension(extension) => extension.number(),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Field(field) => field.kind(),
            Self::Extension(extension) => extension.kind(),
        }
    }

    #[inline]
    pub fn is_extension(&self) -> bool {
        matches!(self, Self::Extension(_))
    }
}

impl From<FieldDescriptor> for MessageField {
    #[inline]
    fn from(field: FieldDescriptor) -> Self {
        Self::Field(field)
    }
}

impl From<ExtensionDescriptor> for MessageField {
    #[inline]
    fn from(extension: ExtensionDescriptor) -> Self {
        Self::Extension(extension)
    }
}

// -----------------------------------------------------------------------------
// Fields

/// Visits the populated fields of the message: the declared fields reported
/// by [`DynamicMessage::fields`], then the set extensions reported by
/// [`DynamicMessage::extensions`]. Unknown fields are not visited.
impl Fields for DynamicMessage {
    type Field = MessageField;
    type Value = Value;

    fn range_fields<'a>(&'a self, f: &mut dyn FnMut(MessageField, &'a Value) -> bool) {
        self.fields()
            .map(|(field, value)| (MessageField::Field(field), value))
            .chain(
                self.extensions()
                    .map(|(extension, value)| (MessageField::Extension(extension), value)),
            )
            .each(|(field, value)| f(field, value));
    }
}

// -----------------------------------------------------------------------------
// Tests
