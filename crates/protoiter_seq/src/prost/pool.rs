use prost_reflect::{
    DescriptorPool, EnumDescriptor, ExtensionDescriptor, FileDescriptor, MessageDescriptor,
};

use crate::{Files, Seq, Types};

// -----------------------------------------------------------------------------
// Files

/// Files are visited in the order they were added to the pool.
impl Files for DescriptorPool {
    type File = FileDescriptor;

    fn range_files(&self, f: &mut dyn FnMut(FileDescriptor) -> bool) {
        self.files().each(f);
    }

    /// Only files whose package is exactly `package` are visited; files of
    /// nested packages are not.
    fn range_files_by_package(&self, package: &str, f: &mut dyn FnMut(FileDescriptor) -> bool) {
        self.files()
            .filter(|file| file.package_name() == package)
            .each(f);
    }
}

// -----------------------------------------------------------------------------
// Types

impl Types for DescriptorPool {
    type Enum = EnumDescriptor;
    type Message = MessageDescriptor;
    type Extension = ExtensionDescriptor;

    fn range_enums(&self, f: &mut dyn FnMut(EnumDescriptor) -> bool) {
        self.all_enums().each(f);
    }

    fn range_messages(&self, f: &mut dyn FnMut(MessageDescriptor) -> bool) {
        self.all_messages().each(f);
    }

    fn range_extensions(&self, f: &mut dyn FnMut(ExtensionDescriptor) -> bool) {
        self.all_extensions().each(f);
    }

    /// `message` is a full name, with or without the leading `.`.
    fn range_extensions_by_message(
        &self,
        message: &str,
        f: &mut dyn FnMut(ExtensionDescriptor) -> bool,
    ) {
        let name = message.strip_prefix('.').unwrap_or(message);
        match self.get_message_by_name(name) {
            Some(descriptor) => descriptor.extensions().each(f),
            None => log::debug!("message `{name}` is not in the pool, no extensions to range"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
