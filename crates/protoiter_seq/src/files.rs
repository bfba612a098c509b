use crate::Seq;

// -----------------------------------------------------------------------------
// Files

/// A registry of schema files that can be scanned with a callback.
///
/// Both scans call `f` for every matching file while it returns `true`.
/// If several files share a name, all of them are visited. The order is
/// defined by the implementor and may be unspecified.
pub trait Files {
    /// The file descriptor handle.
    type File;

    /// Calls `f` for every registered file until it returns `false`.
    fn range_files(&self, f: &mut dyn FnMut(Self::File) -> bool);

    /// Calls `f` for every file declared in the proto `package` until it
    /// returns `false`.
    fn range_files_by_package(&self, package: &str, f: &mut dyn FnMut(Self::File) -> bool);
}

// -----------------------------------------------------------------------------
// Adapters

/// Creates a sequence over every file of `files`.
///
/// Equivalent to calling [`Files::range_files`] with the consumer's callback.
#[inline]
pub const fn each_file<F: Files + ?Sized>(files: &F) -> EachFile<'_, F> {
    EachFile { files }
}

/// Creates a sequence over the files of `files` declared in `package`.
///
/// Equivalent to calling [`Files::range_files_by_package`] with the
/// consumer's callback.
#[inline]
pub const fn each_file_by_package<'a, F: Files + ?Sized>(
    files: &'a F,
    package: &'a str,
) -> EachFileByPackage<'a, F> {
    EachFileByPackage { files, package }
}

/// A [`Seq`] of all files of a [`Files`] registry, created by [`each_file`].
pub struct EachFile<'a, F: ?Sized> {
    files: &'a F,
}

impl<F: Files + ?Sized> Seq for EachFile<'_, F> {
    type Item = F::File;

    #[inline]
    fn each<Y>(self, mut f: Y)
    where
        Y: FnMut(F::File) -> bool,
    {
        self.files.range_files(&mut f);
    }
}

/// A [`Seq`] of the files of one package, created by [`each_file_by_package`].
pub struct EachFileByPackage<'a, F: ?Sized> {
    files: &'a F,
    package: &'a str,
}

impl<F: Files + ?Sized> Seq for EachFileByPackage<'_, F> {
    type Item = F::File;

    #[inline]
    fn each<Y>(self, mut f: Y)
    where
        Y: FnMut(F::File) -> bool,
    {
        self.files.range_files_by_package(self.package, &mut f);
    }
}

impl<F: ?Sized> Clone for EachFile<'_, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for EachFile<'_, F> {}

impl<F: ?Sized> Clone for EachFileByPackage<'_, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for EachFileByPackage<'_, F> {}

// -----------------------------------------------------------------------------
// Tests
