//! Like [`fs_err`], but the functions are instrumented with [`macro@tracing::instrument`] and return
//! [`miette::Result`] instead of [`std::io::Result`].

use std::fmt::Debug;
use std::path::Path;

use miette::IntoDiagnostic;
use tracing::instrument;

#[instrument(level = "trace")]
pub fn create_dir_all(path: impl AsRef<Path> + Debug) -> miette::Result<()> {
    fs_err::create_dir_all(path).into_diagnostic()
}

#[instrument(level = "trace")]
pub fn read_to_string(path: impl AsRef<Path> + Debug) -> miette::Result<String> {
    fs_err::read_to_string(path).into_diagnostic()
}

#[instrument(level = "trace", skip(contents))]
pub fn write(path: impl AsRef<Path> + Debug, contents: impl AsRef<[u8]>) -> miette::Result<()> {
    fs_err::write(path, contents).into_diagnostic()
}
