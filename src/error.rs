use std::fmt::Display;

use camino::Utf8PathBuf;
use miette::Diagnostic;

/// An error downloading a directory.
///
/// Each stage of a download returns one of these; the caller decides how to present it.
#[derive(Debug, derive_more::Display)]
pub enum Error {
    /// The URL has fewer than five `/`-separated segments.
    #[display("Not a valid Git URL: {url}")]
    InvalidUrl { url: String, segments: usize },

    /// No URL was given on the command line.
    #[display("No URL given")]
    MissingArgument,

    /// The URL doesn't name a directory inside the repository.
    #[display("URL does not name a directory in the repository: {url}")]
    NoSubdirectory { url: String },

    /// `git clone` failed.
    #[display("Failed to clone {url}")]
    Clone {
        url: String,
        source: command_error::Error,
    },

    /// The requested directory doesn't exist in the cloned repository.
    #[display("Directory does not exist in the cloned repository: {path}")]
    MissingSource { path: Utf8PathBuf },

    /// Copying the directory out of the clone failed.
    #[display("Failed to copy {from} to {to}")]
    Copy {
        from: Utf8PathBuf,
        to: Utf8PathBuf,
        source: std::io::Error,
    },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Clone { source, .. } => Some(source),
            Error::Copy { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let code = match self {
            Error::InvalidUrl { .. } => "git_dir::invalid_url",
            Error::MissingArgument => "git_dir::missing_argument",
            Error::NoSubdirectory { .. } => "git_dir::no_subdirectory",
            Error::Clone { .. } => "git_dir::clone",
            Error::MissingSource { .. } => "git_dir::missing_source",
            Error::Copy { .. } => "git_dir::copy",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        match self {
            Error::InvalidUrl { segments, .. } => Some(Box::new(format!(
                "Expected a URL like `https://github.com/OWNER/REPO/tree/BRANCH/PATH`, but only \
                found {segments} `/`-separated segments"
            ))),
            Error::MissingArgument => Some(Box::new("Pass a URL with `--url`")),
            Error::NoSubdirectory { .. } => Some(Box::new(
                "The URL should end with `/tree/BRANCH/PATH` or `/tree/BRANCH`",
            )),
            Error::MissingSource { .. } => Some(Box::new(
                "The clone was left in place; check the branch and path in the URL",
            )),
            _ => None,
        }
    }
}
