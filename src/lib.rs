//! `git-dir` downloads a single directory from a remote Git repository.
//!
//! The `git-dir` Rust library is a convenience for the binary and its tests, not a stable API.

mod app;
mod cli;
mod config;
mod copy_dir;
mod current_dir;
mod download;
mod error;
mod format_bulleted_list;
pub mod fs;
mod git;
mod git_url;
mod install_tracing;
mod path_display;

pub use app::App;
pub use cli::Cli;
pub use config::Config;
pub use copy_dir::copy_dir;
pub use copy_dir::CopyTree;
pub use copy_dir::FsCopier;
pub use download::DownloadOpts;
pub use download::DownloadPlan;
pub use error::Error;
pub use format_bulleted_list::format_bulleted_list;
pub use git::repository_url_destination;
pub use git::CloneRepository;
pub use git::Git;
pub use git_url::GitDirUrl;
pub use path_display::PathDisplay;
