use std::fmt::Display;

use camino::Utf8PathBuf;
use command_error::Utf8ProgramAndArgs;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use tracing::instrument;

use crate::copy_dir::CopyTree;
use crate::error::Error;
use crate::format_bulleted_list::format_bulleted_list;
use crate::fs;
use crate::git::CloneRepository;
use crate::git::Git;
use crate::git_url::GitDirUrl;
use crate::PathDisplay;

/// Options for a [`DownloadPlan`].
#[derive(Debug, Clone)]
pub struct DownloadOpts {
    /// The directory to clone the repository into.
    pub staging_dir: Utf8PathBuf,
    /// The directory to copy the subdirectory into.
    pub destination_parent: Utf8PathBuf,
    /// Log what would happen instead of cloning and copying.
    pub dry_run: bool,
}

/// A plan to download one directory from a remote repository.
#[derive(Debug)]
pub struct DownloadPlan {
    url: GitDirUrl,
    /// The directory to clone the repository into.
    staging_dir: Utf8PathBuf,
    /// The requested directory, inside the clone.
    source: Utf8PathBuf,
    /// Where the requested directory is copied to.
    destination: Utf8PathBuf,
    dry_run: bool,
}

impl Display for DownloadPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Downloading {} from {} to {}",
            self.url.subdir_path().unwrap_or_default(),
            self.url.clone_url(),
            self.destination.display_path_cwd(),
        )
    }
}

impl DownloadPlan {
    pub fn new(input: &str, opts: DownloadOpts) -> Result<Self, Error> {
        let url = GitDirUrl::parse(input)?;

        tracing::debug!(
            clone_url = url.clone_url(),
            branch = url.branch(),
            subdir_path = url.subdir_path(),
            "Parsed URL"
        );

        let (subdir_path, dir_name) = match (url.subdir_path(), url.dir_name()) {
            (Some(subdir_path), Some(dir_name)) => (subdir_path, dir_name),
            _ => {
                return Err(Error::NoSubdirectory {
                    url: input.to_owned(),
                });
            }
        };

        // The subdirectory path starts with a `/`, so this can't be a `join`.
        let source = Utf8PathBuf::from(format!(
            "{}{subdir_path}",
            opts.staging_dir.join(url.repo_name())
        ));
        // A bare branch or a trailing `/` copies the contents into the destination parent.
        let destination = if dir_name.is_empty() {
            opts.destination_parent
        } else {
            opts.destination_parent.join(dir_name)
        };

        Ok(Self {
            staging_dir: opts.staging_dir,
            source,
            destination,
            dry_run: opts.dry_run,
            url,
        })
    }

    pub fn url(&self) -> &GitDirUrl {
        &self.url
    }

    pub fn source(&self) -> &Utf8PathBuf {
        &self.source
    }

    pub fn destination(&self) -> &Utf8PathBuf {
        &self.destination
    }

    /// Clone the repository and copy the requested directory out of it.
    ///
    /// The copy only starts after the clone succeeds. The clone is left in place either way.
    #[instrument(level = "trace", skip(cloner, copier))]
    pub fn execute(
        &self,
        cloner: &impl CloneRepository,
        copier: &impl CopyTree,
    ) -> miette::Result<()> {
        tracing::info!("{self}");

        if self.dry_run {
            let command = Git::from_path(&self.staging_dir).clone_command(self.url.clone_url());
            tracing::info!(
                "Dry run; would:\n{}",
                format_bulleted_list([
                    format!(
                        "{} {}",
                        '$'.if_supports_color(Stream::Stderr, |text| text.green()),
                        Utf8ProgramAndArgs::from(&command),
                    ),
                    format!(
                        "Copy {} to {}",
                        self.source.display_path_cwd(),
                        self.destination.display_path_cwd()
                    ),
                ])
            );
            return Ok(());
        }

        fs::create_dir_all(&self.staging_dir)?;

        let checkout = cloner.clone_repository(self.url.clone_url(), &self.staging_dir)?;
        tracing::info!("Cloned repository to {}", checkout.display_path_cwd());

        copier.copy_tree(&self.source, &self.destination)?;
        tracing::info!("Copied {}", self.destination.display_path_cwd());

        Ok(())
    }
}
