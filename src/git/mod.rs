use std::fmt::Debug;
use std::process::Command;

use camino::Utf8Path;
use camino::Utf8PathBuf;
use command_error::CommandExt;
use tracing::instrument;

mod repository_url_destination;

pub use repository_url_destination::repository_url_destination;

use crate::error::Error;

/// Something that can clone a remote repository.
pub trait CloneRepository {
    /// Clone the repository at `url` into a new directory in `destination_parent`, returning
    /// the path of the new checkout.
    fn clone_repository(&self, url: &str, destination_parent: &Utf8Path)
        -> Result<Utf8PathBuf, Error>;
}

/// `git` CLI wrapper.
#[derive(Clone)]
pub struct Git<C> {
    current_dir: C,
}

impl<C> Debug for Git<C>
where
    C: AsRef<Utf8Path>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Git")
            .field(&self.current_dir.as_ref())
            .finish()
    }
}

impl<C> Git<C>
where
    C: AsRef<Utf8Path>,
{
    pub fn from_path(current_dir: C) -> Self {
        Self { current_dir }
    }

    /// Get a `git` command.
    pub fn command(&self) -> Command {
        let mut command = Command::new("git");
        command.current_dir(self.current_dir.as_ref());
        command
    }

    pub fn with_current_dir<C2>(&self, path: C2) -> Git<C2> {
        Git { current_dir: path }
    }

    /// `git clone <repository>`, run in the current directory.
    pub fn clone_command(&self, repository: &str) -> Command {
        let mut command = self.command();
        command.arg("clone").arg(repository);
        command
    }
}

impl<C> CloneRepository for Git<C>
where
    C: AsRef<Utf8Path>,
{
    #[instrument(level = "trace")]
    fn clone_repository(
        &self,
        url: &str,
        destination_parent: &Utf8Path,
    ) -> Result<Utf8PathBuf, Error> {
        self.with_current_dir(destination_parent)
            .clone_command(url)
            .status_checked()
            .map_err(|source| Error::Clone {
                url: url.to_owned(),
                source,
            })?;
        Ok(destination_parent.join(repository_url_destination(url)))
    }
}
