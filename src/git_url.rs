use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// A URL naming a directory in a remote repository, like
/// `https://github.com/OWNER/REPO/tree/BRANCH/PATH`.
///
/// The first five `/`-separated segments name the repository. The segment after `tree` names
/// the branch, and everything after the branch is the directory path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitDirUrl {
    clone_url: String,
    repo_name: String,
    branch: Option<String>,
    subdir_path: Option<String>,
}

impl GitDirUrl {
    /// The number of `/`-separated segments that name the repository itself, including the
    /// empty segment between `scheme:` and the host.
    const REPOSITORY_SEGMENTS: usize = 5;

    pub fn parse(url: &str) -> Result<Self, Error> {
        let segments = url.split('/').collect::<Vec<_>>();

        if segments.len() < Self::REPOSITORY_SEGMENTS {
            return Err(Error::InvalidUrl {
                url: url.to_owned(),
                segments: segments.len(),
            });
        }

        let clone_url = format!("{}.git", segments[..Self::REPOSITORY_SEGMENTS].join("/"));
        let repo_name = segments[Self::REPOSITORY_SEGMENTS - 1].to_owned();

        // Segment 5 should be `tree`, but it isn't checked.
        let (branch, subdir_path) = match segments.get(Self::REPOSITORY_SEGMENTS + 1) {
            Some(branch) => {
                // NOTE: This is the text after the _first_ occurrence of the branch name, which
                // may be in the owner or repository name instead.
                let subdir_path = url
                    .split_once(*branch)
                    .map_or("", |(_before, after)| after);
                (Some((*branch).to_owned()), Some(subdir_path.to_owned()))
            }
            None => (None, None),
        };

        Ok(Self {
            clone_url,
            repo_name,
            branch,
            subdir_path,
        })
    }

    /// The URL to clone the repository from, ending in `.git`.
    pub fn clone_url(&self) -> &str {
        &self.clone_url
    }

    /// The repository name, which is also the directory `git clone` checks it out into.
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// The path of the directory within the repository, with a leading `/`.
    pub fn subdir_path(&self) -> Option<&str> {
        self.subdir_path.as_deref()
    }

    /// The name of the directory to copy the subdirectory into: the text after the last `/` in
    /// the subdirectory path.
    ///
    /// `None` if there's no subdirectory path. Empty if the path is empty or ends with `/`.
    pub fn dir_name(&self) -> Option<&str> {
        let subdir_path = self.subdir_path()?;
        Some(
            subdir_path
                .rsplit_once('/')
                .map_or(subdir_path, |(_before, after)| after),
        )
    }
}

impl FromStr for GitDirUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for GitDirUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clone_url)?;
        if let Some(branch) = &self.branch {
            write!(f, " ({branch})")?;
        }
        if let Some(subdir_path) = &self.subdir_path {
            write!(f, " {subdir_path}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_tree_url() {
        let url = GitDirUrl::parse("https://github.com/owner/repo/tree/main/sub/dir").unwrap();
        assert_eq!(url.clone_url(), "https://github.com/owner/repo.git");
        assert_eq!(url.repo_name(), "repo");
        assert_eq!(url.branch(), Some("main"));
        assert_eq!(url.subdir_path(), Some("/sub/dir"));
        assert_eq!(url.dir_name(), Some("dir"));
    }

    #[test]
    fn test_parse_repository_url() {
        let url = GitDirUrl::parse("https://github.com/owner/repo").unwrap();
        assert_eq!(url.clone_url(), "https://github.com/owner/repo.git");
        assert_eq!(url.repo_name(), "repo");
        assert_eq!(url.branch(), None);
        assert_eq!(url.subdir_path(), None);
        assert_eq!(url.dir_name(), None);
    }

    #[test]
    fn test_parse_too_few_segments() {
        for url in ["", "puppy", "https://github.com", "https://github.com/owner"] {
            match GitDirUrl::parse(url) {
                Err(Error::InvalidUrl { url: actual, .. }) => assert_eq!(actual, url),
                other => panic!("Expected an invalid URL error for {url:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_counts_segments() {
        match GitDirUrl::parse("https://github.com/owner") {
            Err(Error::InvalidUrl { segments, .. }) => assert_eq!(segments, 4),
            other => panic!("Expected an invalid URL error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        let url = "https://github.com/exampleorg/example-repo/tree/master/dir1/dir2/dir3";
        assert_eq!(GitDirUrl::parse(url).unwrap(), GitDirUrl::parse(url).unwrap());
    }

    #[test]
    fn test_parse_tree_without_branch() {
        // Six segments: `tree` but no branch after it.
        let url = GitDirUrl::parse("https://github.com/owner/repo/tree").unwrap();
        assert_eq!(url.clone_url(), "https://github.com/owner/repo.git");
        assert_eq!(url.branch(), None);
        assert_eq!(url.subdir_path(), None);
    }

    #[test]
    fn test_parse_branch_without_path() {
        let url = GitDirUrl::parse("https://github.com/owner/repo/tree/main").unwrap();
        assert_eq!(url.branch(), Some("main"));
        assert_eq!(url.subdir_path(), Some(""));
        assert_eq!(url.dir_name(), Some(""));
    }

    #[test]
    fn test_parse_trailing_slash() {
        let url = GitDirUrl::parse("https://github.com/owner/repo/tree/main/sub/dir/").unwrap();
        assert_eq!(url.subdir_path(), Some("/sub/dir/"));
        assert_eq!(url.dir_name(), Some(""));
    }

    #[test]
    fn test_parse_blob_url() {
        // The marker segment isn't checked.
        let url = GitDirUrl::parse("https://github.com/owner/repo/blob/main/README.md").unwrap();
        assert_eq!(url.branch(), Some("main"));
        assert_eq!(url.subdir_path(), Some("/README.md"));
        assert_eq!(url.dir_name(), Some("README.md"));
    }

    #[test]
    fn test_parse_no_percent_decoding() {
        let url = GitDirUrl::parse("https://github.com/owner/repo/tree/main/my%20dir").unwrap();
        assert_eq!(url.subdir_path(), Some("/my%20dir"));
        assert_eq!(url.dir_name(), Some("my%20dir"));
    }

    /// Known limitation: the subdirectory path starts after the _first_ occurrence of the branch
    /// name, so a branch name which also appears earlier in the URL gives the wrong path.
    #[test]
    fn test_parse_branch_name_collision() {
        let url = GitDirUrl::parse("https://github.com/maintainer/repo/tree/main/sub/dir").unwrap();
        assert_eq!(url.branch(), Some("main"));
        assert_eq!(url.subdir_path(), Some("tainer/repo/tree/main/sub/dir"));
        assert_eq!(url.dir_name(), Some("dir"));
    }

    #[test]
    fn test_from_str() {
        let url: GitDirUrl = "https://github.com/a/b/tree/main/x/y".parse().unwrap();
        assert_eq!(url.clone_url(), "https://github.com/a/b.git");
        assert_eq!(url.dir_name(), Some("y"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GitDirUrl::parse("https://github.com/a/b/tree/main/x/y")
                .unwrap()
                .to_string(),
            "https://github.com/a/b.git (main) /x/y"
        );
        assert_eq!(
            GitDirUrl::parse("https://github.com/a/b")
                .unwrap()
                .to_string(),
            "https://github.com/a/b.git"
        );
    }
}
