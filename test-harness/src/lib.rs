use std::ffi::OsString;
use std::process::Command;
use std::process::Output;

use camino::Utf8PathBuf;
use clonable_command::Command as ClonableCommand;
use command_error::CommandExt;
use fs_err as fs;
use itertools::Itertools;
use miette::Context;
use miette::IntoDiagnostic;
use tempfile::TempDir;

mod dir_state;

pub use dir_state::DirState;

/// The host that remote repositories are served from in tests.
///
/// `git` is configured to rewrite URLs on this host to local paths under `remotes/`.
pub const REMOTE_HOST: &str = "https://git.example.com/";

/// `git-dir` session for integration testing.
///
/// Each session has its own temporary home directory, `.gitconfig`, staging directory
/// (`staging/`), and working directory (`work/`) that downloads land in.
pub struct GitDir {
    command: ClonableCommand,
    #[allow(dead_code)]
    tempdir: TempDir,
    root: Utf8PathBuf,
    git_dir: OsString,
    git_dir_args: Vec<String>,
}

impl GitDir {
    pub fn new() -> miette::Result<Self> {
        let tempdir = tempfile::tempdir().into_diagnostic()?;
        let root = Utf8PathBuf::try_from(tempdir.path().to_owned()).into_diagnostic()?;

        let gitconfig = root.join(".gitconfig");
        fs::write(
            &gitconfig,
            format!(
                "[user]\n\
                name = Puppy Doggy\n\
                email = dog@becca.ooo\n\
                \n\
                [init]\n\
                defaultBranch = main\n\
                \n\
                [url \"{root}/remotes/\"]\n\
                insteadOf = {REMOTE_HOST}\n\
                "
            ),
        )
        .into_diagnostic()?;

        fs::create_dir_all(root.join("work")).into_diagnostic()?;

        let git_dir = test_bin::get_test_bin("git-dir").get_program().to_owned();

        let log_filters = ["debug", "git_dir=trace"].into_iter().join(",");

        let git_dir_args = vec!["--log".to_owned(), log_filters];

        let command = ClonableCommand::new("")
            .envs([
                // > Whether to skip reading settings from the system-wide $(prefix)/etc/gitconfig file.
                ("GIT_CONFIG_NOSYSTEM", "1"),
                ("GIT_CONFIG_GLOBAL", gitconfig.as_str()),
                ("GIT_AUTHOR_DATE", "2019-07-06T18:25:00-0700"),
                ("GIT_COMMITTER_DATE", "2019-07-06T18:25:00-0700"),
                ("GIT_TERMINAL_PROMPT", "0"),
                ("HOME", root.as_str()),
                ("XDG_CONFIG_HOME", root.join(".config").as_str()),
                ("GIT_DIR_STAGING_DIR", root.join("staging").as_str()),
            ])
            .current_dir(root.join("work"));

        Ok(Self {
            git_dir,
            git_dir_args,
            command,
            tempdir,
            root,
        })
    }

    fn any_command(&self, program: &str) -> Command {
        let mut command = self.command.clone();
        command.name = program.into();
        command.to_std()
    }

    /// A `git-dir` command, run in `work/`.
    pub fn cmd(&self) -> Command {
        let mut command = self.command.clone();
        command.name = self.git_dir.clone();
        command = command.args(&self.git_dir_args);
        command.to_std()
    }

    /// Run a `git-dir` command which should fail, returning its output.
    #[track_caller]
    pub fn output_failure(&self, args: &[&str]) -> Output {
        let output = self
            .cmd()
            .args(args)
            .output()
            .expect("`git-dir` should be runnable");
        if output.status.success() {
            panic!(
                "`git-dir {}` succeeded, but should have failed:\n{}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        output
    }

    pub fn path(&self, tail: &str) -> Utf8PathBuf {
        self.root.join(tail)
    }

    pub fn sh(&self, script: &str) -> miette::Result<()> {
        let tempfile = tempfile::NamedTempFile::new().into_diagnostic()?;
        fs::write(
            &tempfile,
            format!(
                "set -ex\n\
                {script}"
            ),
        )
        .into_diagnostic()?;
        self.any_command("bash")
            .arg("--norc")
            .arg(tempfile.as_ref())
            .current_dir(&self.root)
            .status_checked()
            .into_diagnostic()?;
        Ok(())
    }

    /// Set up a repository served at `https://git.example.com/puppy/{name}`, with a single
    /// commit on `main` containing:
    ///
    /// - `README.md`
    /// - `docs/guide/intro.md`
    /// - `docs/guide/advanced/tips.md`
    /// - `src/main.rs`
    pub fn setup_remote(&self, name: &str) -> miette::Result<Utf8PathBuf> {
        let path = self.path(&format!("remotes/puppy/{name}.git"));
        let path_quoted = shell_words::quote(path.as_str());
        self.sh(&format!(
            r##"
            mkdir -p {path_quoted}
            cd {path_quoted} || exit
            git init
            echo "puppy doggy" > README.md
            mkdir -p docs/guide/advanced src
            echo "# Introduction" > docs/guide/intro.md
            echo "Sit. Stay." > docs/guide/advanced/tips.md
            echo 'fn main() {{}}' > src/main.rs
            git add .
            git commit -m "Initial commit"
            "##
        ))
        .wrap_err_with(|| format!("Failed to set up remote repository {name}"))?;
        Ok(path)
    }

    /// The URL of a directory in a repository created with [`Self::setup_remote`].
    pub fn remote_url(&self, name: &str, branch: &str, path: &str) -> String {
        format!("{REMOTE_HOST}puppy/{name}/tree/{branch}/{path}")
    }

    pub fn write_config(&self, contents: &str) -> miette::Result<()> {
        fs::create_dir_all(self.path(".config/git-dir")).into_diagnostic()?;
        fs::write(self.path(".config/git-dir/config.toml"), contents)
            .into_diagnostic()
            .wrap_err("Failed to write `git-dir` configuration")?;
        Ok(())
    }

    /// Construct a directory state which a real directory can be checked against.
    pub fn dir_state(&self, root: &str) -> DirState {
        DirState::new(self.path(root))
    }
}
