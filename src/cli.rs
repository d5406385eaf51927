use camino::Utf8PathBuf;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

const EXAMPLES: &str = "\
Examples:
  Download a remote directory from a Git URL:
  $ git-dir --url https://github.com/exampleorg/example-repo/tree/master/dir1/dir2/dir3
";

/// Download a single directory from a remote Git repository.
///
/// The whole repository is cloned into a staging directory, and then the requested directory is
/// copied into the current directory.
#[derive(Debug, Clone, Parser)]
#[command(version, author, about)]
#[command(max_term_width = 100, disable_help_subcommand = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Git URL pointing to the remote directory, like
    /// `https://github.com/OWNER/REPO/tree/BRANCH/PATH`.
    #[arg(short, long = "url", value_name = "URL", conflicts_with = "url_positional")]
    pub url: Option<String>,

    /// Git URL pointing to the remote directory. Same as `--url`.
    #[arg(value_name = "URL", hide = true)]
    pub url_positional: Option<String>,

    /// Enables verbose mode.
    ///
    /// This only changes the default log filter to `debug`.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter directives, of the form `target[span{field=value}]=level`, where all components
    /// except the level are optional.
    ///
    /// Try `debug` or `trace`. Defaults to `info`.
    #[arg(long, env = "GIT_DIR_LOG")]
    pub log: Option<String>,

    /// Directory to clone repositories into before copying the requested directory out.
    ///
    /// Defaults to `/tmp`, or the `staging_dir` setting in the configuration file.
    #[arg(long, env = "GIT_DIR_STAGING_DIR")]
    pub staging_dir: Option<Utf8PathBuf>,

    /// Don't clone or copy anything; just print what would be done.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Directory to read `config.toml` from, instead of `~/.config/git-dir/`.
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The URL to download, from `--url` or the positional argument.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().or(self.url_positional.as_deref())
    }

    /// The log filter directives to install.
    pub fn log_filter(&self) -> &str {
        match &self.log {
            Some(log) => log,
            None if self.verbose => "debug",
            None => "info",
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: clap_complete::shells::Shell,
    },
    /// Generate man pages.
    #[cfg(feature = "clap_mangen")]
    Manpages {
        /// Directory to write man pages to.
        out_dir: Utf8PathBuf,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Write the default configuration to `~/.config/git-dir/config.toml`.
    Generate(ConfigGenerateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ConfigGenerateArgs {
    /// The path to write the configuration to. `-` for stdout.
    ///
    /// Defaults to `~/.config/git-dir/config.toml`.
    pub output: Option<Utf8PathBuf>,
}
