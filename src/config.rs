use camino::Utf8PathBuf;
use clap::Parser;
use miette::Context;
use miette::IntoDiagnostic;
use serde::Deserialize;
use xdg::BaseDirectories;

use crate::cli::Cli;
use crate::fs;
use crate::install_tracing::install_tracing;

/// Configuration, both from the command-line and a user configuration file.
#[derive(Debug)]
pub struct Config {
    /// User configuration file.
    pub file: ConfigFile,
    /// User configuration file path.
    pub path: Utf8PathBuf,
    /// Command-line options.
    pub cli: Cli,
}

impl Config {
    /// The contents of the default configuration file.
    pub const DEFAULT: &str = include_str!("../config.toml");

    /// Where repositories are cloned if nothing else is configured.
    pub const DEFAULT_STAGING_DIR: &str = "/tmp";

    /// Parse command-line arguments, install tracing, and read the configuration file.
    pub fn new() -> miette::Result<Self> {
        let cli = Cli::parse();
        install_tracing(cli.log_filter())?;
        Self::from_cli(cli)
    }

    /// Read the configuration file for already-parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> miette::Result<Self> {
        const CONFIG_FILE_NAME: &str = "config.toml";
        let path = match &cli.config {
            Some(path) => path.join(CONFIG_FILE_NAME),
            None => {
                let dirs = BaseDirectories::with_prefix("git-dir").into_diagnostic()?;
                Utf8PathBuf::try_from(dirs.get_config_file(CONFIG_FILE_NAME))
                    .into_diagnostic()
                    .wrap_err("Configuration file path is not valid UTF-8")?
            }
        };
        let file = if path.exists() {
            toml::from_str(&fs::read_to_string(&path).wrap_err("Failed to read configuration file")?)
                .into_diagnostic()
                .wrap_err("Failed to deserialize configuration file")?
        } else {
            tracing::debug!(%path, "Configuration file not found, using defaults");
            ConfigFile::default()
        };
        Ok(Self { file, path, cli })
    }

    /// The directory to clone repositories into.
    ///
    /// The command-line takes precedence over the configuration file.
    pub fn staging_dir(&self) -> Utf8PathBuf {
        self.cli
            .staging_dir
            .clone()
            .unwrap_or_else(|| self.file.staging_dir())
    }
}

/// Configuration file format.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    staging_dir: Option<String>,
}

impl ConfigFile {
    pub fn staging_dir(&self) -> Utf8PathBuf {
        self.staging_dir
            .as_deref()
            .unwrap_or(Config::DEFAULT_STAGING_DIR)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config_file_parse() {
        assert_eq!(
            toml::from_str::<ConfigFile>(Config::DEFAULT).unwrap(),
            ConfigFile {
                staging_dir: Some("/tmp".to_owned()),
            }
        );
    }

    #[test]
    fn test_config_file_staging_dir_default() {
        assert_eq!(
            toml::from_str::<ConfigFile>("").unwrap().staging_dir(),
            Utf8PathBuf::from("/tmp")
        );
    }

    #[test]
    fn test_config_file_unknown_field() {
        toml::from_str::<ConfigFile>(indoc!(
            r#"
            staging_dir = "/var/tmp"
            stageing_dir = "/var/tmp"
            "#
        ))
        .unwrap_err();
    }

    #[test]
    fn test_staging_dir_precedence() {
        let config = Config {
            file: ConfigFile {
                staging_dir: Some("/var/tmp".to_owned()),
            },
            path: "config.toml".into(),
            cli: Cli::try_parse_from(["git-dir"]).unwrap(),
        };
        assert_eq!(config.staging_dir(), Utf8PathBuf::from("/var/tmp"));

        let config = Config {
            cli: Cli::try_parse_from(["git-dir", "--staging-dir", "/scratch"]).unwrap(),
            ..config
        };
        assert_eq!(config.staging_dir(), Utf8PathBuf::from("/scratch"));
    }
}
