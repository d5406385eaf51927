use calm_io::stderrln;
use calm_io::stdout;
use clap::CommandFactory;
use miette::miette;
use miette::IntoDiagnostic;

use crate::cli;
use crate::cli::ConfigCommand;
use crate::cli::ConfigGenerateArgs;
use crate::config::Config;
use crate::copy_dir::FsCopier;
use crate::current_dir::current_dir_utf8;
use crate::download::DownloadOpts;
use crate::download::DownloadPlan;
use crate::error::Error;
use crate::fs;
use crate::git::Git;

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(self) -> miette::Result<()> {
        match &self.config.cli.command {
            Some(cli::Command::Completions { shell }) => {
                let mut clap_command = cli::Cli::command();
                clap_complete::generate(
                    *shell,
                    &mut clap_command,
                    "git-dir",
                    &mut std::io::stdout(),
                );
            }
            #[cfg(feature = "clap_mangen")]
            Some(cli::Command::Manpages { out_dir }) => {
                use miette::Context;
                let clap_command = cli::Cli::command();
                clap_mangen::generate_to(clap_command, out_dir)
                    .into_diagnostic()
                    .wrap_err("Failed to generate man pages")?;
            }
            Some(cli::Command::Config(ConfigCommand::Generate(args))) => {
                self.config_generate(args.to_owned())?
            }
            None => self.download()?,
        }

        Ok(())
    }

    fn download(&self) -> miette::Result<()> {
        let url = match self.config.cli.url() {
            Some(url) => url,
            None => {
                stderrln!("{}", cli::Cli::command().render_help()).into_diagnostic()?;
                return Err(Error::MissingArgument.into());
            }
        };

        let staging_dir = self.config.staging_dir();
        let plan = DownloadPlan::new(
            url,
            DownloadOpts {
                staging_dir: staging_dir.clone(),
                destination_parent: current_dir_utf8()?,
                dry_run: self.config.cli.dry_run,
            },
        )?;

        plan.execute(&Git::from_path(staging_dir), &FsCopier)
    }

    fn config_generate(&self, args: ConfigGenerateArgs) -> miette::Result<()> {
        let path = match &args.output {
            Some(path) => {
                if path == "-" {
                    stdout!("{}", Config::DEFAULT).into_diagnostic()?;
                    return Ok(());
                } else {
                    path
                }
            }
            None => &self.config.path,
        };

        if path.exists() {
            return Err(miette!("Configuration file already exists: {path}"));
        }

        tracing::info!(
            %path,
            "Writing default configuration file"
        );

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, Config::DEFAULT)?;

        Ok(())
    }
}
