use std::io::IsTerminal;

use miette::Context;
use miette::IntoDiagnostic;
use tracing_human_layer::HumanLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

/// Install a human-readable `tracing` subscriber writing to stderr, filtered by the given
/// directives (e.g. `info` or `git_dir=debug`).
pub fn install_tracing(filter_directives: &str) -> miette::Result<()> {
    let env_filter = EnvFilter::try_new(filter_directives)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse log filter: {filter_directives}"))?;

    let human_layer = HumanLayer::new()
        .with_output_writer(std::io::stderr())
        .with_color_output(std::io::stderr().is_terminal())
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(human_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install tracing subscriber")?;

    Ok(())
}
