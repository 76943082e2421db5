// Entrypoint for the CLI.
// - Keeps `main` small: resolve the configuration and hand it to the pipeline.
// - A failed run prints its error and still exits normally.

use contrib_chart::{app, cli::Cli, config::Config};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Cli::parse_args());
    tracing::debug!(?config, "starting");

    let result = {
        let mut out = std::io::stdout().lock();
        app::run(&config, &mut out)
    };
    if let Err(e) = result {
        println!("{:#}", e);
    }
    Ok(())
}
