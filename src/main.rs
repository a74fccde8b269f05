use clap::Parser;
use tracing_subscriber::EnvFilter;

mod batch;
mod cli;
mod core;
mod parsing;
mod table;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("spdi_list=debug,info")
    } else {
        EnvFilter::new("spdi_list=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    cli::convert::run(&cli)
}
