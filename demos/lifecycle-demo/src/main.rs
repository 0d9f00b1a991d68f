//! Applies the introduced/removed version convention to a sample API and
//! prints the resulting version assignments as JSON.
//!
//! ```text
//! lifecycle-demo --start 1 --current 3 --pretty
//! RUST_LOG=verlife_core=debug lifecycle-demo
//! ```

mod cli;
mod report;
mod sample;

use clap::Parser;
use cli::Cli;
use report::Report;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verlife::IntroducedApiVersionConvention;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.versioning_config()?;
    tracing::info!(start = config.start, current = config.current, "using version window");

    let mut convention =
        IntroducedApiVersionConvention::with_range(config.range()?, cli.convention_builder());
    let mut controllers = sample::controllers();
    convention.apply_all(&mut controllers)?;

    let report = Report::new(convention.all_versions(), &controllers);
    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}
