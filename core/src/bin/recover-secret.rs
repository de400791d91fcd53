use clap::Parser;
use polysecret_core::config::RecoveryConfig;
use polysecret_core::ShareDocument;

fn install_tracing() -> eyre::Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{
        fmt::{self},
        EnvFilter,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

fn main() -> eyre::Result<()> {
    install_tracing()?;
    let config = RecoveryConfig::parse();
    tracing::info!(
        "{} {} reading {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.input.display()
    );

    let document = ShareDocument::from_path(&config.input)?;
    let threshold = document.threshold();
    tracing::info!(
        n = threshold.total(),
        k = threshold.required(),
        "loaded share document"
    );

    let secret = document.recover()?;
    println!("The secret constant C is: {secret}");
    Ok(())
}
