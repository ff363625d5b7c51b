use std::io;

use anyhow::Context;
use burger_kiosk::config::Config;
use burger_kiosk::kiosk::{load_logo, KioskSession, TerminalController};
use burger_kiosk::menu::MenuCatalog;
use burger_kiosk::orders::OrderGenerator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing; stdout belongs to the kiosk screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.app.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting burger kiosk");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Tax rate: {}", config.kiosk.tax_rate);

    let pricing = config.kiosk.pricing()?;
    let mut session = KioskSession::new(
        MenuCatalog::standard()?,
        pricing,
        OrderGenerator::from_entropy(),
    );

    let logo = load_logo(&config.kiosk.logo_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = TerminalController::new(stdin.lock(), stdout.lock()).with_logo(logo);
    terminal.run(&mut session)?;

    tracing::info!("Kiosk closed");
    Ok(())
}
