mod actions;
mod app;
mod cli;
mod component;
mod config;
mod page;
mod tui;
mod utils;

use app::{App, RootState};
use clap::Parser;
use color_eyre::eyre::{Context, Result};
use dotenv::dotenv;
use page::form::Form;
use tracing::info;

#[cfg(not(tarpaulin_include))]
async fn run() -> Result<()> {
    use cli::ClapSource;

    let args = cli::Cli::parse();

    let config = crate::config::Config::new(Some(ClapSource::new(&args)))
        .context("Error when loading config")?;
    utils::logging::init(&config.config.data_dir).context("Error when setting up logging")?;
    info!(
        "Starting with config directory {}",
        config.config.config_dir.display()
    );
    let config = crate::trace_dbg!(config);

    let page = Box::new(Form::new(&config.picker));
    let tui = tui::Tui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate)
        .mouse(config.mouse);
    let mut app = App::new(RootState::new(Some(config)), page, tui);

    app.run().await?;
    Ok(())
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<()> {
    dotenv().ok();
    utils::errors::init()?;

    run().await
}
