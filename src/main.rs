use crate::config::Config;
use crate::error::Result;
use crate::services::{rendering, ScrapingService};
use tracing::info;

mod config;
mod domain;
mod error;
mod scrapers;
mod services;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::new()?;
    init_tracing(&config.args.log_level);

    let scraping = ScrapingService::new(config.http_client.clone());
    let report = scraping.scrape_all(config.target_date).await?;

    print!("{}", rendering::render_report(&report, config.target_date));

    info!("Menu lookup completed successfully!");
    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = log_level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}
