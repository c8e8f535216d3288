use anyhow::{Context, Result};
use blogshell::{Config, generate_blog_page};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let config = Config::parse();

    let filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    config.validate().context("Invalid configuration")?;

    let index_path = generate_blog_page(&config).context("Failed to generate blog page")?;
    println!("Generated: {}", index_path.display());

    if !config.no_open {
        if let Err(e) = open::that(&index_path) {
            tracing::warn!("Failed to open browser: {:#}", e);
        }
    }

    Ok(())
}
