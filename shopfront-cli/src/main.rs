//! shopfront - read-only JSON API over the shop database
//!
//! Reads configuration from the environment (and a `.env` file if present),
//! connects to MySQL, and only then starts listening.

use anyhow::Result;
use clap::Parser;

mod serve;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "shopfront",
    author,
    version,
    about = "Read-only JSON API for services, locations and testimonials"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    serve: serve::ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the real environment still applies
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    serve::run_serve(cli.serve).await
}
