use std::time::Duration;

use clap::Parser;
use color_eyre::{Result, eyre::eyre};
use log::info;
use marble_client::{
    ApiClient, Config,
    worlds::{self, PollOptions},
};

/// Generate a World Labs world from a text prompt.
#[derive(Debug, Parser)]
struct Cli {
    /// Text prompt describing the world to generate
    prompt: String,

    /// API key; falls back to the WLT_API_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL of the Marble API
    #[arg(long, default_value = marble_client::API_BASE_URL)]
    base_url: String,

    /// Seconds between status polls
    #[arg(long, default_value_t = 5)]
    interval: u64,

    /// Seconds to wait for the operation before giving up
    #[arg(long, default_value_t = 600)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let api_key = match cli.api_key {
        Some(key) => key,
        None => std::env::var("WLT_API_KEY")
            .map_err(|_| eyre!("Set WLT_API_KEY in the environment or pass --api-key"))?,
    };

    let client = ApiClient::new(Config {
        base_url: cli.base_url,
        api_key,
    });

    info!("Generating world from prompt: {:?}", cli.prompt);
    let operation_id = worlds::generate_world(&client, &cli.prompt).await?;
    info!("Operation submitted: {operation_id}");

    let options = PollOptions {
        interval: Duration::from_secs(cli.interval),
        timeout: Duration::from_secs(cli.timeout),
    };
    let operation = worlds::poll_until_done(&client, &operation_id, options).await?;

    let world = worlds::fetch_world(&client, operation.world_id()?).await?;
    println!("{}", serde_json::to_string_pretty(&world)?);

    Ok(())
}
