use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use media_fetch::config::DEFAULT_BASE_URL;
use media_fetch::{CatalogEngine, FetchService, Route, ServiceConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Target {
    Shows,
    Movies,
    Webcomics,
    All,
}

/// Fetch collections from the media catalog backend and print them as JSON.
#[derive(Debug, Parser)]
#[command(name = "media-fetch", version)]
struct Cli {
    /// Backend root URL; route paths are appended as-is.
    #[arg(long, env = "MEDIA_FETCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(value_enum, default_value_t = Target::All)]
    target: Target,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service = FetchService::new(ServiceConfig::new(cli.base_url));

    let route = match cli.target {
        Target::Shows => Route::Shows,
        Target::Movies => Route::Movies,
        Target::Webcomics => Route::Webcomics,
        Target::All => {
            let engine = CatalogEngine::new(service);
            let snapshot = engine.load_all().await.context("loading catalog")?;
            tracing::info!(fetch_time = %snapshot.fetch_time, "catalog loaded");
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            return Ok(());
        }
    };

    let body = match route {
        Route::Shows => service.get_show().await,
        Route::Movies => service.get_movie().await,
        Route::Webcomics => service.get_webcomic().await,
    }
    .with_context(|| format!("fetching {}", route.path()))?;

    tracing::info!(fetch_time = %service.last_fetch_time(), "fetched {}", route.path());
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
