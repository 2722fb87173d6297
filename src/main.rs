use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use reel::config::{Config, FeedSource};
use reel::feed::{FeedFetcher, FeedLoader, FixtureFetcher, RemoteFetcher, ViewState};
use reel::util::truncate_to_width;

const CAPTION_WIDTH: usize = 60;

/// Get the config file path (~/.config/reel/config.toml)
fn get_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("reel")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "reel", about = "Terminal client for cursor-paginated short-video feeds")]
struct Args {
    /// Read the feed from a local JSON fixture file
    #[arg(long, value_name = "FILE", conflicts_with = "endpoint")]
    fixture: Option<PathBuf>,

    /// Fetch the feed from an HTTP endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Items requested per page (overrides config)
    #[arg(long, value_name = "N")]
    limit: Option<u32>,

    /// Stop after this many pages (0 = walk the whole feed)
    #[arg(long, value_name = "N", default_value_t = 0)]
    max_pages: u32,

    /// Use an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Construct the one concrete fetcher this run will use. The loader never
/// learns which one it got.
fn build_fetcher(args: &Args, config: &Config) -> Result<Arc<dyn FeedFetcher>> {
    // A flag decides outright; otherwise fall back to the configured source.
    if let Some(path) = &args.fixture {
        return Ok(Arc::new(FixtureFetcher::new(path)));
    }
    if let Some(endpoint) = &args.endpoint {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", endpoint))?;
        let fetcher = RemoteFetcher::new(reqwest::Client::new(), endpoint)
            .with_timeout(Duration::from_secs(config.request_timeout_secs));
        return Ok(Arc::new(fetcher));
    }

    match config.source {
        FeedSource::Fixture => {
            let fetcher = FixtureFetcher::new(&config.fixture_path)
                .with_delay(Duration::from_millis(config.simulated_delay_ms));
            Ok(Arc::new(fetcher))
        }
        FeedSource::Remote => {
            let endpoint = Url::parse(&config.endpoint)
                .with_context(|| format!("Invalid endpoint URL in config: {}", config.endpoint))?;
            let fetcher = RemoteFetcher::new(reqwest::Client::new(), endpoint)
                .with_timeout(Duration::from_secs(config.request_timeout_secs));
            Ok(Arc::new(fetcher))
        }
    }
}

/// Print whatever arrived since the last call. Returns how many items have
/// been printed in total, or `None` when the state is terminal for the walk.
fn render(state: &ViewState, already_printed: usize) -> Option<usize> {
    match state {
        ViewState::Loading => Some(already_printed),
        ViewState::Ready(items) => {
            for (index, item) in items.iter().enumerate().skip(already_printed) {
                println!(
                    "{:>3}  @{:<20}  {:<width$}  {} likes, {} comments",
                    index + 1,
                    item.creator_name,
                    truncate_to_width(&item.caption, CAPTION_WIDTH),
                    item.like_count,
                    item.comment_count,
                    width = CAPTION_WIDTH,
                );
            }
            Some(items.len())
        }
        ViewState::Empty => {
            println!("The feed is empty.");
            Some(0)
        }
        ViewState::Error(notice) => {
            eprintln!("{}", notice.header);
            eprintln!("{}", notice.description);
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_path()?,
    };
    let config = Config::load(&config_path).context("Failed to load configuration")?;

    let fetcher = build_fetcher(&args, &config)?;
    let page_limit = args.limit.unwrap_or(config.page_limit);
    let mut loader = FeedLoader::with_page_limit(fetcher, page_limit);

    // Walk the feed the way a reader scrolling to the end would: first page,
    // then load-more until the cursor runs out or the page cap is hit.
    loader.load().await;
    let mut printed = match render(loader.state(), 0) {
        Some(count) => count,
        None => std::process::exit(1),
    };

    let mut pages = 1;
    while loader.next_page_available() && (args.max_pages == 0 || pages < args.max_pages) {
        loader.load_more().await;
        printed = match render(loader.state(), printed) {
            Some(count) => count,
            None => std::process::exit(1),
        };
        pages += 1;
    }

    tracing::debug!(items = printed, pages = pages, "Feed walk complete");
    Ok(())
}
