//! neowatch — NASA near-Earth-object feed tracker.
//! Entry point for the CLI binary.

mod cli;
mod config;
mod report;

use anyhow::ensure;
use chrono::{Duration, Local};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use neowatch_common::QueryWindow;
use neowatch_ingestion::sources::{NeoFeedSource, NeoWsClient};
use neowatch_pipeline::{flatten_feed, Aggregate, SelectionState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("neowatch=info,warn")),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = cli::Cli::parse();
    let config = config::Config::load()?;
    let api_key = config.resolve_api_key()?;

    let today = Local::now().date_naive();
    let start = args.start.unwrap_or(today);
    let end = args
        .end
        .unwrap_or(start + Duration::days(config.query.max_span_days));
    ensure!(start <= end, "start date must not be after end date");

    let (window, clamped) = QueryWindow::new(start, end).clamp_span(config.query.max_span_days);
    if clamped {
        warn!(
            end = %window.end,
            "requested window exceeds the feed maximum span; end date adjusted"
        );
    }

    info!(start = %window.start, end = %window.end, "querying NeoWs feed");
    let client =
        NeoWsClient::with_base_url(&config.feed.base_url, api_key, config.feed.timeout_secs)?;
    let feed = client.fetch_feed(&window).await?;

    let records = flatten_feed(&feed);
    info!(total = records.len(), "feed flattened");

    let selection = SelectionState {
        hazardous_only: args.hazardous_only,
        min_size_km: args.min_size,
        sort_key: args.sort_by.into(),
        ascending: !args.descending,
    };
    let selected = selection.apply(&records);

    if let Some(ref name) = args.detail {
        let record = selected
            .iter()
            .find(|r| &r.name == name)
            .ok_or_else(|| anyhow::anyhow!("no record named {name:?} in the current selection"))?;
        report::print_detail(record);
        return Ok(());
    }

    if args.json {
        let aggregate = Aggregate::compute(&selected).ok();
        report::print_json(&selected, aggregate.as_ref())?;
        return Ok(());
    }

    match Aggregate::compute(&selected) {
        Ok(agg) => {
            report::print_summary(&agg);
            report::print_table(&selected);
        }
        Err(_) => println!("No records matched the current selection."),
    }

    Ok(())
}
