//! Truth Tally daemon — seeds a feed and runs the organic-growth simulator,
//! logging tick activity and aggregate snapshots.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tally_aggregate::{location_breakdown, overall_tally};
use tally_feed::NewsFeed;
use tally_ledger::ItemDraft;
use tally_nullables::CannedVerdicts;
use tally_types::{Category, Timestamp, Verdict, VerdictReport};
use tally_verify::{VerifyClient, VerifyRequest};

#[derive(Parser)]
#[command(name = "tally-daemon", about = "Truth Tally feed simulator daemon")]
struct Cli {
    /// Simulator tick interval in seconds.
    #[arg(long, default_value_t = 5, env = "TALLY_TICK_SECS")]
    tick_secs: u64,

    /// RNG seed for reproducible runs; omit for a random seed.
    #[arg(long, env = "TALLY_SEED")]
    seed: Option<u64>,

    /// Stop after this many ticks (0 = run until interrupted).
    #[arg(long, default_value_t = 0, env = "TALLY_MAX_TICKS")]
    max_ticks: u64,

    /// Verification service endpoint. When omitted, seed submissions use a
    /// canned verdict instead of calling out.
    #[arg(long, env = "TALLY_VERIFY_URL")]
    verify_url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "TALLY_LOG_LEVEL")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tally_utils::logging::init_tracing_with_level(&cli.log_level);

    let mut accounts = tally_accounts::AccountStore::new();
    let reporter = accounts.register("wire-service", "demo-only", "Hyderabad")?;

    let mut feed = NewsFeed::new();
    let seed_draft = ItemDraft {
        title: "Cyclone Causes Eruptions in Karimnagar?".to_string(),
        description: "Reports are circulating online about a cyclone causing unusual volcanic eruptions in the Karimnagar district.".to_string(),
        image_url: None,
        location: "Karimnagar".to_string(),
        category: Category::Environment,
    };

    let report = match &cli.verify_url {
        Some(url) => {
            let client = VerifyClient::new(url.clone());
            client
                .verify(VerifyRequest {
                    text: &seed_draft.description,
                    image_base64: None,
                    mime_type: None,
                })
                .await
        }
        None => CannedVerdicts::constant(VerdictReport {
            verdict: Verdict::Dilemma,
            confidence: Some(55),
            reasoning: Some("No official confirmation of volcanic activity in this region.".to_string()),
            ai_generated_image: Some(false),
        })
        .next_report(),
    };

    let (item, delta) = feed.submit(seed_draft, report, reporter, Timestamp::now());
    accounts.update_credits(reporter, delta)?;
    tracing::info!(%item, "seeded feed");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut interval = tokio::time::interval(Duration::from_secs(cli.tick_secs.max(1)));
    let mut ticks = 0u64;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let tick = feed.tick(&mut rng, Timestamp::now());
                tracing::info!(?tick, items = feed.ledger().len(), "simulator tick");
                log_snapshot(&feed);
                ticks += 1;
                if cli.max_ticks > 0 && ticks >= cli.max_ticks {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("received SIGINT, shutting down");
                break;
            }
        }
    }

    tracing::info!(ticks, items = feed.ledger().len(), "simulator stopped");
    Ok(())
}

/// Log the tally for the most active item in the feed.
fn log_snapshot(feed: &NewsFeed) {
    let busiest = feed
        .ledger()
        .iter()
        .max_by_key(|item| item.votes.len());
    let Some(item) = busiest else { return };
    let Some(tally) = overall_tally(item.votes.as_slice()) else {
        return;
    };
    let locations = location_breakdown(item.votes.as_slice()).len();
    tracing::info!(
        item = %item.id,
        title = %item.title,
        real_pct = tally.real_pct,
        total = tally.total,
        locations,
        "busiest item tally"
    );
}
