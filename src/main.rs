mod analysis;
mod api;
mod config;
mod display;
mod error;
mod fetch;

use analysis::comparator::compare;
use analysis::reducer::{reduce, AggregateStats, DEFAULT_FIELDS};
use analysis::window::{split, MatchWindow};
use api::client::RiotApiClient;
use clap::Parser;
use config::Config;
use display::output::{display_error, display_info, display_success, display_trend_report};
use error::AppError;
use fetch::MatchFetcher;
use indicatif::ProgressBar;

#[derive(Parser, Debug)]
#[command(name = "League Trend")]
#[command(about = "Compare your recent performance against your older games", long_about = None)]
struct Args {
    /// Riot Game Name
    game_name: String,

    /// Riot Tag (tag line)
    tag_line: String,

    /// Region (default: na1)
    #[arg(short, long)]
    region: Option<String>,

    /// Number of matches to pull history for (default: 40, max: 100)
    #[arg(short, long, default_value = "40")]
    matches: usize,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let player_key = format!("{}#{}", args.game_name, args.tag_line);

    display_info(&format!(
        "Fetching data for {} in region {}",
        player_key, config.region
    ));

    let client = RiotApiClient::new(config.clone());

    // Step 1: Get account info (PUUID)
    display_info("Step 1: Getting account info...");
    let account = client.get_account(&args.game_name, &args.tag_line)?;
    display_success(&format!("Found PUUID: {}", puuid_preview(&account.puuid)));

    // Step 2: Get summoner info
    display_info("Step 2: Getting summoner info...");
    let summoner = client.get_summoner(&account.puuid)?;
    display_success(&format!("Summoner Level: {}", summoner.summoner_level));

    // Step 3: Get match IDs
    display_info("Step 3: Fetching match IDs from Riot API...");
    let matches_count = std::cmp::min(args.matches, 100);
    let all_match_ids = client.get_match_ids(&account.puuid, matches_count)?;

    if all_match_ids.is_empty() {
        return Err(AppError::NoMatches.into());
    }

    display_success(&format!("Found {} matches", all_match_ids.len()));

    // Split the history into the older and newer halves
    let (older, newer) = split(&all_match_ids);

    // Step 4: Fetch and reduce each window
    display_info("Step 4: Fetching match details...");
    let fetcher = MatchFetcher::new(&client);
    let pb = ProgressBar::new((older.match_ids.len() + newer.match_ids.len()) as u64);
    pb.set_message("Fetching match details");

    let old_stats = fetch_and_reduce(&fetcher, &older, &account.puuid, &pb)?;
    let new_stats = fetch_and_reduce(&fetcher, &newer, &account.puuid, &pb)?;

    pb.finish_with_message("✓ Match data fetched");

    // Step 5: Compare the two halves
    let comparison = compare(&old_stats, &new_stats);

    // Champion icon URLs want the latest Data Dragon version
    let dd_version = client.get_latest_version()?;

    display_trend_report(
        &args.game_name,
        all_match_ids.len() / 2,
        &old_stats,
        &new_stats,
        &comparison,
        &dd_version,
    );

    Ok(())
}

/// First few characters of a puuid, without panicking on a short one.
fn puuid_preview(puuid: &str) -> &str {
    puuid.get(..8).unwrap_or(puuid)
}

fn fetch_and_reduce(
    fetcher: &MatchFetcher<'_, RiotApiClient>,
    window: &MatchWindow,
    puuid: &str,
    pb: &ProgressBar,
) -> Result<AggregateStats, AppError> {
    let records = fetcher.fetch_player_records(window.match_ids, puuid, Some(pb))?;
    reduce(&records, DEFAULT_FIELDS, window.kind)
}
