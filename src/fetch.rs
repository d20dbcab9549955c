use std::thread;
use std::time::Duration;

use indicatif::ProgressBar;

use crate::api::models::{MatchDto, ParticipantDto};
use crate::error::AppError;

/// Matches fetched before the fetcher pauses to stay under the
/// provider's request-rate ceiling.
pub const BATCH_SIZE: usize = 15;

const BATCH_PAUSE: Duration = Duration::from_secs(1);

/// Anything that can resolve a match id to full match details.
/// Implemented by `RiotApiClient`; tests substitute an in-memory source.
pub trait MatchSource {
    fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError>;
}

pub struct MatchFetcher<'a, S: MatchSource> {
    source: &'a S,
}

impl<'a, S: MatchSource> MatchFetcher<'a, S> {
    pub fn new(source: &'a S) -> Self {
        MatchFetcher { source }
    }

    /// Fetches every match in `match_ids` and keeps only the subject
    /// player's participation record from each, in input order.
    ///
    /// A match where the player does not appear in the participant list is
    /// silently skipped; any provider failure aborts the whole fetch.
    /// After every `BATCH_SIZE` match-detail calls the fetcher sleeps for
    /// one second and resets its counter.
    pub fn fetch_player_records(
        &self,
        match_ids: &[String],
        puuid: &str,
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<ParticipantDto>, AppError> {
        let mut records = Vec::with_capacity(match_ids.len());
        let mut fetched_in_batch = 0usize;

        for match_id in match_ids {
            let match_data = self.source.get_match(match_id)?;
            fetched_in_batch += 1;

            if let Some(pb) = progress {
                pb.inc(1);
            }

            if let Some(player) = match_data
                .info
                .participants
                .into_iter()
                .find(|p| p.puuid == puuid)
            {
                records.push(player);
            }

            if fetched_in_batch == BATCH_SIZE {
                thread::sleep(BATCH_PAUSE);
                fetched_in_batch = 0;
            }
        }

        Ok(records)
    }
}
