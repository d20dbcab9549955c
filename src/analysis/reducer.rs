use crate::api::models::ParticipantDto;
use crate::error::AppError;

use super::window::WindowKind;

/// Numeric fields the reducer can average. Each variant maps to one
/// extraction rule; `Kda` is the lone field read from the nested
/// `challenges` block instead of the participant's top level, and that
/// asymmetry is kept as a named case rather than generalized away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Kills,
    Deaths,
    Assists,
    DamageToChampions,
    Kda,
    ChampLevel,
}

impl StatField {
    pub fn extract(&self, record: &ParticipantDto) -> f64 {
        match self {
            StatField::Kills => record.kills as f64,
            StatField::Deaths => record.deaths as f64,
            StatField::Assists => record.assists as f64,
            StatField::DamageToChampions => record.total_damage_dealt_to_champions as f64,
            // Nested special case: KDA sits under challenges.
            StatField::Kda => record.challenges.kda,
            StatField::ChampLevel => record.champ_level as f64,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatField::Kills => "kills",
            StatField::Deaths => "deaths",
            StatField::Assists => "assists",
            StatField::DamageToChampions => "damage to champions",
            StatField::Kda => "kda",
            StatField::ChampLevel => "champion level",
        }
    }
}

/// The default metric set, passed explicitly so callers and tests can
/// vary it without touching shared state.
pub const DEFAULT_FIELDS: &[StatField] = &[
    StatField::Kills,
    StatField::Deaths,
    StatField::Assists,
    StatField::DamageToChampions,
    StatField::Kda,
    StatField::ChampLevel,
];

/// Per-window aggregate: win rate in [0, 100], the most-played champion,
/// and one mean per configured field, all rounded to 2 decimals.
/// `averages` keeps the configured field order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub win_rate: f64,
    pub most_played: String,
    pub averages: Vec<(StatField, f64)>,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reduces one window's participation records to `AggregateStats`.
///
/// An empty window is a division-by-zero condition and fails with
/// `EmptyWindow` naming the half that ran dry.
pub fn reduce(
    records: &[ParticipantDto],
    fields: &[StatField],
    window: WindowKind,
) -> Result<AggregateStats, AppError> {
    if records.is_empty() {
        return Err(AppError::EmptyWindow(window));
    }

    let len = records.len() as f64;
    let wins = records.iter().filter(|r| r.win).count() as f64;
    let win_rate = round2(wins / len * 100.0);

    let averages = fields
        .iter()
        .map(|field| {
            let total: f64 = records.iter().map(|r| field.extract(r)).sum();
            (*field, round2(total / len))
        })
        .collect();

    Ok(AggregateStats {
        win_rate,
        most_played: most_played(records),
        averages,
    })
}

/// Mode of the champion field. Champions are counted in first-appearance
/// order and ties go to the first champion reaching the maximum count in
/// that order; the tie-break is deliberate, for reproducible output.
fn most_played(records: &[ParticipantDto]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for record in records {
        match counts.iter_mut().find(|(name, _)| *name == record.champion_name) {
            Some((_, count)) => *count += 1,
            None => counts.push((&record.champion_name, 1)),
        }
    }

    let mut best: (&str, usize) = ("", 0);
    for (name, count) in counts {
        if count > best.1 {
            best = (name, count);
        }
    }

    best.0.to_string()
}
