use serde::Deserialize;

// Account V1 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct SummonerDto {
    #[serde(default)]
    pub id: String,
    pub puuid: String,
    #[serde(default)]
    pub name: String,
    pub summoner_level: i32,
    #[serde(default)]
    pub profile_icon_id: i32,
    #[serde(default)]
    pub revision_date: i64,
}

// Match V5 response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct MatchMetadata {
    pub match_id: String,
    pub participants: Vec<String>,
    #[serde(default)]
    pub data_version: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct MatchInfo {
    pub game_duration: i64,
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub game_id: i64,
}

/// One player's participation in one match. This is the record the
/// reducer aggregates; everything the stat table reads lives here.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_name: String,
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub total_damage_dealt_to_champions: i64,
    pub champ_level: i32,
    // KDA lives in the nested challenges block, not at the top level.
    #[serde(default)]
    pub challenges: ChallengesDto,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChallengesDto {
    #[serde(default)]
    pub kda: f64,
}
