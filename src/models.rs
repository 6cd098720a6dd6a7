use crate::pager::DateKey;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamRef {
    pub team_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameTeams {
    pub home_team: TeamRef,
    pub visitor_team: TeamRef,
}

/// One entry of a daily slate file.
///
/// The score stays a raw JSON value; the color scale decides whether it is
/// usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: GameTeams,
    #[serde(default)]
    pub game_punctuation: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameCard {
    pub home_team: String,
    pub visitor_team: String,
    pub home_logo: String,
    pub visitor_logo: String,
    pub punctuation: Option<f64>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub date: DateKey,
    pub can_step_forward: bool,
    pub shown_date: Option<DateKey>,
    /// Ticket the shown games were loaded under; `seq` is the newest issued.
    pub shown_seq: Option<u64>,
    pub games: Vec<GameCard>,
    pub seq: u64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamStats {
    pub team_name: String,
    #[serde(default)]
    pub team_abbreviation: String,
    #[serde(default)]
    pub team_city_name: String,
    #[serde(default)]
    pub conference: String,
    #[serde(default)]
    pub conference_position: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameStats {
    pub game_id: String,
    pub home_team: TeamStats,
    pub visitor_team: TeamStats,
    pub home_team_points: u32,
    pub visitor_team_points: u32,
    pub maximum_points_player: u32,
    pub lead_changes: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GameRating {
    pub standings: u32,
    pub score_difference: u32,
    pub maximum_points_player: u32,
    pub change_lead: u32,
    pub total: u32,
}

/// Shape written to disk: the stats under `game`, the total beside it.
#[derive(Debug, Serialize)]
pub struct RatedGame {
    pub game: GameStats,
    pub game_rating: GameRating,
    pub game_punctuation: u32,
}
