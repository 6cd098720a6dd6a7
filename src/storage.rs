use crate::errors::{AppError, FetchFailure, FetchReason};
use crate::models::{GameRecord, GameStats, RatedGame};
use crate::pager::{format_date, DateKey};
use crate::rating::rate_game;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

pub const LOGO_ROUTE: &str = "nba_logos";

pub fn slate_file_name(key: &DateKey) -> String {
    format!("topmatchnba-{key}.json")
}

pub fn logo_path(team_name: &str) -> String {
    format!("{LOGO_ROUTE}/{team_name}.png")
}

/// Daily slate files under one directory, keyed by [`DateKey`].
#[derive(Debug, Clone)]
pub struct SlateStore {
    data_dir: PathBuf,
}

impl SlateStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, key: &DateKey) -> PathBuf {
        self.data_dir.join(slate_file_name(key))
    }

    pub async fn load(&self, key: &DateKey) -> Result<Vec<GameRecord>, FetchFailure> {
        let path = self.path_for(key);
        debug!("loading slate from {}", path.display());

        let bytes = fs::read(&path).await.map_err(|err| FetchFailure {
            key: key.clone(),
            reason: if err.kind() == std::io::ErrorKind::NotFound {
                FetchReason::Missing
            } else {
                FetchReason::Io(err.to_string())
            },
        })?;

        serde_json::from_slice(&bytes).map_err(|err| FetchFailure {
            key: key.clone(),
            reason: FetchReason::Parse(err.to_string()),
        })
    }

    /// Rates every game, orders them best first and writes the day's file.
    pub async fn write_slate(
        &self,
        date: NaiveDate,
        games: Vec<GameStats>,
    ) -> Result<PathBuf, AppError> {
        let mut rated: Vec<RatedGame> = games
            .into_iter()
            .map(|game| {
                let game_rating = rate_game(&game);
                RatedGame {
                    game,
                    game_punctuation: game_rating.total,
                    game_rating,
                }
            })
            .collect();
        rated.sort_by(|a, b| b.game_punctuation.cmp(&a.game_punctuation));

        fs::create_dir_all(&self.data_dir).await?;
        let key = format_date(date);
        let path = self.path_for(&key);
        let payload = serde_json::to_vec_pretty(&rated).map_err(AppError::internal)?;
        fs::write(&path, payload).await?;

        info!("wrote {} games to {}", rated.len(), path.display());
        Ok(path)
    }
}
