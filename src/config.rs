use crate::color::{ColorScale, DEFAULT_MAX_SCORE};
use crate::pager::{DateKey, DatePager};
use chrono::NaiveDate;
use std::{env, path::PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub logo_dir: PathBuf,
    pub max_score: f64,
    pub boundary: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: PathBuf::from("data"),
            logo_dir: PathBuf::from("nba_logos"),
            max_score: DEFAULT_MAX_SCORE,
            boundary: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup("PORT") {
            match value.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => warn!("ignoring invalid PORT {value:?}"),
            }
        }
        if let Some(value) = lookup("TOPMATCH_DATA_DIR") {
            config.data_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("TOPMATCH_LOGO_DIR") {
            config.logo_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("TOPMATCH_MAX_SCORE") {
            match value.parse::<f64>() {
                Ok(max) if max.is_finite() && max > 0.0 => config.max_score = max,
                _ => warn!("ignoring invalid TOPMATCH_MAX_SCORE {value:?}"),
            }
        }
        if let Some(value) = lookup("TOPMATCH_BOUNDARY") {
            match DateKey::parse(&value).and_then(|key| key.to_date()) {
                Some(date) => config.boundary = Some(date),
                None => warn!("ignoring invalid TOPMATCH_BOUNDARY {value:?}, expected DD-MM-YYYY"),
            }
        }

        config
    }

    pub fn color_scale(&self) -> ColorScale {
        ColorScale::new(self.max_score)
    }

    pub fn pager(&self) -> DatePager {
        match self.boundary {
            Some(boundary) => DatePager::new(boundary),
            None => DatePager::from_clock(),
        }
    }
}
