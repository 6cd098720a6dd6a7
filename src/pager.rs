use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;
use std::fmt;

/// `DD-MM-YYYY` key naming one day's slate file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(value: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(value.trim(), "%d-%m-%Y").ok()?;
        let key = format_date(date);
        (key.0 == value.trim()).then_some(key)
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%d-%m-%Y").ok()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn format_date(date: NaiveDate) -> DateKey {
    DateKey(format!(
        "{:02}-{:02}-{:04}",
        date.day(),
        date.month(),
        date.year()
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    AtBoundary,
    BeforeBoundary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Moved(DateKey),
    Refused,
}

/// Day-by-day cursor that never moves past `boundary`.
///
/// The boundary is fixed when the pager is built; a session that runs over
/// midnight keeps paging against the original "yesterday".
#[derive(Debug, Clone)]
pub struct DatePager {
    current: NaiveDate,
    boundary: NaiveDate,
}

impl DatePager {
    pub fn new(boundary: NaiveDate) -> Self {
        Self {
            current: boundary,
            boundary,
        }
    }

    pub fn starting_yesterday(today: NaiveDate) -> Self {
        Self::new(today - Duration::days(1))
    }

    pub fn from_clock() -> Self {
        Self::starting_yesterday(Local::now().date_naive())
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current
    }

    pub fn boundary(&self) -> NaiveDate {
        self.boundary
    }

    pub fn current_key(&self) -> DateKey {
        format_date(self.current)
    }

    pub fn position(&self) -> Position {
        if self.current >= self.boundary {
            Position::AtBoundary
        } else {
            Position::BeforeBoundary
        }
    }

    pub fn can_step_forward(&self) -> bool {
        self.position() == Position::BeforeBoundary
    }

    pub fn step_forward(&mut self) -> Step {
        if !self.can_step_forward() {
            return Step::Refused;
        }
        self.current += Duration::days(1);
        Step::Moved(self.current_key())
    }

    pub fn step_backward(&mut self) -> DateKey {
        self.current -= Duration::days(1);
        self.current_key()
    }
}
