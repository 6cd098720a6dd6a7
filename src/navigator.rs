use crate::color::ColorScale;
use crate::errors::FetchFailure;
use crate::models::{DayView, GameCard, GameRecord};
use crate::pager::{DatePager, DateKey, Step};
use crate::storage::logo_path;
use tracing::{debug, info, warn};

/// Issued once per pager transition; a completion only lands if its ticket
/// is still the newest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub key: DateKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Shown,
    Stale,
    Failed,
}

#[derive(Debug, Clone)]
struct Slate {
    seq: u64,
    key: DateKey,
    cards: Vec<GameCard>,
}

#[derive(Debug)]
pub struct Navigator {
    pager: DatePager,
    seq: u64,
    shown: Option<Slate>,
    last_error: Option<String>,
}

impl Navigator {
    pub fn new(pager: DatePager) -> Self {
        Self {
            pager,
            seq: 0,
            shown: None,
            last_error: None,
        }
    }

    pub fn pager(&self) -> &DatePager {
        &self.pager
    }

    pub fn current_ticket(&mut self) -> Ticket {
        self.issue()
    }

    pub fn step_forward(&mut self) -> Option<Ticket> {
        match self.pager.step_forward() {
            Step::Moved(key) => {
                debug!("stepped forward to {key}");
                Some(self.issue())
            }
            Step::Refused => {
                debug!("forward step refused at {}", self.pager.current_key());
                None
            }
        }
    }

    pub fn step_backward(&mut self) -> Ticket {
        let key = self.pager.step_backward();
        debug!("stepped back to {key}");
        self.issue()
    }

    pub fn commit(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<GameRecord>, FetchFailure>,
        scale: &ColorScale,
    ) -> Commit {
        if ticket.seq != self.seq {
            debug!(
                "dropping slate for {} (ticket {} superseded by {})",
                ticket.key, ticket.seq, self.seq
            );
            return Commit::Stale;
        }

        match result {
            Ok(records) => {
                let cards = records.iter().map(|record| to_card(record, scale)).collect::<Vec<_>>();
                info!("showing {} games for {}", cards.len(), ticket.key);
                self.shown = Some(Slate {
                    seq: ticket.seq,
                    key: ticket.key,
                    cards,
                });
                self.last_error = None;
                Commit::Shown
            }
            Err(err) => {
                warn!("{err}");
                self.last_error = Some(err.to_string());
                Commit::Failed
            }
        }
    }

    pub fn view(&self) -> DayView {
        DayView {
            date: self.pager.current_key(),
            can_step_forward: self.pager.can_step_forward(),
            shown_date: self.shown.as_ref().map(|slate| slate.key.clone()),
            shown_seq: self.shown.as_ref().map(|slate| slate.seq),
            games: self
                .shown
                .as_ref()
                .map(|slate| slate.cards.clone())
                .unwrap_or_default(),
            seq: self.seq,
            error: self.last_error.clone(),
        }
    }

    fn issue(&mut self) -> Ticket {
        self.seq += 1;
        Ticket {
            seq: self.seq,
            key: self.pager.current_key(),
        }
    }
}

pub fn to_card(record: &GameRecord, scale: &ColorScale) -> GameCard {
    let home_team = record.game.home_team.team_name.clone();
    let visitor_team = record.game.visitor_team.team_name.clone();
    let score = record.game_punctuation.as_ref();

    let color = match scale.color_for_value(score) {
        Ok(color) => Some(color.rgba_string()),
        Err(err) => {
            warn!("{home_team} vs {visitor_team}: {err}");
            None
        }
    };

    GameCard {
        home_logo: logo_path(&home_team),
        visitor_logo: logo_path(&visitor_team),
        punctuation: color.as_ref().and(score.and_then(|value| value.as_f64())),
        color,
        home_team,
        visitor_team,
    }
}
