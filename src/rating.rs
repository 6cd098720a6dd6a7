use crate::models::{GameRating, GameStats};

pub const MAX_RATING: u32 = 32;

pub fn rate_game(game: &GameStats) -> GameRating {
    let score_difference = score_difference(game);
    let standings = standings(game);
    let maximum_points_player = maximum_points_player(game);
    let change_lead = change_lead(game);

    GameRating {
        standings,
        score_difference,
        maximum_points_player,
        change_lead,
        total: score_difference + standings + maximum_points_player + change_lead,
    }
}

pub fn score_difference(game: &GameStats) -> u32 {
    match game.home_team_points.abs_diff(game.visitor_team_points) {
        0..=1 => 10,
        2..=3 => 8,
        4..=5 => 6,
        6..=9 => 4,
        _ => 0,
    }
}

pub fn standings(game: &GameStats) -> u32 {
    let home = game.home_team.conference_position;
    let visitor = game.visitor_team.conference_position;

    if home <= 2 && visitor <= 2 {
        8
    } else if home <= 4 && visitor <= 4 {
        6
    } else if home <= 7 && visitor <= 7 {
        4
    } else if home <= 3 || visitor <= 3 {
        2
    } else {
        0
    }
}

pub fn maximum_points_player(game: &GameStats) -> u32 {
    match game.maximum_points_player {
        51.. => 4,
        41..=50 => 2,
        _ => 0,
    }
}

pub fn change_lead(game: &GameStats) -> u32 {
    match game.lead_changes {
        17.. => 10,
        11..=16 => 8,
        7..=10 => 6,
        4..=6 => 2,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leader {
    Home,
    Visitor,
    Tie,
}

/// Counts home/visitor lead swaps in play-by-play scores of the form
/// `"<visitor> - <home>"`. Unparseable entries are skipped.
pub fn count_lead_changes<'a, I>(scores: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let mut changes = 0;
    let mut previous: Option<Leader> = None;

    for score in scores {
        let Some((visitor, home)) = parse_score(score) else {
            continue;
        };
        let current = if home > visitor {
            Leader::Home
        } else if visitor > home {
            Leader::Visitor
        } else {
            Leader::Tie
        };

        if let Some(prev) = previous {
            if prev != Leader::Tie && current != Leader::Tie && prev != current {
                changes += 1;
            }
        }
        previous = Some(current);
    }

    changes
}

fn parse_score(score: &str) -> Option<(u32, u32)> {
    let (visitor, home) = score.split_once(" - ")?;
    if home.contains(" - ") {
        return None;
    }
    Some((visitor.trim().parse().ok()?, home.trim().parse().ok()?))
}
