//! Deterministic builders shared by the model tests.

use chrono::NaiveDate;

use super::{
    Ball, BallEvent, BattingStyle, BowlingStyle, ExtraType, Ground, Inning, Match, Over, Player,
    PlayerRole, ScoreType, Team, TeamSide, Toss, WicketType,
};

pub fn player(first: &str, last: &str) -> Player {
    Player::new(
        first.to_string(),
        last.to_string(),
        PlayerRole::Batter,
        BattingStyle::RightHanded,
        BowlingStyle::RightArmFast,
    )
}

pub fn team(name: &str, players: Vec<Player>) -> Team {
    let mut team = Team::new(name.to_string());
    team.players = players;
    team
}

/// An over bowled by a fixed trio, one ball per given outcome.
pub fn over(events: Vec<BallEvent>) -> Over {
    let striker = player("Babar", "Azam");
    let non_striker = player("Mohammad", "Rizwan");
    let bowler = player("Shaheen", "Afridi");
    let balls = events
        .into_iter()
        .map(|event| Ball::new(striker.clone(), non_striker.clone(), bowler.clone(), event))
        .collect();
    Over::new(balls)
}

pub fn inning(number_of_overs: u32) -> Inning {
    let batting = team("LAHORE QALANDARS", vec![player("Fakhar", "Zaman")]);
    let bowling = team("KARACHI KINGS", vec![player("Hasan", "Ali")]);
    Inning::new(number_of_overs, batting, bowling)
}

/// A fully wired two-innings fixture. The second innings' first over has a
/// wicket at ball index 2, which the equality tests mutate.
pub fn full_match() -> Match {
    let team_a = team("LAHORE QALANDARS", vec![player("Fakhar", "Zaman"), player("Shaheen", "Afridi")]);
    let team_b = team("KARACHI KINGS", vec![player("Hasan", "Ali"), player("Imad", "Wasim")]);

    let mut first_innings = Inning::new(2, team_a.clone(), team_b.clone());
    first_innings
        .append_over(over(vec![
            BallEvent::score(ScoreType::Four),
            BallEvent::score(ScoreType::Single),
            BallEvent::extra(ExtraType::Wide, ScoreType::Single),
        ]))
        .unwrap();
    first_innings
        .append_over(over(vec![
            BallEvent::score(ScoreType::NoRun),
            BallEvent::score(ScoreType::Six),
        ]))
        .unwrap();

    let mut second_innings = Inning::new(2, team_b.clone(), team_a.clone());
    second_innings
        .append_over(over(vec![
            BallEvent::score(ScoreType::Double),
            BallEvent::extra(ExtraType::NoBall, ScoreType::NoRun),
            BallEvent::wicket(WicketType::Bowled, None),
        ]))
        .unwrap();

    Match::new(
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
        Ground::new("Gaddafi Stadium".to_string()),
        team_a,
        team_b,
        Toss::new(TeamSide::TeamA, TeamSide::TeamA, TeamSide::TeamB),
        first_innings,
        second_innings,
        2,
    )
}
