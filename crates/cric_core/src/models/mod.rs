//! Domain models and the structural-equality rules they share.
//!
//! Every aggregate exposes a `*_equals` comparison, used for assertions
//! and duplicate detection rather than store indexing:
//! - scalars compare by value, enums by case
//! - collections compare pairwise in sequence order after a length check
//! - a delivery outcome compares its runtime variant first, then the
//!   variant's fields, then the identity of the owning ball
//! - an absent optional fielder only equals another absent fielder

pub mod ball;
pub mod cricket_match;
pub mod event;
pub mod ground;
pub mod inning;
pub mod over;
pub mod player;
pub mod relation;
pub mod team;
pub mod toss;

#[cfg(test)]
pub(crate) mod fixtures;

pub use ball::Ball;
pub use cricket_match::Match;
pub use event::{BallEvent, BallEventKind, ExtraType, ScoreType, WicketType};
pub use ground::Ground;
pub use inning::Inning;
pub use over::Over;
pub use player::{BattingStyle, BowlingStyle, Player, PlayerRole};
pub use relation::TeamPlayerRelation;
pub use team::Team;
pub use toss::{TeamSide, Toss};
