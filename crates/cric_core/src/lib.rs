//! # cric_core - Cricket Match Record-Keeping Core
//!
//! This library records cricket match data: teams, players, matches,
//! innings, overs and per-delivery outcomes (runs, extras, wickets).
//!
//! ## Features
//! - Roster management with mutually exclusive team membership and an
//!   append-only membership history
//! - Delivery outcomes composing upward into overs, innings and matches
//! - Structural equality across the whole aggregate hierarchy
//! - Persistence and dates behind store/clock collaborator traits

// Aggregate constructors take the full component list
#![allow(clippy::too_many_arguments)]

pub mod error;
pub mod models;
pub mod roster;
pub mod store;
pub mod validation;

pub use error::{CricketError, EntityKind, Result};
pub use models::{
    Ball, BallEvent, BallEventKind, BattingStyle, BowlingStyle, ExtraType, Ground, Inning, Match,
    Over, Player, PlayerRole, ScoreType, Team, TeamPlayerRelation, TeamSide, Toss, WicketType,
};
pub use roster::RosterManager;
pub use store::{
    Clock, FixedClock, InMemoryBackend, InMemoryStore, Record, RecordId, RecordStore, SystemClock,
};
pub use validation::{FieldValidator, ValidationError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
