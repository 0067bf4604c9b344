//! Match data, queries and board composition for the La Pizarra live-scores page.
//!
//! The dataset lives in a [`Store`], built once (usually through
//! [`fixture::load`]) and read-only afterwards. [`query`] holds the pure
//! filters and the league grouping; [`board`] turns a [`BoardState`] into
//! everything a view draws.

pub mod board;
pub mod config;
pub mod enums;
pub mod error;
pub mod fixture;
pub mod model;
pub mod query;
mod store;

pub use board::{BoardState, BoardView};
pub use config::BoardConfig;
pub use enums::{MatchStatus, StatusTab, TeamSide};
pub use error::{PizarraError, Result};
pub use model::*;
pub use query::{LeagueGroup, LeagueGroups};
pub use store::Store;
