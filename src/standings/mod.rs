pub mod aggregation;
pub mod types;

pub use aggregation::calculate_standings;
pub use types::{Outcome, StandingsRow};
