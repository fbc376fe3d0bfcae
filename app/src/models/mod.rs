pub mod matches;
pub mod profile;

pub use matches::{now_ms, DateIdea, Match, MatchOutcome, Message};
pub use profile::{Gender, Profile};
