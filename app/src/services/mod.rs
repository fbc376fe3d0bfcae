pub mod generation;
pub mod matching;

pub use generation::GenerationService;
pub use matching::{MatchDecider, MatchEngine, RandomDecider};
