pub mod deck;
pub mod matches;
pub mod profile;

use serde::Serialize;

use crate::models::Profile;
use crate::state::{CoreState, DeckState};

/// Read-only projection of the deck for the presentation layer.
#[derive(Debug, Serialize)]
pub struct DeckView {
    pub state: DeckState,
    pub current: Option<Profile>,
    pub remaining: usize,
}

impl DeckView {
    pub fn of(core: &CoreState) -> Self {
        Self {
            state: core.deck_state(),
            current: core.current_candidate().cloned(),
            remaining: core.deck_remaining(),
        }
    }
}
