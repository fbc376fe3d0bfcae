use serde::Serialize;

use crate::models::Profile;

/// Linear cursor over the discovery candidates, snapshotted once when the
/// deck is built. Every decision advances the cursor by one regardless of
/// direction or match outcome; running past the end is terminal for the
/// session.
#[derive(Debug)]
pub struct SwipeDeck {
    candidates: Vec<Profile>,
    cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckState {
    Browsing,
    Exhausted,
}

impl SwipeDeck {
    /// Snapshots all candidates except the actor, in roster order.
    pub fn new(actor_id: &str, roster: &[Profile]) -> Self {
        Self {
            candidates: roster.iter().filter(|p| p.id != actor_id).cloned().collect(),
            cursor: 0,
        }
    }

    pub fn current(&self) -> Option<&Profile> {
        self.candidates.get(self.cursor)
    }

    /// Moves past the current candidate. A no-op once exhausted.
    pub fn advance(&mut self) {
        if self.cursor < self.candidates.len() {
            self.cursor += 1;
        }
    }

    pub fn state(&self) -> DeckState {
        if self.cursor >= self.candidates.len() {
            DeckState::Exhausted
        } else {
            DeckState::Browsing
        }
    }

    pub fn remaining(&self) -> usize {
        self.candidates.len() - self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            ..Profile::blank()
        }
    }

    #[test]
    fn excludes_the_actor_from_the_snapshot() {
        let roster = vec![named("me"), named("user_1"), named("user_2")];
        let deck = SwipeDeck::new("me", &roster);
        assert_eq!(deck.remaining(), 2);
        assert_eq!(deck.current().unwrap().id, "user_1");
    }

    #[test]
    fn two_decisions_exhaust_a_two_candidate_deck() {
        let roster = vec![named("user_1"), named("user_2")];
        let mut deck = SwipeDeck::new("me", &roster);

        deck.advance();
        assert_eq!(deck.state(), DeckState::Browsing);
        deck.advance();
        assert_eq!(deck.state(), DeckState::Exhausted);
        assert!(deck.current().is_none());

        // A third decision is a no-op.
        deck.advance();
        assert_eq!(deck.state(), DeckState::Exhausted);
        assert!(deck.current().is_none());
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn empty_roster_starts_exhausted() {
        let deck = SwipeDeck::new("me", &[named("me")]);
        assert_eq!(deck.state(), DeckState::Exhausted);
        assert!(deck.current().is_none());
    }
}
