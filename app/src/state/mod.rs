pub mod conversations;
pub mod deck;
pub mod edit;
pub mod roster;

pub use conversations::ConversationStore;
pub use deck::{DeckState, SwipeDeck};
pub use edit::{EditField, EditSession, ShiftDirection};
pub use roster::demo_roster;

use crate::error::{CoreError, CoreResult};
use crate::models::{now_ms, Match, Message, Profile};

/// Owned application state: the signed-in actor, the candidate roster, the
/// match list (most-recent-first), the per-match conversations, the swipe
/// deck, and at most one open edit draft. All mutations go through `&mut
/// self` methods, so every state transition is one observable step under the
/// caller's lock.
pub struct CoreState {
    actor: Option<Profile>,
    roster: Vec<Profile>,
    matches: Vec<Match>,
    conversations: ConversationStore,
    deck: Option<SwipeDeck>,
    edit: Option<EditSession>,
}

impl CoreState {
    pub fn new(roster: Vec<Profile>) -> Self {
        Self {
            actor: None,
            roster,
            matches: Vec::new(),
            conversations: ConversationStore::new(),
            deck: None,
            edit: None,
        }
    }

    /// Restores a persisted session: installs the actor and snapshots the
    /// discovery deck.
    pub fn sign_in(&mut self, actor: Profile) {
        self.deck = Some(SwipeDeck::new(&actor.id, &self.roster));
        self.actor = Some(actor);
    }

    pub fn actor(&self) -> CoreResult<&Profile> {
        self.actor.as_ref().ok_or(CoreError::NoSession)
    }

    pub fn signed_in(&self) -> bool {
        self.actor.is_some()
    }

    /// Looks a profile up by id, in the roster or the actor slot.
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.roster
            .iter()
            .find(|p| p.id == id)
            .or_else(|| self.actor.as_ref().filter(|a| a.id == id))
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn match_by_id(&self, match_id: &str) -> CoreResult<&Match> {
        self.matches
            .iter()
            .find(|m| m.id == match_id)
            .ok_or_else(|| CoreError::UnknownMatch(match_id.to_string()))
    }

    // ---- deck ----------------------------------------------------------

    pub fn deck_state(&self) -> DeckState {
        self.deck
            .as_ref()
            .map(SwipeDeck::state)
            .unwrap_or(DeckState::Exhausted)
    }

    pub fn current_candidate(&self) -> Option<&Profile> {
        self.deck.as_ref().and_then(SwipeDeck::current)
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.as_ref().map_or(0, SwipeDeck::remaining)
    }

    /// Every decision moves past the current card, whatever its outcome.
    pub fn advance_deck(&mut self) {
        if let Some(deck) = self.deck.as_mut() {
            deck.advance();
        }
    }

    // ---- matches & conversations ---------------------------------------

    /// Applies a positive match outcome: the match record goes to the head
    /// of the list and its conversation is created with the seed opener as
    /// the sole entry. One call, one observable step.
    pub fn register_match(&mut self, match_record: Match, seed_message: Message) {
        self.conversations.seed(&match_record.id, seed_message);
        self.matches.insert(0, match_record);
    }

    pub fn history(&self, match_id: &str) -> CoreResult<&[Message]> {
        self.match_by_id(match_id)?;
        Ok(self.conversations.history(match_id))
    }

    /// Opens a conversation: clears the unread flag and returns the history.
    pub fn open_conversation(&mut self, match_id: &str) -> CoreResult<&[Message]> {
        let record = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| CoreError::UnknownMatch(match_id.to_string()))?;
        record.unread = false;
        Ok(self.conversations.history(match_id))
    }

    /// Appends a message typed by the actor and refreshes the owning match's
    /// last-message cache in the same step.
    pub fn send_message(&mut self, match_id: &str, text: String) -> CoreResult<Message> {
        let sender_id = self.actor()?.id.clone();
        let record = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| CoreError::UnknownMatch(match_id.to_string()))?;

        let message = Message::user(match_id, &sender_id, text);
        record.last_message = message.text.clone();
        record.last_message_at = now_ms();
        self.conversations.append(match_id, message.clone());
        Ok(message)
    }

    // ---- edit session ---------------------------------------------------

    /// Opens a draft over the committed actor profile.
    pub fn begin_edit(&mut self) -> CoreResult<&Profile> {
        if self.edit.is_some() {
            return Err(CoreError::DraftInProgress);
        }
        let session = EditSession::begin(self.actor()?);
        Ok(self.edit.insert(session).draft())
    }

    /// Opens a draft over a blank profile for the onboarding wizard.
    pub fn begin_onboarding(&mut self) -> CoreResult<&Profile> {
        if self.edit.is_some() {
            return Err(CoreError::DraftInProgress);
        }
        let session = EditSession::begin(&Profile::blank());
        Ok(self.edit.insert(session).draft())
    }

    pub fn mutate_edit(&mut self, field: EditField) -> CoreResult<&Profile> {
        let session = self.edit.as_mut().ok_or(CoreError::NoDraft)?;
        session.apply(field);
        Ok(session.draft())
    }

    pub fn draft(&self) -> Option<&Profile> {
        self.edit.as_ref().map(EditSession::draft)
    }

    /// Normalizes and installs the draft as the committed profile. A first
    /// commit (onboarding) also snapshots the discovery deck. The caller
    /// persists the returned profile.
    pub fn commit_edit(&mut self) -> CoreResult<Profile> {
        let session = self.edit.take().ok_or(CoreError::NoDraft)?;
        let committed = session.commit();
        if self.actor.is_none() {
            self.deck = Some(SwipeDeck::new(&committed.id, &self.roster));
        }
        self.actor = Some(committed.clone());
        Ok(committed)
    }

    /// Drops the draft; the committed profile is untouched.
    pub fn cancel_edit(&mut self) -> CoreResult<()> {
        self.edit.take().ok_or(CoreError::NoDraft)?;
        Ok(())
    }

    /// Ends the session: actor, deck, draft, matches and conversations are
    /// all session-scoped in this demo.
    pub fn logout(&mut self) {
        self.actor = None;
        self.deck = None;
        self.edit = None;
        self.matches.clear();
        self.conversations = ConversationStore::new();
    }
}
