use std::collections::HashMap;

use crate::models::Message;

/// Ordered message history per match. Entries are created with their seed
/// opener already present when the match is registered; every later mutation
/// is an append.
#[derive(Debug, Default)]
pub struct ConversationStore {
    messages: HashMap<String, Vec<Message>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the conversation for a fresh match with its opener as the sole
    /// entry.
    pub fn seed(&mut self, match_id: &str, opener: Message) {
        self.messages.insert(match_id.to_string(), vec![opener]);
    }

    pub fn append(&mut self, match_id: &str, message: Message) {
        self.messages
            .entry(match_id.to_string())
            .or_default()
            .push(message);
    }

    /// Full history in insertion order; empty when the match has no messages.
    pub fn history(&self, match_id: &str) -> &[Message] {
        self.messages.get(match_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(match_id: &str, text: &str) -> Message {
        Message::user(match_id, "user_a", text.into())
    }

    #[test]
    fn history_is_empty_not_missing_for_unknown_match() {
        let store = ConversationStore::new();
        assert!(store.history("match_nope").is_empty());
    }

    #[test]
    fn appends_preserve_insertion_order() {
        let mut store = ConversationStore::new();
        store.append("match_1", msg("match_1", "first"));
        store.append("match_1", msg("match_1", "second"));
        store.append("match_1", msg("match_1", "third"));

        let texts: Vec<_> = store.history("match_1").iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn seeding_creates_a_single_entry_conversation() {
        let mut store = ConversationStore::new();
        store.seed("match_1", msg("match_1", "opener"));
        assert_eq!(store.history("match_1").len(), 1);
        assert_eq!(store.len(), 1);
    }
}
