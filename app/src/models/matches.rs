use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Millisecond timestamps throughout, matching what the session file and the
/// original client stored.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    /// Unordered pair of profile ids
    pub users: [String; 2],
    /// Cache of the conversation tail, updated on every append
    pub last_message: String,
    pub last_message_at: i64,
    pub unread: bool,
}

impl Match {
    pub fn involves(&self, profile_id: &str) -> bool {
        self.users.iter().any(|u| u == profile_id)
    }

    /// The participant that is not `profile_id`.
    pub fn other_user<'a>(&'a self, profile_id: &str) -> &'a str {
        if self.users[0] == profile_id {
            &self.users[1]
        } else {
            &self.users[0]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub match_id: String,
    /// A profile id, or the reserved sentinel "system" for generated content
    pub sender_id: String,
    pub text: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_ai_generated: bool,
}

impl Message {
    /// A message typed by a participant.
    pub fn user(match_id: &str, sender_id: &str, text: String) -> Self {
        Self {
            id: format!("msg_{}", Uuid::new_v4()),
            match_id: match_id.to_string(),
            sender_id: sender_id.to_string(),
            text,
            created_at: now_ms(),
            is_ai_generated: false,
        }
    }
}

/// Result of evaluating a right-swipe.
#[derive(Debug, Clone)]
pub enum MatchOutcome {
    NoMatch,
    Matched {
        match_record: Match,
        seed_message: Message,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateIdea {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_user_picks_the_opposite_side() {
        let m = Match {
            id: "match_1".into(),
            users: ["user_a".into(), "user_b".into()],
            last_message: String::new(),
            last_message_at: 0,
            unread: false,
        };
        assert_eq!(m.other_user("user_a"), "user_b");
        assert_eq!(m.other_user("user_b"), "user_a");
        assert!(m.involves("user_a"));
        assert!(!m.involves("user_c"));
    }

    #[test]
    fn plain_messages_omit_the_generated_flag() {
        let msg = Message::user("match_1", "user_a", "hello".into());
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("isAiGenerated").is_none());
        assert_eq!(json["senderId"], "user_a");
    }
}
