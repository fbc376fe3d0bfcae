use rand::Rng;
use uuid::Uuid;

use crate::constants::{MATCH_NOTICE, MATCH_THRESHOLD, SEED_MESSAGE_PREFIX, SYSTEM_SENDER_ID};
use crate::error::{CoreError, CoreResult};
use crate::models::{now_ms, Match, MatchOutcome, Message, Profile};
use crate::services::GenerationService;

/// Decision policy for a right-swipe. The default is a uniform random draw
/// standing in for a real reciprocity computation; swapping it out does not
/// touch the engine's transactional guarantees.
pub trait MatchDecider: Send + Sync {
    fn decide(&self, actor: &Profile, target: &Profile) -> bool;
}

/// Matches iff a uniform draw exceeds the threshold (~50% of right-swipes).
#[derive(Debug, Clone, Copy)]
pub struct RandomDecider {
    threshold: f64,
}

impl Default for RandomDecider {
    fn default() -> Self {
        Self {
            threshold: MATCH_THRESHOLD,
        }
    }
}

impl MatchDecider for RandomDecider {
    fn decide(&self, _actor: &Profile, _target: &Profile) -> bool {
        rand::rng().random::<f64>() > self.threshold
    }
}

/// Turns a right-swipe into either nothing or exactly one match record plus
/// exactly one seed message. The engine is pure over application state: it
/// builds the records, and `CoreState::register_match` applies them as one
/// step. Generation runs here, outside any state lock, and always resolves
/// (fallback text on any failure).
pub struct MatchEngine {
    decider: Box<dyn MatchDecider>,
    generation: GenerationService,
}

impl MatchEngine {
    pub fn new(generation: GenerationService) -> Self {
        Self::with_decider(generation, Box::new(RandomDecider::default()))
    }

    pub fn with_decider(generation: GenerationService, decider: Box<dyn MatchDecider>) -> Self {
        Self { decider, generation }
    }

    pub async fn evaluate_like(
        &self,
        actor: &Profile,
        target: &Profile,
    ) -> CoreResult<MatchOutcome> {
        if actor.id == target.id {
            return Err(CoreError::InvalidProfile(target.id.clone()));
        }

        if !self.decider.decide(actor, target) {
            return Ok(MatchOutcome::NoMatch);
        }

        let icebreaker = self.generation.icebreaker(actor, target).await;

        let match_id = format!("match_{}", Uuid::new_v4());
        let created_at = now_ms();

        let match_record = Match {
            id: match_id.clone(),
            users: [actor.id.clone(), target.id.clone()],
            last_message: MATCH_NOTICE.to_string(),
            last_message_at: created_at,
            unread: true,
        };

        let seed_message = Message {
            id: format!("msg_{}", Uuid::new_v4()),
            match_id,
            sender_id: SYSTEM_SENDER_ID.to_string(),
            text: format!("{SEED_MESSAGE_PREFIX}: \"{icebreaker}\""),
            created_at,
            is_ai_generated: true,
        };

        tracing::info!(
            match_id = %match_record.id,
            target = %target.id,
            "match created"
        );

        Ok(MatchOutcome::Matched {
            match_record,
            seed_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::generation::local_icebreaker;
    use crate::state::{demo_roster, CoreState};

    struct AlwaysMatch;
    impl MatchDecider for AlwaysMatch {
        fn decide(&self, _: &Profile, _: &Profile) -> bool {
            true
        }
    }

    struct NeverMatch;
    impl MatchDecider for NeverMatch {
        fn decide(&self, _: &Profile, _: &Profile) -> bool {
            false
        }
    }

    fn engine(decider: Box<dyn MatchDecider>) -> MatchEngine {
        // Key-less service: generation resolves to the deterministic local
        // fallback, no network involved.
        MatchEngine::with_decider(GenerationService::new(None), decider)
    }

    fn actor() -> Profile {
        Profile {
            id: "me".into(),
            interests: vec!["Reading".into(), "Coffee".into()],
            ..Profile::blank()
        }
    }

    #[tokio::test]
    async fn self_like_is_rejected() {
        let me = actor();
        let err = engine(Box::new(AlwaysMatch))
            .evaluate_like(&me, &me)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidProfile(_)));
    }

    #[tokio::test]
    async fn positive_outcome_builds_one_match_and_one_seed() {
        let me = actor();
        let target = demo_roster().remove(0);
        let outcome = engine(Box::new(AlwaysMatch))
            .evaluate_like(&me, &target)
            .await
            .unwrap();

        let MatchOutcome::Matched {
            match_record,
            seed_message,
        } = outcome
        else {
            panic!("expected a match");
        };

        assert_eq!(seed_message.match_id, match_record.id);
        assert_eq!(seed_message.sender_id, "system");
        assert!(seed_message.is_ai_generated);
        assert_eq!(match_record.users, ["me".to_string(), "user_1".to_string()]);
        assert_eq!(match_record.last_message, MATCH_NOTICE);
        assert!(match_record.unread);
    }

    #[tokio::test]
    async fn seed_text_uses_the_deterministic_fallback_when_generation_is_unavailable() {
        let me = actor();
        let target = demo_roster().remove(0); // shares "Reading" with the actor
        let outcome = engine(Box::new(AlwaysMatch))
            .evaluate_like(&me, &target)
            .await
            .unwrap();

        let MatchOutcome::Matched { seed_message, .. } = outcome else {
            panic!("expected a match");
        };
        let expected = format!(
            "Hygge AI Suggestion: \"{}\"",
            local_icebreaker(&me, &target)
        );
        assert_eq!(seed_message.text, expected);
    }

    #[tokio::test]
    async fn negative_outcome_leaves_state_untouched() {
        let me = actor();
        let target = demo_roster().remove(0);
        let mut state = CoreState::new(demo_roster());
        state.sign_in(me.clone());

        let outcome = engine(Box::new(NeverMatch))
            .evaluate_like(&me, &target)
            .await
            .unwrap();

        assert!(matches!(outcome, MatchOutcome::NoMatch));
        assert!(state.matches().is_empty());
        assert!(state.history("match_anything").is_err());
    }

    #[tokio::test]
    async fn registering_a_positive_outcome_yields_exactly_one_match_and_message() {
        let me = actor();
        let target = demo_roster().remove(0);
        let mut state = CoreState::new(demo_roster());
        state.sign_in(me.clone());

        let outcome = engine(Box::new(AlwaysMatch))
            .evaluate_like(&me, &target)
            .await
            .unwrap();
        let MatchOutcome::Matched {
            match_record,
            seed_message,
        } = outcome
        else {
            panic!("expected a match");
        };

        let id = match_record.id.clone();
        state.register_match(match_record, seed_message);

        assert_eq!(state.matches().len(), 1);
        let history = state.history(&id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].match_id, id);
        assert_eq!(state.match_by_id(&id).unwrap().last_message, MATCH_NOTICE);
    }
}
