use axum::{extract::State, Json};
use serde::Serialize;

use super::DeckView;
use crate::error::CoreResult;
use crate::models::{Match, MatchOutcome};
use crate::AppContext;

#[derive(Debug, Serialize)]
pub struct DecisionResponse {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_match: Option<Match>,
    pub deck: DeckView,
}

pub async fn deck_view(State(ctx): State<AppContext>) -> CoreResult<Json<DeckView>> {
    let core = ctx.core.read().await;
    core.actor()?;
    Ok(Json(DeckView::of(&core)))
}

/// The `likeCurrent` intent. Snapshots the actor and the current card, runs
/// the engine (the generation call may suspend; no lock is held while it
/// does), then applies advance + registration as one step under the write
/// lock. On an exhausted deck this is a no-op.
pub async fn like_current(State(ctx): State<AppContext>) -> CoreResult<Json<DecisionResponse>> {
    let (actor, target) = {
        let core = ctx.core.read().await;
        let actor = core.actor()?.clone();
        match core.current_candidate().cloned() {
            Some(target) => (actor, target),
            None => {
                return Ok(Json(DecisionResponse {
                    matched: false,
                    new_match: None,
                    deck: DeckView::of(&core),
                }))
            }
        }
    };

    let outcome = ctx.engine.evaluate_like(&actor, &target).await?;

    let mut core = ctx.core.write().await;
    core.advance_deck();
    let new_match = match outcome {
        MatchOutcome::Matched {
            match_record,
            seed_message,
        } => {
            let record = match_record.clone();
            core.register_match(match_record, seed_message);
            Some(record)
        }
        MatchOutcome::NoMatch => None,
    };

    Ok(Json(DecisionResponse {
        matched: new_match.is_some(),
        new_match,
        deck: DeckView::of(&core),
    }))
}

/// The `passCurrent` intent: advance with no evaluation.
pub async fn pass_current(State(ctx): State<AppContext>) -> CoreResult<Json<DecisionResponse>> {
    let mut core = ctx.core.write().await;
    core.actor()?;
    core.advance_deck();
    Ok(Json(DecisionResponse {
        matched: false,
        new_match: None,
        deck: DeckView::of(&core),
    }))
}
