use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::models::{DateIdea, Match, Message};
use crate::AppContext;

/// Full match list, most-recent-first.
pub async fn list_matches(State(ctx): State<AppContext>) -> CoreResult<Json<Vec<Match>>> {
    let core = ctx.core.read().await;
    core.actor()?;
    Ok(Json(core.matches().to_vec()))
}

/// The `openChat` intent: clears the unread flag and returns the history.
pub async fn open_conversation(
    State(ctx): State<AppContext>,
    Path(match_id): Path<String>,
) -> CoreResult<Json<Vec<Message>>> {
    let mut core = ctx.core.write().await;
    core.actor()?;
    let history = core.open_conversation(&match_id)?;
    Ok(Json(history.to_vec()))
}

pub async fn history(
    State(ctx): State<AppContext>,
    Path(match_id): Path<String>,
) -> CoreResult<Json<Vec<Message>>> {
    let core = ctx.core.read().await;
    core.actor()?;
    Ok(Json(core.history(&match_id)?.to_vec()))
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

/// The `sendMessage` intent: appends and refreshes the match's last-message
/// cache in one step.
pub async fn send_message(
    State(ctx): State<AppContext>,
    Path(match_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> CoreResult<Json<Message>> {
    let text = req.text.trim().to_string();
    if text.is_empty() {
        return Err(CoreError::Validation("message text is empty".into()));
    }

    let mut core = ctx.core.write().await;
    let message = core.send_message(&match_id, text)?;
    Ok(Json(message))
}

/// Cozy date suggestion for an existing match. Generation runs outside the
/// state lock and always resolves, via fallback if need be.
pub async fn date_idea(
    State(ctx): State<AppContext>,
    Path(match_id): Path<String>,
) -> CoreResult<Json<DateIdea>> {
    let (actor, other) = {
        let core = ctx.core.read().await;
        let actor = core.actor()?.clone();
        let record = core.match_by_id(&match_id)?;
        let other_id = record.other_user(&actor.id).to_string();
        let other = core
            .profile(&other_id)
            .cloned()
            .ok_or(CoreError::InvalidProfile(other_id))?;
        (actor, other)
    };

    let idea = ctx.generation.date_idea(&actor, &other).await;
    Ok(Json(idea))
}
