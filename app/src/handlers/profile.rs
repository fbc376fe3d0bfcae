use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::{CoreError, CoreResult};
use crate::models::Profile;
use crate::state::EditField;
use crate::AppContext;

pub async fn me(State(ctx): State<AppContext>) -> CoreResult<Json<Profile>> {
    let core = ctx.core.read().await;
    Ok(Json(core.actor()?.clone()))
}

/// Starts the onboarding wizard over a blank draft.
pub async fn begin_onboarding(State(ctx): State<AppContext>) -> CoreResult<Json<Profile>> {
    let mut core = ctx.core.write().await;
    Ok(Json(core.begin_onboarding()?.clone()))
}

/// The `beginEdit` intent: opens a draft over the committed profile.
pub async fn begin_edit(State(ctx): State<AppContext>) -> CoreResult<Json<Profile>> {
    let mut core = ctx.core.write().await;
    Ok(Json(core.begin_edit()?.clone()))
}

/// The `mutateEdit` intent: one field mutation against the open draft.
pub async fn mutate_edit(
    State(ctx): State<AppContext>,
    Json(field): Json<EditField>,
) -> CoreResult<Json<Profile>> {
    let mut core = ctx.core.write().await;
    Ok(Json(core.mutate_edit(field)?.clone()))
}

/// The `commitEdit` intent: normalizes, replaces the committed profile, and
/// persists it to the session store.
pub async fn commit_edit(State(ctx): State<AppContext>) -> CoreResult<Json<Profile>> {
    let committed = {
        let mut core = ctx.core.write().await;
        core.commit_edit()?
    };
    ctx.session
        .save(&committed)
        .map_err(|e| CoreError::Persistence(e.to_string()))?;
    Ok(Json(committed))
}

/// The `cancelEdit` intent: drops the draft, committed profile untouched.
pub async fn cancel_edit(State(ctx): State<AppContext>) -> CoreResult<Json<Value>> {
    let mut core = ctx.core.write().await;
    core.cancel_edit()?;
    Ok(Json(json!({ "ok": true })))
}

/// Ends the session and clears the persisted profile.
pub async fn logout(State(ctx): State<AppContext>) -> CoreResult<Json<Value>> {
    ctx.session
        .clear()
        .map_err(|e| CoreError::Persistence(e.to_string()))?;
    let mut core = ctx.core.write().await;
    core.logout();
    Ok(Json(json!({ "ok": true })))
}
