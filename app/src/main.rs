use axum::http::{HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use hygge::services::GenerationService;
use hygge::state::{demo_roster, CoreState};
use hygge::utils::SessionStore;
use hygge::{handlers, utils, AppContext, Config};
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    utils::init_logging();

    let config = Config::from_env()?;

    let session = SessionStore::new(config.session_file.clone());
    let mut core = CoreState::new(demo_roster());
    if let Some(profile) = session.load() {
        tracing::info!("restored session for {}", profile.id);
        core.sign_in(profile);
    }

    let generation = GenerationService::new(config.gemini_api_key.clone());
    let context = AppContext::new(core, generation, session);

    let port = config.port;
    let app = create_router(context, config);

    let listener = tokio::net::TcpListener::bind(&format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Server running on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(context: AppContext, config: Config) -> Router {
    let cors_layer = create_cors_layer(&config);

    Router::new()
        .route("/health", get(health_check))
        // Signed-in profile & edit session
        .route("/api/me", get(handlers::profile::me))
        .route("/api/onboarding/begin", post(handlers::profile::begin_onboarding))
        .route("/api/edit/begin", post(handlers::profile::begin_edit))
        .route("/api/edit/mutate", post(handlers::profile::mutate_edit))
        .route("/api/edit/commit", post(handlers::profile::commit_edit))
        .route("/api/edit/cancel", post(handlers::profile::cancel_edit))
        .route("/api/logout", post(handlers::profile::logout))
        // Discovery deck
        .route("/api/deck", get(handlers::deck::deck_view))
        .route("/api/deck/like", post(handlers::deck::like_current))
        .route("/api/deck/pass", post(handlers::deck::pass_current))
        // Matches & conversations
        .route("/api/matches", get(handlers::matches::list_matches))
        .route("/api/matches/{id}/open", post(handlers::matches::open_conversation))
        .route(
            "/api/matches/{id}/messages",
            get(handlers::matches::history).post(handlers::matches::send_message),
        )
        .route("/api/matches/{id}/date-idea", post(handlers::matches::date_idea))
        .layer(cors_layer)
        .with_state(context)
}

fn create_cors_layer(_config: &Config) -> CorsLayer {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    // Check if ALLOWED_ORIGINS environment variable is set for multiple domains
    if let Ok(cors_origins) = std::env::var("ALLOWED_ORIGINS") {
        let origins: Vec<HeaderValue> = cors_origins
            .split(',')
            .filter_map(|origin| {
                let trimmed = origin.trim();
                if !trimmed.is_empty() {
                    trimmed.parse().ok()
                } else {
                    None
                }
            })
            .collect();

        if !origins.is_empty() {
            cors = cors.allow_origin(origins);
        } else {
            // Fallback to permissive if parsing fails
            cors = cors.allow_origin(Any);
        }
    } else {
        // Default to permissive for development
        cors = cors.allow_origin(Any);
    }

    cors
}

async fn health_check() -> &'static str {
    "OK"
}
