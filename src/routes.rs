// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{auth, dashboard, generate, profile, quiz, subject, topic},
    state::AppState,
    utils::{guard::page_guard, jwt::auth_middleware},
};

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Assembles the main application router.
///
/// * `/api/ai` and `/api/auth` are public.
/// * Every other `/api` group requires a session (bearer token or cookie).
/// * Everything else is the static frontend behind the page guard.
pub fn create_router(state: AppState) -> Router {
    let ai_routes = Router::new()
        .route("/generate-topic", post(generate::generate_topic))
        .route("/generate-summary", post(generate::generate_summary))
        .route("/generate-quiz", post(generate::generate_quiz));

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout));

    let subject_routes = Router::new()
        .route("/", get(subject::list_subjects).post(subject::create_subject))
        .route("/{id}", delete(subject::delete_subject));

    let topic_routes = Router::new()
        .route("/", get(topic::list_topics).post(topic::create_topic))
        .route("/{id}", get(topic::get_topic).delete(topic::delete_topic))
        .route("/{id}/summary", post(topic::generate_summary));

    let quiz_routes = Router::new()
        .route("/", get(quiz::list_quizzes).post(quiz::create_quiz))
        .route("/{id}", get(quiz::get_quiz))
        .route("/{id}/attempts", post(quiz::submit_attempt));

    let protected_routes = Router::new()
        .route("/api/profile/me", get(profile::get_me))
        .route("/api/attempts", get(quiz::list_attempts))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .nest("/api/subjects", subject_routes)
        .nest("/api/topics", topic_routes)
        .nest("/api/quizzes", quiz_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let pages = Router::new()
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(middleware::from_fn_with_state(state.config.clone(), page_guard));

    let cors = cors_layer(&state.config);

    Router::new()
        .nest("/api/ai", ai_routes)
        .nest("/api/auth", auth_routes)
        .merge(protected_routes)
        .with_state(state)
        .fallback_service(pages)
        // Global Middleware (applied from outside in)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}
