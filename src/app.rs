use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::handlers;

/// Per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(handlers::home::root))
        .route("/health", get(handlers::home::health))
        .merge(person_routes())
        .merge(event_routes())
        .merge(routine_template_routes())
        .merge(day_routine_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn person_routes() -> Router<AppState> {
    use handlers::person;

    Router::new()
        .route(
            "/pessoa",
            post(person::person_post)
                .get(person::person_get)
                .delete(person::person_delete),
        )
        .route("/pessoas", get(person::person_list))
}

fn event_routes() -> Router<AppState> {
    use handlers::event;

    Router::new().route("/evento", post(event::event_post).delete(event::event_delete))
}

fn routine_template_routes() -> Router<AppState> {
    use handlers::routine_template;

    Router::new()
        .route(
            "/rotinapadrao",
            post(routine_template::routine_template_post).delete(routine_template::routine_template_delete),
        )
        .route("/rotinaspadrao", get(routine_template::routine_template_list))
}

fn day_routine_routes() -> Router<AppState> {
    use handlers::day_routine;

    Router::new()
        .route(
            "/rotinadia",
            post(day_routine::day_routine_post).delete(day_routine::day_routine_delete),
        )
        .route("/rotinasdia", post(day_routine::day_routine_on_date))
        .route("/rotinasdia-data", post(day_routine::day_routine_since))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}
