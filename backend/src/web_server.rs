// --- File: backend/src/web_server.rs ---

use std::any::Any;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::doc::ApiDoc;
use crate::error::AppError;
use crate::store::{InMemoryQuestionStore, InMemoryUserStore, QuestionStore, UserStore};
use crate::{auth, questions, seed};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub questions: Arc<dyn QuestionStore>,
    pub app_config: AppConfig,
}

impl AppState {
    /// In-memory stores, seeded with the demo data if the config asks for it.
    pub fn in_memory(app_config: AppConfig) -> Self {
        let (users, questions) = if app_config.seed_demo_data {
            (
                InMemoryUserStore::with_users(seed::demo_users()),
                InMemoryQuestionStore::with_questions(seed::demo_questions()),
            )
        } else {
            (InMemoryUserStore::new(), InMemoryQuestionStore::new())
        };

        Self {
            users: Arc::new(users),
            questions: Arc::new(questions),
            app_config,
        }
    }
}

pub async fn run_server(app_state: AppState) -> anyhow::Result<()> {
    let web = app_state.app_config.web.clone();
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind((web.addr.as_str(), web.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", web.addr, web.port))?;
    tracing::info!("Serving API at http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

pub fn create_router(app_state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/profile", get(auth::get_profile));

    let question_routes = Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{id}", get(questions::get_question))
        .route("/health", get(questions::health_check));

    let cors = cors_layer(&app_state.app_config.web.cors_origin);
    let static_dir = app_state.app_config.web.static_dir.clone();

    let router = Router::new()
        .merge(auth_routes)
        .merge(question_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let router = match static_dir {
        Some(dir) => {
            tracing::info!("Serving static files from {}", dir);
            router.fallback_service(ServeDir::new(dir))
        }
        None => router.fallback(not_found),
    };

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin);
    }

    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin),
        Err(e) => {
            tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
            CorsLayer::new()
        }
    }
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Turns a caught handler panic into the generic 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalServerError(format!("handler panicked: {detail}")).into_response()
}
