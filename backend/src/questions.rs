use axum::{extract::State, http::StatusCode, Json};
use common::{
    AuthorSnapshot, CreateQuestionRequest, HealthResponse, ListQuestionsQuery, QuestionDto,
    QuestionListResponse,
};
use validator::Validate;

use crate::catalog::{self, ListParams};
use crate::error::AppError;
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::store::NewQuestion;
use crate::web_server::AppState;

pub const SERVICE_NAME: &str = "StackIt Q&A Platform";

// New questions are attributed to this identity until sessions exist.
const SUBMITTER_ID: i64 = 1;
const SUBMITTER_NAME: &str = "Current User";
const SUBMITTER_REPUTATION: i64 = 100;
const SUBMITTED_AT: &str = "2024-01-16T12:00:00Z";

const QUESTION_FIELDS_REQUIRED: &str = "Title and description are required";

/// ## List questions
/// Search, sort and paginate the catalog.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(ListQuestionsQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 400, description = "Malformed query string", body = common::ErrorEnvelope),
    )
)]
pub async fn list_questions(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuestionsQuery>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let params = ListParams::from_query(query, &state.app_config.catalog);
    tracing::info!(
        "Listing questions: page={} limit={} search={:?} sort={:?}/{:?}",
        params.page,
        params.limit,
        params.search,
        params.sort_by,
        params.sort_order
    );

    let snapshot = state.questions.all()?;
    Ok(Json(catalog::list_questions(snapshot, &params)))
}

#[utoipa::path(
    get,
    path = "/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "The question", body = QuestionDto),
        (status = 404, description = "Question not found", body = common::ErrorEnvelope),
    )
)]
pub async fn get_question(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<QuestionDto>, AppError> {
    tracing::info!("Fetching question with id: {}", id);

    state
        .questions
        .get(id)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Question not found".to_string()))
}

/// ## Ask a question
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = QuestionDto),
        (status = 400, description = "Title or description missing", body = common::ErrorEnvelope),
    )
)]
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<AppJson<CreateQuestionRequest>, AppError>,
) -> Result<(StatusCode, Json<QuestionDto>), AppError> {
    let AppJson(payload) = payload.map_err(|e| e.or_required(QUESTION_FIELDS_REQUIRED))?;
    payload.validate().map_err(|e| {
        tracing::debug!("Validation failed: {}", e);
        AppError::ValidationError(QUESTION_FIELDS_REQUIRED.to_string())
    })?;
    let (Some(title), Some(description)) = (payload.title, payload.description) else {
        return Err(AppError::ValidationError(QUESTION_FIELDS_REQUIRED.to_string()));
    };

    let created = state.questions.insert(NewQuestion {
        title,
        description,
        author: AuthorSnapshot {
            id: SUBMITTER_ID,
            name: SUBMITTER_NAME.to_string(),
            reputation: SUBMITTER_REPUTATION,
        },
        tags: payload.tags.unwrap_or_default(),
        created_at: SUBMITTED_AT.to_string(),
    })?;
    tracing::info!("Created question {}: {}", created.id, created.title);

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
