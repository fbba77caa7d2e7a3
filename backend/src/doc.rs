//! OpenAPI document served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::{auth, questions};

#[derive(OpenApi)]
#[openapi(
    info(title = "StackIt Q&A API"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_profile,
        questions::list_questions,
        questions::get_question,
        questions::create_question,
        questions::health_check,
    ),
    components(schemas(
        common::UserDto,
        common::AuthTokens,
        common::AuthResponse,
        common::RegisterRequest,
        common::LoginRequest,
        common::AuthorSnapshot,
        common::TagDto,
        common::QuestionDto,
        common::CreateQuestionRequest,
        common::PaginationDto,
        common::QuestionListResponse,
        common::MessageResponse,
        common::HealthResponse,
        common::ErrorBody,
        common::ErrorEnvelope,
    )),
    tags(
        (name = "auth", description = "Account directory"),
        (name = "questions", description = "Question catalog"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
