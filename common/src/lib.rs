//! Wire types shared between the StackIt backend and its clients.
//!
//! Everything here is what goes over HTTP. Backend-internal records (for
//! example the user record that still carries its password) live in the
//! backend crate and are converted into these types at the boundary.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// --- Accounts ---

/// A user as exposed by the API. Never carries the password.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub reputation: i64,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Body returned by register and login.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserDto,
    pub tokens: AuthTokens,
}

// Fields are optional so that a missing field reaches validation and gets the
// endpoint's own 400 message instead of a deserialization rejection.
#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, Default)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, Default)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

// --- Questions ---

/// Snapshot of the author taken when the question was created.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct AuthorSnapshot {
    pub id: i64,
    pub name: String,
    pub reputation: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: AuthorSnapshot,
    pub tags: Vec<TagDto>,
    pub vote_count: i64,
    pub answer_count: i64,
    pub view_count: i64,
    pub is_resolved: bool,
    /// ISO-8601 timestamp, compared as a plain string when sorting.
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, Default)]
pub struct CreateQuestionRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    pub tags: Option<Vec<TagDto>>,
}

/// Query string accepted by `GET /questions`.
#[derive(Serialize, Deserialize, IntoParams, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuestionsQuery {
    /// 1-based page number; values below 1 are treated as 1.
    pub page: Option<i64>,
    /// Page size; values below 1 are treated as 1.
    pub limit: Option<i64>,
    /// Case-insensitive substring matched against title and description.
    pub search: Option<String>,
    /// `voteCount`, `answerCount`, `viewCount` or `createdAt` (default).
    pub sort_by: Option<String>,
    /// `desc` (default) or anything else for ascending.
    pub sort_order: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionDto>,
    pub pagination: PaginationDto,
}

// --- Misc ---

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

/// The `{"error": {"message": ...}}` envelope used by every failure response.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
            },
        }
    }
}
