use axum::{extract::State, http::StatusCode, Json};
use common::{AuthResponse, AuthTokens, LoginRequest, MessageResponse, RegisterRequest, UserDto};
use validator::Validate;

use crate::error::AppError;
use crate::extractors::AppJson;
use crate::store::{NewUser, UserRecord};
use crate::web_server::AppState;

// No token issuance exists yet; every session gets the same placeholders.
pub const PLACEHOLDER_ACCESS_TOKEN: &str = "mock_access_token";
pub const PLACEHOLDER_REFRESH_TOKEN: &str = "mock_refresh_token";

const REGISTER_FIELDS_REQUIRED: &str = "Email, password, and name are required";
const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";

fn placeholder_tokens() -> AuthTokens {
    AuthTokens {
        access_token: PLACEHOLDER_ACCESS_TOKEN.to_string(),
        refresh_token: PLACEHOLDER_REFRESH_TOKEN.to_string(),
    }
}

fn auth_response(user: &UserRecord) -> AuthResponse {
    AuthResponse {
        user: user.to_dto(),
        tokens: placeholder_tokens(),
    }
}

fn invalid(message: &str, errors: &validator::ValidationErrors) -> AppError {
    tracing::debug!("Validation failed: {}", errors);
    AppError::ValidationError(message.to_string())
}

// --- API Handlers ---

/// ## Register a new user
/// Stores the user and returns it together with placeholder tokens.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created successfully", body = AuthResponse),
        (status = 400, description = "Email, password, or name missing", body = common::ErrorEnvelope),
        (status = 409, description = "User with this email already exists", body = common::ErrorEnvelope),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<AppJson<RegisterRequest>, AppError>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let AppJson(payload) = payload.map_err(|e| e.or_required(REGISTER_FIELDS_REQUIRED))?;
    payload
        .validate()
        .map_err(|e| invalid(REGISTER_FIELDS_REQUIRED, &e))?;
    let (Some(email), Some(password), Some(name)) = (payload.email, payload.password, payload.name)
    else {
        return Err(AppError::ValidationError(REGISTER_FIELDS_REQUIRED.to_string()));
    };

    tracing::info!("Registering user with email: {}", &email);
    let user = state.users.insert(NewUser {
        email,
        name,
        password,
    })?;
    tracing::info!("Registered user {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, Json(auth_response(&user))))
}

/// ## Login an existing user
/// Checks the password by exact comparison and returns placeholder tokens.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Email or password missing", body = common::ErrorEnvelope),
        (status = 401, description = "Invalid email or password", body = common::ErrorEnvelope),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<AppJson<LoginRequest>, AppError>,
) -> Result<Json<AuthResponse>, AppError> {
    let AppJson(payload) = payload.map_err(|e| e.or_required(LOGIN_FIELDS_REQUIRED))?;
    payload
        .validate()
        .map_err(|e| invalid(LOGIN_FIELDS_REQUIRED, &e))?;
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(AppError::ValidationError(LOGIN_FIELDS_REQUIRED.to_string()));
    };

    tracing::info!("Logging in user with email: {}", &email);
    let user = state
        .users
        .find_by_email(&email)?
        .filter(|user| user.password_matches(&password))
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(auth_response(&user)))
}

// --- Logout Handler ---
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logout successful", body = MessageResponse),
    )
)]
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    })
}

/// ## Current user profile
/// Without real sessions the "current" user is the first one registered.
#[utoipa::path(
    get,
    path = "/auth/profile",
    tag = "auth",
    responses(
        (status = 200, description = "Profile of the current user", body = UserDto),
        (status = 404, description = "User not found", body = common::ErrorEnvelope),
    )
)]
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<UserDto>, AppError> {
    let user = state
        .users
        .first()?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.to_dto()))
}
