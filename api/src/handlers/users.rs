//! User handlers
//!
//! CRUD endpoints for the user resource.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{SaveUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::AppError;
use crate::AppState;

/// Request body for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Must be absent or null; ids are assigned by the server
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// JSON representation of a user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.0,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
        }
    }
}

impl From<CreateUserRequest> for SaveUser {
    fn from(request: CreateUserRequest) -> Self {
        let user = SaveUser::new(request.first_name, request.last_name, request.phone);
        // A supplied id is kept so the service can reject it
        match request.id {
            Some(id) => user.with_id(UserId(id)),
            None => user,
        }
    }
}

fn parse_user_id(path: Result<Path<i64>, PathRejection>) -> Result<UserId, AppError> {
    let Path(id) = path?;
    Ok(UserId::try_from(id)?)
}

/// GET /users
///
/// List all users.
pub async fn list_users<R: UserRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/:id
///
/// Get a single user.
pub async fn get_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_user_id(path)?;

    let user = state
        .user_service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok(Json(user.into()))
}

/// POST /users
///
/// Create a user. The response carries the id assigned by the repository.
pub async fn create_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Json(request) = body?;

    let user = state.user_service.create(request.into()).await?;

    Ok(Json(user.into()))
}

/// DELETE /users/:id
///
/// Delete a user. Returns 200 whether or not the user existed.
pub async fn delete_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_user_id(path)?;

    state.user_service.delete(id).await?;

    Ok(StatusCode::OK)
}
