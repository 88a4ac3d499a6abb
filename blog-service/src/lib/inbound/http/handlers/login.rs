use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Exchange email and password for a token.
///
/// Answers 201 like registration does, since a new token is minted.
pub async fn login<US: UserServicePort, PS: PostServicePort>(
    State(state): State<AppState<US, PS>>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .login(command)
        .await
        .map_err(ApiError::from)
        .map(|ref logged_in| ApiSuccess::new(StatusCode::CREATED, logged_in.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, UserError> {
        Ok(LoginCommand {
            email: EmailAddress::new(self.email)?,
            password: Password::new(self.password)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub user: UserData,
    pub token: String,
}

impl From<&AuthenticatedUser> for LoginResponseData {
    fn from(logged_in: &AuthenticatedUser) -> Self {
        Self {
            message: "user logged in".to_string(),
            user: UserData::from(&logged_in.user),
            token: logged_in.token.clone(),
        }
    }
}
