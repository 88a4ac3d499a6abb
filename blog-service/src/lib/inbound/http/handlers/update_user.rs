use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::required_param;
use super::ApiError;
use super::ApiSuccess;
use super::IdQuery;
use super::UserData;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::extract::QueryParams;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        let name = self.name.map(UserName::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        // An empty password means "keep the current one".
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .map(Password::new)
            .transpose()?;

        Ok(UpdateUserCommand {
            name,
            email,
            password,
        })
    }
}

pub async fn update_user<US: UserServicePort, PS: PostServicePort>(
    State(state): State<AppState<US, PS>>,
    QueryParams(query): QueryParams<IdQuery>,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> Result<ApiSuccess<UpdateUserResponseData>, ApiError> {
    let id = required_param(query.id, "id")?;
    let user_id =
        UserId::from_string(&id).map_err(|_| ApiError::BadRequest("invalid id".to_string()))?;
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateUserResponseData {
    pub message: String,
    pub user: UserData,
}

impl From<&User> for UpdateUserResponseData {
    fn from(user: &User) -> Self {
        Self {
            message: "user updated".to_string(),
            user: UserData::from(user),
        }
    }
}
