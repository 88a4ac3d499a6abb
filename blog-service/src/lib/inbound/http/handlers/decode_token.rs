use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::required_param;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::QueryParams;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// Resolve a token back to the user it was issued for.
pub async fn decode_token<US: UserServicePort, PS: PostServicePort>(
    State(state): State<AppState<US, PS>>,
    QueryParams(query): QueryParams<TokenQuery>,
) -> Result<ApiSuccess<DecodeTokenResponseData>, ApiError> {
    let token = required_param(query.token, "token")?;

    let user = state.user_service.decode_token(&token).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DecodeTokenResponseData {
            message: "token decoded".to_string(),
            user: UserData::from(&user),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeTokenResponseData {
    pub message: String,
    pub user: UserData,
}
