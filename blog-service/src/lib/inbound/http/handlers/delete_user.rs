use axum::extract::State;
use axum::http::StatusCode;

use super::required_param;
use super::ApiError;
use super::ApiSuccess;
use super::IdQuery;
use super::MessageData;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::QueryParams;
use crate::inbound::http::router::AppState;

pub async fn delete_user<US: UserServicePort, PS: PostServicePort>(
    State(state): State<AppState<US, PS>>,
    QueryParams(query): QueryParams<IdQuery>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let id = required_param(query.id, "id")?;
    let user_id =
        UserId::from_string(&id).map_err(|_| ApiError::BadRequest("invalid id".to_string()))?;

    state
        .user_service
        .delete_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageData::new("user deleted")))
}
