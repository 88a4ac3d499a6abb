use axum::extract::State;
use axum::http::StatusCode;

use super::required_param;
use super::ApiError;
use super::ApiSuccess;
use super::IdQuery;
use super::MessageData;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::QueryParams;
use crate::inbound::http::router::AppState;

/// Succeeds whether or not the post existed.
pub async fn delete_post<US: UserServicePort, PS: PostServicePort>(
    State(state): State<AppState<US, PS>>,
    QueryParams(query): QueryParams<IdQuery>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let id = required_param(query.id, "id")?;
    let post_id =
        PostId::from_string(&id).map_err(|_| ApiError::BadRequest("invalid id".to_string()))?;

    state.post_service.delete_post(&post_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("post deleted"),
    ))
}
