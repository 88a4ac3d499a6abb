use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::required_param;
use super::ApiError;
use super::ApiSuccess;
use super::IdQuery;
use super::PostData;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::QueryParams;
use crate::inbound::http::router::AppState;

pub async fn get_post<US: UserServicePort, PS: PostServicePort>(
    State(state): State<AppState<US, PS>>,
    QueryParams(query): QueryParams<IdQuery>,
) -> Result<ApiSuccess<GetPostResponseData>, ApiError> {
    let id = required_param(query.id, "id")?;
    let post_id =
        PostId::from_string(&id).map_err(|_| ApiError::BadRequest("invalid id".to_string()))?;

    let post = state.post_service.get_post(&post_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        GetPostResponseData {
            message: "post found".to_string(),
            post: PostData::from(&post),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPostResponseData {
    pub message: String,
    pub post: PostData,
}
