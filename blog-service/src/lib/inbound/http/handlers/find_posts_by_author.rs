use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::required_param;
use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::QueryParams;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorQuery {
    pub author: Option<String>,
}

pub async fn find_posts_by_author<US: UserServicePort, PS: PostServicePort>(
    State(state): State<AppState<US, PS>>,
    QueryParams(query): QueryParams<AuthorQuery>,
) -> Result<ApiSuccess<FindPostsByAuthorResponseData>, ApiError> {
    let author = required_param(query.author, "author")?;
    let author_id =
        UserId::from_string(&author).map_err(|_| ApiError::BadRequest("invalid id".to_string()))?;

    let posts = state.post_service.list_posts_by_author(&author_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        FindPostsByAuthorResponseData {
            message: "posts found".to_string(),
            posts: posts.iter().map(PostData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindPostsByAuthorResponseData {
    pub message: String,
    pub posts: Vec<PostData>,
}
