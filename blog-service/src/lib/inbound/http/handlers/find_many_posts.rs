use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::post::models::Pagination;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::QueryParams;
use crate::inbound::http::router::AppState;

/// Raw `limit`/`offset` query values.
///
/// Kept as strings so that garbage falls back to the defaults instead of
/// failing the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationQuery {
    fn pagination(&self) -> Pagination {
        Pagination::clamped(parse_number(&self.limit), parse_number(&self.offset))
    }
}

fn parse_number(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|v| v.trim().parse().ok())
}

pub async fn find_many_posts<US: UserServicePort, PS: PostServicePort>(
    State(state): State<AppState<US, PS>>,
    QueryParams(query): QueryParams<PaginationQuery>,
) -> Result<ApiSuccess<FindManyPostsResponseData>, ApiError> {
    let posts = state.post_service.list_posts(query.pagination()).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        FindManyPostsResponseData {
            message: "posts found".to_string(),
            posts: posts.iter().map(PostData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindManyPostsResponseData {
    pub message: String,
    pub posts: Vec<PostData>,
}
