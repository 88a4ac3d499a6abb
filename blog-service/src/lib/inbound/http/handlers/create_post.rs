use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn create_post<US: UserServicePort, PS: PostServicePort>(
    State(state): State<AppState<US, PS>>,
    JsonBody(body): JsonBody<CreatePostRequest>,
) -> Result<ApiSuccess<CreatePostResponseData>, ApiError> {
    state
        .post_service
        .create_post(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

/// HTTP request body for publishing a post (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    title: String,
    content: String,
    author_id: String,
}

impl CreatePostRequest {
    fn try_into_command(self) -> Result<CreatePostCommand, PostError> {
        let title = PostTitle::new(self.title)?;
        let content = PostContent::new(self.content)?;
        // An author reference that cannot name a user is the same as one
        // naming a user that does not exist.
        let author_id = UserId::from_string(&self.author_id)
            .map_err(|_| PostError::AuthorNotFound(self.author_id.clone()))?;

        Ok(CreatePostCommand {
            title,
            content,
            author_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePostResponseData {
    pub message: String,
    pub post: PostData,
}

impl From<&Post> for CreatePostResponseData {
    fn from(post: &Post) -> Self {
        Self {
            message: "post created".to_string(),
            post: PostData::from(post),
        }
    }
}
