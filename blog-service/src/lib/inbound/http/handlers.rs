use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Author;
use crate::domain::post::models::Post;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod create_post;
pub mod create_user;
pub mod decode_token;
pub mod delete_post;
pub mod delete_user;
pub mod find_many_posts;
pub mod find_posts_by_author;
pub mod get_post;
pub mod login;
pub mod update_user;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Uniform (status, message) failure surfaced to HTTP callers.
///
/// Domain errors are converted into this type once; the response is built
/// from `status()` and `message()` without further interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::InternalServerError(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::Unauthorized(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), message = %self.message(), "Request failed");
        }

        let body = ApiErrorData {
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound("user not found".to_string()),
            UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict("user already exists".to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized("wrong password".to_string()),
            UserError::InvalidToken(_) => ApiError::Unauthorized("invalid token".to_string()),
            UserError::InvalidUserId(_)
            | UserError::InvalidName(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::BadRequest(err.to_string()),
            UserError::Hashing(_) | UserError::TokenIssuance(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::AuthorNotFound(_) => {
                ApiError::BadRequest("author does not exist".to_string())
            }
            PostError::NotFound(_) => ApiError::NotFound("post not found".to_string()),
            PostError::InvalidPostId(_) | PostError::InvalidField(_) => {
                ApiError::BadRequest(err.to_string())
            }
            PostError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Success body that only carries a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// `?id=` query string shared by the single-resource endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Pull a mandatory query parameter, rejecting absent or empty values.
pub(crate) fn required_param(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("missing {}", name)))
}

/// Public view of a user. There is deliberately no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorData {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&Author> for AuthorData {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            name: author.name.as_str().to_string(),
            email: author.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorData>,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.as_str().to_string(),
            content: post.content.as_str().to_string(),
            author_id: post.author_id.to_string(),
            author: post.author.as_ref().map(AuthorData::from),
            created_at: post.created_at,
        }
    }
}
