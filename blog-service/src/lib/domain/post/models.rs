use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::post::errors::PostFieldError;
use crate::domain::post::errors::PostIdError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;

/// Blog post entity.
///
/// `author` is only filled in by the paginated listing, which joins the
/// author's public identity. Every other read leaves it `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
}

/// Public identity of a post's author. Never carries credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
}

/// Post unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(title: String) -> Result<Self, PostFieldError> {
        if title.is_empty() {
            return Err(PostFieldError::EmptyTitle);
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(content: String) -> Result<Self, PostFieldError> {
        if content.is_empty() {
            return Err(PostFieldError::EmptyContent);
        }
        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to publish a new post
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
}

/// Post as handed to storage; `created_at` is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub author_id: UserId,
}

/// Window over the post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;

    /// Clamp caller-supplied values into a safe window.
    ///
    /// A missing or non-positive limit falls back to the default, a limit
    /// above the maximum is capped, and a missing or negative offset is 0.
    pub fn clamped(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = match limit {
            Some(limit) if limit < 1 => Self::DEFAULT_LIMIT,
            Some(limit) => limit.min(Self::MAX_LIMIT),
            None => Self::DEFAULT_LIMIT,
        };
        let offset = offset.unwrap_or(0).max(0);

        Self { limit, offset }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::clamped(None, None)
    }
}
