use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Pagination;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Publish a post for an existing author.
    ///
    /// # Errors
    /// * `AuthorNotFound` - `author_id` does not resolve to a user
    /// * `DatabaseError` - Database operation failed
    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError>;

    /// Retrieve post by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// Newest-first page of posts, each joined with its author.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self, pagination: Pagination) -> Result<Vec<Post>, PostError>;

    /// All posts written by `author_id`, newest first, without author details.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError>;

    /// Delete a post. Deleting an unknown id succeeds.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, id: &PostId) -> Result<(), PostError>;
}

/// Persistence operations for posts.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Insert a post; storage assigns `created_at`.
    async fn create(&self, post: NewPost) -> Result<Post, PostError>;

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Page of posts ordered by `created_at` descending with `author` set.
    async fn find_many(&self, pagination: Pagination) -> Result<Vec<Post>, PostError>;

    /// Posts by one author ordered by `created_at` descending.
    async fn find_all_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError>;

    /// Remove a post. Affecting zero rows is not an error.
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;
}
