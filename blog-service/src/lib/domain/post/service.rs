use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Pagination;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Concrete implementation of PostServicePort.
///
/// Author existence is checked through the user service before insert. The
/// check and the insert are separate round-trips.
pub struct PostService<PR, US>
where
    PR: PostRepository,
    US: UserServicePort,
{
    repository: Arc<PR>,
    user_service: Arc<US>,
}

impl<PR, US> PostService<PR, US>
where
    PR: PostRepository,
    US: UserServicePort,
{
    pub fn new(repository: Arc<PR>, user_service: Arc<US>) -> Self {
        Self {
            repository,
            user_service,
        }
    }
}

#[async_trait]
impl<PR, US> PostServicePort for PostService<PR, US>
where
    PR: PostRepository,
    US: UserServicePort,
{
    async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostError> {
        self.user_service
            .get_user(&command.author_id)
            .await
            .map_err(|e| match e {
                UserError::NotFound(id) => PostError::AuthorNotFound(id),
                other => PostError::DatabaseError(other.to_string()),
            })?;

        let post = NewPost {
            id: PostId::new(),
            title: command.title,
            content: command.content,
            author_id: command.author_id,
        };

        let created_post = self.repository.create(post).await?;

        tracing::info!(post_id = %created_post.id, author_id = %created_post.author_id, "Post created");

        Ok(created_post)
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))
    }

    async fn list_posts(&self, pagination: Pagination) -> Result<Vec<Post>, PostError> {
        self.repository.find_many(pagination).await
    }

    async fn list_posts_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError> {
        self.repository.find_all_by_author(author_id).await
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), PostError> {
        self.repository.delete(id).await
    }
}
