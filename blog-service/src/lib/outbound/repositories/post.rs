use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Author;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Pagination;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = PostError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId(row.id),
            title: PostTitle::new(row.title)?,
            content: PostContent::new(row.content)?,
            author_id: UserId(row.author_id),
            author: None,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostWithAuthorRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_name: String,
    author_email: String,
}

impl TryFrom<PostWithAuthorRow> for Post {
    type Error = PostError;

    fn try_from(row: PostWithAuthorRow) -> Result<Self, Self::Error> {
        let author = Author {
            id: UserId(row.post.author_id),
            name: UserName::new(row.author_name)
                .map_err(|e| PostError::DatabaseError(e.to_string()))?,
            email: EmailAddress::new(row.author_email)
                .map_err(|e| PostError::DatabaseError(e.to_string()))?,
        };

        let mut post = Post::try_from(row.post)?;
        post.author = Some(author);
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (id, title, content, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, author_id, created_at
            "#,
        )
        .bind(post.id.0)
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.author_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            // Author removed between the existence check and the insert.
            Some(db_err) if db_err.is_foreign_key_violation() => {
                PostError::AuthorNotFound(post.author_id.to_string())
            }
            _ => PostError::DatabaseError(e.to_string()),
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.map(Post::try_from).transpose()
    }

    async fn find_many(&self, pagination: Pagination) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT
                p.id,
                p.title,
                p.content,
                p.author_id,
                p.created_at,
                u.name AS author_name,
                u.email AS author_email
            FROM posts p
            JOIN users u ON p.author_id = u.id
            ORDER BY p.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn find_all_by_author(&self, author_id: &UserId) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(author_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
