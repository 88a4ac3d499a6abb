mod common;

use blog_service::domain::post::errors::PostError;
use blog_service::domain::post::models::NewPost;
use blog_service::domain::post::models::Pagination;
use blog_service::domain::post::models::PostContent;
use blog_service::domain::post::models::PostId;
use blog_service::domain::post::models::PostTitle;
use blog_service::domain::post::ports::PostRepository;
use blog_service::domain::user::errors::UserError;
use blog_service::domain::user::models::EmailAddress;
use blog_service::domain::user::models::User;
use blog_service::domain::user::models::UserChanges;
use blog_service::domain::user::models::UserId;
use blog_service::domain::user::models::UserName;
use blog_service::domain::user::ports::UserRepository;
use blog_service::outbound::repositories::PostgresPostRepository;
use blog_service::outbound::repositories::PostgresUserRepository;
use common::TestDb;

fn user(name: &str, email: &str) -> User {
    User {
        id: UserId::new(),
        name: UserName::new(name.to_string()).unwrap(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: Some(format!("hash-of-{}", name)),
    }
}

fn new_post(title: &str, author_id: UserId) -> NewPost {
    NewPost {
        id: PostId::new(),
        title: PostTitle::new(title.to_string()).unwrap(),
        content: PostContent::new(format!("{} body", title)).unwrap(),
        author_id,
    }
}

#[tokio::test]
async fn test_find_by_id_never_loads_password() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());
    let ann = repository.create(user("Ann", "ann@example.com")).await.unwrap();

    let by_id = repository.find_by_id(&ann.id).await.unwrap().unwrap();
    assert_eq!(by_id.password_hash, None);
    assert_eq!(by_id.name.as_str(), "Ann");

    let by_email = repository
        .find_by_email(&ann.email)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.password_hash.as_deref(), Some("hash-of-Ann"));
}

#[tokio::test]
async fn test_find_missing_user() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());

    assert_eq!(repository.find_by_id(&UserId::new()).await.unwrap(), None);
    let email = EmailAddress::new("nobody@example.com".to_string()).unwrap();
    assert_eq!(repository.find_by_email(&email).await.unwrap(), None);
}

#[tokio::test]
async fn test_create_duplicate_email() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());
    repository.create(user("Ann", "ann@example.com")).await.unwrap();

    let result = repository.create(user("Other", "ann@example.com")).await;

    assert!(matches!(result, Err(UserError::EmailAlreadyExists(email)) if email == "ann@example.com"));
}

#[tokio::test]
async fn test_update_keeps_absent_fields() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());
    let ann = repository.create(user("Ann", "ann@example.com")).await.unwrap();

    let updated = repository
        .update(
            &ann.id,
            UserChanges {
                name: Some(UserName::new("Annie".to_string()).unwrap()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name.as_str(), "Annie");
    assert_eq!(updated.email.as_str(), "ann@example.com");
    assert_eq!(updated.password_hash.as_deref(), Some("hash-of-Ann"));

    let updated = repository
        .update(
            &ann.id,
            UserChanges {
                password_hash: Some("rotated".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name.as_str(), "Annie");
    assert_eq!(updated.password_hash.as_deref(), Some("rotated"));
}

#[tokio::test]
async fn test_update_to_taken_email() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());
    repository.create(user("Ann", "ann@example.com")).await.unwrap();
    let bob = repository.create(user("Bob", "bob@example.com")).await.unwrap();

    let result = repository
        .update(
            &bob.id,
            UserChanges {
                email: Some(EmailAddress::new("ann@example.com".to_string()).unwrap()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
}

#[tokio::test]
async fn test_update_missing_user() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());

    let result = repository
        .update(&UserId::new(), UserChanges::default())
        .await;

    assert!(matches!(result, Err(UserError::NotFound(_))));
}

#[tokio::test]
async fn test_create_post_for_missing_author() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresPostRepository::new(db.pool.clone());

    let result = repository.create(new_post("Hello", UserId::new())).await;

    assert!(matches!(result, Err(PostError::AuthorNotFound(_))));
}

#[tokio::test]
async fn test_find_many_joins_author_newest_first() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    let posts = PostgresPostRepository::new(db.pool.clone());
    let ann = users.create(user("Ann", "ann@example.com")).await.unwrap();

    for title in ["First", "Second", "Third"] {
        posts.create(new_post(title, ann.id)).await.unwrap();
    }

    let page = posts.find_many(Pagination::default()).await.unwrap();
    let titles: Vec<&str> = page.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Third", "Second", "First"]);

    let author = page[0].author.as_ref().unwrap();
    assert_eq!(author.id, ann.id);
    assert_eq!(author.name.as_str(), "Ann");
    assert_eq!(author.email.as_str(), "ann@example.com");

    let page = posts
        .find_many(Pagination {
            limit: 1,
            offset: 1,
        })
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].title.as_str(), "Second");
}

#[tokio::test]
async fn test_find_all_by_author_and_cascade() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    let posts = PostgresPostRepository::new(db.pool.clone());
    let ann = users.create(user("Ann", "ann@example.com")).await.unwrap();
    let bob = users.create(user("Bob", "bob@example.com")).await.unwrap();

    posts.create(new_post("Ann 1", ann.id)).await.unwrap();
    posts.create(new_post("Ann 2", ann.id)).await.unwrap();
    posts.create(new_post("Bob 1", bob.id)).await.unwrap();

    let by_ann = posts.find_all_by_author(&ann.id).await.unwrap();
    assert_eq!(by_ann.len(), 2);
    assert_eq!(by_ann[0].title.as_str(), "Ann 2");
    assert!(by_ann.iter().all(|p| p.author.is_none()));

    users.delete(&ann.id).await.unwrap();
    assert!(posts.find_all_by_author(&ann.id).await.unwrap().is_empty());
    assert_eq!(posts.find_all_by_author(&bob.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_post_is_unconditional() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let users = PostgresUserRepository::new(db.pool.clone());
    let posts = PostgresPostRepository::new(db.pool.clone());
    let ann = users.create(user("Ann", "ann@example.com")).await.unwrap();
    let post = posts.create(new_post("Hello", ann.id)).await.unwrap();

    posts.delete(&post.id).await.unwrap();
    assert_eq!(posts.find_by_id(&post.id).await.unwrap(), None);

    posts.delete(&PostId::new()).await.unwrap();
}
