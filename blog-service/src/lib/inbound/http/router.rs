use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_post::create_post;
use super::handlers::create_user::create_user;
use super::handlers::decode_token::decode_token;
use super::handlers::delete_post::delete_post;
use super::handlers::delete_user::delete_user;
use super::handlers::find_many_posts::find_many_posts;
use super::handlers::find_posts_by_author::find_posts_by_author;
use super::handlers::get_post::get_post;
use super::handlers::login::login;
use super::handlers::update_user::update_user;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;

pub struct AppState<US, PS> {
    pub user_service: Arc<US>,
    pub post_service: Arc<PS>,
}

impl<US, PS> Clone for AppState<US, PS> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            post_service: Arc::clone(&self.post_service),
        }
    }
}

pub fn create_router<US, PS>(user_service: Arc<US>, post_service: Arc<PS>) -> Router
where
    US: UserServicePort,
    PS: PostServicePort,
{
    let state = AppState {
        user_service,
        post_service,
    };

    let user_routes = Router::new()
        .route(
            "/user",
            post(create_user::<US, PS>)
                .patch(update_user::<US, PS>)
                .delete(delete_user::<US, PS>),
        )
        .route("/user/login", post(login::<US, PS>))
        .route("/user/decodeToken", get(decode_token::<US, PS>));

    let post_routes = Router::new()
        .route(
            "/post",
            post(create_post::<US, PS>)
                .get(get_post::<US, PS>)
                .delete(delete_post::<US, PS>),
        )
        .route("/post/findMany", get(find_many_posts::<US, PS>))
        .route(
            "/post/findAllByAuthor",
            get(find_posts_by_author::<US, PS>),
        );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(user_routes)
        .merge(post_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
