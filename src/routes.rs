//! Route configuration.
//!
//! Probes and metrics are public; everything under /api/v1 requires the
//! gateway-injected identity header.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest};

use crate::error::AppError;
use crate::handlers;
use crate::metrics;
use crate::middleware::IdentityMiddleware;

/// Malformed query strings surface through the standard error envelope.
fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

/// Same for unparsable JSON bodies.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(handlers::health::health_check))
        .route(
            "/health/ready",
            web::get().to(handlers::health::readiness_check),
        )
        .route("/metrics", web::get().to(metrics::serve_metrics))
        .service(
            web::scope("/api/v1")
                .wrap(IdentityMiddleware)
                .service(
                    web::scope("/videos")
                        .route("", web::get().to(handlers::videos::list_videos))
                        .route("", web::post().to(handlers::videos::publish_video))
                        .route("/{videoId}", web::get().to(handlers::videos::get_video))
                        .route("/{videoId}", web::patch().to(handlers::videos::update_video))
                        .route(
                            "/{videoId}",
                            web::delete().to(handlers::videos::delete_video),
                        )
                        .route(
                            "/toggle/publish/{videoId}",
                            web::patch().to(handlers::videos::toggle_publish),
                        ),
                )
                .service(
                    web::scope("/comments")
                        .route(
                            "/{videoId}",
                            web::get().to(handlers::comments::list_video_comments),
                        )
                        .route("/{videoId}", web::post().to(handlers::comments::add_comment))
                        .route(
                            "/c/{commentId}",
                            web::patch().to(handlers::comments::update_comment),
                        )
                        .route(
                            "/c/{commentId}",
                            web::delete().to(handlers::comments::delete_comment),
                        ),
                )
                .service(
                    web::scope("/likes")
                        .route(
                            "/toggle/v/{videoId}",
                            web::post().to(handlers::likes::toggle_video_like),
                        )
                        .route(
                            "/toggle/c/{commentId}",
                            web::post().to(handlers::likes::toggle_comment_like),
                        )
                        .route(
                            "/toggle/t/{tweetId}",
                            web::post().to(handlers::likes::toggle_tweet_like),
                        )
                        .route("/videos", web::get().to(handlers::likes::list_liked_videos)),
                )
                .service(
                    web::scope("/playlists")
                        .route("", web::post().to(handlers::playlists::create_playlist))
                        .route(
                            "/user/{userId}",
                            web::get().to(handlers::playlists::list_user_playlists),
                        )
                        .route(
                            "/add/{videoId}/{playlistId}",
                            web::patch().to(handlers::playlists::add_video_to_playlist),
                        )
                        .route(
                            "/remove/{videoId}/{playlistId}",
                            web::patch().to(handlers::playlists::remove_video_from_playlist),
                        )
                        .route(
                            "/{playlistId}",
                            web::get().to(handlers::playlists::get_playlist),
                        )
                        .route(
                            "/{playlistId}",
                            web::patch().to(handlers::playlists::update_playlist),
                        )
                        .route(
                            "/{playlistId}",
                            web::delete().to(handlers::playlists::delete_playlist),
                        ),
                )
                .service(
                    web::scope("/subscriptions")
                        .route(
                            "/c/{channelId}",
                            web::post().to(handlers::subscriptions::toggle_subscription),
                        )
                        .route(
                            "/c/{channelId}",
                            web::get().to(handlers::subscriptions::list_channel_subscribers),
                        )
                        .route(
                            "/u/{subscriberId}",
                            web::get().to(handlers::subscriptions::list_subscribed_channels),
                        ),
                )
                .service(
                    web::scope("/tweets")
                        .route("", web::post().to(handlers::tweets::create_tweet))
                        .route(
                            "/user/{userId}",
                            web::get().to(handlers::tweets::list_user_tweets),
                        )
                        .route("/{tweetId}", web::patch().to(handlers::tweets::update_tweet))
                        .route(
                            "/{tweetId}",
                            web::delete().to(handlers::tweets::delete_tweet),
                        ),
                )
                .service(
                    web::scope("/dashboard")
                        .route("/stats", web::get().to(handlers::dashboard::channel_stats))
                        .route("/videos", web::get().to(handlers::dashboard::channel_videos)),
                ),
        );
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App, HttpResponse};

    use super::*;
    use crate::db::pagination::PageParams;
    use crate::handlers::tweets::TweetContentRequest;

    async fn paged_target(_page: web::Query<PageParams>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn body_target(_req: web::Json<TweetContentRequest>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_rt::test]
    async fn non_numeric_page_yields_the_error_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .route("/items", web::get().to(paged_target)),
        )
        .await;

        let req = test::TestRequest::get().uri("/items?page=abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], serde_json::json!(false));
        assert_eq!(body["statusCode"], serde_json::json!(400));
        assert!(body["errors"].as_array().unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn malformed_json_body_yields_the_error_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .route("/items", web::post().to(body_target)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/items")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], serde_json::json!(false));
        assert!(!body["message"].as_str().unwrap_or_default().is_empty());
    }
}
