//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                // Static segments must precede `/{id}`.
                .service(
                    web::scope("/posts")
                        .route("/drafts", web::post().to(posts::create_draft))
                        .route("/drafts", web::get().to(posts::list_drafts))
                        .route("/drafts/{id}/publish", web::put().to(posts::publish_post))
                        .route("/published", web::get().to(posts::list_published))
                        .route("/search", web::get().to(posts::search_posts))
                        .route("/test", web::get().to(posts::deployment_page))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}", web::delete().to(posts::delete_post)),
                ),
        );
}
