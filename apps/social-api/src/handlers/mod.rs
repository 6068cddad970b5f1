//! HTTP handlers and route configuration.

mod posts;


use actix_web::web;

/// Configure all application routes.
///
/// Paths are matched exactly and the HTTP method is not inspected; any
/// unmatched path falls through to the default 404 with an empty body.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts.get", web::route().to(posts::get))
        .route("/posts.getById", web::route().to(posts::get_by_id))
        .route("/posts.post", web::route().to(posts::create))
        .route("/posts.edit", web::route().to(posts::edit))
        .route("/posts.delete", web::route().to(posts::delete))
        .route("/posts.restore", web::route().to(posts::restore))
        .route("/posts.like", web::route().to(posts::like))
        .route("/posts.dislike", web::route().to(posts::dislike));
}
