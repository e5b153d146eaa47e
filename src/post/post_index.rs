use actix_web::web;

use super::post_controller::{
    create_post, delete_post, get_post, list_posts, method_not_allowed, post_id_required,
    update_post,
};

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
            .service(
                web::resource("")
                    .route(web::get().to(list_posts))
                    .route(web::post().to(create_post))
                    // PUT/DELETE need an id segment
                    .route(web::put().to(post_id_required))
                    .route(web::delete().to(post_id_required))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_post))
                    // POST ignores the id segment and creates as usual
                    .route(web::post().to(create_post))
                    .route(web::put().to(update_post))
                    .route(web::delete().to(delete_post))
                    .default_service(web::route().to(method_not_allowed)),
            ),
    );
}
