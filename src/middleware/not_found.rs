use actix_web::HttpResponse;
use serde_json::json;

/// App-level default service: any path outside the route table answers with
/// the JSON not-found body rather than an empty 404.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "message": "Endpoint not found",
    }))
}
