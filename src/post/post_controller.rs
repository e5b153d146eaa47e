use actix_web::{HttpResponse, web};
use log::error;
use serde_json::json;

use crate::post::post_model::{CreatePostRequest, ListPostsQuery, UpdatePostRequest};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use crate::utils::helpers::loose_int;
use crate::utils::sanitize::escape_html;

/// Turn an optional filter into the `%`-wrapped, escaped LIKE pattern the
/// repository expects. Absent filters become a bare `%` so they match every
/// row.
fn like_pattern(filter: Option<&str>) -> String {
    match filter {
        Some(text) => format!("%{}%", escape_html(text)),
        None => "%".to_string(),
    }
}

async fn render_list(
    post_service: &PostService,
    query: &ListPostsQuery,
) -> Result<HttpResponse, CustomError> {
    let search = like_pattern(query.search.as_deref());
    let author = like_pattern(query.author.as_deref());
    let limit = query
        .limit
        .as_deref()
        .map_or(10, |raw| loose_int(raw).max(1));
    let offset = query
        .offset
        .as_deref()
        .map_or(0, |raw| loose_int(raw).max(0));

    let posts = post_service
        .list(&search, &author, limit, offset)
        .await
        .map_err(|e| {
            error!("Failed to retrieve posts: {e}");
            CustomError::DatabaseError {
                message: "Failed to retrieve posts".into(),
                detail: e.to_string(),
            }
        })?;

    Ok(HttpResponse::Ok().json(posts))
}

pub async fn list_posts(
    post_service: web::Data<PostService>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse, CustomError> {
    render_list(&post_service, &query).await
}

pub async fn get_post(
    post_service: web::Data<PostService>,
    path: web::Path<String>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse, CustomError> {
    let post_id = loose_int(&path.into_inner());

    // A non-numeric segment coerces to 0, which means "no id": fall through
    // to the list behavior instead of looking up row 0.
    if post_id == 0 {
        return render_list(&post_service, &query).await;
    }

    let post = post_service.get(post_id).await.map_err(|e| {
        error!("Failed to retrieve post {post_id}: {e}");
        CustomError::DatabaseError {
            message: "Failed to retrieve post".into(),
            detail: e.to_string(),
        }
    })?;

    match post {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(CustomError::NotFoundError("Post not found".into())),
    }
}

pub async fn create_post(
    post_service: web::Data<PostService>,
    body: web::Bytes,
) -> Result<HttpResponse, CustomError> {
    // A body that fails to parse counts as empty.
    let input: CreatePostRequest = serde_json::from_slice(&body).unwrap_or_default();

    let (Some(title), Some(content), Some(author)) = (input.title, input.content, input.author)
    else {
        return Err(CustomError::BadRequestError("Invalid input".into()));
    };
    if title.is_empty() || content.is_empty() || author.is_empty() {
        return Err(CustomError::BadRequestError("Invalid input".into()));
    }

    let post = post_service
        .create(
            escape_html(&title),
            escape_html(&content),
            escape_html(&author),
        )
        .await
        .map_err(|e| {
            error!("Failed to create post: {e}");
            CustomError::CreateFailedError
        })?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Post created successfully",
        "post": post,
    })))
}

pub async fn update_post(
    post_service: web::Data<PostService>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, CustomError> {
    let post_id = loose_int(&path.into_inner());
    if post_id == 0 {
        return Err(CustomError::BadRequestError("Post ID required".into()));
    }

    let input: UpdatePostRequest = serde_json::from_slice(&body).unwrap_or_default();
    if input.is_empty() {
        return Err(CustomError::BadRequestError("No fields to update".into()));
    }

    let updated = post_service
        .update(
            post_id,
            input.title.as_deref().map(escape_html),
            input.content.as_deref().map(escape_html),
            input.author.as_deref().map(escape_html),
        )
        .await
        .map_err(|e| {
            error!("Failed to update post {post_id}: {e}");
            CustomError::DatabaseError {
                message: "Failed to update post".into(),
                detail: e.to_string(),
            }
        })?;

    match updated {
        Some(post) => Ok(HttpResponse::Ok().json(json!({
            "message": "Post updated successfully",
            "post": post,
        }))),
        None => Err(CustomError::NotFoundError("Post not found".into())),
    }
}

pub async fn delete_post(
    post_service: web::Data<PostService>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let post_id = loose_int(&path.into_inner());
    if post_id == 0 {
        return Err(CustomError::BadRequestError("Post ID required".into()));
    }

    let deleted = post_service.delete(post_id).await.map_err(|e| {
        error!("Failed to delete post {post_id}: {e}");
        CustomError::DatabaseError {
            message: "Failed to delete post".into(),
            detail: e.to_string(),
        }
    })?;

    if deleted {
        Ok(HttpResponse::Ok().json(json!({ "message": "Post deleted" })))
    } else {
        Err(CustomError::NotFoundError("Post not found".into()))
    }
}

/// PUT/DELETE on the bare collection path.
pub async fn post_id_required() -> Result<HttpResponse, CustomError> {
    Err(CustomError::BadRequestError("Post ID required".into()))
}

/// Any method without a route on a matched path.
pub async fn method_not_allowed() -> Result<HttpResponse, CustomError> {
    Err(CustomError::MethodNotAllowedError)
}
