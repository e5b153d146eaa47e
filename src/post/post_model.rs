use serde::{Deserialize, Serialize};

/// A row of the `posts` table. Timestamps are stored and served as
/// `YYYY-MM-DD HH:MM:SS` text.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Create body. All three fields are required; a missing or malformed body
/// deserializes to the default (all `None`) and is rejected as invalid input.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Update body. Only the supplied fields are written; unrecognized keys are
/// ignored by deserialization rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl UpdatePostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

/// Query string accepted by the list endpoint. Everything arrives as text and
/// is coerced loosely, so `?limit=abc` behaves like the integer 0 rather than
/// failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    pub search: Option<String>,
    pub author: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}
