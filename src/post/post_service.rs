use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::post::post_model::Post;
use crate::utils::helpers::now_timestamp;

pub struct PostService {
    pool: SqlitePool,
}

impl PostService {
    pub fn new(pool: SqlitePool) -> Self {
        PostService { pool }
    }

    /// List posts matching the given LIKE patterns, newest id first.
    /// `search` and `author` must already be `%`-wrapped (bare `%` when the
    /// filter is absent).
    pub async fn list(
        &self,
        search: &str,
        author: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, title, content, author, created_at, updated_at FROM posts \
             WHERE (title LIKE ? OR content LIKE ?) AND author LIKE ? \
             ORDER BY id DESC LIMIT ? OFFSET ?",
        )
        .bind(search)
        .bind(search)
        .bind(author)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, title, content, author, created_at, updated_at FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a post and return it without a re-fetch: the id comes from the
    /// auto-increment and both timestamps are the bound values, so storage and
    /// response agree.
    pub async fn create(
        &self,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post, sqlx::Error> {
        let now = now_timestamp();

        let result = sqlx::query(
            "INSERT INTO posts (title, content, author, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&title)
        .bind(&content)
        .bind(&author)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Post {
            id: result.last_insert_rowid(),
            title,
            content,
            author,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Apply the supplied fields to one row and return the updated row, or
    /// `None` when no row has that id. A single UPDATE .. RETURNING statement
    /// keeps the write and the read atomic, so a concurrent delete cannot make
    /// a successful update report "not found". `updated_at` is refreshed on
    /// every call.
    pub async fn update(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
    ) -> Result<Option<Post>, sqlx::Error> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE posts SET ");

        let mut fields = builder.separated(", ");
        if let Some(title) = title {
            fields.push("title = ");
            fields.push_bind_unseparated(title);
        }
        if let Some(content) = content {
            fields.push("content = ");
            fields.push_bind_unseparated(content);
        }
        if let Some(author) = author {
            fields.push("author = ");
            fields.push_bind_unseparated(author);
        }
        fields.push("updated_at = ");
        fields.push_bind_unseparated(now_timestamp());

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" RETURNING id, title, content, author, created_at, updated_at");

        builder
            .build_query_as::<Post>()
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
