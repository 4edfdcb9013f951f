/**
 * Post Database Operations
 *
 * Loads and stores post documents. Likes and comments live in JSONB columns
 * and are written back whole on every mutation (last write wins).
 */

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Comment, Like, Post};

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    user_id: Uuid,
    text: String,
    name: String,
    avatar: String,
    likes: Json<Vec<Like>>,
    comments: Json<Vec<Comment>>,
    date: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            user_id: row.user_id,
            text: row.text,
            name: row.name,
            avatar: row.avatar,
            likes: row.likes.0,
            comments: row.comments.0,
            date: row.date,
        }
    }
}

const SELECT_POST: &str = r#"
    SELECT id, user_id, text, name, avatar, likes, comments, date
    FROM posts
"#;

/// List all posts, newest first
pub async fn find_all(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POST} ORDER BY date DESC"))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Post::from).collect())
}

/// Get a post by id
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let row = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POST} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Post::from))
}

/// Insert a new post document
pub async fn insert_post(pool: &PgPool, post: &Post) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO posts (id, user_id, text, name, avatar, likes, comments, date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(post.id)
    .bind(post.user_id)
    .bind(&post.text)
    .bind(&post.name)
    .bind(&post.avatar)
    .bind(Json(&post.likes))
    .bind(Json(&post.comments))
    .bind(post.date)
    .execute(pool)
    .await?;

    Ok(())
}

/// Save a mutated post's embedded lists back, whole
pub async fn save_post(pool: &PgPool, post: &Post) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE posts SET likes = $2, comments = $3 WHERE id = $1")
        .bind(post.id)
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a post by id
pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
