/**
 * Post Documents
 *
 * The post aggregate: text plus a denormalized copy of the author's name
 * and avatar, an embedded likes list (a set keyed by user id), and an
 * embedded comments list (most recent first). The mutation helpers are
 * pure; handlers load a post, splice it in memory, and save the embedded
 * lists back whole.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database operations for posts
pub mod db;

/// HTTP handlers for the posts endpoints
pub mod handlers;

pub use handlers::{
    add_comment, create_post, delete_post, get_post, like_post, list_posts, remove_comment,
    unlike_post,
};

/// A single like; the list holds at most one per user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: Uuid,
}

/// Comment entry, most recent first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
}

/// Post document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

/// Body shared by post creation and comment creation
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

impl Comment {
    pub fn new(user_id: Uuid, input: &PostInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: input.text.clone(),
            name: input.name.clone(),
            avatar: input.avatar.clone(),
            user_id,
            date: Utc::now(),
        }
    }
}

impl Post {
    pub fn new(user_id: Uuid, input: &PostInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            text: input.text.clone(),
            name: input.name.clone(),
            avatar: input.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Whether this user already appears in the likes list
    pub fn liked_by(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    /// Prepend a like for this user
    pub fn add_like(&mut self, user_id: Uuid) {
        self.likes.insert(0, Like { user_id });
    }

    /// Remove this user's like
    pub fn remove_like(&mut self, user_id: Uuid) {
        self.likes.retain(|like| like.user_id != user_id);
    }

    /// Prepend a comment (most recent first)
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Whether a comment with this id exists on the post
    pub fn has_comment(&self, comment_id: Uuid) -> bool {
        self.comments.iter().any(|c| c.id == comment_id)
    }

    /// Remove a comment by id
    pub fn remove_comment(&mut self, comment_id: Uuid) {
        self.comments.retain(|c| c.id != comment_id);
    }
}
