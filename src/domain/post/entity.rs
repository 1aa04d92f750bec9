// src/domain/post/entity.rs
use crate::domain::post::value_objects::{
    PostCategory, PostDescription, PostId, PostImageUrl, PostSlug, PostTitle,
};
use chrono::{DateTime, Utc};

/// A published blog post as stored. Never mutated after creation; edits and
/// deletion are handled outside the publish path.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub description: PostDescription,
    pub content: String,
    pub author: String,
    pub publish_date: String,
    pub category: PostCategory,
    pub image: PostImageUrl,
    pub slug: PostSlug,
    pub likes: i64,
    pub dislikes: i64,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post about to be inserted. `id` and `slug` are assigned by the publish
/// command; `created_at`/`updated_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: PostId,
    pub title: PostTitle,
    pub description: PostDescription,
    pub content: String,
    pub author: String,
    pub publish_date: String,
    pub category: PostCategory,
    pub image: PostImageUrl,
    pub slug: PostSlug,
    pub likes: i64,
    pub dislikes: i64,
    pub featured: bool,
}
