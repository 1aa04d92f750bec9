use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: String,
    pub publish_date: String,
    pub category: String,
    pub image: String,
    pub slug: String,
    pub likes: i64,
    pub dislikes: i64,
    pub featured: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into(),
            description: post.description.into(),
            content: post.content,
            author: post.author,
            publish_date: post.publish_date,
            category: post.category.into(),
            image: post.image.into(),
            slug: post.slug.into(),
            likes: post.likes,
            dislikes: post.dislikes,
            featured: post.featured,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
