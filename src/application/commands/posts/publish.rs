// src/application/commands/posts/publish.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{NewPost, PostCategory, PostDescription, PostId, PostImageUrl, PostTitle},
};

/// Author shown when the payload does not name one.
const DEFAULT_AUTHOR: &str = "Editorial Team";

pub struct PublishPostCommand {
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub author: Option<String>,
    pub publish_date: String,
    pub category: String,
    pub image: String,
    pub slug: Option<String>,
    pub likes: Option<i64>,
    pub dislikes: Option<i64>,
    pub featured: Option<bool>,
}

impl PostCommandService {
    /// Create a post: validate the payload, assign a unique slug and the
    /// next id, and insert. The slug read and the insert are not atomic;
    /// a concurrent publish losing the race surfaces as a store conflict.
    pub async fn publish_post(&self, command: PublishPostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let description = PostDescription::new(command.description)?;
        let category = PostCategory::new(command.category)?;
        let image = PostImageUrl::new(command.image)?;

        let requested = command
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let slug = self.slug_service.assign(&title, requested).await?;

        let max_id = self.read_repo.max_id().await?.unwrap_or(0);
        let id = PostId::new(max_id + 1)?;

        let new_post = NewPost {
            id,
            title,
            description,
            content: command.content.unwrap_or_default(),
            author: command
                .author
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
            publish_date: command.publish_date,
            category,
            image,
            slug,
            likes: command.likes.unwrap_or(0),
            dislikes: command.dislikes.unwrap_or(0),
            featured: command.featured.unwrap_or(false),
        };

        let created = self.write_repo.insert(new_post).await?;
        Ok(created.into())
    }
}
