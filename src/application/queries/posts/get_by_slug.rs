use super::PostQueryService;
use crate::application::{
    dto::PostDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Exact-slug lookup. Unknown slugs are a not-found, never an error.
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let post = self
            .read_repo
            .find_by_slug(query.slug.trim())
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(post.into())
    }
}
