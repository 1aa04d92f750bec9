use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

impl PostQueryService {
    /// Every post, newest first. Both the admin console and the public feed
    /// read the same collection.
    pub async fn list_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.list_newest_first().await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
