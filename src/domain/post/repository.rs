use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post};
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Insert a new post. The store enforces uniqueness of `id` and `slug`
    /// and must reject duplicates rather than silently accept them.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Post>>;
    /// All posts, newest first (`created_at` descending, ties by `id`).
    async fn list_newest_first(&self) -> DomainResult<Vec<Post>>;
    /// Highest assigned post id, or `None` for an empty store.
    async fn max_id(&self) -> DomainResult<Option<i64>>;
    /// Slugs equal to `base` or of the shape `base-<digits>`, compared
    /// case-insensitively.
    async fn find_slugs_matching(&self, base: &str) -> DomainResult<Vec<String>>;
}
