// src/domain/post/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::slug;
use crate::domain::post::value_objects::{PostSlug, PostTitle};

/// Domain service responsible for assigning unique slugs to new posts.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Derive the base slug (explicit override wins over the slugified
    /// title), fetch the colliding slugs, and resolve a unique candidate.
    pub async fn assign(
        &self,
        title: &PostTitle,
        requested: Option<&str>,
    ) -> DomainResult<PostSlug> {
        let base = match requested {
            Some(explicit) => explicit.trim().to_owned(),
            None => self.generator.slugify(title.as_str()),
        };
        let base = if base.is_empty() {
            format!("post-{}", Utc::now().timestamp())
        } else {
            base
        };

        let existing = self.read_repo.find_slugs_matching(&base).await?;
        PostSlug::new(slug::resolve_unique(&base, &existing))
    }
}
