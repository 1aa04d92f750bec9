// tests/support/mocks/post_repos.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;

use newsdesk::domain::errors::{DomainError, DomainResult};
use newsdesk::domain::post::{
    NewPost, Post, PostReadRepository, PostWriteRepository, slug,
};

/// In-memory post store enforcing the same uniqueness rules as the real
/// schema: unique `slug` (checked first, like the store's named constraint)
/// and unique `id`.
#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn slugs(&self) -> Vec<String> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .map(|post| post.slug.as_str().to_owned())
            .collect()
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();

        if posts
            .iter()
            .any(|stored| stored.slug.as_str() == post.slug.as_str())
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if posts.iter().any(|stored| stored.id == post.id) {
            return Err(DomainError::Conflict("post id already exists".into()));
        }

        let now = Utc::now();
        let stored = Post {
            id: post.id,
            title: post.title,
            description: post.description,
            content: post.content,
            author: post.author,
            publish_date: post.publish_date,
            category: post.category,
            image: post.image,
            slug: post.slug,
            likes: post.likes,
            dislikes: post.dislikes,
            featured: post.featured,
            created_at: now,
            updated_at: now,
        };
        posts.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_slug(&self, slug_value: &str) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|post| post.slug.as_str() == slug_value)
            .cloned())
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<Post>> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn max_id(&self) -> DomainResult<Option<i64>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .map(|post| i64::from(post.id))
            .max())
    }

    async fn find_slugs_matching(&self, base: &str) -> DomainResult<Vec<String>> {
        let pattern = Regex::new(&format!("(?i){}", slug::collision_pattern(base)))
            .expect("collision pattern is a valid regex");
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .map(|post| post.slug.as_str().to_owned())
            .filter(|stored| pattern.is_match(stored))
            .collect())
    }
}

/// Read view that never reports slug collisions, reproducing the window in
/// which two publishes both read before either has written. Everything else
/// delegates to the wrapped store.
pub struct RacySlugReads(pub Arc<InMemoryPostRepo>);

#[async_trait]
impl PostReadRepository for RacySlugReads {
    async fn find_by_slug(&self, slug_value: &str) -> DomainResult<Option<Post>> {
        self.0.find_by_slug(slug_value).await
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<Post>> {
        self.0.list_newest_first().await
    }

    async fn max_id(&self) -> DomainResult<Option<i64>> {
        self.0.max_id().await
    }

    async fn find_slugs_matching(&self, _base: &str) -> DomainResult<Vec<String>> {
        Ok(vec![])
    }
}
