// tests/support/builders.rs
use serde_json::{Value, json};

use newsdesk::domain::post::{
    NewPost, PostCategory, PostDescription, PostId, PostImageUrl, PostSlug, PostTitle,
    PostWriteRepository,
};

use super::mocks::InMemoryPostRepo;

/// A publish payload that passes validation; collision behavior comes from
/// the title unless the caller overrides the slug.
pub fn publish_payload(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A detailed look at this week's market moves.",
        "content": "Full story body.",
        "publishDate": "2026-08-06",
        "category": "markets",
        "image": "https://cdn.example.com/cover.png",
    })
}

pub fn new_post(id: i64, title: &str, slug: &str) -> NewPost {
    NewPost {
        id: PostId::new(id).unwrap(),
        title: PostTitle::new(title).unwrap(),
        description: PostDescription::new("A detailed look at this week's market moves.").unwrap(),
        content: "Full story body.".into(),
        author: "Editorial Team".into(),
        publish_date: "2026-08-06".into(),
        category: PostCategory::new("markets").unwrap(),
        image: PostImageUrl::new("https://cdn.example.com/cover.png").unwrap(),
        slug: PostSlug::new(slug).unwrap(),
        likes: 0,
        dislikes: 0,
        featured: false,
    }
}

pub async fn seed_post(store: &InMemoryPostRepo, id: i64, title: &str, slug: &str) {
    store
        .insert(new_post(id, title, slug))
        .await
        .expect("seed post");
}
