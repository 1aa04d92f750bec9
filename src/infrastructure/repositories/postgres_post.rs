// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostCategory, PostDescription, PostId, PostImageUrl, PostReadRepository,
    PostSlug, PostTitle, PostWriteRepository, slug,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const POST_COLUMNS: &str = "id, title, description, content, author, publish_date, category, \
     image, slug, likes, dislikes, featured, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    description: String,
    content: String,
    author: String,
    publish_date: String,
    category: String,
    image: String,
    slug: String,
    likes: i64,
    dislikes: i64,
    featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            description: PostDescription::new(row.description)?,
            content: row.content,
            author: row.author,
            publish_date: row.publish_date,
            category: PostCategory::new(row.category)?,
            image: PostImageUrl::new(row.image)?,
            slug: PostSlug::new(row.slug)?,
            likes: row.likes,
            dislikes: row.dislikes,
            featured: row.featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            id,
            title,
            description,
            content,
            author,
            publish_date,
            category,
            image,
            slug,
            likes,
            dislikes,
            featured,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (id, title, description, content, author, publish_date, \
             category, image, slug, likes, dislikes, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {POST_COLUMNS}",
        ))
        .bind(i64::from(id))
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(&content)
        .bind(&author)
        .bind(&publish_date)
        .bind(category.as_str())
        .bind(image.as_str())
        .bind(slug.as_str())
        .bind(likes)
        .bind(dislikes)
        .bind(featured)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1",
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC",
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn max_id(&self) -> DomainResult<Option<i64>> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT max(id) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn find_slugs_matching(&self, base: &str) -> DomainResult<Vec<String>> {
        // `~*` is Postgres's case-insensitive regex match; the pattern is
        // anchored and escaped, so only `base` and `base-<digits>` qualify.
        sqlx::query_scalar::<_, String>("SELECT slug FROM posts WHERE slug ~* $1")
            .bind(slug::collision_pattern(base))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
