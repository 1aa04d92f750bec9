// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod posts;
pub mod public_posts;
pub mod uploads;
