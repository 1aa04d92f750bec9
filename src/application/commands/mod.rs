pub mod posts;
pub mod sessions;
