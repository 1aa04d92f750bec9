pub mod auth;
pub mod posts;
pub mod serde_time;
pub mod uploads;

pub use auth::{AdminProfileDto, AdminUserDto, AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use posts::PostDto;
pub use uploads::UploadTicketDto;
