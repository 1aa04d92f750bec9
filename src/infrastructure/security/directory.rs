use crate::domain::admin::{AdminDirectory, AdminUser};

/// The configured admin list, held in memory for the process lifetime.
/// Restates the original predefined-user table as explicit injection.
pub struct StaticAdminDirectory {
    users: Vec<AdminUser>,
}

impl StaticAdminDirectory {
    pub fn new(users: Vec<AdminUser>) -> Self {
        Self { users }
    }
}

impl AdminDirectory for StaticAdminDirectory {
    fn find_by_email(&self, email: &str) -> Option<AdminUser> {
        self.users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned()
    }
}
