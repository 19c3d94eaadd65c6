//! The external user directory.
//!
//! A fixed, read-only table of demo accounts. This application only ever
//! consumes the lookup-by-email capability; nothing here creates, updates,
//! or deletes records.

use crate::models::DirectoryUser;
use pocket_market_core::UserId;

/// Read-only directory of demo user accounts.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<DirectoryUser>,
}

impl UserDirectory {
    /// Create a directory from a fixed set of records.
    #[must_use]
    pub const fn new(users: Vec<DirectoryUser>) -> Self {
        Self { users }
    }

    /// The directory shipped with the demo: four accounts, all with the
    /// default password `123456` (the demo UI advertises these as test
    /// credentials).
    #[must_use]
    pub fn seeded() -> Self {
        let record = |id: i32, name: &str, email: &str| DirectoryUser {
            id: UserId::new(id),
            name: name.to_string(),
            email: email.to_string(),
            password: "123456".to_string(),
        };

        Self::new(vec![
            record(1, "张三", "zhangsan@example.com"),
            record(2, "李四", "lisi@example.com"),
            record(3, "王五", "wangwu@example.com"),
            record(4, "赵六", "zhaoliu@example.com"),
        ])
    }

    /// Look up a user by exact, case-sensitive email match.
    #[must_use]
    pub fn get_by_email(&self, email: &str) -> Option<&DirectoryUser> {
        self.users.iter().find(|user| user.email == email)
    }

    /// All directory records, in seed order.
    #[must_use]
    pub fn list(&self) -> &[DirectoryUser] {
        &self.users
    }
}
