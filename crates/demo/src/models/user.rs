//! User domain types.

use serde::{Deserialize, Serialize};

use pocket_market_core::UserId;

/// One record of the external user directory.
///
/// The directory is demo fixture data: passwords are stored and listed in
/// the clear because the demo UI displays them as test credentials. The
/// record is never created or mutated by this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email, unique within the directory.
    pub email: String,
    /// Fixture password, compared by exact string equality.
    pub password: String,
}
