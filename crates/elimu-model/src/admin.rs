use serde::{Deserialize, Serialize};

/// The authenticated back-office identity. One role, one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminUser {
    pub id: u64,
    pub username: String,
}
