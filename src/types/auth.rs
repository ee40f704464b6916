use serde::{Deserialize, Serialize};

/// The signed-in demo user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub signed_in_at: i64,
}
