use serde::Deserialize;
use uuid::Uuid;

/// The parts of a user's profile row that gate access.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_owner: Option<bool>,
    #[serde(default)]
    pub blocked: Option<bool>,
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        if self.blocked.unwrap_or(false) {
            return false;
        }
        self.is_owner.unwrap_or(false) || self.role.as_deref() == Some("admin")
    }
}
