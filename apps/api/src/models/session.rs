use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    JobSeeker,
    Recruiter,
}

/// The single fake-session record kept under the `user` key.
/// There is no authentication behind it; it only marks who is "logged in".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}
