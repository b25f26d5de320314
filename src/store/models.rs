use serde::{Deserialize, Serialize};

/// One accepted sign-up, stored as a single CSV row.
///
/// The serde renames pin the CSV header to `Username,Email,Password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
}
