use serde::{Deserialize, Serialize};

/// A user enrolled in a cuponera, identified by a unique redemption code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuponeraUser {
    /// The unique identifier for this enrollment.
    pub id: String,

    /// The cuponera this user belongs to.
    pub cuponera_id: String,

    /// The unique code this user redeems with.
    pub code: String,

    /// Full name (kept for compatibility with older records).
    pub name: String,

    /// Given name, when recorded separately.
    pub first_name: Option<String>,

    /// Family name, when recorded separately.
    pub last_name: Option<String>,

    /// Contact phone number (digits only).
    pub phone: String,

    /// Country dialing code for `phone`, e.g. `+57`.
    pub phone_code: Option<String>,

    /// Contact email address.
    pub email: String,

    /// Delivery address, if recorded.
    pub address: Option<String>,

    pub created_at: Option<String>,
}

/// Request body for enrolling a user in a cuponera.
///
/// All domain validation (email/phone format, duplicate codes) happens
/// service-side; a rejection surfaces through the error path.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CuponeraUserCreate {
    /// Redemption code; the service generates one when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub first_name: String,

    pub last_name: String,

    pub phone: String,

    /// Country dialing code; the service defaults it when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_code: Option<String>,

    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Partial update for a cuponera user; `None` fields are left untouched.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CuponeraUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
