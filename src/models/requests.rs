use crate::core::zodiac::ZodiacSign;
use crate::models::domain::Permission;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to classify a birth date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    #[serde(alias = "birth_date", rename = "birthDate")]
    pub birth_date: NaiveDate,
}

/// Request for compatibility-ranked matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CosmicMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

/// Search over the engagement feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub sign: Option<ZodiacSign>,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

/// Request for a daily horoscope reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoroscopeRequest {
    #[serde(alias = "birth_date", rename = "birthDate")]
    pub birth_date: NaiveDate,
    /// Reading date; defaults to today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Request to suggest same-sign users via the host
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}

/// Request to grant host permissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantPermissionsRequest {
    pub permissions: Vec<Permission>,
}
