use crate::core::horoscope::{Decan, LoveForecast};
use crate::core::zodiac::ZodiacSign;
use crate::models::domain::{CompatibilityMatch, LeaderboardEntry, LuckyColors, Permission, Profile, Tab};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for the classify endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub sign: ZodiacSign,
    pub glyph: &'static str,
    pub color: &'static str,
}

/// Response for the cosmic matches endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CosmicMatchesResponse {
    #[serde(rename = "userSign")]
    pub user_sign: ZodiacSign,
    pub matches: Vec<CompatibilityMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the zodiac twins endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TwinsResponse {
    pub sign: ZodiacSign,
    pub twins: Vec<Profile>,
    pub count: usize,
}

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Profile>,
    pub count: usize,
}

/// Leaderboard entry as served: the stored entry plus the sign derived from
/// its birth date, where one is known.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub sign: Option<ZodiacSign>,
    pub glyph: Option<&'static str>,
}

impl From<LeaderboardEntry> for RankedEntry {
    fn from(entry: LeaderboardEntry) -> Self {
        let sign = entry.birth_date.map(crate::core::zodiac::classify);
        Self {
            glyph: sign.map(|s| s.glyph()),
            sign,
            entry,
        }
    }
}

/// Response for the leaderboard endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<RankedEntry>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

/// Response for the daily horoscope endpoint
#[derive(Debug, Clone, Serialize)]
pub struct DailyHoroscopeResponse {
    pub sign: ZodiacSign,
    pub glyph: &'static str,
    pub date: NaiveDate,
    pub decan: Decan,
    #[serde(rename = "loveTip")]
    pub love_tip: &'static str,
    #[serde(rename = "luckyColors")]
    pub lucky_colors: LuckyColors,
    pub forecast: LoveForecast,
    #[serde(rename = "recommendedBio")]
    pub recommended_bio: &'static str,
}

/// Response for the suggest endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SuggestResponse {
    pub sign: ZodiacSign,
    #[serde(rename = "activeTab")]
    pub active_tab: Tab,
}

/// Current session snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    #[serde(rename = "appId")]
    pub app_id: &'static str,
    #[serde(rename = "sessionId")]
    pub session_id: uuid::Uuid,
    pub granted: Vec<Permission>,
    pub ready: bool,
    #[serde(rename = "activeTab")]
    pub active_tab: Tab,
}
