use crate::core::zodiac::{classify, ZodiacSign};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Member profile. Immutable once constructed; the zodiac sign is always
/// derived from the birth date, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub age: u8,
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
    #[serde(rename = "birthTime", default)]
    pub birth_time: Option<String>,
    #[serde(rename = "birthPlace", default)]
    pub birth_place: Option<String>,
    pub location: String,
    pub avatar: String,
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub engagement: Option<EngagementMetrics>,
    #[serde(rename = "lastActive", default)]
    pub last_active: Option<String>,
}

impl Profile {
    /// Derived zodiac sign, recomputed on demand.
    pub fn sign(&self) -> ZodiacSign {
        classify(self.birth_date)
    }
}

/// Activity counters from the host platform, used as an alternate ranking
/// dimension independent of zodiac.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngagementMetrics {
    #[serde(rename = "engagementScore")]
    pub engagement_score: u16,
    #[serde(rename = "repliesReceived")]
    pub replies_received: u32,
    #[serde(rename = "interactionCount")]
    pub interaction_count: u32,
}

/// One row of the Farcaster leaderboard snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub username: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub avatar: String,
    pub points: u32,
    pub rank: u32,
    pub fid: u64,
    #[serde(rename = "farcasterUrl")]
    pub farcaster_url: String,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<NaiveDate>,
}

/// Candidate scored against the current user's sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub age: u8,
    pub location: String,
    pub avatar: String,
    pub bio: String,
    pub interests: Vec<String>,
    #[serde(rename = "zodiacSign")]
    pub zodiac_sign: ZodiacSign,
    pub glyph: String,
    pub compatibility: u8,
}

impl CompatibilityMatch {
    pub fn from_profile(profile: Profile, score: u8) -> Self {
        let sign = profile.sign();
        Self {
            user_id: profile.user_id,
            name: profile.name,
            age: profile.age,
            location: profile.location,
            avatar: profile.avatar,
            bio: profile.bio,
            interests: profile.interests,
            zodiac_sign: sign,
            glyph: sign.glyph().to_string(),
            compatibility: score,
        }
    }
}

/// Permissions the mini-app asks the host for. All four are required before
/// the session can progress past the gating screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Profile,
    FarcasterSearch,
    ActivityData,
    Messaging,
}

pub const REQUIRED_PERMISSIONS: [Permission; 4] = [
    Permission::Profile,
    Permission::FarcasterSearch,
    Permission::ActivityData,
    Permission::Messaging,
];

/// Top-level tabs of the mini-app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Horoscope,
    Chats,
    Search,
}

/// Daily lucky color triple for a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckyColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}
