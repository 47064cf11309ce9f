use crate::models::domain::{EngagementMetrics, LeaderboardEntry, Profile};
use async_trait::async_trait;
use chrono::NaiveDate;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when polling a feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed unavailable: {0}")]
    Unavailable(String),
}

/// Async source of engagement-annotated profiles for the search tab.
#[async_trait]
pub trait EngagementFeed: Send + Sync {
    /// Snapshot of the most engaged users, unordered.
    async fn engaged_profiles(&self) -> Result<Vec<Profile>, FeedError>;
}

/// Async source of the Farcaster points leaderboard.
#[async_trait]
pub trait LeaderboardFeed: Send + Sync {
    /// Top entries with dense ranks, best first.
    async fn top_entries(&self) -> Result<Vec<LeaderboardEntry>, FeedError>;
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn engaged_profile(
    user_id: &str,
    name: &str,
    birth_date: NaiveDate,
    bio: &str,
    score: u16,
    replies: u32,
    interactions: u32,
    last_active: &str,
) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        name: name.to_string(),
        age: 0,
        birth_date,
        birth_time: None,
        birth_place: None,
        location: "Farcaster".to_string(),
        avatar: "/placeholder.svg".to_string(),
        bio: bio.to_string(),
        interests: vec![],
        engagement: Some(EngagementMetrics {
            engagement_score: score,
            replies_received: replies,
            interaction_count: interactions,
        }),
        last_active: Some(last_active.to_string()),
    }
}

/// Engagement feed seeded with the demo snapshot.
pub struct MockEngagementFeed {
    latency: Duration,
}

impl MockEngagementFeed {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }
}

#[async_trait]
impl EngagementFeed for MockEngagementFeed {
    async fn engaged_profiles(&self) -> Result<Vec<Profile>, FeedError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(vec![
            engaged_profile(
                "eng-1",
                "Mystic Maya",
                date(1998, 3, 12),
                "Tarot reader and astrology lover. Ask me about your chart!",
                95,
                847,
                1250,
                "2 min ago",
            ),
            engaged_profile(
                "eng-2",
                "Leo Community",
                date(1995, 8, 2),
                "Celebrating all things Leo. Weekly sign meetups!",
                92,
                723,
                1180,
                "5 min ago",
            ),
            engaged_profile(
                "eng-3",
                "Scorpio Insights",
                date(1996, 11, 8),
                "Deep dives into Scorpio season and water sign energy.",
                89,
                692,
                1050,
                "12 min ago",
            ),
            engaged_profile(
                "eng-4",
                "Aries Energy",
                date(1997, 4, 1),
                "First sign, first to reply. Bold takes daily.",
                87,
                634,
                980,
                "18 min ago",
            ),
            engaged_profile(
                "eng-5",
                "Libra Harmony",
                date(1994, 10, 10),
                "Balance in all things. Relationship astrology threads.",
                85,
                578,
                920,
                "25 min ago",
            ),
            engaged_profile(
                "eng-6",
                "Cancer Empath",
                date(1999, 7, 3),
                "Moon child sharing emotional wellness and lunar updates.",
                83,
                512,
                850,
                "34 min ago",
            ),
        ])
    }
}

/// Leaderboard feed seeded with the demo top ten.
///
/// Points get a small random jitter on every poll so successive snapshots
/// differ the way a live feed would; ranks are reassigned densely after the
/// jitter.
pub struct MockLeaderboardFeed {
    latency: Duration,
}

const LEADERBOARD_SEED: [(&str, &str, u32, u64, Option<(i32, u32, u32)>); 10] = [
    ("astroqueen", "Astro Queen", 15420, 3621, Some((1996, 8, 14))),
    ("cosmicwanderer", "Cosmic Wanderer", 14890, 5812, Some((1994, 12, 3))),
    ("starseeker", "Star Seeker", 14210, 2947, Some((1997, 4, 22))),
    ("moonchild", "Moon Child", 13750, 8123, Some((1998, 7, 1))),
    ("zodiacmaster", "Zodiac Master", 13340, 1576, Some((1992, 10, 30))),
    ("luna.eth", "Luna", 12980, 9234, Some((1995, 2, 17))),
    ("retrograde", "Mercury Retrograde", 12510, 4461, None),
    ("celestine", "Celestine", 12240, 6098, Some((1993, 5, 9))),
    ("nebulanomad", "Nebula Nomad", 11870, 7310, Some((1999, 1, 25))),
    ("sunsignsam", "Sun Sign Sam", 11430, 3888, Some((1996, 6, 11))),
];

impl MockLeaderboardFeed {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }
}

#[async_trait]
impl LeaderboardFeed for MockLeaderboardFeed {
    async fn top_entries(&self) -> Result<Vec<LeaderboardEntry>, FeedError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut rng = rand::thread_rng();
        let mut entries: Vec<LeaderboardEntry> = LEADERBOARD_SEED
            .iter()
            .map(|(username, display_name, base_points, fid, birth)| LeaderboardEntry {
                id: format!("fc-{}", fid),
                username: username.to_string(),
                display_name: display_name.to_string(),
                avatar: "/placeholder.svg".to_string(),
                points: base_points + rng.gen_range(0..50),
                rank: 0,
                fid: *fid,
                farcaster_url: format!("https://warpcast.com/{}", username),
                birth_date: birth.map(|(y, m, d)| date(y, m, d)),
            })
            .collect();

        entries.sort_by(|a, b| b.points.cmp(&a.points));
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = (i + 1) as u32;
        }

        Ok(entries)
    }
}
