use crate::models::domain::Profile;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when resolving profiles
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("profile not found: {0}")]
    NotFound(String),
}

/// Async source of member profiles.
///
/// The production deployment would back this with the host platform's user
/// APIs; handlers only see the trait so the backend can be swapped without
/// touching them.
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Profile of the signed-in user.
    async fn current_user(&self) -> Result<Profile, DirectoryError>;

    /// Profile by id.
    async fn get_profile(&self, user_id: &str) -> Result<Profile, DirectoryError>;

    /// All candidate profiles, excluding nobody.
    async fn list_profiles(&self) -> Result<Vec<Profile>, DirectoryError>;
}

/// In-memory directory seeded with the demo roster.
///
/// Every call sleeps an artificial latency so callers exercise the same async
/// paths they would against a real backend.
pub struct MockDirectory {
    latency: Duration,
    current: Profile,
    candidates: Vec<Profile>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // The seed dates are compile-time constants, all valid
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn seed_profile(
    user_id: &str,
    name: &str,
    age: u8,
    birth_date: NaiveDate,
    location: &str,
    bio: &str,
    interests: &[&str],
) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        name: name.to_string(),
        age,
        birth_date,
        birth_time: None,
        birth_place: None,
        location: location.to_string(),
        avatar: "/placeholder.svg".to_string(),
        bio: bio.to_string(),
        interests: interests.iter().map(|i| i.to_string()).collect(),
        engagement: None,
        last_active: None,
    }
}

impl MockDirectory {
    pub fn new(latency_ms: u64) -> Self {
        let mut current = seed_profile(
            "current-user",
            "Alex Johnson",
            28,
            date(1995, 7, 23),
            "New York, NY",
            "Adventure seeker and coffee enthusiast. Looking for someone to explore the city with!",
            &["Travel", "Photography", "Hiking", "Coffee"],
        );
        current.birth_time = Some("14:30".to_string());
        current.birth_place = Some("New York, NY".to_string());

        let candidates = vec![
            seed_profile(
                "1",
                "Emma Wilson",
                26,
                date(1997, 7, 15),
                "Brooklyn, NY",
                "Artist and yoga instructor. Love deep conversations and sunset walks.",
                &["Art", "Yoga", "Meditation", "Nature"],
            ),
            seed_profile(
                "2",
                "Marcus Thompson",
                30,
                date(1993, 8, 10),
                "Manhattan, NY",
                "Chef by day, musician by night. Let me cook for you!",
                &["Cooking", "Music", "Wine", "Concerts"],
            ),
            seed_profile(
                "3",
                "Sofia Martinez",
                29,
                date(1994, 8, 5),
                "Queens, NY",
                "Bookworm and travel addict. 32 countries and counting!",
                &["Reading", "Travel", "Languages", "History"],
            ),
            seed_profile(
                "4",
                "David Kim",
                27,
                date(1996, 9, 15),
                "Jersey City, NJ",
                "Software engineer who loves the outdoors. Weekend warrior!",
                &["Tech", "Climbing", "Cycling", "Gaming"],
            ),
        ];

        Self {
            latency: Duration::from_millis(latency_ms),
            current,
            candidates,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ProfileDirectory for MockDirectory {
    async fn current_user(&self) -> Result<Profile, DirectoryError> {
        self.simulate_latency().await;
        Ok(self.current.clone())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Profile, DirectoryError> {
        self.simulate_latency().await;
        if self.current.user_id == user_id {
            return Ok(self.current.clone());
        }
        self.candidates
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(user_id.to_string()))
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, DirectoryError> {
        self.simulate_latency().await;
        Ok(self.candidates.clone())
    }
}
