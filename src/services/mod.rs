// Service exports
pub mod cache;
pub mod directory;
pub mod engagement;
pub mod host;

pub use cache::{CacheError, CacheKey, ContentCache};
pub use directory::{DirectoryError, MockDirectory, ProfileDirectory};
pub use engagement::{EngagementFeed, FeedError, LeaderboardFeed, MockEngagementFeed, MockLeaderboardFeed};
pub use host::{HostBridge, HostMessage, Session, SessionError, APP_ID};
