// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CompatibilityMatch, EngagementMetrics, LeaderboardEntry, LuckyColors, Permission, Profile, Tab, REQUIRED_PERMISSIONS};
pub use requests::{ClassifyRequest, CosmicMatchesRequest, GrantPermissionsRequest, HoroscopeRequest, SearchRequest, SuggestRequest};
pub use responses::{ClassifyResponse, CosmicMatchesResponse, DailyHoroscopeResponse, ErrorResponse, HealthResponse, LeaderboardResponse, RankedEntry, SearchResponse, SessionResponse, SuggestResponse, TwinsResponse};
