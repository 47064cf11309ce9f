// Core algorithm exports
pub mod compatibility;
pub mod filters;
pub mod horoscope;
pub mod ranking;
pub mod zodiac;

pub use compatibility::{compatibility, tabulated};
pub use filters::{filter_candidates, matches_query, search_engaged, zodiac_twins};
pub use horoscope::{daily_love_tip, decan, love_forecast, lucky_colors, recommended_bio, Decan, LoveForecast};
pub use ranking::{rank, rank_by_compatibility, rank_by_engagement, RankKey};
pub use zodiac::{classify, ZodiacSign, ALL_SIGNS};
