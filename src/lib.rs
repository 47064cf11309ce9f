//! SignSync Algo - Matching and horoscope service for the SignSync mini-app
//!
//! This library implements the zodiac classifier, the compatibility and
//! ranking engine, search/filter composition over mock Farcaster data
//! sources, daily horoscope content, and the host-frame session protocol.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify, compatibility, ZodiacSign};
pub use crate::models::{CompatibilityMatch, LeaderboardEntry, Permission, Profile, Tab};
