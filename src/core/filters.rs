use crate::core::ranking::rank_by_engagement;
use crate::core::zodiac::ZodiacSign;
use crate::models::Profile;

/// Check a free-text query against a profile's name and bio.
///
/// Case-insensitive substring match; an empty query matches every profile.
#[inline]
pub fn matches_query(profile: &Profile, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    profile.name.to_lowercase().contains(&query) || profile.bio.to_lowercase().contains(&query)
}

/// Filter candidates by query text and an optional sign.
///
/// Membership only: scores and metrics on the surviving profiles are left
/// untouched for the ranking stage.
pub fn filter_candidates(
    candidates: Vec<Profile>,
    query: &str,
    sign: Option<ZodiacSign>,
) -> Vec<Profile> {
    candidates
        .into_iter()
        .filter(|profile| matches_query(profile, query))
        .filter(|profile| sign.map_or(true, |s| profile.sign() == s))
        .collect()
}

/// Search pipeline: filter by query and sign, then rank by the engagement
/// composite. Filter-then-rank, in that order.
pub fn search_engaged(
    candidates: Vec<Profile>,
    query: &str,
    sign: Option<ZodiacSign>,
) -> Vec<Profile> {
    let mut results = filter_candidates(candidates, query, sign);
    rank_by_engagement(&mut results);
    results
}

/// Candidates sharing the current user's sign, excluding the user themself.
pub fn zodiac_twins(current: &Profile, candidates: Vec<Profile>) -> Vec<Profile> {
    let user_sign = current.sign();
    candidates
        .into_iter()
        .filter(|p| p.user_id != current.user_id && p.sign() == user_sign)
        .collect()
}
