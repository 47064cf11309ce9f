use crate::core::compatibility::compatibility;
use crate::core::zodiac::ZodiacSign;
use crate::models::{CompatibilityMatch, Profile};
use std::cmp::Ordering;

/// A ranking key: extracts a comparable value from a candidate.
pub type RankKey<T> = Box<dyn Fn(&T) -> i64>;

/// Stable descending sort on a primary key with ordered tie-break keys.
///
/// Ties on the primary key fall through to each secondary key in declared
/// order; candidates equal on every key keep their input order (the sort is
/// stable), which makes the overall ordering total for a fixed key list.
pub fn rank<T>(items: &mut [T], keys: &[RankKey<T>]) {
    items.sort_by(|a, b| {
        for key in keys {
            match key(b).cmp(&key(a)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    });
}

/// Score candidates against the current user's sign and order them by
/// compatibility, best first.
///
/// Scoring happens exactly once per candidate; pairs outside the best-match
/// table get a random fallback score, so ranking a list twice may order
/// unlisted pairs differently.
pub fn rank_by_compatibility(
    user_sign: ZodiacSign,
    candidates: Vec<Profile>,
) -> Vec<CompatibilityMatch> {
    let mut matches: Vec<CompatibilityMatch> = candidates
        .into_iter()
        .map(|profile| {
            let score = compatibility(user_sign, profile.sign());
            CompatibilityMatch::from_profile(profile, score)
        })
        .collect();

    rank(&mut matches, &[Box::new(|m: &CompatibilityMatch| m.compatibility as i64)]);
    matches
}

/// Order candidates by the engagement composite: engagement score, then
/// replies received, then interaction count, all descending. Zodiac plays no
/// part; profiles without metrics sort last.
pub fn rank_by_engagement(candidates: &mut [Profile]) {
    let keys: [RankKey<Profile>; 3] = [
        Box::new(|p| p.engagement.map_or(0, |e| e.engagement_score as i64)),
        Box::new(|p| p.engagement.map_or(0, |e| e.replies_received as i64)),
        Box::new(|p| p.engagement.map_or(0, |e| e.interaction_count as i64)),
    ];
    rank(candidates, &keys);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EngagementMetrics;
    use chrono::NaiveDate;

    fn profile(id: &str, birth: (i32, u32, u32)) -> Profile {
        Profile {
            user_id: id.to_string(),
            name: format!("User {}", id),
            age: 27,
            birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
            birth_time: None,
            birth_place: None,
            location: "New York, NY".to_string(),
            avatar: "/placeholder.svg".to_string(),
            bio: "bio".to_string(),
            interests: vec![],
            engagement: None,
            last_active: None,
        }
    }

    fn engaged(id: &str, score: u16, replies: u32, interactions: u32) -> Profile {
        let mut p = profile(id, (1995, 7, 23));
        p.engagement = Some(EngagementMetrics {
            engagement_score: score,
            replies_received: replies,
            interaction_count: interactions,
        });
        p
    }

    #[test]
    fn test_rank_descending_on_primary() {
        let mut items = vec![3i64, 9, 1, 7];
        rank(&mut items, &[Box::new(|v: &i64| *v)]);
        assert_eq!(items, vec![9, 7, 3, 1]);
    }

    #[test]
    fn test_rank_ties_fall_through_in_order() {
        let mut items = vec![(1, 5), (2, 9), (1, 8)];
        let keys: [RankKey<(i64, i64)>; 2] =
            [Box::new(|t| t.0), Box::new(|t| t.1)];
        rank(&mut items, &keys);
        assert_eq!(items, vec![(2, 9), (1, 8), (1, 5)]);
    }

    #[test]
    fn test_rank_is_stable_on_full_ties() {
        let mut items = vec![("a", 1), ("b", 1), ("c", 1)];
        rank(&mut items, &[Box::new(|t: &(&str, i64)| t.1)]);
        assert_eq!(items, vec![("a", 1), ("b", 1), ("c", 1)]);
    }

    #[test]
    fn test_compatibility_ranking_puts_best_match_first() {
        // Current user is Leo; Aries scores 95, Leo self 75
        let candidates = vec![profile("leo", (1994, 8, 5)), profile("aries", (1996, 4, 3))];
        let ranked = rank_by_compatibility(ZodiacSign::Leo, candidates);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].user_id, "aries");
        assert_eq!(ranked[0].compatibility, 95);
        assert_eq!(ranked[1].compatibility, 75);
    }

    #[test]
    fn test_compatibility_ranking_non_increasing() {
        let candidates = vec![
            profile("1", (1997, 6, 15)),
            profile("2", (1992, 11, 12)),
            profile("3", (1995, 10, 7)),
            profile("4", (1994, 8, 5)),
        ];
        let ranked = rank_by_compatibility(ZodiacSign::Gemini, candidates);
        for pair in ranked.windows(2) {
            assert!(pair[0].compatibility >= pair[1].compatibility);
        }
    }

    #[test]
    fn test_engagement_composite_ordering() {
        let mut candidates = vec![
            engaged("low", 83, 512, 850),
            engaged("top", 95, 847, 1250),
            engaged("mid", 92, 723, 1180),
        ];
        rank_by_engagement(&mut candidates);
        let ids: Vec<&str> = candidates.iter().map(|p| p.user_id.as_str()).collect();
        assert_eq!(ids, vec!["top", "mid", "low"]);
    }

    #[test]
    fn test_engagement_tie_breaks_on_replies() {
        // Equal engagement scores, 95 vs 95; replies decide
        let mut candidates = vec![engaged("fewer", 95, 100, 999), engaged("more", 95, 200, 1)];
        rank_by_engagement(&mut candidates);
        assert_eq!(candidates[0].user_id, "more");
    }

    #[test]
    fn test_unengaged_profiles_sort_last() {
        let mut candidates = vec![profile("none", (1995, 7, 23)), engaged("some", 50, 1, 1)];
        rank_by_engagement(&mut candidates);
        assert_eq!(candidates[0].user_id, "some");
    }
}
