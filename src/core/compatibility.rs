use crate::core::zodiac::ZodiacSign;
use rand::Rng;

use ZodiacSign::*;

/// Best-match table: for each sign, the self-match plus the four strongest
/// cross-sign matches at fixed descending scores.
///
/// The table is intentionally asymmetric (e.g. Gemini rates Leo at 80 while
/// Leo rates Gemini at 85); symmetry only holds where both directions happen
/// to be listed at the same value.
const BEST_MATCHES: [(ZodiacSign, [(ZodiacSign, u8); 5]); 12] = [
    (Aries, [(Leo, 95), (Sagittarius, 90), (Gemini, 85), (Aquarius, 80), (Aries, 75)]),
    (Taurus, [(Virgo, 95), (Capricorn, 90), (Cancer, 85), (Pisces, 80), (Taurus, 75)]),
    (Gemini, [(Libra, 95), (Aquarius, 90), (Aries, 85), (Leo, 80), (Gemini, 75)]),
    (Cancer, [(Scorpio, 95), (Pisces, 90), (Taurus, 85), (Virgo, 80), (Cancer, 75)]),
    (Leo, [(Aries, 95), (Sagittarius, 90), (Gemini, 85), (Libra, 80), (Leo, 75)]),
    (Virgo, [(Taurus, 95), (Capricorn, 90), (Cancer, 85), (Scorpio, 80), (Virgo, 75)]),
    (Libra, [(Gemini, 95), (Aquarius, 90), (Leo, 85), (Sagittarius, 80), (Libra, 75)]),
    (Scorpio, [(Cancer, 95), (Pisces, 90), (Virgo, 85), (Capricorn, 80), (Scorpio, 75)]),
    (Sagittarius, [(Leo, 95), (Aries, 90), (Libra, 85), (Aquarius, 80), (Sagittarius, 75)]),
    (Capricorn, [(Virgo, 95), (Taurus, 90), (Scorpio, 85), (Pisces, 80), (Capricorn, 75)]),
    (Aquarius, [(Libra, 95), (Gemini, 90), (Sagittarius, 85), (Aries, 80), (Aquarius, 75)]),
    (Pisces, [(Scorpio, 95), (Cancer, 90), (Capricorn, 85), (Taurus, 80), (Pisces, 75)]),
];

/// Lower bound (inclusive) of the fallback score range for unlisted pairs.
pub const FALLBACK_MIN: u8 = 40;
/// Upper bound (exclusive) of the fallback score range.
pub const FALLBACK_MAX: u8 = 80;

/// Look up the fixed score for a sign pair, if one is tabulated.
pub fn tabulated(a: ZodiacSign, b: ZodiacSign) -> Option<u8> {
    BEST_MATCHES
        .iter()
        .find(|(sign, _)| *sign == a)
        .and_then(|(_, matches)| {
            matches
                .iter()
                .find(|(other, _)| *other == b)
                .map(|(_, score)| *score)
        })
}

/// Compatibility score (0-100) for an ordered sign pair.
///
/// Pairs outside the best-match table fall back to a pseudo-random score in
/// [40, 80); callers must tolerate that repeated calls for the same unlisted
/// pair produce different values.
pub fn compatibility(a: ZodiacSign, b: ZodiacSign) -> u8 {
    tabulated(a, b)
        .unwrap_or_else(|| rand::thread_rng().gen_range(FALLBACK_MIN..FALLBACK_MAX))
}
