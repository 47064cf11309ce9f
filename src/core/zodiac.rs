use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The twelve zodiac signs, in calendar order starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Date boundaries per sign as ((start month, start day), (end month, end day)).
/// Both endpoints are inclusive; Capricorn wraps the year boundary.
const SIGN_BOUNDARIES: [(ZodiacSign, (u32, u32), (u32, u32)); 12] = [
    (ZodiacSign::Capricorn, (12, 22), (1, 19)),
    (ZodiacSign::Aquarius, (1, 20), (2, 18)),
    (ZodiacSign::Pisces, (2, 19), (3, 20)),
    (ZodiacSign::Aries, (3, 21), (4, 19)),
    (ZodiacSign::Taurus, (4, 20), (5, 20)),
    (ZodiacSign::Gemini, (5, 21), (6, 20)),
    (ZodiacSign::Cancer, (6, 21), (7, 22)),
    (ZodiacSign::Leo, (7, 23), (8, 22)),
    (ZodiacSign::Virgo, (8, 23), (9, 22)),
    (ZodiacSign::Libra, (9, 23), (10, 22)),
    (ZodiacSign::Scorpio, (10, 23), (11, 21)),
    (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
];

/// Classify a birth date into its zodiac sign.
///
/// Total over the Gregorian calendar: the boundary table covers every
/// (month, day) combination, so the Capricorn fallback is unreachable in
/// practice but keeps the function total without panicking.
pub fn classify(birth_date: NaiveDate) -> ZodiacSign {
    let month = birth_date.month();
    let day = birth_date.day();

    for (sign, (start_month, start_day), (end_month, end_day)) in SIGN_BOUNDARIES {
        if (month == start_month && day >= start_day) || (month == end_month && day <= end_day) {
            return sign;
        }
    }

    ZodiacSign::Capricorn
}

impl ZodiacSign {
    /// Astrological glyph shown next to the sign name in every view.
    pub fn glyph(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "\u{2648}",
            ZodiacSign::Taurus => "\u{2649}",
            ZodiacSign::Gemini => "\u{264A}",
            ZodiacSign::Cancer => "\u{264B}",
            ZodiacSign::Leo => "\u{264C}",
            ZodiacSign::Virgo => "\u{264D}",
            ZodiacSign::Libra => "\u{264E}",
            ZodiacSign::Scorpio => "\u{264F}",
            ZodiacSign::Sagittarius => "\u{2650}",
            ZodiacSign::Capricorn => "\u{2651}",
            ZodiacSign::Aquarius => "\u{2652}",
            ZodiacSign::Pisces => "\u{2653}",
        }
    }

    /// Theme color used for the sign's badge.
    pub fn color(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "red",
            ZodiacSign::Taurus => "green",
            ZodiacSign::Gemini => "yellow",
            ZodiacSign::Cancer => "blue",
            ZodiacSign::Leo => "orange",
            ZodiacSign::Virgo => "emerald",
            ZodiacSign::Libra => "pink",
            ZodiacSign::Scorpio => "crimson",
            ZodiacSign::Sagittarius => "purple",
            ZodiacSign::Capricorn => "gray",
            ZodiacSign::Aquarius => "cyan",
            ZodiacSign::Pisces => "teal",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown zodiac sign: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_boundary_dates_inclusive() {
        assert_eq!(classify(date(1995, 12, 21)), ZodiacSign::Sagittarius);
        assert_eq!(classify(date(1995, 12, 22)), ZodiacSign::Capricorn);
        assert_eq!(classify(date(1996, 1, 19)), ZodiacSign::Capricorn);
        assert_eq!(classify(date(1996, 1, 20)), ZodiacSign::Aquarius);
    }

    #[test]
    fn test_leo_range_start() {
        // Leo starts on Jul 23
        assert_eq!(classify(date(1995, 7, 23)), ZodiacSign::Leo);
        assert_eq!(classify(date(1995, 7, 22)), ZodiacSign::Cancer);
    }

    #[test]
    fn test_every_day_of_year_classifies() {
        // 2000 is a leap year, so all 366 possible (month, day) pairs occur
        let mut d = date(2000, 1, 1);
        while d.year() == 2000 {
            let sign = classify(d);
            assert!(ALL_SIGNS.contains(&sign), "no sign for {}", d);
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_classify_idempotent() {
        let d = date(1994, 8, 5);
        assert_eq!(classify(d), classify(d));
    }

    #[test]
    fn test_mid_range_dates() {
        assert_eq!(classify(date(1997, 6, 15)), ZodiacSign::Gemini);
        assert_eq!(classify(date(1992, 11, 12)), ZodiacSign::Scorpio);
        assert_eq!(classify(date(1995, 10, 7)), ZodiacSign::Libra);
        assert_eq!(classify(date(1998, 3, 1)), ZodiacSign::Pisces);
    }

    #[test]
    fn test_sign_round_trip_from_str() {
        for sign in ALL_SIGNS {
            assert_eq!(sign.name().parse::<ZodiacSign>().unwrap(), sign);
            assert_eq!(sign.name().to_lowercase().parse::<ZodiacSign>().unwrap(), sign);
        }
        assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
    }
}
