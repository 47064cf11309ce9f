//! Daily horoscope content: love tips, lucky colors, and dating forecasts.
//!
//! All content is static and rotated deterministically: tips by day of year,
//! colors by weekday, forecasts by the decan of the birth date. Declared once
//! here so every view reads the same tables.

use crate::core::zodiac::ZodiacSign;
use crate::models::LuckyColors;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Position of a birth date within its sign's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decan {
    Early,
    Mid,
    Late,
}

impl std::fmt::Display for Decan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Decan::Early => "early",
            Decan::Mid => "mid",
            Decan::Late => "late",
        })
    }
}

/// Decan from the day of month: 1-10 early, 11-20 mid, 21+ late.
pub fn decan(birth_date: NaiveDate) -> Decan {
    match birth_date.day() {
        1..=10 => Decan::Early,
        11..=20 => Decan::Mid,
        _ => Decan::Late,
    }
}

/// Dating forecast for a sign, at preview and full length.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoveForecast {
    pub preview: &'static str,
    pub full: &'static str,
}

fn sign_index(sign: ZodiacSign) -> usize {
    match sign {
        ZodiacSign::Aries => 0,
        ZodiacSign::Taurus => 1,
        ZodiacSign::Gemini => 2,
        ZodiacSign::Cancer => 3,
        ZodiacSign::Leo => 4,
        ZodiacSign::Virgo => 5,
        ZodiacSign::Libra => 6,
        ZodiacSign::Scorpio => 7,
        ZodiacSign::Sagittarius => 8,
        ZodiacSign::Capricorn => 9,
        ZodiacSign::Aquarius => 10,
        ZodiacSign::Pisces => 11,
    }
}

/// Seven love tips per sign, rotated by day of year.
const LOVE_TIPS: [[&str; 7]; 12] = [
    [
        "Your bold energy is magnetic today - make the first move!",
        "Plan an active date to showcase your adventurous spirit",
        "Your directness is refreshing - speak your truth in love",
        "Channel your competitive nature into playful flirting",
        "Your confidence is your best accessory today",
        "Take the lead in planning something spontaneous",
        "Your enthusiasm is contagious - let it shine on dates",
    ],
    [
        "Slow and steady wins hearts today - take your time",
        "Plan a sensual date involving good food or beautiful scenery",
        "Your reliability is incredibly attractive right now",
        "Show love through thoughtful gestures and quality time",
        "Your grounded nature is exactly what someone needs",
        "Create a cozy, comfortable atmosphere for connection",
        "Trust your instincts about long-term potential",
    ],
    [
        "Your wit and conversation skills are irresistible today",
        "Ask thoughtful questions to create deeper connections",
        "Your curiosity about others is your dating superpower",
        "Share interesting stories to captivate potential partners",
        "Your adaptability makes you appealing to many types",
        "Plan dates that involve learning something new together",
        "Your mental agility is particularly attractive right now",
    ],
    [
        "Trust your intuition about people's true intentions",
        "Your nurturing nature is drawing in quality partners",
        "Create emotional safety for deeper connections to bloom",
        "Your empathy helps others feel truly understood",
        "Home-based dates will feel especially meaningful today",
        "Your protective instincts show how much you care",
        "Listen to your heart - it knows what it wants",
    ],
    [
        "Your natural radiance is impossible to ignore today",
        "Be generous with compliments - your warmth is magnetic",
        "Plan dates where you can both shine and have fun",
        "Your loyalty and big heart are your best qualities",
        "Don't dim your light for anyone - the right person loves your glow",
        "Your dramatic flair makes ordinary moments special",
        "Show appreciation for your date's unique qualities",
    ],
    [
        "Your attention to detail shows how much you care",
        "Plan thoughtful dates that demonstrate your consideration",
        "Your practical approach to love is refreshingly honest",
        "Help others feel appreciated for who they truly are",
        "Your reliability makes you an ideal long-term partner",
        "Show love through helpful actions and kind gestures",
        "Your analytical skills help you spot genuine connections",
    ],
    [
        "Your charm and diplomacy create harmony in all interactions",
        "Plan aesthetically pleasing dates in beautiful settings",
        "Your fair-minded approach makes others feel valued",
        "Create balance between giving and receiving in relationships",
        "Your social grace makes you appealing to many",
        "Focus on creating beautiful shared experiences",
        "Your desire for partnership attracts like-minded souls",
    ],
    [
        "Your intensity draws in those ready for real connection",
        "Trust your ability to see beneath surface attractions",
        "Your mysterious allure is particularly powerful today",
        "Create safe spaces for vulnerable, authentic sharing",
        "Your passion is magnetic to the right person",
        "Deep conversations will lead to meaningful bonds",
        "Your transformative energy helps relationships evolve",
    ],
    [
        "Your adventurous spirit attracts fellow explorers",
        "Plan dates that involve new experiences or learning",
        "Your optimism and humor light up every interaction",
        "Share your philosophical insights to create deeper bonds",
        "Your honesty and directness are refreshingly authentic",
        "Embrace spontaneity in your romantic adventures",
        "Your love of growth attracts evolving individuals",
    ],
    [
        "Your ambition and stability are incredibly attractive",
        "Show your softer side to create emotional connection",
        "Your long-term thinking attracts serious partners",
        "Plan quality dates that demonstrate your good taste",
        "Your reliability makes others feel secure and valued",
        "Your dry humor and wisdom are uniquely appealing",
        "Build relationships slowly but surely for lasting results",
    ],
    [
        "Your unique perspective makes you fascinating to others",
        "Embrace your individuality - it's your greatest asset",
        "Your humanitarian nature attracts conscious partners",
        "Plan unconventional dates that reflect your values",
        "Your friendship-first approach creates strong foundations",
        "Your vision for the future inspires potential partners",
        "Your independence is attractive to secure individuals",
    ],
    [
        "Your intuitive understanding of others is your gift",
        "Create romantic, dreamy atmospheres for connection",
        "Your compassionate nature draws in sensitive souls",
        "Trust your psychic impressions about compatibility",
        "Your artistic sensibility makes ordinary moments magical",
        "Your ability to love unconditionally is rare and precious",
        "Let your imagination guide you to creative date ideas",
    ],
];

/// Seven lucky color sets per sign, rotated by weekday (Sunday first).
const LUCKY_COLORS: [[(&str, &str, &str); 7]; 12] = [
    [
        ("Red", "Orange", "Gold"),
        ("Crimson", "Coral", "Bronze"),
        ("Scarlet", "Amber", "Copper"),
        ("Ruby", "Peach", "Rose Gold"),
        ("Burgundy", "Salmon", "Champagne"),
        ("Cherry", "Tangerine", "Brass"),
        ("Maroon", "Apricot", "Honey"),
    ],
    [
        ("Green", "Brown", "Pink"),
        ("Forest Green", "Chocolate", "Rose"),
        ("Emerald", "Tan", "Blush"),
        ("Sage", "Caramel", "Dusty Rose"),
        ("Olive", "Mocha", "Mauve"),
        ("Mint", "Beige", "Coral"),
        ("Jade", "Taupe", "Peony"),
    ],
    [
        ("Yellow", "Silver", "Blue"),
        ("Lemon", "Platinum", "Sky Blue"),
        ("Canary", "Chrome", "Periwinkle"),
        ("Sunshine", "Mercury", "Powder Blue"),
        ("Butter", "Steel", "Cerulean"),
        ("Citrine", "Pewter", "Azure"),
        ("Goldenrod", "Titanium", "Cornflower"),
    ],
    [
        ("Silver", "White", "Sea Blue"),
        ("Pearl", "Ivory", "Ocean Blue"),
        ("Moonstone", "Cream", "Aqua"),
        ("Platinum", "Snow", "Teal"),
        ("Chrome", "Alabaster", "Turquoise"),
        ("Sterling", "Bone", "Seafoam"),
        ("Opal", "Linen", "Marina"),
    ],
    [
        ("Gold", "Orange", "Red"),
        ("Amber", "Tangerine", "Crimson"),
        ("Honey", "Peach", "Scarlet"),
        ("Champagne", "Coral", "Ruby"),
        ("Bronze", "Apricot", "Cherry"),
        ("Copper", "Salmon", "Rose"),
        ("Brass", "Sunset", "Fire"),
    ],
    [
        ("Navy", "Gray", "White"),
        ("Midnight", "Charcoal", "Pearl"),
        ("Indigo", "Slate", "Ivory"),
        ("Sapphire", "Ash", "Snow"),
        ("Royal Blue", "Graphite", "Cream"),
        ("Cobalt", "Stone", "Alabaster"),
        ("Steel Blue", "Pewter", "Linen"),
    ],
    [
        ("Pink", "Blue", "Green"),
        ("Rose", "Powder Blue", "Mint"),
        ("Blush", "Sky Blue", "Sage"),
        ("Coral", "Periwinkle", "Jade"),
        ("Peony", "Azure", "Emerald"),
        ("Dusty Rose", "Cerulean", "Forest"),
        ("Mauve", "Cornflower", "Olive"),
    ],
    [
        ("Black", "Red", "Purple"),
        ("Obsidian", "Crimson", "Violet"),
        ("Onyx", "Burgundy", "Plum"),
        ("Charcoal", "Maroon", "Amethyst"),
        ("Midnight", "Wine", "Lavender"),
        ("Ebony", "Cherry", "Orchid"),
        ("Jet", "Ruby", "Magenta"),
    ],
    [
        ("Purple", "Turquoise", "Orange"),
        ("Violet", "Teal", "Tangerine"),
        ("Amethyst", "Aqua", "Peach"),
        ("Plum", "Cyan", "Coral"),
        ("Lavender", "Seafoam", "Apricot"),
        ("Orchid", "Marina", "Salmon"),
        ("Magenta", "Turquoise", "Sunset"),
    ],
    [
        ("Black", "Brown", "Gray"),
        ("Charcoal", "Chocolate", "Silver"),
        ("Onyx", "Espresso", "Pewter"),
        ("Midnight", "Mocha", "Steel"),
        ("Obsidian", "Caramel", "Platinum"),
        ("Jet", "Tan", "Chrome"),
        ("Ebony", "Taupe", "Titanium"),
    ],
    [
        ("Blue", "Silver", "White"),
        ("Electric Blue", "Platinum", "Snow"),
        ("Cobalt", "Chrome", "Pearl"),
        ("Sapphire", "Mercury", "Ivory"),
        ("Azure", "Steel", "Cream"),
        ("Cerulean", "Titanium", "Alabaster"),
        ("Royal Blue", "Pewter", "Linen"),
    ],
    [
        ("Sea Green", "Purple", "Silver"),
        ("Teal", "Lavender", "Pearl"),
        ("Aqua", "Violet", "Moonstone"),
        ("Turquoise", "Amethyst", "Opal"),
        ("Seafoam", "Plum", "Sterling"),
        ("Marina", "Orchid", "Platinum"),
        ("Cyan", "Magenta", "Chrome"),
    ],
];

/// Decan-sensitive forecast previews: [early, mid, late] per sign.
const FORECAST_PREVIEWS: [[&str; 3]; 12] = [
    [
        "Born in early Aries, your pioneering Mars energy is at its peak. Your bold, direct approach to dating is magnetic - don't second-guess your instincts.",
        "As a mid-Aries, you balance fiery passion with strategic thinking in love. Your confident yet thoughtful approach is attracting quality partners.",
        "Late Aries energy brings wisdom to your romantic pursuits. Your matured fire makes you irresistible to those seeking passionate yet stable connections.",
    ],
    [
        "Early Taurus energy brings pure Venus magic to your love life. Take your time - your patient approach is your greatest strength.",
        "Mid-Taurus combines earthly sensuality with practical wisdom. Your ability to create beautiful, comfortable experiences draws quality partners.",
        "Late Taurus energy adds determination to your pursuits. Your unwavering loyalty is magnetic to those seeking long-term partnership.",
    ],
    [
        "Early Gemini sparkle is lighting up your dating life! Your quick wit and genuine curiosity about people are your superpowers.",
        "Mid-Gemini energy brings depth to your natural charm. Your conversations are becoming gateways to real intimacy.",
        "Late Gemini combines mental agility with emotional wisdom. Your mature communication style attracts genuine connection.",
    ],
    [
        "Early Cancer intuition is your dating superpower. Trust your gut feelings about people - they're remarkably accurate.",
        "Mid-Cancer energy balances emotional depth with protective wisdom. Your safe spaces for vulnerability attract quality partners.",
        "Late Cancer combines intuitive gifts with emotional strength. Your mature approach to feelings is magnetic.",
    ],
    [
        "Early Leo radiance is impossible to ignore! Your authentic confidence and warmth are your most attractive qualities right now.",
        "Mid-Leo energy combines natural magnetism with mature leadership. You make others feel special while maintaining your own shine.",
        "Late Leo brings wisdom to your natural charisma. Your mature confidence is irresistible.",
    ],
    [
        "Early Virgo precision is your dating advantage. Your practical approach to love is refreshingly authentic.",
        "Mid-Virgo energy balances analytical gifts with intuitive understanding. Partners feel truly seen and valued by you.",
        "Late Virgo combines practical wisdom with refined intuition. Seeing potential while accepting reality is magnetic.",
    ],
    [
        "Early Libra charm is irresistible right now! Your ability to make everyone feel valued is your greatest romantic asset.",
        "Mid-Libra energy balances your need for partnership with healthy independence. Mature partners value your fair-minded approach.",
        "Late Libra combines natural charm with decisive wisdom. You create harmony while keeping your own identity.",
    ],
    [
        "Early Scorpio intensity is magnetically powerful. Your soul-deep connections draw partners who crave authentic intimacy.",
        "Mid-Scorpio energy balances passionate depth with emotional wisdom. You offer safety within intensity.",
        "Late Scorpio combines intuitive gifts with emotional mastery. You understand the depths of the human heart.",
    ],
    [
        "Early Sagittarius adventure energy is infectious! Your philosophical nature makes every conversation an adventure.",
        "Mid-Sagittarius balances wanderlust with wisdom. You find meaning in experiences while staying open to new adventures.",
        "Late Sagittarius combines adventurous spirit with mature wisdom. You explore both the world and the heart.",
    ],
    [
        "Early Capricorn determination is incredibly attractive. Your quiet confidence is magnetic.",
        "Mid-Capricorn energy balances ambition with emotional warmth. You build solid foundations while staying open to love's surprises.",
        "Late Capricorn combines practical wisdom with refined sensitivity. You build slowly but surely.",
    ],
    [
        "Early Aquarius innovation is electrifying your love life! Your friendship-first approach to romance is refreshingly authentic.",
        "Mid-Aquarius energy balances independence with connection. You keep your individuality while building meaningful bonds.",
        "Late Aquarius combines visionary thinking with emotional wisdom. You honor both independence and intimacy.",
    ],
    [
        "Early Pisces intuition is your romantic superpower! Your ability to love unconditionally is magnetic.",
        "Mid-Pisces energy balances dreamy romance with practical wisdom. You see the best in people while holding healthy boundaries.",
        "Late Pisces combines intuitive gifts with grounded wisdom. You dream big while staying rooted in reality.",
    ],
];

/// Full readings, one per sign.
const FORECAST_FULL: [&str; 12] = [
    "Mars, your ruling planet, is amplifying your natural magnetism and courage in love. Your direct, no-games approach is exactly what the dating world needs right now. Plan active dates where your energy shines, and trust your first impressions about people - they are remarkably accurate during this period.",
    "Venus manifests through you in her most earthly form. Your patient, steady approach to dating attracts individuals who are tired of games and ready for something real. Plan sensory-rich dates, and know that your ability to create comfort in simple moments is your greatest asset.",
    "Mercury's energy makes you the most interesting person in any room. You attract partners through the power of genuine conversation and intellectual connection. Plan dates that involve discovery and dialogue; your ideal matches share your love of learning and growth.",
    "Your lunar energy is at its peak, making you incredibly attractive to partners seeking genuine emotional connection. Your ability to create safe, nurturing spaces where people can be vulnerable is your greatest dating asset. Plan quiet dates where real conversation can flow.",
    "Your Sun energy is radiant: confidence, generosity, and warmth at their peak. You are not just confident, you are confidently generous, which is incredibly attractive. Plan dates that let your natural radiance shine while making your date feel like a star too.",
    "Your caring attention to detail is incredibly attractive to partners who feel overlooked by others. Showing care through actions rather than just words draws in individuals who value substance over flash. Plan thoughtful dates where your consideration can shine.",
    "Venus gives you pure charm and social grace. Your diplomatic skills and genuine interest in fairness appeal to partners who value emotional intelligence. Plan dates that highlight your aesthetic sense, and focus on creating beautiful shared experiences.",
    "Your transformative energy helps you see through facades and connect with people's authentic selves. Your mysterious allure and emotional depth draw in individuals ready for the kind of love that changes them. Plan dates that allow for deep connection and meaningful conversation.",
    "Jupiter expands your natural enthusiasm and curiosity about the world. Your philosophical approach to life draws in partners who want their horizons expanded. You are meaningfully fun, which is irresistible to those seeking both excitement and depth.",
    "Saturn manifests through you as determination and practical wisdom. Your quiet confidence and steady reliability draw in individuals who are tired of uncertainty and ready for someone they can count on. Plan quality dates that demonstrate your good taste.",
    "Uranus gives you innovation and humanitarian vision. Your ability to see people for who they truly are, beyond social conventions, draws in individuals who feel misunderstood by others. Your friendship-first approach creates the strongest foundations for lasting love.",
    "Neptune fills you with compassion and intuitive understanding. Your artistic nature and emotional intelligence draw in individuals who appreciate both creativity and depth. Your empathy creates healing spaces where people can be their most authentic selves.",
];

/// Recommended dating bio per sign.
const RECOMMENDED_BIOS: [&str; 12] = [
    "Bold adventurer seeking someone who matches my energy! Let's create epic memories together \u{1F525}",
    "Grounded soul who loves life's finer pleasures. Looking for something beautiful and lasting \u{1F331}",
    "Curious mind with endless stories. Love deep conversations and spontaneous adventures \u{2728}",
    "Intuitive heart seeking genuine connection. Home is wherever we're together \u{1F319}",
    "Confident spirit with a generous heart. Looking for someone who appreciates my shine \u{2600}\u{FE0F}",
    "Thoughtful perfectionist who shows love through actions. I notice the little things \u{1F33F}",
    "Harmony-seeking romantic with an eye for beauty. Let's create elegant moments together \u{2696}\u{FE0F}",
    "Intense soul seeking transformative connection. Ready for love that changes us both \u{1F52E}",
    "Free-spirited explorer ready for the next adventure. Join my journey! \u{1F3F9}",
    "Ambitious dreamer building a life worth sharing. Let's climb mountains together \u{1F3D4}\u{FE0F}",
    "Unique visionary seeking conscious connection. Let's change the world together \u{1F31F}",
    "Dreamy romantic with an artistic soul. I see magic in everyday moments \u{1F30A}",
];

/// Love tip of the day for a sign.
pub fn daily_love_tip(sign: ZodiacSign, today: NaiveDate) -> &'static str {
    let tips = &LOVE_TIPS[sign_index(sign)];
    tips[today.ordinal0() as usize % tips.len()]
}

/// Lucky colors of the day for a sign.
pub fn lucky_colors(sign: ZodiacSign, today: NaiveDate) -> LuckyColors {
    let (primary, secondary, accent) =
        LUCKY_COLORS[sign_index(sign)][today.weekday().num_days_from_sunday() as usize];
    LuckyColors {
        primary,
        secondary,
        accent,
    }
}

/// Dating forecast for a birth date: the preview varies with the decan, the
/// full reading is per sign.
pub fn love_forecast(sign: ZodiacSign, birth_date: NaiveDate) -> LoveForecast {
    let previews = &FORECAST_PREVIEWS[sign_index(sign)];
    let preview = match decan(birth_date) {
        Decan::Early => previews[0],
        Decan::Mid => previews[1],
        Decan::Late => previews[2],
    };
    LoveForecast {
        preview,
        full: FORECAST_FULL[sign_index(sign)],
    }
}

/// Suggested profile bio for a sign.
pub fn recommended_bio(sign: ZodiacSign) -> &'static str {
    RECOMMENDED_BIOS[sign_index(sign)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::zodiac::ALL_SIGNS;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_decan_boundaries() {
        assert_eq!(decan(date(1995, 7, 1)), Decan::Early);
        assert_eq!(decan(date(1995, 7, 10)), Decan::Early);
        assert_eq!(decan(date(1995, 7, 11)), Decan::Mid);
        assert_eq!(decan(date(1995, 7, 20)), Decan::Mid);
        assert_eq!(decan(date(1995, 7, 21)), Decan::Late);
        assert_eq!(decan(date(1995, 7, 31)), Decan::Late);
    }

    #[test]
    fn test_tip_is_deterministic_per_day() {
        let today = date(2024, 3, 14);
        assert_eq!(
            daily_love_tip(ZodiacSign::Leo, today),
            daily_love_tip(ZodiacSign::Leo, today)
        );
    }

    #[test]
    fn test_tips_rotate_weekly() {
        // Seven consecutive days should yield all seven tips
        let mut seen = std::collections::HashSet::new();
        for offset in 0..7 {
            let day = date(2024, 3, 1 + offset);
            seen.insert(daily_love_tip(ZodiacSign::Aries, day));
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_colors_rotate_by_weekday() {
        // 2024-03-03 is a Sunday
        let sunday = date(2024, 3, 3);
        let colors = lucky_colors(ZodiacSign::Aries, sunday);
        assert_eq!(colors.primary, "Red");
        assert_eq!(colors.secondary, "Orange");
        assert_eq!(colors.accent, "Gold");

        let monday = date(2024, 3, 4);
        assert_eq!(lucky_colors(ZodiacSign::Aries, monday).primary, "Crimson");
    }

    #[test]
    fn test_every_sign_has_content() {
        let today = date(2024, 6, 1);
        for sign in ALL_SIGNS {
            assert!(!daily_love_tip(sign, today).is_empty());
            assert!(!lucky_colors(sign, today).primary.is_empty());
            assert!(!recommended_bio(sign).is_empty());
            let forecast = love_forecast(sign, today);
            assert!(!forecast.preview.is_empty());
            assert!(!forecast.full.is_empty());
        }
    }

    #[test]
    fn test_forecast_preview_varies_by_decan() {
        let early = love_forecast(ZodiacSign::Leo, date(1995, 8, 2));
        let late = love_forecast(ZodiacSign::Leo, date(1995, 8, 21));
        assert_ne!(early.preview, late.preview);
        assert_eq!(early.full, late.full);
    }
}
