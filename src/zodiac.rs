//! Western sun-sign lookup by birth month and day.
//!
//! Signs live in one static table ordered by start date. Classification
//! walks the table and returns the first sign whose inclusive range holds
//! the (month, day) pair; Capricorn wraps the year boundary and is the
//! fallback when nothing else matches.

use std::fmt;

use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static display bundle for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub symbol_name: &'static str,
    pub element: Element,
    pub date_range: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

/// Inclusive (month, day) bounds of a sign that does not wrap the year.
struct SignRange {
    start: (u32, u32),
    end: (u32, u32),
    sign: ZodiacSign,
}

impl SignRange {
    fn contains(&self, month: u32, day: u32) -> bool {
        (month, day) >= self.start && (month, day) <= self.end
    }
}

const fn sign(
    name: &'static str,
    symbol_name: &'static str,
    element: Element,
    date_range: &'static str,
    emoji: &'static str,
    description: &'static str,
) -> ZodiacSign {
    ZodiacSign {
        name,
        symbol_name,
        element,
        date_range,
        emoji,
        description,
    }
}

pub const CAPRICORN: ZodiacSign = sign(
    "Capricorn",
    "Goat",
    Element::Earth,
    "December 22 - January 19",
    "♑",
    "Disciplined and responsible, Capricorns are known for their ambition and practical approach to life.",
);

static SIGN_RANGES: [SignRange; 11] = [
    SignRange {
        start: (1, 20),
        end: (2, 18),
        sign: sign(
            "Aquarius",
            "Water Bearer",
            Element::Air,
            "January 20 - February 18",
            "♒",
            "Independent and intellectual, Aquarians are known for their innovative thinking and humanitarian nature.",
        ),
    },
    SignRange {
        start: (2, 19),
        end: (3, 20),
        sign: sign(
            "Pisces",
            "Fish",
            Element::Water,
            "February 19 - March 20",
            "♓",
            "Compassionate and artistic, Pisceans are known for their empathy and emotional depth.",
        ),
    },
    SignRange {
        start: (3, 21),
        end: (4, 19),
        sign: sign(
            "Aries",
            "Ram",
            Element::Fire,
            "March 21 - April 19",
            "♈",
            "Energetic and courageous, Aries are natural leaders with a passion for new challenges.",
        ),
    },
    SignRange {
        start: (4, 20),
        end: (5, 20),
        sign: sign(
            "Taurus",
            "Bull",
            Element::Earth,
            "April 20 - May 20",
            "♉",
            "Reliable and practical, Taureans value stability and enjoy life's pleasures.",
        ),
    },
    SignRange {
        start: (5, 21),
        end: (6, 20),
        sign: sign(
            "Gemini",
            "Twins",
            Element::Air,
            "May 21 - June 20",
            "♊",
            "Versatile and curious, Geminis are communicative and enjoy learning about diverse subjects.",
        ),
    },
    SignRange {
        start: (6, 21),
        end: (7, 22),
        sign: sign(
            "Cancer",
            "Crab",
            Element::Water,
            "June 21 - July 22",
            "♋",
            "Intuitive and emotional, Cancerians are nurturing and deeply connected to home and family.",
        ),
    },
    SignRange {
        start: (7, 23),
        end: (8, 22),
        sign: sign(
            "Leo",
            "Lion",
            Element::Fire,
            "July 23 - August 22",
            "♌",
            "Confident and ambitious, Leos are natural performers who enjoy being in the spotlight.",
        ),
    },
    SignRange {
        start: (8, 23),
        end: (9, 22),
        sign: sign(
            "Virgo",
            "Virgin",
            Element::Earth,
            "August 23 - September 22",
            "♍",
            "Analytical and practical, Virgos are detail-oriented perfectionists with a desire to help others.",
        ),
    },
    SignRange {
        start: (9, 23),
        end: (10, 22),
        sign: sign(
            "Libra",
            "Scales",
            Element::Air,
            "September 23 - October 22",
            "♎",
            "Diplomatic and fair, Libras seek balance and harmony in all aspects of life.",
        ),
    },
    SignRange {
        start: (10, 23),
        end: (11, 21),
        sign: sign(
            "Scorpio",
            "Scorpion",
            Element::Water,
            "October 23 - November 21",
            "♏",
            "Passionate and determined, Scorpios are known for their intensity and emotional depth.",
        ),
    },
    SignRange {
        start: (11, 22),
        end: (12, 21),
        sign: sign(
            "Sagittarius",
            "Archer",
            Element::Fire,
            "November 22 - December 21",
            "♐",
            "Optimistic and adventurous, Sagittarians love exploring and philosophical pursuits.",
        ),
    },
];

/// Classifies any date-like value by its month and day.
pub fn classify<D: Datelike>(birth: &D) -> ZodiacSign {
    classify_month_day(birth.month(), birth.day())
}

/// Total over any integers; calendar validity is not checked.
pub fn classify_month_day(month: u32, day: u32) -> ZodiacSign {
    SIGN_RANGES
        .iter()
        .find(|range| range.contains(month, day))
        .map(|range| range.sign)
        .unwrap_or(CAPRICORN)
}
