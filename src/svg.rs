use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::age::plural;
use crate::profile::AgeProfile;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const GAP_BETWEEN_COLUMNS: f32 = 10.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_RIGHT_COL_CHARS: usize = 44;
const GLYPH_SIZE_PX: f32 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Vintage,
    Futuristic,
    Local,
    Handdrawn,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
    pub font: &'static str,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Vintage => "vintage",
            Theme::Futuristic => "futuristic",
            Theme::Local => "local",
            Theme::Handdrawn => "handdrawn",
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Vintage => ThemeColors {
                bg: "#f4ecd8",
                text: "#3b2f2f",
                key: "#8b4513",
                value: "#5c4033",
                cc: "#a08c72",
                font: "Georgia,serif",
            },
            Theme::Futuristic => ThemeColors {
                bg: "#0b0f1a",
                text: "#e0f7ff",
                key: "#00e5ff",
                value: "#c77dff",
                cc: "#3a4a6b",
                font: "ConsolasFallback,Consolas,monospace",
            },
            Theme::Local => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
                font: "system-ui,sans-serif",
            },
            Theme::Handdrawn => ThemeColors {
                bg: "#fffdf5",
                text: "#2d2d2d",
                key: "#e4572e",
                value: "#17bebb",
                cc: "#9e9e9e",
                font: "'Comic Sans MS',cursive",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vintage" => Ok(Theme::Vintage),
            "futuristic" => Ok(Theme::Futuristic),
            "local" => Ok(Theme::Local),
            "handdrawn" => Ok(Theme::Handdrawn),
            other => Err(format!(
                "unknown theme `{other}`; expected vintage|futuristic|local|handdrawn"
            )),
        }
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(String),
    Blank,
    Stat { key: String, value: String },
}

fn card_lines(profile: &AgeProfile) -> Vec<Line> {
    let stat = |key: &str, value: String| Line::Stat {
        key: key.to_string(),
        value,
    };

    let age = profile.age;
    let sign = &profile.zodiac;
    let next = &profile.next_birthday;

    let mut lines = vec![
        Line::Header("- Age".to_string()),
        stat("Years", age.years.to_string()),
        stat("Months", age.months.to_string()),
        stat("Days", age.days.to_string()),
        stat("Hours", age.hours.to_string()),
        Line::Blank,
        Line::Header("- Zodiac".to_string()),
        stat("Sign", format!("{} ({})", sign.name, sign.symbol_name)),
        stat("Element", sign.element.to_string()),
        stat("Dates", sign.date_range.to_string()),
        Line::Blank,
        Line::Header("- Next Birthday".to_string()),
        stat("Date", next.date.format("%B %-d, %Y").to_string()),
        stat(
            "Countdown",
            format!("{} days until you turn {}", next.days_until, next.next_age),
        ),
        stat("Progress", format!("{:.0}%", next.progress_percent())),
    ];

    if !profile.milestones.is_empty() {
        lines.push(Line::Blank);
        lines.push(Line::Header("- Milestones".to_string()));
        for m in &profile.milestones {
            let years = i32::try_from(m.years_until).unwrap_or(i32::MAX);
            lines.push(stat(
                &format!("Age {}", m.age),
                format!(
                    "{} year{} ({} days)",
                    m.years_until,
                    plural(years),
                    m.days_until
                ),
            ));
        }
    }

    lines
}

// Builds the right column content and returns (tspans, width, height)

fn build_right_column(profile: &AgeProfile, glyph_width_px: f32) -> (String, f32, f32) {
    let lines = card_lines(profile);

    let align_width = lines
        .iter()
        .filter_map(|line| match line {
            Line::Stat { key, value } => Some(key.chars().count() + 2 + value.chars().count()),
            _ => None,
        })
        .max()
        .unwrap_or(0)
        .max(MIN_RIGHT_COL_CHARS);

    let right_x = glyph_width_px + GAP_BETWEEN_COLUMNS;
    let title = build_header_line("age@counter", align_width);

    let mut right_tspans = format!(
        "<tspan x=\"{right_x}\" y=\"{START_Y}\">{}</tspan>\n",
        escape_xml(&title)
    );

    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32 + 1) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(label) => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}">{}</tspan>
"#,
                    escape_xml(&build_header_line(label, align_width))
                ));
            }
            Line::Stat { key, value } => {
                let (k, d, v) = build_stat_row(key, value, align_width);
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(&k),
                    escape_xml(&d),
                    escape_xml(&v)
                ));
            }
        }
    }

    let right_height_px = (lines.len() as f32 + 1.0) * LINE_HEIGHT as f32 + START_Y as f32;
    let content_width = right_x + (align_width as f32) * CHAR_WIDTH + RIGHT_PADDING;
    let content_height = right_height_px.max(GLYPH_SIZE_PX + START_Y as f32) + 30.0;

    (right_tspans, content_width, content_height)
}

/// Renders the profile as a standalone SVG card.
pub fn render_card(profile: &AgeProfile, theme: Theme) -> String {
    let colors = theme.colors();

    let glyph_width_px = GLYPH_SIZE_PX + 2.0 * LEFT_PADDING;
    let glyph_x = LEFT_PADDING;
    let glyph_y = START_Y as f32 + GLYPH_SIZE_PX * 0.8;

    let (right_tspans, w, h) = build_right_column(profile, glyph_width_px);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="{font}"
     font-size="16px">

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.cc       {{ fill: {cc}; }}
.glyph    {{ fill: {key}; font-size: {glyph_size}px; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<!-- ZODIAC GLYPH -->
<text class="glyph" x="{glyph_x}" y="{glyph_y}">{emoji}</text>

<!-- DETAILS -->
<text fill="{text}">
{right}
</text>

</svg>
"#,
        w = w,
        h = h,
        font = colors.font,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        glyph_size = GLYPH_SIZE_PX,
        glyph_x = glyph_x,
        glyph_y = glyph_y,
        emoji = escape_xml(profile.zodiac.emoji),
        right = right_tspans
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile() -> AgeProfile {
        let birth = NaiveDate::from_ymd_opt(2000, 6, 15)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .expect("valid date");
        let reference = NaiveDate::from_ymd_opt(2024, 6, 20)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid date");
        AgeProfile::compute(birth, reference).expect("profile")
    }

    #[test]
    fn stat_row_pads_with_dots() {
        let (k, d, v) = build_stat_row("Years", "24", 20);
        assert_eq!(k, "Years: ");
        assert_eq!(d, ".".repeat(11));
        assert_eq!(v, "24");
    }

    #[test]
    fn stat_row_short_fill() {
        assert_eq!(build_stat_row("Years", "24", 11).1, ". ");
        assert_eq!(build_stat_row("Years", "24", 10).1, " ");
        assert_eq!(build_stat_row("Years", "24", 5).1, "");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }

    #[test]
    fn card_contains_profile_and_theme_colors() {
        let svg = render_card(&profile(), Theme::Futuristic);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("#0b0f1a"));
        assert!(svg.contains("Gemini (Twins)"));
        assert!(svg.contains("♊"));
        assert!(svg.contains("Age 25"));
        assert!(svg.contains("June 15, 2025"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn themes_parse_case_insensitively() {
        assert_eq!("HandDrawn".parse::<Theme>(), Ok(Theme::Handdrawn));
        assert_eq!(Theme::default(), Theme::Vintage);
        assert!("neon".parse::<Theme>().is_err());
        for theme in [Theme::Vintage, Theme::Futuristic, Theme::Local, Theme::Handdrawn] {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
    }
}
