use std::fmt::Write as _;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::age::plural;
use crate::profile::AgeProfile;

/// Output mode shared by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render any serializable response; text falls back to `text_fn`.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text_fn: impl FnOnce(&T) -> String,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value),
        OutputFormat::Text => Ok(text_fn(value)),
    }
}

pub fn profile_text(profile: &AgeProfile) -> String {
    let age = profile.age;
    let sign = &profile.zodiac;
    let next = &profile.next_birthday;

    let mut out = String::new();
    let _ = writeln!(out, "Age:           {age}");
    let _ = writeln!(
        out,
        "Zodiac:        {} {} ({}, {})",
        sign.emoji, sign.name, sign.symbol_name, sign.element
    );
    let _ = writeln!(out, "               {}", sign.date_range);
    let _ = writeln!(out, "               {}", sign.description);
    let _ = writeln!(
        out,
        "Next birthday: {} ({} day{} until you turn {}, {:.0}% of the way)",
        next.date.format("%B %-d, %Y"),
        next.days_until,
        plural(i32::try_from(next.days_until).unwrap_or(i32::MAX)),
        next.next_age,
        next.progress_percent()
    );

    if profile.milestones.is_empty() {
        return out;
    }

    let _ = writeln!(out, "Milestones:");
    for m in &profile.milestones {
        let _ = writeln!(
            out,
            "  {:>3}  {} year{} from now ({} days)",
            m.age,
            m.years_until,
            plural(i32::try_from(m.years_until).unwrap_or(i32::MAX)),
            m.days_until
        );
    }
    out
}
