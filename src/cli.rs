use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};

use agecounter::instant::parse_instant;
use agecounter::output::OutputFormat;
use agecounter::svg::Theme;

#[derive(Debug, Parser)]
#[command(name = "agecounter", version, about = "Age, zodiac sign and birthday countdown")]
pub struct Cli {
    /// Output format (overrides config).
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print age, zodiac sign, next birthday and milestones.
    Show(DatesArgs),
    /// Recompute against the current time on a fixed interval.
    Watch(WatchArgs),
    /// Write an SVG summary card.
    Card(CardArgs),
    /// Print share text and social links.
    Share(ShareArgs),
    /// Read or change the saved theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Debug, Clone, Args)]
pub struct DatesArgs {
    /// Birth date, `YYYY-MM-DD[THH:MM[:SS]]` (falls back to config `birth`).
    #[arg(short, long, value_parser = parse_instant)]
    pub birth: Option<NaiveDateTime>,

    /// Custom reference instant instead of now.
    #[arg(short, long, value_parser = parse_instant)]
    pub reference: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub dates: DatesArgs,

    /// Seconds between refreshes (overrides config `refresh_secs`).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub every: Option<u64>,

    /// Stop after this many refreshes.
    #[arg(long)]
    pub ticks: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct CardArgs {
    #[command(flatten)]
    pub dates: DatesArgs,

    /// Theme for this card only.
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Destination file.
    #[arg(short, long, default_value = "age_card.svg")]
    pub out: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct ShareArgs {
    #[command(flatten)]
    pub dates: DatesArgs,

    /// Page to link from share URLs (overrides config `page_url`).
    #[arg(long)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ThemeAction {
    /// Print the active theme.
    Get,
    /// Save a theme preference.
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
}
