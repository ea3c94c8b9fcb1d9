mod cli;

use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use tracing::{info, warn};

use agecounter::config::AppConfig;
use agecounter::instant;
use agecounter::output::{self, OutputFormat};
use agecounter::prefs::{self, JsonFileStore, MemoryStore, PreferenceStore};
use agecounter::profile::AgeProfile;
use agecounter::share::{ShareLinks, share_text};
use agecounter::svg::{self, Theme};
use agecounter::watch::Refresher;
use cli::{Cli, Commands, DatesArgs, ThemeAction};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("agecounter error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = AppConfig::load().context("failed to load configuration")?;
    let format = cli.format.unwrap_or(config.format);
    let store = preference_store();

    match cli.command {
        Commands::Show(dates) => {
            let profile = compute(&dates, &config)?;
            emit(&profile, format, output::profile_text)?;
        }
        Commands::Watch(args) => {
            let birth = resolve_birth(&args.dates, &config)?;

            // A custom reference has nothing to refresh
            if let Some(reference) = args.dates.reference {
                let profile = AgeProfile::compute(birth, reference)?;
                return emit(&profile, format, output::profile_text);
            }

            let period = Duration::from_secs(args.every.unwrap_or(config.refresh_secs));
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!(error = %e, "failed to listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            };

            Refresher::new(birth, period, instant::now)
                .run(args.ticks, shutdown, |result| match result {
                    Ok(profile) => {
                        if let Err(e) = emit(&profile, format, output::profile_text) {
                            warn!(error = %e, "failed to render profile");
                        }
                    }
                    // Keep refreshing; the birth date may come into range.
                    Err(e) => warn!(error = %e, "skipping refresh"),
                })
                .await;
        }
        Commands::Card(args) => {
            let profile = compute(&args.dates, &config)?;
            let theme = args
                .theme
                .or(config.theme)
                .unwrap_or_else(|| prefs::load_theme(&*store, Theme::default()));

            let card = svg::render_card(&profile, theme);
            fs::write(&args.out, card)
                .with_context(|| format!("failed to write {}", args.out.display()))?;

            info!(path = %args.out.display(), %theme, "wrote card");
            println!("Generated {} ({theme} theme).", args.out.display());
        }
        Commands::Share(args) => {
            let profile = compute(&args.dates, &config)?;
            let page_url = args.url.unwrap_or(config.page_url);
            let links = ShareLinks::new(&share_text(&profile.age, &profile.zodiac), &page_url);
            emit(&links, format, |l| {
                format!(
                    "{}\n\nTwitter:  {}\nFacebook: {}\nLinkedIn: {}",
                    l.text, l.twitter, l.facebook, l.linkedin
                )
            })?;
        }
        Commands::Theme { action } => match action {
            ThemeAction::Get => {
                let theme = config
                    .theme
                    .unwrap_or_else(|| prefs::load_theme(&*store, Theme::default()));
                println!("{theme}");
            }
            ThemeAction::Set { theme } => {
                prefs::save_theme(&*store, theme)
                    .context("failed to save theme preference")?;
                println!("Theme set to {theme}.");
            }
        },
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGECOUNTER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn preference_store() -> Box<dyn PreferenceStore> {
    match JsonFileStore::user_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, "preferences will not persist");
            Box::new(MemoryStore::default())
        }
    }
}

fn resolve_birth(dates: &DatesArgs, config: &AppConfig) -> Result<NaiveDateTime> {
    match dates.birth {
        Some(birth) => Ok(birth),
        None => config
            .birth_instant()?
            .context("no birth date given; pass --birth or set `birth` in config"),
    }
}

fn compute(dates: &DatesArgs, config: &AppConfig) -> Result<AgeProfile> {
    let birth = resolve_birth(dates, config)?;
    let reference = dates.reference.unwrap_or_else(instant::now);
    Ok(AgeProfile::compute(birth, reference)?)
}

fn emit<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    text_fn: impl FnOnce(&T) -> String,
) -> Result<()> {
    let rendered = output::render(value, format, text_fn)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
