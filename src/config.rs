//! Configuration and CLI argument handling

use clap::Parser;
use tracing::warn;

use crate::state::Timer;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "timerdeck")]
#[command(about = "A reducer-driven state store for named timers")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Seed timer in name:duration form, repeatable
    #[arg(long = "preset", value_name = "NAME:DURATION")]
    pub presets: Vec<String>,

    /// Do not start the background render task
    #[arg(long)]
    pub no_render: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Parse the preset arguments into timer records
    ///
    /// The split is on the last colon so names may contain colons. Presets
    /// without a numeric duration are skipped with a warning; the store itself
    /// still accepts whatever comes through.
    pub fn preset_timers(&self) -> Vec<Timer> {
        self.presets
            .iter()
            .filter_map(|preset| match preset.rsplit_once(':') {
                Some((name, duration)) => match duration.parse::<f64>() {
                    Ok(duration) => Some(Timer::new(name, duration)),
                    Err(_) => {
                        warn!("Ignoring preset with non-numeric duration: {}", preset);
                        None
                    }
                },
                None => {
                    warn!("Ignoring malformed preset: {}", preset);
                    None
                }
            })
            .collect()
    }
}
