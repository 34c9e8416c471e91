//! Showcase Kit CLI
//!
//! Command-line front end for composing class lists and inspecting
//! transition frames.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use dotenvy::dotenv;
use tracing::{debug, info};

use showcase_kit::class::ClassValue;
use showcase_kit::config::{AppConfig, Cli, Command};
use showcase_kit::transition::{Direction, FlyAndScale, sample};
use showcase_kit::{environment, telemetry};

fn main() -> Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();
    let config = AppConfig::load_from_cli(&cli).context("Failed to load configuration")?;

    telemetry::init(&config.log);

    info!(
        name: "config.loaded",
        custom_groups = config.merge.groups.len(),
        duration_ms = config.transition.duration_ms(),
        "Configuration loaded"
    );
    debug!(
        name: "environment.detected",
        is_browser = environment::is_browser(),
        "Runtime environment"
    );

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Cn { classes, json } => {
            let merger = config.merge.merger().context("Invalid custom class groups")?;
            let value = match json {
                Some(raw) => {
                    let parsed: serde_json::Value =
                        serde_json::from_str(&raw).context("Invalid JSON class input")?;
                    ClassValue::from(parsed)
                }
                None => ClassValue::from(classes),
            };
            println!("{}", merger.compose(&value));
        }
        Command::Classify { tokens } => {
            let merger = config.merge.merger().context("Invalid custom class groups")?;
            for token in &tokens {
                let group = merger.classify(token).map_or("-", |g| g.id());
                println!("{token}\t{group}");
            }
        }
        Command::Sample { progress, base, .. } => {
            let snapshot = sample(&config.transition, progress, &base);
            println!("{snapshot}");
        }
        Command::Frames {
            interval_ms,
            out,
            base,
            ..
        } => {
            let direction = if out { Direction::Out } else { Direction::In };
            let transition = FlyAndScale::new(config.transition, &base);
            for (elapsed, snapshot) in
                transition.timeline(Duration::from_millis(interval_ms), direction)
            {
                println!("{:>5}ms\t{snapshot}", elapsed.as_millis());
            }
        }
    }

    Ok(())
}
