use crate::class::{ClassMerger, CustomGroup};
use crate::error::{Error, Result};
use crate::transition::TransitionConfig;
use clap::{Args, Parser, Subcommand};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE", global = true)]
    pub config: Option<String>,

    /// Log filter directive used when `RUST_LOG` is unset
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compose class names and resolve utility conflicts
    Cn {
        /// Class strings, each possibly holding several tokens
        #[arg(allow_hyphen_values = true)]
        classes: Vec<String>,

        /// Class input as JSON (strings, arrays, `{"class": bool}` objects)
        #[arg(long, conflicts_with = "classes")]
        json: Option<String>,
    },

    /// Show the utility group of each token
    Classify {
        #[arg(allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Sample the fly-and-scale transition at one progress value
    Sample {
        /// Progress in [0, 1]
        #[arg(long)]
        progress: f64,

        /// Element transform captured before the animation
        #[arg(long, default_value = "")]
        base: String,

        #[command(flatten)]
        transition: TransitionArgs,
    },

    /// Print every frame of the transition at a fixed interval
    Frames {
        /// Frame interval in milliseconds
        #[arg(long, default_value_t = 16)]
        interval_ms: u64,

        /// Run the exit direction (opacity falls to 0)
        #[arg(long)]
        out: bool,

        /// Element transform captured before the animation
        #[arg(long, default_value = "")]
        base: String,

        #[command(flatten)]
        transition: TransitionArgs,
    },
}

/// Per-invocation transition overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct TransitionArgs {
    /// Starting vertical offset in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// Starting horizontal offset in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Starting scale
    #[arg(long)]
    pub start: Option<f64>,

    /// Duration in milliseconds
    #[arg(long)]
    pub duration: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log: LogConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub merge: MergeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MergeConfig {
    #[serde(default)]
    pub groups: Vec<CustomGroup>,
}

impl MergeConfig {
    /// Builds a merger with the configured custom groups.
    pub fn merger(&self) -> Result<ClassMerger> {
        ClassMerger::with_groups(self.groups.clone())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)
            .map_err(|e| Error::Config(config::ConfigError::Message(e.to_string())))?;
        Self::load_from_cli(&cli)
    }

    /// Priority: CLI flag > `SHOWCASE_*` env var > config file > defaults.
    pub fn load_from_cli(cli: &Cli) -> Result<Self> {
        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("log.filter", "info")?
            .set_default("log.json", false)?;

        // 2. Config file: explicit path, else optional ./showcase.{yaml,toml,json}
        builder = match &cli.config {
            Some(path) => builder.add_source(File::from(Path::new(path)).required(true)),
            None => builder.add_source(File::with_name("showcase").required(false)),
        };

        // 3. Environment, e.g. SHOWCASE_TRANSITION__Y=-4
        builder = builder.add_source(
            Environment::with_prefix("SHOWCASE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI overrides
        if let Some(filter) = &cli.log_filter {
            builder = builder.set_override("log.filter", filter.as_str())?;
        }
        if cli.log_json {
            builder = builder.set_override("log.json", true)?;
        }
        if let Some(Command::Sample { transition, .. } | Command::Frames { transition, .. }) =
            &cli.command
        {
            if let Some(y) = transition.y {
                builder = builder.set_override("transition.y", y)?;
            }
            if let Some(x) = transition.x {
                builder = builder.set_override("transition.x", x)?;
            }
            if let Some(start) = transition.start {
                builder = builder.set_override("transition.start", start)?;
            }
            if let Some(duration) = transition.duration {
                builder = builder.set_override("transition.duration", duration)?;
            }
        }

        let cfg = builder.build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// Loads from an in-memory document; used for embedding and tests.
    pub fn from_str(source: &str, format: FileFormat) -> Result<Self> {
        let cfg = Config::builder()
            .set_default("log.filter", "info")?
            .set_default("log.json", false)?
            .add_source(File::from_str(source, format))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}
