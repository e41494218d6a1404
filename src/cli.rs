use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use neonfolio_utils::{Config, Theme};

#[derive(Parser, Debug, Default)]
#[clap(name = "neonfolio", version, about = "An animated developer portfolio for the terminal")]
pub struct CliArgs {
    /// KDL file overriding the default timings
    #[clap(long, value_parser, env = "NEONFOLIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Colour theme ("dark" or "light")
    #[clap(long, value_parser = parse_theme, global = true)]
    pub theme: Option<Theme>,

    /// Seed for the random effects, for reproducible runs
    #[clap(long, value_parser, global = true)]
    pub seed: Option<u64>,

    /// Log filter, e.g. "debug" or "neonfolio_runtime=trace"
    #[clap(long, value_parser, global = true)]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the portfolio (the default)
    Show(ShowArgs),
    /// Fill in and send the contact form
    Contact(ContactArgs),
    /// List the section anchors
    Sections,
    /// Print the effective configuration
    Config {
        /// Print as JSON instead of a summary
        #[clap(long, value_parser)]
        dump: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Show(ShowArgs::default())
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Go straight to the page
    #[clap(long, value_parser)]
    pub skip_preloader: bool,

    /// Keep the page animating for this long, e.g. "5s"
    #[clap(long, value_parser = humantime::parse_duration)]
    pub animate: Option<Duration>,

    /// Page width in columns
    #[clap(long, value_parser)]
    pub width: Option<usize>,

    /// Start at a section anchor, e.g. "#projects"
    #[clap(long, value_parser)]
    pub section: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ContactArgs {
    #[clap(long, value_parser)]
    pub name: Option<String>,
    #[clap(long, value_parser)]
    pub email: Option<String>,
    #[clap(long, value_parser)]
    pub subject: Option<String>,
    #[clap(long, value_parser)]
    pub message: Option<String>,
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    Theme::from_str(s).ok_or_else(|| format!("unknown theme `{}`, expected dark or light", s))
}

/// Defaults, then the config file, then flags
pub fn load_config(opts: &CliArgs) -> anyhow::Result<Config> {
    let mut config = match &opts.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    if let Some(theme) = opts.theme {
        config.theme = theme;
    }
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
    config.validate()?;
    Ok(config)
}
