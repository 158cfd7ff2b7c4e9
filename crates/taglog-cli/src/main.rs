//! `taglog` - log one tagged, templated line from the shell.
//!
//! ```text
//! taglog --level warning "Here we go: {0} {2} {1} {0}" zero 1.0 2
//! Warning: Here we go: zero 2 1.000000 zero
//! ```
//!
//! Each positional argument after the template is typed by its text: whole
//! numbers become integers, other numbers doubles, a single character a char,
//! anything else text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::Style;
use taglog::{validate_template, ColorChoice, Destination, Level, Logger, LoggerConfig, Value};

/// Write a level-tagged message built from a {N} template
#[derive(Debug, Parser)]
#[command(name = "taglog", version, about)]
struct Cli {
    /// Message level: warning, error, info or none
    #[arg(short, long, default_value = "info")]
    level: Level,

    /// Append to this file instead of printing
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// When to color the terminal: auto, always or never
    #[arg(long)]
    color: Option<ColorChoice>,

    /// Append a newline after the message
    #[arg(short, long)]
    newline: bool,

    /// Only check the template against the arguments
    #[arg(long)]
    check: bool,

    /// Template with {N} placeholders
    template: String,

    /// Values for the placeholders, in order
    args: Vec<String>,
}

impl Cli {
    fn config(&self) -> Result<LoggerConfig> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::from_file(path)?,
            None => LoggerConfig::default(),
        };
        if let Some(file) = &self.file {
            config.file = Some(file.clone());
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        config.newline |= self.newline;
        Ok(config)
    }

    fn values(&self) -> Vec<Value<'_>> {
        self.args.iter().map(|raw| Value::infer(raw)).collect()
    }
}

fn run(cli: &Cli) -> Result<()> {
    let args = cli.values();

    if cli.check {
        validate_template(&cli.template, args.len())
            .with_context(|| format!("template {:?} is invalid", cli.template))?;
        return Ok(());
    }

    let config = cli.config()?;
    let mut logger = Logger::from_config(&config);
    logger
        .log(cli.level, &cli.template, &args)
        .with_context(|| match logger.default_destination() {
            Destination::Console => "failed to log to the console".to_string(),
            Destination::File(path) => format!("failed to log to {}", path.display()),
        })
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        let red = Style::new().red().bold().for_stderr();
        eprintln!("{} {:#}", red.apply_to("taglog:"), err);
        std::process::exit(1);
    }
}
