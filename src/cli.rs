use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sv_core::config::LogLevel;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First component (x / r)
    pub x: u32,

    /// Second component (y / g)
    pub y: u32,

    /// Third component (z / b)
    pub z: u32,

    /// Swizzle applied before printing, e.g. `zyx`, `bgr` or `xxyy`
    #[arg(short, long, value_parser = swizzle_text)]
    pub swizzle: Option<String>,

    /// Group separator placed between components (overrides the config file)
    #[arg(long)]
    pub separator: Option<String>,

    /// Print components in hexadecimal
    #[arg(long)]
    pub hex: bool,

    /// Print an HLSL constructor expression instead of `<x, y, z>`
    #[arg(long, conflicts_with = "json")]
    pub hlsl: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level for logging to the console
    #[arg(value_enum, long, short, ignore_case = true)]
    pub loglevel: Option<Loglevel>,
}

fn swizzle_text(s: &str) -> Result<String, String> {
    if (1..=4).contains(&s.chars().count()) {
        Ok(s.to_string())
    } else {
        Err(format!("`{s}` must select between one and four components"))
    }
}

/// Wrapper because `LogLevel` doesn't implement ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Loglevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<Loglevel> for LogLevel {
    fn from(val: Loglevel) -> Self {
        match val {
            Loglevel::Off => LogLevel::Off,
            Loglevel::Error => LogLevel::Error,
            Loglevel::Warn => LogLevel::Warn,
            Loglevel::Info => LogLevel::Info,
            Loglevel::Debug => LogLevel::Debug,
            Loglevel::Trace => LogLevel::Trace,
        }
    }
}
