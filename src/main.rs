//! shadervec - inspect `uint3` values the way shader code sees them
//!
//! Builds a vector from the command line, optionally applies a swizzle,
//! and prints the result.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use sv_core::{logging, Config};
use sv_vector::{NumberFormat, Swizzle, UInt2, UInt3, UInt4, VectorDisplay};

mod cli;

use cli::Cli;

/// Result of applying a swizzle of one to four lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
enum Selected {
    Scalar(u32),
    Vec2(UInt2),
    Vec3(UInt3),
    Vec4(UInt4),
}

fn select(v: UInt3, swizzle: &str) -> sv_core::Result<Selected> {
    let selected = match swizzle.chars().count() {
        1 => Selected::Scalar(v.swizzle(swizzle.parse::<Swizzle<1>>()?)[0]),
        2 => Selected::Vec2(UInt2::from(v.swizzle(swizzle.parse::<Swizzle<2>>()?))),
        3 => Selected::Vec3(UInt3::from(v.swizzle(swizzle.parse::<Swizzle<3>>()?))),
        _ => Selected::Vec4(UInt4::from(v.swizzle(swizzle.parse::<Swizzle<4>>()?))),
    };
    tracing::debug!("{} .{} -> {:?}", v, swizzle, selected);
    Ok(selected)
}

fn render_lanes(display: VectorDisplay<'_>, hex: bool) -> String {
    if hex {
        format!("{:#x}", display)
    } else {
        display.to_string()
    }
}

fn render(selected: &Selected, cli: &Cli, config: &Config) -> anyhow::Result<String> {
    if cli.json {
        return serde_json::to_string(selected).context("serializing result");
    }

    let format = NumberFormat::from(&config.format);
    let hex = config.format.hex;
    let text = match selected {
        Selected::Scalar(v) if cli.hlsl => format!("{}u", v),
        Selected::Scalar(v) if hex => format!("{:#x}", v),
        Selected::Scalar(v) => v.to_string(),
        Selected::Vec2(v) if cli.hlsl => v.to_hlsl_literal(),
        Selected::Vec2(v) => render_lanes(v.display_with(&format), hex),
        Selected::Vec3(v) if cli.hlsl => v.to_hlsl_literal(),
        Selected::Vec3(v) => render_lanes(v.display_with(&format), hex),
        Selected::Vec4(v) if cli.hlsl => v.to_hlsl_literal(),
        Selected::Vec4(v) => render_lanes(v.display_with(&format), hex),
    };
    Ok(text)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    if let Some(level) = cli.loglevel {
        config.debug.log_level = level.into();
    }
    if let Some(separator) = &cli.separator {
        config.format.group_separator = separator.clone();
    }
    if cli.hex {
        config.format.hex = true;
    }

    logging::init(config.debug.log_level);
    tracing::debug!("Effective configuration: {:?}", config);

    let v = UInt3::new(cli.x, cli.y, cli.z);
    let selected = match cli.swizzle.as_deref() {
        Some(swizzle) => select(v, swizzle)?,
        None => Selected::Vec3(v),
    };

    println!("{}", render(&selected, &cli, &config)?);
    Ok(())
}
