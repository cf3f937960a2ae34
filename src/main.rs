// SPDX-License-Identifier: MIT
//
// swatch — command-line front end for the palette and scheme crates.
//
//   swatch-color   → parsing, Rgb, CSS color classification
//   swatch-palette → shades / colorize
//   swatch-scheme  → theme config → custom properties + color tokens
//
// Every subcommand reads its input, runs one pure transform and prints the
// result to stdout. Logs go to stderr, filtered by RUST_LOG.
//
//   swatch shades "#3b82f6" --colorize      scale as JSON
//   swatch build theme.json                 scheme CSS
//   swatch build theme.json --tokens        token table as JSON
//   swatch reset reset.json                 reset CSS

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swatch_palette::{ColorScale, shades};
use swatch_scheme::{CollectedTheme, ResetOptions, ResetPlugin, SchemesPlugin, ThemeConfig};

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the 11-step tonal ramp of a base color as JSON.
    Shades {
        /// Base color: `#rrggbb`, `#rgb` (the `#` is optional) or `r, g, b`.
        color: String,
        /// Also fill in `DEFAULT` (step 500) and `foreground` (step 950).
        #[arg(long)]
        colorize: bool,
    },
    /// Emit the custom-property CSS for a theme config.
    Build {
        /// Path to a JSON theme config.
        config: PathBuf,
        /// Print the color-token table as JSON instead of CSS.
        #[arg(long)]
        tokens: bool,
        /// Opacity to render tokens with (only with `--tokens`).
        #[arg(long, requires = "tokens")]
        opacity: Option<String>,
    },
    /// Emit the base reset CSS for a reset config.
    Reset {
        /// Path to a JSON reset config.
        config: PathBuf,
    },
}

// ─── Subcommands ────────────────────────────────────────────────────────────

fn render_shades(color: &str, colorize: bool) -> Result<String> {
    let scale = if colorize {
        ColorScale::from_base(color)
    } else {
        shades(color)
    }
    .with_context(|| format!("cannot generate shades for {color:?}"))?;
    Ok(serde_json::to_string_pretty(&scale)?)
}

fn render_build(config: ThemeConfig, tokens: bool, opacity: Option<&str>) -> Result<String> {
    let mut host = CollectedTheme::default();
    SchemesPlugin::new(config)?.register(&mut host)?;
    debug!(rules = host.base.len(), tokens = host.colors.len(), "theme built");

    if tokens {
        Ok(serde_json::to_string_pretty(&host.colors.render_all(opacity))?)
    } else {
        Ok(host.base.to_string())
    }
}

fn render_reset(options: ResetOptions) -> String {
    let mut host = CollectedTheme::default();
    ResetPlugin::new(options).register(&mut host);
    host.base.to_string()
}

fn read_reset(path: &Path) -> Result<ResetOptions> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    ResetOptions::from_json_str(&json)
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Shades { color, colorize } => render_shades(&color, colorize),
        Command::Build {
            config,
            tokens,
            opacity,
        } => {
            let theme = ThemeConfig::from_path(&config)?;
            render_build(theme, tokens, opacity.as_deref())
        }
        Command::Reset { config } => Ok(render_reset(read_reset(&config)?)),
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("swatch: {e:#}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
