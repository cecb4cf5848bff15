//! Bubble Stripes entry point
//!
//! Renders the striped bubble to PNG, or prints its draw commands as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bubble_stripes::{PixelCanvas, RenderSettings};

#[derive(Parser)]
#[command(name = "bubble-stripes", version, about = "Draw a striped bubble")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct SettingsArgs {
    /// Settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Absolute stripe width in pixels
    #[arg(long)]
    stripe_width: Option<f32>,
}

impl SettingsArgs {
    fn resolve(&self) -> Result<RenderSettings> {
        let mut settings = match &self.config {
            Some(path) => RenderSettings::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RenderSettings::default(),
        };

        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if self.stripe_width.is_some() {
            settings.stripe_width = self.stripe_width;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Render the bubble to a PNG file
    Render {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Output PNG path
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Print the draw commands as JSON
    Commands {
        #[command(flatten)]
        settings: SettingsArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Write the default settings to a file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render { settings, out } => {
            let settings = settings.resolve()?;
            log::info!(
                "Rendering {}x{} bubble, stripe width {}",
                settings.width,
                settings.height,
                settings.stripe_width()
            );

            let mut canvas =
                PixelCanvas::with_background(settings.width, settings.height, settings.background);
            settings.view().draw(Some(&mut canvas));
            canvas
                .save_png(&out)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Command::Commands { settings, pretty } => {
            let settings = settings.resolve()?;
            let commands = settings.view().commands();
            log::debug!("{} draw commands", commands.len());

            let json = if pretty {
                serde_json::to_string_pretty(&commands)?
            } else {
                serde_json::to_string(&commands)?
            };
            println!("{}", json);
        }
        Command::InitConfig { path } => {
            RenderSettings::default()
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    Ok(())
}
