#![deny(unsafe_code)]
//! CLI binary for the basalt icon generator.
//!
//! Subcommands:
//! - `render <output_dir>` — build the icon, write the SVG and every PNG size
//! - `list` — print available themes and default raster sizes

mod error;

use basalt_icon_core::{build_context, build_scene, LayoutParams, RenderContext, Theme};
use basalt_icon_export::{export_with, ExportOptions, DEFAULT_BASE_NAME, DEFAULT_RASTER_SIZES};
use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "basalt-icon", about = "Hexagon-cluster icon generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the icon as SVG plus one PNG per raster size.
    Render {
        /// Directory the artifacts are written to (created if missing).
        output_dir: PathBuf,

        /// Theme name (basalt, obsidian, moss, ember).
        #[arg(short, long, default_value = "basalt")]
        theme: String,

        /// Base file name for the artifacts.
        #[arg(short, long, default_value = DEFAULT_BASE_NAME)]
        name: String,

        /// Comma-separated PNG sizes in pixels.
        #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_RASTER_SIZES)]
        sizes: Vec<u32>,

        /// Layout parameter overrides as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available themes and default raster sizes.
    List,
}

/// JSON report of a finished render.
fn render_summary(
    theme: &Theme,
    context: &RenderContext,
    written: &[PathBuf],
) -> serde_json::Value {
    serde_json::json!({
        "theme": theme.name(),
        "canvas": context.canvas(),
        "params": context.params(),
        "artifacts": written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let themes = Theme::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "themes": themes,
                    "raster_sizes": DEFAULT_RASTER_SIZES,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Themes:");
                for name in themes {
                    println!("  {name}");
                }
                let sizes: Vec<String> = DEFAULT_RASTER_SIZES.iter().map(u32::to_string).collect();
                println!("Raster sizes:");
                println!("  {}", sizes.join(", "));
            }
        }
        Command::Render {
            output_dir,
            theme,
            name,
            sizes,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let layout = LayoutParams::from_json(&params);
            layout.validate()?;

            let theme = Theme::from_name(&theme)?;

            let options = ExportOptions {
                base_name: name,
                raster_sizes: sizes,
            };
            options
                .validate()
                .map_err(|e| CliError::Input(e.to_string()))?;

            let context = build_context(&theme, &layout);
            let scene = build_scene(&context);
            let written = export_with(&scene, &output_dir, &options)?;

            if cli.json {
                let info = render_summary(&theme, &context, &written);
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for path in &written {
                    eprintln!("wrote {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
