use clap::{Parser, Subcommand};
use exif_badge::config::{self, BadgeConfig, LoggingConfig};
use exif_badge::decode::{ExifDecoder, FileSummary};
use exif_badge::fields::{FieldId, FieldSelection};
use exif_badge::formatter::Formatter;
use exif_badge::output;
use exif_badge::style::Color;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared flags for commands that render a badge.
#[derive(clap::Args, Clone)]
struct BadgeArgs {
    /// Image to read camera metadata from
    image: PathBuf,

    /// Flip a field on/off relative to the configured selection
    /// (repeatable or comma-separated)
    #[arg(long, value_name = "FIELD", value_delimiter = ',')]
    toggle: Vec<FieldId>,

    /// Gradient start color (#rgb or #rrggbb)
    #[arg(long, value_name = "COLOR")]
    from: Option<Color>,

    /// Gradient end color
    #[arg(long, value_name = "COLOR")]
    to: Option<Color>,

    /// Text color
    #[arg(long, value_name = "COLOR")]
    text: Option<Color>,
}

#[derive(Parser)]
#[command(name = "exif-badge")]
#[command(about = "Turn a photo's EXIF data into a copyable HTML camera-info badge")]
#[command(long_about = "\
Turn a photo's EXIF data into a copyable HTML camera-info badge

Reads camera make/model, focal length, ISO, exposure time and aperture from
an image and renders them as an inline-styled HTML fragment you can paste
into any post that accepts HTML.

Fields (display order is fixed):
  camera            FUJIFILM X-T4     (bold)
  focal-length      35mm
  iso               ISO 400
  exposure-time     250\"
  f-number          f/2.8
  white-balance     off by default
  exposure-program  off by default

Run 'exif-badge gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the badge HTML fragment
    Snippet(BadgeArgs),
    /// Write a standalone page with checklist, preview and code
    Page {
        #[command(flatten)]
        badge: BadgeArgs,

        /// Output file
        #[arg(long, short, default_value = "exif-badge.html")]
        output: PathBuf,
    },
    /// List every field the image carries, marked with the current selection
    Inspect {
        /// Image to read camera metadata from
        image: PathBuf,

        /// Print the decoded record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Snippet(args) => {
            let config = setup(&cli.config_dir)?;
            let mut formatter = build_formatter(&config, &args);
            if !load(&mut formatter, &args.image) {
                return Err(output::format_missing_data(&args.image).into());
            }
            if let Some(snippet) = formatter.snippet() {
                println!("{snippet}");
            }
        }
        Command::Page { badge, output: out } => {
            let config = setup(&cli.config_dir)?;
            let mut formatter = build_formatter(&config, &badge);
            let loaded = load(&mut formatter, &badge.image);
            let html = formatter.render_page(&config.layout);
            std::fs::write(&out, html.into_string())?;
            output::print_page_written(&out, loaded);
        }
        Command::Inspect { image, json } => {
            let config = setup(&cli.config_dir)?;
            let mut formatter = Formatter::new(
                Arc::new(ExifDecoder::new()),
                FieldSelection::from(&config.fields),
                config.colors.clone(),
            );
            if !load(&mut formatter, &image) {
                return Err(output::format_missing_data(&image).into());
            }
            let file = formatter
                .file()
                .cloned()
                .unwrap_or_else(|| FileSummary::from_path(&image));
            if let Some(record) = formatter.record() {
                if json {
                    let doc = serde_json::json!({
                        "file": file,
                        "record": record,
                        "items": formatter.display_items(),
                    });
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                } else {
                    output::print_inspect_output(&file, record, formatter.selection());
                }
            }
        }
        Command::GenConfig => {
            // No config loading here: a broken config.toml must not block
            // generating a fresh one.
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `config.toml` and bring up logging at its configured level.
fn setup(config_dir: &Path) -> Result<BadgeConfig, config::ConfigError> {
    let config = config::load_config(config_dir)?;
    init_logging(&config.logging);
    log::debug!("config loaded from {}", config_dir.display());
    Ok(config)
}

/// Initialize `env_logger` at the configured level; `RUST_LOG` wins.
fn init_logging(logging: &LoggingConfig) {
    env_logger::Builder::new()
        .filter_level(logging.level_filter())
        .parse_default_env()
        .init();
}

/// Controller seeded from config, with command-line overrides applied.
fn build_formatter(config: &BadgeConfig, args: &BadgeArgs) -> Formatter {
    let mut formatter = Formatter::new(
        Arc::new(ExifDecoder::new()),
        FieldSelection::from(&config.fields),
        config.colors.clone(),
    );
    for field in &args.toggle {
        formatter.toggle(*field);
    }
    if let Some(color) = &args.from {
        formatter.set_gradient_from(color.clone());
    }
    if let Some(color) = &args.to {
        formatter.set_gradient_to(color.clone());
    }
    if let Some(color) = &args.text {
        formatter.set_text_color(color.clone());
    }
    formatter
}

/// Drop `image` onto the controller and wait for the decode to settle.
///
/// Returns whether a record is loaded afterwards.
fn load(formatter: &mut Formatter, image: &Path) -> bool {
    formatter.drop_files(&[image.to_path_buf()]);
    formatter.wait();
    !formatter.is_missing_data() && formatter.record().is_some()
}
