use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palkit::codec::EncodeOptions;
use palkit::models::{AppConfig, CONFIG_ENV};
use palkit::services::{self, ListSource};

#[derive(Parser)]
#[command(name = "palkit")]
#[command(about = "Palkit - extract, collect and build RGBA color palettes")]
struct Cli {
    /// YAML config file (defaults to $PALKIT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the distinct colors of one or more PNG images
    Extract {
        /// PNG files; their colors are merged into one palette
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
    /// Build a single-row palette PNG from a list of hex colors
    Make {
        /// List file, one RRGGBB or RRGGBBAA color per line (reads stdin if omitted)
        list: Option<PathBuf>,

        /// Output PNG file path (default from config, else palette.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Re-compress the PNG with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Print the distinct #RRGGBB / #RRGGBBAA colors found in text files
    Scan {
        /// Text files (reads stdin if none are given)
        files: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries palettes only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palkit=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = AppConfig::resolve_path(cli.config);
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Extract { images }) => run_extract_command(&config, &images),
        Some(Commands::Make {
            list,
            output,
            optimize,
        }) => run_make_command(&config, list, output, optimize),
        Some(Commands::Scan { files }) => run_scan_command(&files),
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

/// Print the merged palette of the given images
fn run_extract_command(config: &AppConfig, images: &[PathBuf]) -> anyhow::Result<()> {
    let report = services::extract_images(images, config.max_decode_bytes)?;
    if report.images == 0 {
        anyhow::bail!("No image could be read");
    }
    services::write_palette(&report.palette, std::io::stdout().lock())?;
    Ok(())
}

/// Turn a hex color list into a palette PNG
fn run_make_command(
    config: &AppConfig,
    list: Option<PathBuf>,
    output: Option<PathBuf>,
    optimize: bool,
) -> anyhow::Result<()> {
    let source = list.map_or(ListSource::Stdin, ListSource::File);
    let output = output.unwrap_or_else(|| config.output.clone());
    let options = EncodeOptions {
        compression: config.compression,
        optimize: optimize || config.optimize,
    };

    let report = services::make_palette(&source, &output, &options)?;
    println!(
        "Wrote {} colors to {} ({} bytes)",
        report.colors,
        report.output.display(),
        report.bytes
    );
    Ok(())
}

/// Print the colors found in text files or stdin
fn run_scan_command(files: &[PathBuf]) -> anyhow::Result<()> {
    let report = if files.is_empty() {
        services::scan_stdin()?
    } else {
        services::scan_files(files)?
    };
    services::write_palette(&report.palette, std::io::stdout().lock())?;
    Ok(())
}

/// Display configuration and usage summary
fn run_status_command(config: &AppConfig, config_path: Option<&std::path::Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Palkit v{VERSION} - RGBA palette tools\n");

    println!("Configuration:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("  output      = {}", config.output.display());
    println!("  compression = {:?}", config.compression);
    println!("  optimize    = {}", config.optimize);
    println!("  max_decode_bytes = {}", config.max_decode_bytes);

    println!("\nCommands:");
    println!("  palkit extract IMAGE...   Print the distinct colors of PNG images");
    println!("  palkit make [LIST]        Build a palette PNG from hex colors");
    println!("  palkit scan [FILE...]     Collect #hex colors from text");
    println!("\nRun 'palkit --help' for more details.");
}
