use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pdfcrop::{BBox, DEFAULT_RESOLUTION, DEFAULT_SAVE_PATH};

/// Inspect PDF pages and render cropped regions to PNG.
#[derive(Debug, Parser)]
#[command(name = "pdfcrop", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors, and keep the PDF backends silent
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show page count and per-page geometry
    Info {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = InfoFormat::Text)]
        format: InfoFormat,

        /// Password for encrypted PDFs
        #[arg(long)]
        password: Option<String>,
    },

    /// Render a region of one page to PNG
    Render {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page number (1-indexed)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Region as 'x0,top,x1,bottom' in points from the top-left corner
        #[arg(long, value_parser = parse_bbox, allow_hyphen_values = true)]
        bbox: BBox,

        /// Points added around the region before clamping to the page
        #[arg(long, default_value_t = 0)]
        padding: u32,

        /// Rendering resolution in DPI
        #[arg(long, default_value_t = DEFAULT_RESOLUTION, value_parser = clap::value_parser!(u32).range(1..))]
        resolution: u32,

        /// Output PNG path, or '-' for stdout
        #[arg(short, long, default_value = DEFAULT_SAVE_PATH)]
        output: PathBuf,

        /// Password for encrypted PDFs
        #[arg(long)]
        password: Option<String>,

        /// Directory containing the pdfium library
        #[arg(long, value_name = "DIR")]
        pdfium_dir: Option<PathBuf>,
    },
}

/// Output format for the info subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum InfoFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
}

/// Parse `x0,top,x1,bottom` into a [`BBox`].
pub fn parse_bbox(input: &str) -> Result<BBox, String> {
    let values = input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid coordinate: '{}'", part.trim()))
        })
        .collect::<Result<Vec<f64>, String>>()?;
    match values[..] {
        [x0, top, x1, bottom] => Ok(BBox::new(x0, top, x1, bottom)),
        _ => Err(format!(
            "expected 4 comma-separated values (x0,top,x1,bottom), got {}",
            values.len()
        )),
    }
}
