//! hocrplot CLI - draw hOCR layout boxes to an image

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use hocrplot::{render, ErrorMode, Hocrplot, JsonFormat, Layout, ParseOptions};

const USAGE: &str = "Usage: hocrplot <HOCR_FILE> <OUTPUT_IMAGE>";

#[derive(Parser)]
#[command(name = "hocrplot")]
#[command(version)]
#[command(
    about = "Draw the page, area, paragraph, line and word boxes of an hOCR file",
    long_about = None
)]
struct Cli {
    /// Input hOCR file followed by the output image (format from extension)
    #[arg(value_name = "FILE")]
    paths: Vec<PathBuf>,

    /// Skip elements without a bbox instead of failing
    #[arg(long)]
    lenient: bool,

    /// Also write the extracted boxes as JSON
    #[arg(long, value_name = "FILE")]
    boxes: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.paths.as_slice() {
        [input, output] => cmd_annotate(input, output, cli.lenient, cli.boxes.as_deref()),
        _ => {
            println!("{}", USAGE.yellow());
            println!("       hocrplot --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_annotate(
    input: &Path,
    output: &Path,
    lenient: bool,
    boxes: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let error_mode = if lenient {
        ErrorMode::Lenient
    } else {
        ErrorMode::Strict
    };
    let parse_options = ParseOptions::new().with_error_mode(error_mode);

    let layout = Hocrplot::new()
        .with_parse_options(parse_options)
        .annotate(input, output)?;
    log::debug!("{} boxes total", layout.total_boxes());
    println!("{} {}", "Saved to".green(), output.display());

    if let Some(path) = boxes {
        write_boxes(&layout, path)?;
        println!("{} {}", "Saved to".green(), path.display());
    }

    Ok(())
}

fn write_boxes(layout: &Layout, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = render::to_json(layout, JsonFormat::Pretty)?;
    fs::write(path, json)?;
    Ok(())
}
