use clap::Parser;
use std::path::PathBuf;

/// Convert single-frame monochrome DICOM radiographs to 8-bit grayscale PNG
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// DICOM file path(s) to convert
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output PNG path (single input file only; defaults to the input path
    /// with a .png extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the base64-encoded PNG to stdout instead of writing a file
    #[arg(long)]
    pub base64: bool,

    /// Show a dataset summary before converting
    #[arg(short, long)]
    pub verbose: bool,
}
