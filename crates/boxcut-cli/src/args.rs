//! Command-line argument definitions for the Boxcut CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments supply the box dimensions, material overrides,
//! the output path, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Boxcut pattern generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Box dimensions such as `40`, `6cm` or `2in`, in any order.
    /// Missing dimensions are asked for interactively.
    #[arg(value_name = "DIMENSION", num_args = 0..=3)]
    pub dimensions: Vec<String>,

    /// Material thickness (defaults to the configured value)
    #[arg(short, long)]
    pub thickness: Option<String>,

    /// Glue flap length (defaults to the configured value)
    #[arg(short, long)]
    pub flap: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "box.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The output path, with an `.svg` extension appended when missing.
    pub fn output_path(&self) -> String {
        if self.output.to_ascii_lowercase().ends_with(".svg") {
            self.output.clone()
        } else {
            format!("{}.svg", self.output)
        }
    }

    /// Whether any box dimension has to be asked for.
    pub fn is_interactive(&self) -> bool {
        self.dimensions.len() < 3
    }
}
