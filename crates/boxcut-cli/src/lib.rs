//! CLI logic for the Boxcut pattern generator.
//!
//! Collects box dimensions from the command line (asking for any that are
//! missing), lays out and renders the pattern, and writes the SVG file.

pub mod error_adapter;

mod args;
mod config;
mod prompt;

pub use args::Args;

use std::{
    fs,
    io::{self, BufRead, Write},
};

use log::info;

use boxcut::{
    BoxcutError, PatternBuilder,
    config::AppConfig,
    dimension::{Dimension, parse_dimension},
    layout::BoxDimensions,
};

use prompt::Prompter;

const DIMENSION_QUESTIONS: [&str; 3] = ["Width", "Length", "Height"];

/// Run the Boxcut CLI application, reading answers from stdin.
///
/// # Errors
///
/// Returns `BoxcutError` for:
/// - Configuration loading errors
/// - Invalid dimensions
/// - Layout errors
/// - Rendering or file I/O errors
pub fn run(args: &Args) -> Result<(), BoxcutError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(args, stdin.lock(), stdout.lock())
}

/// Run the application with explicit input and output streams for prompts.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_io<R: BufRead, W: Write>(
    args: &Args,
    input: R,
    output: W,
) -> Result<(), BoxcutError> {
    let output_path = args.output_path();
    info!(
        dimensions:? = args.dimensions,
        output_path;
        "Generating box pattern"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    let mut prompter = Prompter::new(input, output);

    let dimensions = collect_dimensions(args, &mut prompter)?;
    app_config = apply_material_overrides(args, app_config, &mut prompter)?;

    info!(
        width = dimensions.width(),
        length = dimensions.length(),
        height = dimensions.height();
        "Internal dimensions (mm)"
    );

    let builder = PatternBuilder::new(app_config);
    let pattern = builder.layout(dimensions)?;
    let svg = builder.render_svg(&pattern)?;

    fs::write(&output_path, svg)?;

    let bounds = pattern.bounds();
    info!(
        output_file = output_path,
        width_mm = bounds.width(),
        height_mm = bounds.height();
        "SVG exported successfully"
    );

    Ok(())
}

fn parse_arg(text: &str) -> Result<Dimension, BoxcutError> {
    parse_dimension(text).map_err(|err| BoxcutError::new_dimension_error(err, text))
}

fn collect_dimensions<R: BufRead, W: Write>(
    args: &Args,
    prompter: &mut Prompter<R, W>,
) -> Result<BoxDimensions, BoxcutError> {
    let mut values = args
        .dimensions
        .iter()
        .map(|text| parse_arg(text).map(|dimension| dimension.value_mm()))
        .collect::<Result<Vec<_>, _>>()?;

    for question in &DIMENSION_QUESTIONS[values.len()..] {
        values.push(prompter.dimension(question)?.value_mm());
    }

    Ok(BoxDimensions::new(values[0], values[1], values[2]))
}

/// Applies `--thickness`/`--flap`, asking for them in interactive mode.
fn apply_material_overrides<R: BufRead, W: Write>(
    args: &Args,
    config: AppConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<AppConfig, BoxcutError> {
    let defaults = config.layout().clone();

    let thickness = match &args.thickness {
        Some(text) => parse_arg(text)?.value_mm(),
        None if args.is_interactive() => {
            prompter.length_or_default("Material thickness", defaults.material_thickness())?
        }
        None => defaults.material_thickness(),
    };

    let flap = match &args.flap {
        Some(text) => parse_arg(text)?.value_mm(),
        None if args.is_interactive() => {
            prompter.length_or_default("Flap length", defaults.flap_length())?
        }
        None => defaults.flap_length(),
    };

    let layout = defaults
        .with_material_thickness(thickness)
        .with_flap_length(flap);
    Ok(config.with_layout(layout))
}
