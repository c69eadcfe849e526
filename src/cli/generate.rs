//! Generate command implementation.
//!
//! Runs the full scan -> compose -> write pipeline and reports each sheet
//! with Cargo-style status lines. Excluded frames are warnings, not errors.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{generate_with_options, GenerateOptions};
use crate::render::SizePolicy;

/// Glue frame folders into sprite sheets and frame-index maps
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Character root, or a directory holding several character roots
    #[arg(required = true)]
    pub root: PathBuf,

    /// Fail on any frame size mismatch instead of excluding the frame
    #[arg(long)]
    pub strict: bool,

    /// Also write TexturePacker-style JSON metadata per character
    #[arg(long)]
    pub atlas: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    printer.status("Scanning", &display_path(&args.root));

    let options = GenerateOptions {
        policy: if args.strict {
            SizePolicy::Strict
        } else {
            SizePolicy::Majority
        },
        atlas: args.atlas,
    };

    let results = generate_with_options(&args.root, options)?;

    for result in &results {
        let g = result.geometry;
        printer.status(
            "Composing",
            &format!(
                "{} ({}x{} grid, {}x{} cells, {})",
                result.character_name,
                g.rows,
                g.columns,
                g.cell_width,
                g.cell_height,
                plural(g.frame_count as usize, "frame", "frames")
            ),
        );
        for path in &result.excluded {
            printer.warning(
                "Excluded",
                &format!("{} (size mismatch)", display_path(path)),
            );
        }
        printer.info("Writing", &display_path(&result.sheet_path));
        printer.info("Writing", &display_path(&result.mapping_path));
        if let Some(atlas_path) = &result.atlas_path {
            printer.info("Writing", &display_path(atlas_path));
        }
    }

    printer.status(
        "Finished",
        &plural(results.len(), "sprite sheet", "sprite sheets"),
    );

    Ok(())
}
