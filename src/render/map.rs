//! Frame-index mapping output.
//!
//! Converts a composed grid back into the text table the game engine reads:
//! a `grid: RxC` header, then one `<animation path> -> i0, i1, ...` line per
//! retained direction with row-major cell indices.

use std::fs;
use std::path::Path;

use crate::error::{Result, SheetError};
use crate::types::{Character, Direction};

/// Build the mapping lines for a composed sheet.
///
/// `directions` must be the composition's retained directions in row order;
/// indices then reference exactly the cells that were drawn. Names are the
/// direction directories relative to the character root, `/`-separated, with
/// the bare directory name as fallback when a direction is rooted at the
/// character root itself.
pub fn build_mapping(
    character: &Character,
    directions: &[Direction],
    rows: u32,
    columns: u32,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(directions.len() + 1);
    lines.push(format!("grid: {}x{}", rows, columns));
    for (row, direction) in directions.iter().enumerate() {
        let name = character.direction_label(direction);
        let indices: Vec<String> = (0..direction.frames.len() as u32)
            .map(|col| (row as u32 * columns + col).to_string())
            .collect();
        lines.push(format!("{} -> {}", name, indices.join(", ")));
    }
    lines
}

/// Write lines as UTF-8 text, one per line with a trailing newline, creating
/// parent directories as needed.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SheetError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).map_err(|e| SheetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write mapping: {}", e),
    })?;

    Ok(())
}
