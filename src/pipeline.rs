//! End-to-end generation pipeline.
//!
//! Sequences scan -> compose -> write per character: the sprite sheet lands
//! at `<character root>/<name>.png`, the frame-index mapping at
//! `<character root>/<name>.frames.txt`, and optionally an atlas JSON at
//! `<character root>/<name>.json`. Any failure aborts the whole run; there
//! is no best-effort continuation across characters.

use std::path::{Path, PathBuf};

use crate::discovery::{scan, OsLister};
use crate::error::{Result, SheetError};
use crate::render::{
    build_mapping, compose_with_policy, write_atlas_json, write_lines, write_png, SizePolicy,
};
use crate::types::SheetGeometry;

/// Options for a generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// How size disagreements are handled.
    pub policy: SizePolicy,
    /// Also write TexturePacker-style JSON metadata per character.
    pub atlas: bool,
}

/// Outcome of generating one character's sheet.
#[derive(Debug)]
pub struct GenerationResult {
    pub character_name: String,
    pub sheet_path: PathBuf,
    pub mapping_path: PathBuf,
    pub atlas_path: Option<PathBuf>,
    pub geometry: SheetGeometry,
    /// Frames left out by the size-consensus filter. Reported, not fatal.
    pub excluded: Vec<PathBuf>,
}

/// Generate sprite sheets for every character found under `root` with
/// default options.
pub fn generate(root: &Path) -> Result<Vec<GenerationResult>> {
    generate_with_options(root, GenerateOptions::default())
}

/// Generate sprite sheets for every character found under `root`.
///
/// Results are returned in character scan order.
pub fn generate_with_options(
    root: &Path,
    options: GenerateOptions,
) -> Result<Vec<GenerationResult>> {
    let characters = scan(&OsLister, root)?;
    if characters.is_empty() {
        return Err(SheetError::NoCharactersFound {
            path: root.to_path_buf(),
        });
    }

    let mut results = Vec::with_capacity(characters.len());
    for character in characters {
        let composition = compose_with_policy(&character, options.policy)?;

        let image_name = format!("{}.png", character.name);
        let sheet_path = character.root.join(&image_name);
        write_png(&composition.sheet, &sheet_path)?;

        let mapping_path = character.root.join(format!("{}.frames.txt", character.name));
        let lines = build_mapping(
            &character,
            &composition.directions,
            composition.geometry.rows,
            composition.geometry.columns,
        );
        write_lines(&mapping_path, &lines)?;

        let atlas_path = if options.atlas {
            let path = character.root.join(format!("{}.json", character.name));
            write_atlas_json(&character, &composition, &image_name, &path)?;
            Some(path)
        } else {
            None
        };

        results.push(GenerationResult {
            character_name: character.name,
            sheet_path,
            mapping_path,
            atlas_path,
            geometry: composition.geometry,
            excluded: composition.excluded,
        });
    }
    Ok(results)
}
