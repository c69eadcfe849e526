//! TexturePacker-style atlas metadata.
//!
//! Optional companion to the text mapping: a JSON Hash document describing
//! every drawn cell, for engines that consume TexturePacker output instead
//! of the frame-index table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SheetError};
use crate::types::Character;

use super::composer::Composition;

/// Write atlas metadata for a composition as TexturePacker-compatible JSON
/// Hash format. Frames are keyed `<animation path>/<column>`.
pub fn write_atlas_json(
    character: &Character,
    composition: &Composition,
    image_name: &str,
    path: &Path,
) -> Result<()> {
    let output = AtlasJson::from_composition(character, composition, image_name);
    let json = serde_json::to_string_pretty(&output).map_err(|e| SheetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to serialize atlas metadata: {}", e),
    })?;
    fs::write(path, json).map_err(|e| SheetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write atlas metadata: {}", e),
    })?;
    Ok(())
}

// --- TexturePacker JSON serialization types ---

#[derive(Serialize)]
struct AtlasJson {
    frames: BTreeMap<String, AtlasFrame>,
    meta: AtlasMeta,
}

#[derive(Serialize)]
struct AtlasFrame {
    frame: AtlasRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: AtlasRect,
    #[serde(rename = "sourceSize")]
    source_size: AtlasSize,
}

#[derive(Serialize)]
struct AtlasRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct AtlasSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct AtlasMeta {
    app: String,
    version: String,
    image: String,
    size: AtlasSize,
    scale: String,
}

impl AtlasJson {
    fn from_composition(
        character: &Character,
        composition: &Composition,
        image_name: &str,
    ) -> Self {
        let g = composition.geometry;
        let mut frames = BTreeMap::new();
        for (row, direction) in composition.directions.iter().enumerate() {
            let label = character.direction_label(direction);
            for col in 0..direction.frames.len() as u32 {
                let (x, y) = g.cell_offset(row as u32, col);
                frames.insert(
                    format!("{}/{}", label, col),
                    AtlasFrame {
                        frame: AtlasRect {
                            x,
                            y,
                            w: g.cell_width,
                            h: g.cell_height,
                        },
                        rotated: false,
                        trimmed: false,
                        sprite_source_size: AtlasRect {
                            x: 0,
                            y: 0,
                            w: g.cell_width,
                            h: g.cell_height,
                        },
                        source_size: AtlasSize {
                            w: g.cell_width,
                            h: g.cell_height,
                        },
                    },
                );
            }
        }

        AtlasJson {
            frames,
            meta: AtlasMeta {
                app: "sheetglue".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                image: image_name.to_string(),
                size: AtlasSize {
                    w: g.width(),
                    h: g.height(),
                },
                scale: "1".to_string(),
            },
        }
    }
}
