//! Sprite sheet composer.
//!
//! Decodes every frame of a character, picks the cell size by majority vote
//! among decoded frame sizes, and lays the surviving frames out on a single
//! transparent canvas. One row per direction, one column per frame; rows
//! shorter than the widest leave trailing cells transparent. Frames are
//! placed at native resolution, never scaled.

use std::path::PathBuf;

use image::imageops::overlay;
use image::RgbaImage;

use crate::error::{Result, SheetError};
use crate::types::{Character, Direction, SheetGeometry};

use super::png::read_frame;

/// How the composer treats frames whose size disagrees with the consensus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Keep the majority size, exclude disagreeing frames and report them.
    #[default]
    Majority,
    /// Abort on the first frame that disagrees with the consensus size.
    Strict,
}

/// Result of composing one character: the canvas, its grid geometry, the
/// directions actually retained (carrying only size-matching frames), and
/// the frame paths excluded by the size filter.
#[derive(Debug)]
pub struct Composition {
    pub sheet: RgbaImage,
    pub geometry: SheetGeometry,
    pub directions: Vec<Direction>,
    pub excluded: Vec<PathBuf>,
}

struct FrameCandidate {
    path: PathBuf,
    image: RgbaImage,
    size: (u32, u32),
}

/// Compose a character's sprite sheet with the default majority-vote policy.
pub fn compose(character: &Character) -> Result<Composition> {
    compose_with_policy(character, SizePolicy::Majority)
}

/// Compose a character's sprite sheet.
///
/// The scanned hierarchy is not consumed; retained directions are rebuilt
/// from scratch so the scanned tree stays valid for re-composition.
pub fn compose_with_policy(character: &Character, policy: SizePolicy) -> Result<Composition> {
    let directions: Vec<&Direction> = character.directions().collect();
    if directions.is_empty() {
        return Err(SheetError::NoDirections {
            character: character.name.clone(),
        });
    }

    // Decode everything up front, tallying sizes in first-seen order.
    let mut size_counts: Vec<((u32, u32), u32)> = Vec::new();
    let mut candidates: Vec<Vec<FrameCandidate>> = Vec::with_capacity(directions.len());
    for direction in &directions {
        let mut row = Vec::with_capacity(direction.frames.len());
        for path in &direction.frames {
            let image = read_frame(path)?;
            let size = image.dimensions();
            match size_counts.iter_mut().find(|(s, _)| *s == size) {
                Some((_, count)) => *count += 1,
                None => size_counts.push((size, 1)),
            }
            row.push(FrameCandidate {
                path: path.clone(),
                image,
                size,
            });
        }
        candidates.push(row);
    }

    let (cell_width, cell_height) =
        select_target_size(&size_counts).ok_or_else(|| SheetError::NoFrames {
            character: character.name.clone(),
        })?;

    // Partition each direction's frames against the target size. Directions
    // left without frames contribute no row; the grid compacts around them.
    let mut retained: Vec<Direction> = Vec::new();
    let mut row_images: Vec<Vec<RgbaImage>> = Vec::new();
    let mut excluded: Vec<PathBuf> = Vec::new();
    let mut max_frames: u32 = 0;
    for (direction, row) in directions.iter().zip(candidates) {
        let mut images = Vec::new();
        let mut included = Vec::new();
        for candidate in row {
            if candidate.size == (cell_width, cell_height) {
                images.push(candidate.image);
                included.push(candidate.path);
            } else if policy == SizePolicy::Strict {
                return Err(SheetError::FrameSizeMismatch {
                    path: candidate.path,
                    expected_width: cell_width,
                    expected_height: cell_height,
                    actual_width: candidate.size.0,
                    actual_height: candidate.size.1,
                });
            } else {
                excluded.push(candidate.path);
            }
        }
        if !images.is_empty() {
            max_frames = max_frames.max(images.len() as u32);
            retained.push(Direction::new(
                direction.name.clone(),
                direction.root.clone(),
                included,
            ));
            row_images.push(images);
        }
    }

    if retained.is_empty() {
        return Err(SheetError::EmptyGridAfterFiltering {
            character: character.name.clone(),
            width: cell_width,
            height: cell_height,
        });
    }

    let rows = retained.len() as u32;
    let columns = max_frames;
    let width = columns * cell_width;
    let height = rows * cell_height;
    if width == 0 || height == 0 {
        return Err(SheetError::DegenerateCanvas {
            character: character.name.clone(),
            width,
            height,
        });
    }

    // Zero-initialised RGBA is fully transparent; frames composite over it
    // source-over at their cell offsets.
    let mut sheet = RgbaImage::new(width, height);
    let mut frame_count: u32 = 0;
    for (row, images) in row_images.iter().enumerate() {
        for (col, image) in images.iter().enumerate() {
            let x = col as u32 * cell_width;
            let y = row as u32 * cell_height;
            overlay(&mut sheet, image, i64::from(x), i64::from(y));
            frame_count += 1;
        }
    }

    let geometry = SheetGeometry {
        rows,
        columns,
        cell_width,
        cell_height,
        frame_count,
    };

    Ok(Composition {
        sheet,
        geometry,
        directions: retained,
        excluded,
    })
}

/// Pick the size with the strictly highest tally; ties resolve to the size
/// seen first while decoding.
fn select_target_size(size_counts: &[((u32, u32), u32)]) -> Option<(u32, u32)> {
    let mut target = None;
    let mut max_count = 0;
    for &(size, count) in size_counts {
        if count > max_count {
            max_count = count;
            target = Some(size);
        }
    }
    target
}
