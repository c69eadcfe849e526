//! Scanned frame hierarchy: Character -> Animation -> Direction -> frame files.
//!
//! These are immutable value records. The scanner builds them once and every
//! later stage reads them; nothing mutates an instance after construction.

use std::path::{Path, PathBuf};

/// One frame sequence within an animation, e.g. `walk/north` or the
/// animation's own flat frame list.
///
/// Frames are ordered by case-insensitive file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
    /// Directory file name, e.g. "north".
    pub name: String,
    /// Directory the frames were found in.
    pub root: PathBuf,
    /// Frame file paths in case-insensitive name order.
    pub frames: Vec<PathBuf>,
}

impl Direction {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>, frames: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            frames,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// A named group of frame sequences for one action, e.g. "walk".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    pub name: String,
    pub root: PathBuf,
    /// Directions in discovery order: direct frames first, then
    /// subdirectories in case-insensitive name order.
    pub directions: Vec<Direction>,
}

impl Animation {
    pub fn new(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        directions: Vec<Direction>,
    ) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            directions,
        }
    }
}

/// One subject whose animations are combined into a single sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub root: PathBuf,
    pub animations: Vec<Animation>,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        animations: Vec<Animation>,
    ) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            animations,
        }
    }

    /// All directions of all animations, flattened in scan order.
    ///
    /// This is the row order of the composed sheet.
    pub fn directions(&self) -> impl Iterator<Item = &Direction> {
        self.animations.iter().flat_map(|a| a.directions.iter())
    }

    /// Total number of frame files across all directions.
    pub fn frame_count(&self) -> usize {
        self.directions().map(Direction::frame_count).sum()
    }

    /// Path of a direction's directory relative to this character's root,
    /// normalised to forward slashes. Falls back to the direction's bare
    /// name when the direction is rooted at the character root itself.
    pub fn direction_label(&self, direction: &Direction) -> String {
        relative_label(&self.root, &direction.root).unwrap_or_else(|| direction.name.clone())
    }
}

fn relative_label(root: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(root).ok()?;
    if relative.as_os_str().is_empty() {
        return None;
    }
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
