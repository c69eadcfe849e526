//! sheetglue - Sprite sheet generator
//!
//! A library for gluing directory trees of per-frame images into composite
//! sprite sheets plus frame-index maps for game engine consumption.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use discovery::{is_character_root, scan, scan_character, DirLister, OsLister};
pub use error::{Result, SheetError};
pub use pipeline::{generate, generate_with_options, GenerateOptions, GenerationResult};
pub use render::{
    build_mapping, compose, compose_with_policy, read_frame, write_atlas_json, write_lines,
    write_png, Composition, SizePolicy,
};
pub use types::{Animation, Character, Direction, SheetGeometry};
