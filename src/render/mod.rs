//! Composition and output for sprite sheets.
//!
//! `composer` turns a scanned character into a grid canvas; `png` decodes
//! frames and encodes the canvas; `map` emits the frame-index text table;
//! `atlas` emits optional TexturePacker-style JSON metadata.

mod atlas;
mod composer;
mod map;
mod png;

pub use atlas::write_atlas_json;
pub use composer::{compose, compose_with_policy, Composition, SizePolicy};
pub use map::{build_mapping, write_lines};
pub use png::{read_frame, write_png};
