//! File system discovery for sheetglue.
//!
//! This module classifies directories as character roots and scans them into
//! the ordered Character -> Animation -> Direction hierarchy consumed by the
//! composer. All ordering is case-insensitive on file names, so the result
//! is stable across platforms.
//!
//! # Example
//!
//! ```ignore
//! use sheetglue::discovery::{scan, OsLister};
//!
//! let characters = scan(&OsLister, "./assets/characters".as_ref())?;
//! println!("Found {} character(s)", characters.len());
//! ```

mod lister;
mod scanner;

pub use lister::{DirLister, OsLister};
pub use scanner::{is_character_root, is_image_file, scan, scan_character, SUPPORTED_EXTENSIONS};
