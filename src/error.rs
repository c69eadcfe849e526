use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sheetglue operations
#[derive(Error, Diagnostic, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    #[diagnostic(code(sheetglue::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sheetglue::io))]
    Io { path: PathBuf, message: String },

    #[error("Scan root is not a directory: {path}")]
    #[diagnostic(code(sheetglue::scan::invalid_root))]
    InvalidRoot { path: PathBuf },

    #[error("No character folders found under: {path}")]
    #[diagnostic(
        code(sheetglue::scan::no_characters),
        help(
            "a character folder holds animation subfolders with png/jpg/jpeg frames, \
             either directly or in one level of direction subfolders"
        )
    )]
    NoCharactersFound { path: PathBuf },

    #[error("No animation frames found under: {path}")]
    #[diagnostic(code(sheetglue::scan::no_frames))]
    NoAnimationFrames { path: PathBuf },

    #[error("No directions found for: {character}")]
    #[diagnostic(code(sheetglue::compose::no_directions))]
    NoDirections { character: String },

    #[error("No frames found for: {character}")]
    #[diagnostic(code(sheetglue::compose::no_frames))]
    NoFrames { character: String },

    #[error("Unsupported image format: {path}")]
    #[diagnostic(code(sheetglue::compose::unsupported_image))]
    UnsupportedImage { path: PathBuf, message: String },

    #[error("No frames matching {width}x{height} for: {character}")]
    #[diagnostic(code(sheetglue::compose::empty_grid))]
    EmptyGridAfterFiltering {
        character: String,
        width: u32,
        height: u32,
    },

    #[error("Invalid sprite sheet size {width}x{height} for: {character}")]
    #[diagnostic(code(sheetglue::compose::degenerate_canvas))]
    DegenerateCanvas {
        character: String,
        width: u32,
        height: u32,
    },

    #[error(
        "Frame size mismatch in {path}: expected {expected_width}x{expected_height}, \
         got {actual_width}x{actual_height}"
    )]
    #[diagnostic(
        code(sheetglue::compose::size_mismatch),
        help("run without --strict to exclude mismatched frames instead")
    )]
    FrameSizeMismatch {
        path: PathBuf,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

pub type Result<T> = std::result::Result<T, SheetError>;
