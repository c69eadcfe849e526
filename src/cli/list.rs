//! List command implementation.
//!
//! Scans a directory tree and prints the discovered hierarchy without
//! composing anything, so authors can check how their folders will be
//! interpreted before generating.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan, OsLister};
use crate::error::{Result, SheetError};
use crate::output::{plural, Printer};

/// Show how a directory tree will be scanned
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Character root, or a directory holding several character roots
    #[arg(required = true)]
    pub root: PathBuf,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let characters = scan(&OsLister, &args.root)?;
    if characters.is_empty() {
        return Err(SheetError::NoCharactersFound { path: args.root });
    }

    for character in &characters {
        printer.status(
            "Character",
            &format!(
                "{} ({}, {})",
                character.name,
                plural(character.animations.len(), "animation", "animations"),
                plural(character.frame_count(), "frame", "frames")
            ),
        );
        for animation in &character.animations {
            for direction in &animation.directions {
                let label = character.direction_label(direction);
                printer.info(
                    "Direction",
                    &format!(
                        "{} {}",
                        label,
                        printer.dim(&plural(direction.frame_count(), "frame", "frames"))
                    ),
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_command_scans_tree() {
        let dir = tempdir().unwrap();
        let frame = dir.path().join("hero/walk/0.png");
        fs::create_dir_all(frame.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]))
            .save(&frame)
            .unwrap();

        let args = ListArgs {
            root: dir.path().to_path_buf(),
        };
        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_list_command_empty_root_fails() {
        let dir = tempdir().unwrap();
        let args = ListArgs {
            root: dir.path().to_path_buf(),
        };
        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, SheetError::NoCharactersFound { .. }));
    }
}
