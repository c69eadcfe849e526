//! File system scanner for discovering character frame trees.
//!
//! Classifies directories as character roots and builds the ordered
//! Character -> Animation -> Direction hierarchy. Animations may keep their
//! frames directly in the animation folder (flat layout) or in one level of
//! direction subfolders (`walk/north`, `walk/south`, ...), and both layouts
//! may be mixed freely within one character.

use std::path::{Path, PathBuf};

use crate::error::{Result, SheetError};
use crate::types::{Animation, Character, Direction};

use super::lister::DirLister;

/// Image extensions recognised as frames, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Scan a root directory for characters.
///
/// If `root` is itself a character root (or directly holds frame files), it
/// is scanned as a single character. Otherwise each immediate subdirectory
/// that classifies as a character root is scanned, in case-insensitive name
/// order. Returns an empty list when nothing qualifies; callers decide
/// whether that is an error.
pub fn scan(lister: &dyn DirLister, root: &Path) -> Result<Vec<Character>> {
    if !lister.is_dir(root) {
        return Err(SheetError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }

    if is_character_root(lister, root)? || contains_images(lister, root)? {
        return Ok(vec![scan_character(lister, root)?]);
    }

    let mut characters = Vec::new();
    for candidate in sorted_dirs(lister, root)? {
        if is_character_root(lister, &candidate)? {
            characters.push(scan_character(lister, &candidate)?);
        }
    }
    Ok(characters)
}

/// Classify a directory as a character root.
///
/// A directory qualifies when at least one of its immediate subdirectories
/// (the candidate animation folders) either directly contains a supported
/// image file or has an immediate subdirectory that does.
pub fn is_character_root(lister: &dyn DirLister, root: &Path) -> Result<bool> {
    if !lister.is_dir(root) {
        return Ok(false);
    }
    for animation_dir in sorted_dirs(lister, root)? {
        if contains_images(lister, &animation_dir)? {
            return Ok(true);
        }
        for direction_dir in sorted_dirs(lister, &animation_dir)? {
            if contains_images(lister, &direction_dir)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Scan a single character root into its animation hierarchy.
///
/// Fails when no animation with at least one frame is found.
pub fn scan_character(lister: &dyn DirLister, root: &Path) -> Result<Character> {
    let mut animations = Vec::new();

    // Frames sitting directly in the character root form one flat animation
    // rooted at the character itself.
    if let Some(direction) = collect_direction(lister, root)? {
        animations.push(Animation::new(dir_name(root), root, vec![direction]));
    }

    for animation_dir in sorted_dirs(lister, root)? {
        let mut directions = Vec::new();
        if let Some(direction) = collect_direction(lister, &animation_dir)? {
            directions.push(direction);
        }
        for direction_dir in sorted_dirs(lister, &animation_dir)? {
            if let Some(direction) = collect_direction(lister, &direction_dir)? {
                directions.push(direction);
            }
        }
        if !directions.is_empty() {
            animations.push(Animation::new(
                dir_name(&animation_dir),
                animation_dir,
                directions,
            ));
        }
    }

    if animations.is_empty() {
        return Err(SheetError::NoAnimationFrames {
            path: root.to_path_buf(),
        });
    }

    Ok(Character::new(dir_name(root), root, animations))
}

/// Collect the image files directly inside `dir` as a Direction, or `None`
/// if the directory holds no frames.
fn collect_direction(lister: &dyn DirLister, dir: &Path) -> Result<Option<Direction>> {
    let frames: Vec<PathBuf> = sorted_files(lister, dir)?
        .into_iter()
        .filter(|f| is_image_file(f))
        .collect();
    if frames.is_empty() {
        return Ok(None);
    }
    Ok(Some(Direction::new(dir_name(dir), dir, frames)))
}

fn contains_images(lister: &dyn DirLister, dir: &Path) -> Result<bool> {
    Ok(lister.list_files(dir)?.iter().any(|f| is_image_file(f)))
}

/// Whether a file name carries a supported image extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
        .unwrap_or(false)
}

fn sorted_dirs(lister: &dyn DirLister, path: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = lister.list_dirs(path)?;
    sort_by_name(&mut dirs);
    Ok(dirs)
}

fn sorted_files(lister: &dyn DirLister, path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = lister.list_files(path)?;
    sort_by_name(&mut files);
    Ok(files)
}

/// Case-insensitive file name order, the ordering rule for both directories
/// and frames.
fn sort_by_name(paths: &mut [PathBuf]) {
    paths.sort_by_key(|p| {
        p.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::OsLister;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: PathBuf) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"frame").unwrap();
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a.png")));
        assert!(is_image_file(Path::new("b.jpg")));
        assert!(is_image_file(Path::new("c.jpeg")));
        assert!(is_image_file(Path::new("d.PNG")));
        assert!(is_image_file(Path::new("e.JpEg")));
        assert!(!is_image_file(Path::new("f.gif")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("png")));
        assert!(!is_image_file(Path::new("trailing.")));
    }

    #[test]
    fn test_scan_rejects_missing_root() {
        let err = scan(&OsLister, Path::new("/nonexistent/path")).unwrap_err();
        assert!(matches!(err, SheetError::InvalidRoot { .. }));
    }

    #[test]
    fn test_scan_rejects_file_root() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("frame.png");
        touch(file.clone());

        let err = scan(&OsLister, &file).unwrap_err();
        assert!(matches!(err, SheetError::InvalidRoot { .. }));
    }

    #[test]
    fn test_scan_empty_root_finds_nothing() {
        let dir = tempdir().unwrap();
        let characters = scan(&OsLister, dir.path()).unwrap();
        assert!(characters.is_empty());
    }

    #[test]
    fn test_scan_flat_animation_folders() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("walk/0.png"));
        touch(dir.path().join("walk/1.png"));
        touch(dir.path().join("idle/0.png"));

        let characters = scan(&OsLister, dir.path()).unwrap();
        assert_eq!(characters.len(), 1);

        let character = &characters[0];
        assert_eq!(character.animations.len(), 2);
        // Case-insensitive name order: idle before walk
        assert_eq!(character.animations[0].name, "idle");
        assert_eq!(character.animations[1].name, "walk");
        // Flat layout: one direction per animation, rooted at the animation
        assert_eq!(character.animations[1].directions.len(), 1);
        assert_eq!(character.animations[1].directions[0].frame_count(), 2);
    }

    #[test]
    fn test_scan_directional_subfolders() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("walk/north/0.png"));
        touch(dir.path().join("walk/north/1.png"));
        touch(dir.path().join("walk/south/0.png"));

        let characters = scan(&OsLister, dir.path()).unwrap();
        let walk = &characters[0].animations[0];

        assert_eq!(walk.name, "walk");
        let names: Vec<&str> = walk.directions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["north", "south"]);
    }

    #[test]
    fn test_scan_mixed_direct_and_directional() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("walk/base.png"));
        touch(dir.path().join("walk/north/0.png"));

        let characters = scan(&OsLister, dir.path()).unwrap();
        let walk = &characters[0].animations[0];

        // Direct frames come first, then subfolder directions
        assert_eq!(walk.directions.len(), 2);
        assert_eq!(walk.directions[0].name, "walk");
        assert_eq!(walk.directions[1].name, "north");
    }

    #[test]
    fn test_scan_frames_directly_in_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("flat");
        touch(root.join("2.png"));
        touch(root.join("1.png"));

        let characters = scan(&OsLister, &root).unwrap();
        assert_eq!(characters.len(), 1);

        let character = &characters[0];
        assert_eq!(character.name, "flat");
        assert_eq!(character.animations.len(), 1);
        let direction = &character.animations[0].directions[0];
        assert_eq!(direction.root, root);
        let frames: Vec<String> = direction
            .frames
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(frames, vec!["1.png", "2.png"]);
    }

    #[test]
    fn test_scan_multiple_character_roots() {
        // Characters under a collection root need directional layouts;
        // a flat animation one level down would classify the collection
        // itself as the character.
        let dir = tempdir().unwrap();
        touch(dir.path().join("Zed/walk/north/0.png"));
        touch(dir.path().join("anna/idle/south/0.png"));

        let characters = scan(&OsLister, dir.path()).unwrap();
        let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
        // Case-insensitive order: anna before Zed
        assert_eq!(names, vec!["anna", "Zed"]);
    }

    #[test]
    fn test_flat_animation_one_level_down_claims_the_root() {
        // hero/walk holds frames directly, so "walk" reads as an animation
        // folder of the root: the root is the character, named after itself.
        let dir = tempdir().unwrap();
        touch(dir.path().join("hero/walk/0.png"));

        let characters = scan(&OsLister, dir.path()).unwrap();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].animations[0].name, "hero");
    }

    #[test]
    fn test_scan_skips_non_character_directories() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("hero/walk/north/0.png"));
        fs::create_dir_all(dir.path().join("docs/drafts")).unwrap();
        fs::write(dir.path().join("docs/readme.txt"), b"notes").unwrap();

        let characters = scan(&OsLister, dir.path()).unwrap();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].name, "hero");
    }

    #[test]
    fn test_scan_ignores_unsupported_files() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("walk/0.png"));
        fs::write(dir.path().join("walk/notes.txt"), b"notes").unwrap();
        fs::write(dir.path().join("walk/clip.gif"), b"gif").unwrap();

        let characters = scan(&OsLister, dir.path()).unwrap();
        let direction = &characters[0].animations[0].directions[0];
        assert_eq!(direction.frame_count(), 1);
    }

    #[test]
    fn test_frame_order_is_case_insensitive() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("walk/B.png"));
        touch(dir.path().join("walk/a.png"));
        touch(dir.path().join("walk/C.png"));

        let characters = scan(&OsLister, dir.path()).unwrap();
        let frames: Vec<String> = characters[0].animations[0].directions[0]
            .frames
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(frames, vec!["a.png", "B.png", "C.png"]);
    }

    #[test]
    fn test_scan_character_without_frames_fails() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("walk")).unwrap();

        let err = scan_character(&OsLister, dir.path()).unwrap_err();
        assert!(matches!(err, SheetError::NoAnimationFrames { .. }));
    }

    #[test]
    fn test_is_character_root_requires_images_within_two_levels() {
        let dir = tempdir().unwrap();
        // Images three levels down do not qualify the root itself
        touch(dir.path().join("a/b/c/0.png"));

        assert!(!is_character_root(&OsLister, dir.path()).unwrap());
        // ...but make the child a character root in its own right
        assert!(is_character_root(&OsLister, &dir.path().join("a")).unwrap());
        // ...so the scan still finds it one level down
        let characters = scan(&OsLister, dir.path()).unwrap();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].name, "a");
    }

    // -- DirLister seam: classification runs against a fake tree --

    #[derive(Default)]
    struct FakeTree {
        dirs: BTreeSet<PathBuf>,
        files: BTreeSet<PathBuf>,
    }

    impl FakeTree {
        fn file(mut self, path: &str) -> Self {
            let path = PathBuf::from(path);
            let mut parent = path.parent();
            while let Some(dir) = parent {
                self.dirs.insert(dir.to_path_buf());
                parent = dir.parent();
            }
            self.files.insert(path);
            self
        }
    }

    impl DirLister for FakeTree {
        fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>> {
            Ok(self
                .dirs
                .iter()
                .filter(|d| d.parent() == Some(path))
                .cloned()
                .collect())
        }

        fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
            Ok(self
                .files
                .iter()
                .filter(|f| f.parent() == Some(path))
                .cloned()
                .collect())
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.contains(path)
        }
    }

    #[test]
    fn test_scan_against_fake_tree() {
        let tree = FakeTree::default()
            .file("/assets/hero/walk/north/0.png")
            .file("/assets/hero/walk/north/1.png")
            .file("/assets/hero/idle/down/0.png")
            .file("/assets/villain/attack/east/0.png");

        let characters = scan(&tree, Path::new("/assets")).unwrap();
        let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["hero", "villain"]);

        let hero = &characters[0];
        assert_eq!(hero.animations.len(), 2);
        assert_eq!(hero.frame_count(), 3);
        assert_eq!(hero.animations[0].directions[0].name, "down");
    }
}
