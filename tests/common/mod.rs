use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use comva::test_utils::MockEncoder;
use comva::{CompressOptions, Encoders, MediaFile, MediaType};
use tempfile::TempDir;

/// Writes `len` bytes of content at `relative` below `root`.
pub fn write_media(root: &Path, relative: &str, len: usize) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, vec![b'x'; len]).unwrap();
    path
}

/// A directory with one file of every category.
pub fn media_tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_media(dir.path(), "photos/cat.png", 100);
    write_media(dir.path(), "music/song.wav", 200);
    write_media(dir.path(), "videos/holiday/clip.mkv", 400);
    write_media(dir.path(), "notes.txt", 10);
    dir
}

pub fn media_file(path: PathBuf, media_type: MediaType) -> MediaFile {
    let size = fs::metadata(&path).unwrap().len();
    MediaFile::new(path, media_type, size)
}

pub fn options_for(dir: &TempDir) -> CompressOptions {
    CompressOptions {
        threads: 2,
        directory: dir.path().to_path_buf(),
        ..Default::default()
    }
}

pub fn encoders(image: &Arc<MockEncoder>, audio_video: &Arc<MockEncoder>) -> Encoders {
    Encoders::new(image.clone(), audio_video.clone())
}

/// Sorted paths of every file below `root`, relative to it.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();
    collect(root, root, &mut files);
    files.sort();
    files
}

fn collect(root: &Path, dir: &Path, files: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            files.push(
                path.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/"),
            );
        }
    }
}
