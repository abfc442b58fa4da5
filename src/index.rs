// (C) Copyright IBM Corp. 2025.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::{Error, Result};
use crate::models::{ExtensionTable, MediaFile};

/// Recursively collects every media file below `directory`.
///
/// Files are matched by their (case-insensitive) extension against `table`.
/// The result is ordered by [`MediaType`](crate::MediaType) and then by path,
/// so images are processed first, then audio, then video.
pub fn index(directory: &Path, table: &ExtensionTable) -> Result<Vec<MediaFile>> {
    let mut files = Vec::new();
    index_files(directory, table, &mut files)?;
    files.sort_by(|a, b| {
        a.media_type
            .cmp(&b.media_type)
            .then_with(|| a.path.cmp(&b.path))
    });
    debug!(
        "Indexed {} media files below '{}'",
        files.len(),
        directory.display()
    );
    Ok(files)
}

fn index_files(directory: &Path, table: &ExtensionTable, files: &mut Vec<MediaFile>) -> Result<()> {
    let entries = fs::read_dir(directory).map_err(|e| Error::io(directory, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(directory, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        // Symlinked directories are not descended into, they may form cycles.
        if file_type.is_dir() {
            index_files(&path, table, files)?;
            continue;
        }
        let Some(media_type) = table.media_type_of(&path) else {
            continue;
        };
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {
                files.push(MediaFile::new(path, media_type, metadata.len()));
            }
            Ok(_) => {}
            Err(e) => debug!("Ignoring '{}': {e}", path.display()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaType;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"data").unwrap();
    }

    #[test]
    fn test_index_nested_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b/movie.MP4"));
        touch(&dir.path().join("song.mp3"));
        touch(&dir.path().join("a/deep/er/photo.png"));
        touch(&dir.path().join("readme.txt"));
        touch(&dir.path().join("noext"));

        let files = index(dir.path(), &ExtensionTable::default()).unwrap();

        let types: Vec<MediaType> = files.iter().map(|f| f.media_type).collect();
        assert_eq!(
            types,
            vec![MediaType::Image, MediaType::Audio, MediaType::Video]
        );
        assert_eq!(files[0].path, dir.path().join("a/deep/er/photo.png"));
        assert_eq!(files[0].size, 4);
        assert_eq!(files[2].extension(), "mp4");
    }

    #[test]
    fn test_index_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let files = index(dir.path(), &ExtensionTable::default()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_index_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let error = index(&missing, &ExtensionTable::default()).unwrap_err();
        assert!(matches!(error, Error::Io { ref path, .. } if path == &missing));
    }
}
