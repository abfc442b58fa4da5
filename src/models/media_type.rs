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

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;

use serde::Serialize;

/// Category of a media file.
///
/// The ordering is the order in which files are processed: images first,
/// then audio, then video.
#[derive(Clone, Copy, Debug, Hash, Ord, PartialOrd, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Audio,
    Video,
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Audio => write!(f, "audio"),
            MediaType::Video => write!(f, "video"),
        }
    }
}

/// Maps lowercase file extensions to the [`MediaType`] they belong to.
#[derive(Debug, Clone)]
pub struct ExtensionTable {
    extensions: HashMap<String, MediaType>,
}

impl ExtensionTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, MediaType)>,
        S: AsRef<str>,
    {
        Self {
            extensions: entries
                .into_iter()
                .map(|(ext, media_type)| (ext.as_ref().to_lowercase(), media_type))
                .collect(),
        }
    }

    /// Type of the file at `path`, judged by its extension only.
    pub fn media_type_of(&self, path: &Path) -> Option<MediaType> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        self.extensions.get(&ext).copied()
    }
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::new([
            ("gif", MediaType::Image),
            ("jpg", MediaType::Image),
            ("jpeg", MediaType::Image),
            ("png", MediaType::Image),
            ("bmp", MediaType::Image),
            ("webp", MediaType::Image),
            ("avif", MediaType::Image),
            ("mp4", MediaType::Video),
            ("avi", MediaType::Video),
            ("mov", MediaType::Video),
            ("flv", MediaType::Video),
            ("mkv", MediaType::Video),
            ("mp3", MediaType::Audio),
            ("wav", MediaType::Audio),
            ("ogg", MediaType::Audio),
            ("flac", MediaType::Audio),
            ("opus", MediaType::Audio),
            ("m4a", MediaType::Audio),
            ("webm", MediaType::Audio),
        ])
    }
}
