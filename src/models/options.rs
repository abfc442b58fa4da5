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

use std::path::PathBuf;

use super::MediaType;

/// What to do with the files of one [`MediaType`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetFormat {
    /// Files of this category are left alone.
    #[default]
    Disabled,
    /// Re-encode in place, keeping the file extension.
    KeepExtension,
    /// Re-encode into the given extension (lowercase, without leading dot).
    Convert(String),
}

impl TargetFormat {
    /// Builds a target from the value of a `-i/-a/-v [EXT]` flag.
    pub fn from_flag(flag: Option<Option<String>>) -> Self {
        match flag {
            None => TargetFormat::Disabled,
            Some(None) => TargetFormat::KeepExtension,
            Some(Some(ext)) => {
                let ext = ext.trim().trim_start_matches('.').to_lowercase();
                if ext.is_empty() {
                    TargetFormat::KeepExtension
                } else {
                    TargetFormat::Convert(ext)
                }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, TargetFormat::Disabled)
    }
}

/// Validated settings of a compression run.
#[derive(Debug, Clone)]
pub struct CompressOptions {
    pub image: TargetFormat,
    pub audio: TargetFormat,
    pub video: TargetFormat,
    /// Keep original files. When an original is overwritten a backup is kept.
    pub keep_files: bool,
    /// Image compression quality, 0 to 100.
    pub quality: Option<u16>,
    /// Number of worker threads, always > 0.
    pub threads: usize,
    pub directory: PathBuf,
}

impl CompressOptions {
    pub fn target_for(&self, media_type: MediaType) -> &TargetFormat {
        match media_type {
            MediaType::Image => &self.image,
            MediaType::Audio => &self.audio,
            MediaType::Video => &self.video,
        }
    }

    /// Whether at least one category has been selected.
    pub fn any_enabled(&self) -> bool {
        self.image.is_enabled() || self.audio.is_enabled() || self.video.is_enabled()
    }
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            image: TargetFormat::Disabled,
            audio: TargetFormat::Disabled,
            video: TargetFormat::Disabled,
            keep_files: false,
            quality: None,
            threads: 8,
            directory: PathBuf::from("."),
        }
    }
}
