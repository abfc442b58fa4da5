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

//! External programs doing the actual re-encoding.

mod command;
mod ffmpeg;
mod imagemagick;

use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::MediaType;

pub use ffmpeg::{ffmpeg_arguments, FfmpegEncoder, DEFAULT_FFMPEG};
pub use imagemagick::{ImageMagickEncoder, DEFAULT_MAGICK};

/// Re-encodes one media file into another.
pub trait MediaEncoder: Debug + Send + Sync {
    /// Reads `input` and writes the re-encoded media to `output`.
    ///
    /// `output_ext` is the lowercase extension of `output`, used to pick
    /// format specific settings. `quality` only applies to encoders that
    /// support it.
    fn encode(
        &self,
        input: &Path,
        output: &Path,
        output_ext: &str,
        quality: Option<u16>,
    ) -> Result<()>;
}

/// The encoders used during a run, shared by every worker.
#[derive(Debug, Clone)]
pub struct Encoders {
    pub image: Arc<dyn MediaEncoder>,
    pub audio_video: Arc<dyn MediaEncoder>,
}

impl Encoders {
    pub fn new(image: Arc<dyn MediaEncoder>, audio_video: Arc<dyn MediaEncoder>) -> Self {
        Self { image, audio_video }
    }

    pub fn for_media_type(&self, media_type: MediaType) -> &dyn MediaEncoder {
        match media_type {
            MediaType::Image => self.image.as_ref(),
            MediaType::Audio | MediaType::Video => self.audio_video.as_ref(),
        }
    }
}

impl Default for Encoders {
    fn default() -> Self {
        Self::new(
            Arc::new(ImageMagickEncoder::default()),
            Arc::new(FfmpegEncoder::default()),
        )
    }
}
