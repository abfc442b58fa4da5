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

use std::path::Path;

use super::command::run_program;
use super::MediaEncoder;
use crate::errors::Result;

pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Extra output arguments handed to ffmpeg for the given output extension.
pub fn ffmpeg_arguments(output_ext: &str) -> &'static [&'static str] {
    match output_ext {
        // https://trac.ffmpeg.org/wiki/Encode/MP3
        "mp3" => &["-qscale:a", "2"],
        // Max FLAC compression
        "flac" => &["-compression_level", "12"],
        "mp4" | "mkv" | "mov" | "avi" => &["-vcodec", "libx265", "-crf", "28"],
        _ => &[],
    }
}

/// Re-encodes audio and video with ffmpeg.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    program: String,
}

impl FfmpegEncoder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub(crate) fn arguments(input: &Path, output: &Path, output_ext: &str) -> Vec<String> {
        // Output options only apply when they precede the output file.
        let mut args = vec![
            "-y".to_string(),
            "-i".to_string(),
            input.to_string_lossy().into_owned(),
        ];
        args.extend(ffmpeg_arguments(output_ext).iter().map(|a| a.to_string()));
        args.push(output.to_string_lossy().into_owned());
        args
    }
}

impl Default for FfmpegEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG)
    }
}

impl MediaEncoder for FfmpegEncoder {
    fn encode(
        &self,
        input: &Path,
        output: &Path,
        output_ext: &str,
        _quality: Option<u16>,
    ) -> Result<()> {
        run_program(&self.program, Self::arguments(input, output, output_ext))
    }
}
