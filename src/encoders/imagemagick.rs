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

pub const DEFAULT_MAGICK: &str = "magick";

/// Converts images with the ImageMagick command line tool.
#[derive(Debug, Clone)]
pub struct ImageMagickEncoder {
    program: String,
}

impl ImageMagickEncoder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub(crate) fn arguments(input: &Path, output: &Path, quality: Option<u16>) -> Vec<String> {
        let mut args = vec![input.to_string_lossy().into_owned()];
        if let Some(quality) = quality {
            args.push("-quality".to_string());
            args.push(quality.to_string());
        }
        args.push(output.to_string_lossy().into_owned());
        args
    }
}

impl Default for ImageMagickEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAGICK)
    }
}

impl MediaEncoder for ImageMagickEncoder {
    fn encode(
        &self,
        input: &Path,
        output: &Path,
        _output_ext: &str,
        quality: Option<u16>,
    ) -> Result<()> {
        run_program(&self.program, Self::arguments(input, output, quality))
    }
}
