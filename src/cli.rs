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
use std::sync::Arc;

use clap::Parser;
use log::{warn, LevelFilter};

use crate::compress::compress_all;
use crate::encoders::{Encoders, FfmpegEncoder, ImageMagickEncoder, DEFAULT_FFMPEG, DEFAULT_MAGICK};
use crate::errors::{Error, Result};
use crate::index::index;
use crate::models::{CompressOptions, ExtensionTable, TargetFormat};
use crate::report::RunReport;

/// Compress the media files of a directory tree.
///
/// Every category flag takes an optional extension: without it files are
/// re-encoded in place, with it they are converted (`-i webp`).
#[derive(Parser, Debug, Clone)]
#[command(name = "comva", author, version, about, long_about = None)]
pub struct Cli {
    /// Compress image files
    #[arg(short = 'i', value_name = "EXT")]
    pub image_ext: Option<Option<String>>,

    /// Compress audio files
    #[arg(short = 'a', value_name = "EXT")]
    pub audio_ext: Option<Option<String>>,

    /// Compress video files
    #[arg(short = 'v', value_name = "EXT")]
    pub video_ext: Option<Option<String>>,

    /// Keep the original files, if original file is overwritten backup files are kept
    #[arg(short, long)]
    pub keep_files: bool,

    /// Image compression quality (0-100)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(0..=100))]
    pub quality: Option<u16>,

    /// The amount of worker threads
    #[arg(short, long, default_value_t = 8)]
    pub threads: usize,

    /// Directory to compress, recursively
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Write a JSON report of the run to FILE
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// ImageMagick executable
    #[arg(long, value_name = "PROGRAM", env = "COMVA_MAGICK", default_value = DEFAULT_MAGICK)]
    pub magick: String,

    /// ffmpeg executable
    #[arg(long, value_name = "PROGRAM", env = "COMVA_FFMPEG", default_value = DEFAULT_FFMPEG)]
    pub ffmpeg: String,

    /// Log every step
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Validates the arguments into [`CompressOptions`].
    pub fn to_options(&self) -> Result<CompressOptions> {
        if self.threads == 0 {
            return Err(Error::InvalidOption(
                "the amount of worker threads must be at least 1".to_string(),
            ));
        }
        if let Some(quality) = self.quality.filter(|q| *q > 100) {
            return Err(Error::InvalidOption(format!(
                "quality must be between 0 and 100, got {quality}"
            )));
        }
        let directory = self
            .directory
            .canonicalize()
            .map_err(|e| Error::io(&self.directory, e))?;

        Ok(CompressOptions {
            image: TargetFormat::from_flag(self.image_ext.clone()),
            audio: TargetFormat::from_flag(self.audio_ext.clone()),
            video: TargetFormat::from_flag(self.video_ext.clone()),
            keep_files: self.keep_files,
            quality: self.quality,
            threads: self.threads,
            directory,
        })
    }

    pub fn encoders(&self) -> Encoders {
        Encoders::new(
            Arc::new(ImageMagickEncoder::new(&self.magick)),
            Arc::new(FfmpegEncoder::new(&self.ffmpeg)),
        )
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

/// Indexes the directory, compresses it and writes the report if requested.
///
/// Returns `None` when no media category has been selected.
pub fn run(cli: &Cli, encoders: &Encoders) -> Result<Option<RunReport>> {
    let options = cli.to_options()?;
    if !options.any_enabled() {
        warn!("No media category selected, pass -i, -a or -v");
        return Ok(None);
    }

    let files = index(&options.directory, &ExtensionTable::default())?;
    let report = compress_all(files, &options, encoders)?;

    if let Some(path) = &cli.report {
        report.write_json(path)?;
    }
    Ok(Some(report))
}
