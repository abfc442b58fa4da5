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

//! comva compresses the media files of a directory tree.
//!
//! Images are re-encoded with ImageMagick, audio and video with ffmpeg. Files
//! are found by extension ([`index`]), and compressed in parallel on a
//! [`WorkerPool`] ([`compress_all`]), each file yielding a [`FileOutcome`]
//! collected into a [`RunReport`].
//!
//! ```no_run
//! use comva::{compress_all, index, CompressOptions, Encoders, ExtensionTable, TargetFormat};
//!
//! let options = CompressOptions {
//!     image: TargetFormat::Convert("webp".to_string()),
//!     quality: Some(80),
//!     ..Default::default()
//! };
//! let files = index(&options.directory, &ExtensionTable::default())?;
//! let report = compress_all(files, &options, &Encoders::default())?;
//! println!("{}", report.summary());
//! # Ok::<(), comva::Error>(())
//! ```

mod cli;
mod compress;
mod encoders;
mod errors;
mod index;
pub mod logger;
mod models;
mod pool;
mod report;
mod utils;

#[cfg(feature = "test_utils")]
pub mod test_utils;

pub use cli::{run, Cli};
pub use compress::{
    backup_path, compress_all, compress_file, plan_output, staged_path, FileOutcome, OutputPlan,
};
pub use encoders::{
    ffmpeg_arguments, Encoders, FfmpegEncoder, ImageMagickEncoder, MediaEncoder, DEFAULT_FFMPEG,
    DEFAULT_MAGICK,
};
pub use errors::{Error, Result};
pub use index::index;
pub use models::{CompressOptions, ExtensionTable, MediaFile, MediaType, TargetFormat};
pub use pool::WorkerPool;
pub use report::{format_size, RunReport};
