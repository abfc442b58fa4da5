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

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::models::TargetFormat;

/// Where a source file gets re-encoded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    pub output: PathBuf,
    /// Lowercase extension of `output`, selects the encoder settings.
    pub output_ext: String,
    /// The output replaces the source file.
    pub overwrites: bool,
}

/// Computes the output of `source` for the given target, `None` when the
/// category is disabled.
///
/// Extensions are compared case-insensitively: converting `photo.PNG` to
/// `png` re-encodes the file in place instead of creating `photo.png` next
/// to it.
pub fn plan_output(source: &Path, target: &TargetFormat) -> Option<OutputPlan> {
    let source_ext = source
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();

    let requested = match target {
        TargetFormat::Disabled => return None,
        TargetFormat::KeepExtension => None,
        TargetFormat::Convert(ext) if ext.eq_ignore_ascii_case(&source_ext) => None,
        TargetFormat::Convert(ext) => Some(ext),
    };

    let plan = match requested {
        None => OutputPlan {
            output: source.to_path_buf(),
            output_ext: source_ext.to_lowercase(),
            overwrites: true,
        },
        Some(ext) => OutputPlan {
            output: source.with_extension(ext),
            output_ext: ext.to_lowercase(),
            overwrites: false,
        },
    };
    Some(plan)
}

/// Path the source is moved to while it is re-encoded in place:
/// `photo.png` becomes `photo.png.tmp`.
pub fn staged_path(source: &Path) -> PathBuf {
    append_extension(source, "tmp")
}

/// Path a replaced original is kept at: `photo.png` becomes `photo.png.backup`.
pub fn backup_path(source: &Path) -> PathBuf {
    append_extension(source, "backup")
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
