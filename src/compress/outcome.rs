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

use std::fmt::Display;
use std::path::PathBuf;

use serde::Serialize;

use crate::models::{MediaFile, MediaType};
use crate::report::format_size;

/// What happened to one indexed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
    Compressed {
        source: PathBuf,
        output: PathBuf,
        media_type: MediaType,
        input_size: u64,
        output_size: u64,
    },
    Skipped {
        source: PathBuf,
        media_type: MediaType,
        reason: String,
    },
    Failed {
        source: PathBuf,
        media_type: MediaType,
        error: String,
    },
}

impl FileOutcome {
    pub(crate) fn skipped(file: &MediaFile, reason: impl Into<String>) -> Self {
        FileOutcome::Skipped {
            source: file.path.clone(),
            media_type: file.media_type,
            reason: reason.into(),
        }
    }

    pub(crate) fn failed(file: &MediaFile, error: impl Display) -> Self {
        FileOutcome::Failed {
            source: file.path.clone(),
            media_type: file.media_type,
            error: error.to_string(),
        }
    }

    pub fn source(&self) -> &PathBuf {
        match self {
            FileOutcome::Compressed { source, .. }
            | FileOutcome::Skipped { source, .. }
            | FileOutcome::Failed { source, .. } => source,
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, FileOutcome::Compressed { .. })
    }
}

impl Display for FileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOutcome::Compressed {
                output,
                input_size,
                output_size,
                ..
            } => write!(
                f,
                "Compressed {} ({} -> {})",
                output.display(),
                format_size(*input_size),
                format_size(*output_size)
            ),
            FileOutcome::Skipped { source, reason, .. } => {
                write!(f, "Skipped {}, {reason}", source.display())
            }
            FileOutcome::Failed { source, error, .. } => {
                write!(f, "Compression of {} failed:\n{error}", source.display())
            }
        }
    }
}
