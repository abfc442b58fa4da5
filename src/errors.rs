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
use std::process::ExitStatus;
use std::sync::PoisonError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot acquire lock")]
    CannotAcquireLock,

    #[error("Cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Encoder '{program}' cannot be started: {source}")]
    EncoderUnavailable {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed {program} execution ({status})!\nStdErr: {stderr}\nStdOut: {stdout}")]
    EncoderFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
        stdout: String,
    },

    #[error("panicked: {0}")]
    EncoderPanicked(String),

    #[error("Worker pool has been shut down")]
    PoolShutDown,

    #[error("Thread panicked: {0}")]
    ThreadPanicked(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wraps an [`std::io::Error`] together with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl<T> From<PoisonError<T>> for Error {
    fn from(_value: PoisonError<T>) -> Self {
        Error::CannotAcquireLock
    }
}
