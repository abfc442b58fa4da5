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

//! Encoders that never run an external program, for tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{Error, MediaEncoder, Result};

/// One call to [`MockEncoder::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeCall {
    pub input: PathBuf,
    pub output: PathBuf,
    pub output_ext: String,
    pub quality: Option<u16>,
}

#[derive(Debug, Clone)]
pub enum MockBehaviour {
    /// Writes the first half of the input to the output.
    Shrink,
    /// Writes a partial output and fails with the given message.
    Fail(String),
    /// Panics with the given message.
    Panic(String),
}

/// Records every call and behaves according to its [`MockBehaviour`].
#[derive(Debug)]
pub struct MockEncoder {
    behaviour: MockBehaviour,
    calls: Mutex<Vec<EncodeCall>>,
}

impl MockEncoder {
    pub fn new(behaviour: MockBehaviour) -> Self {
        Self {
            behaviour,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn shrinking() -> Self {
        Self::new(MockBehaviour::Shrink)
    }

    pub fn failing(message: &str) -> Self {
        Self::new(MockBehaviour::Fail(message.to_string()))
    }

    pub fn calls(&self) -> Vec<EncodeCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl MediaEncoder for MockEncoder {
    fn encode(
        &self,
        input: &Path,
        output: &Path,
        output_ext: &str,
        quality: Option<u16>,
    ) -> Result<()> {
        self.calls.lock()?.push(EncodeCall {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            output_ext: output_ext.to_string(),
            quality,
        });

        match &self.behaviour {
            MockBehaviour::Shrink => {
                let data = fs::read(input).map_err(|e| Error::io(input, e))?;
                fs::write(output, &data[..data.len() / 2]).map_err(|e| Error::io(output, e))?;
                Ok(())
            }
            MockBehaviour::Fail(message) => {
                fs::write(output, b"partial").map_err(|e| Error::io(output, e))?;
                Err(Error::Other(message.clone()))
            }
            MockBehaviour::Panic(message) => panic!("{message}"),
        }
    }
}
