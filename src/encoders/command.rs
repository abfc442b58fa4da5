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

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use log::debug;

use crate::errors::{Error, Result};

/// Runs `program` to completion with stdin closed and output captured.
///
/// A non-zero exit status becomes [`Error::EncoderFailed`] carrying
/// everything the program printed.
pub(crate) fn run_program<I, S>(program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    debug!("Running {command:?}");

    let output = command
        .output()
        .map_err(|source| Error::EncoderUnavailable {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(Error::EncoderFailed {
            program: program.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        });
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        run_program("sh", ["-c", "exit 0"]).unwrap();
    }

    #[test]
    fn test_failure_captures_output() {
        let error = run_program("sh", ["-c", "echo out; echo err >&2; exit 3"]).unwrap_err();
        match error {
            Error::EncoderFailed {
                program,
                status,
                stderr,
                stdout,
            } => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "err\n");
                assert_eq!(stdout, "out\n");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_program() {
        let error = run_program("comva-no-such-program", ["x"]).unwrap_err();
        assert!(matches!(error, Error::EncoderUnavailable { .. }));
    }
}
