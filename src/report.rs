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

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::compress::FileOutcome;
use crate::errors::{Error, Result};

/// Result of a compression run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub compressed: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Size of the compressed files before compression.
    pub bytes_before: u64,
    /// Size of the compressed files after compression.
    pub bytes_after: u64,
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn from_outcomes(started_at: DateTime<Utc>, mut outcomes: Vec<FileOutcome>) -> Self {
        outcomes.sort_by(|a, b| a.source().cmp(b.source()));

        let mut report = Self {
            started_at,
            finished_at: Utc::now(),
            compressed: 0,
            skipped: 0,
            failed: 0,
            bytes_before: 0,
            bytes_after: 0,
            outcomes: Vec::new(),
        };
        for outcome in &outcomes {
            match outcome {
                FileOutcome::Compressed {
                    input_size,
                    output_size,
                    ..
                } => {
                    report.compressed += 1;
                    report.bytes_before += input_size;
                    report.bytes_after += output_size;
                }
                FileOutcome::Skipped { .. } => report.skipped += 1,
                FileOutcome::Failed { .. } => report.failed += 1,
            }
        }
        report.outcomes = outcomes;
        report
    }

    pub fn summary(&self) -> String {
        let change = if self.bytes_after <= self.bytes_before {
            format!("saved {}", format_size(self.bytes_before - self.bytes_after))
        } else {
            format!("grew by {}", format_size(self.bytes_after - self.bytes_before))
        };
        format!(
            "{} compressed, {} skipped, {} failed; {} -> {} ({change})",
            self.compressed,
            self.skipped,
            self.failed,
            format_size(self.bytes_before),
            format_size(self.bytes_after),
        )
    }

    /// Writes the report as pretty printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| Error::io(path, e))?;
        Ok(())
    }
}

/// Human readable size using binary units.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
