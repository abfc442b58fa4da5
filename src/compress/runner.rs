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

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc;

use chrono::Utc;
use log::{debug, info, warn};

use super::plan::{backup_path, plan_output, staged_path};
use super::FileOutcome;
use crate::encoders::Encoders;
use crate::errors::{Error, Result};
use crate::models::{CompressOptions, MediaFile};
use crate::pool::WorkerPool;
use crate::report::RunReport;
use crate::utils::panic_message;

/// Compresses every file whose category is selected in `options`, using a
/// pool of `options.threads` workers.
///
/// Returns once every submitted file has reported its [`FileOutcome`]. Files
/// failing to compress do not stop the run, they are reported as
/// [`FileOutcome::Failed`].
pub fn compress_all(
    files: Vec<MediaFile>,
    options: &CompressOptions,
    encoders: &Encoders,
) -> Result<RunReport> {
    let started = Utc::now();
    let selected: Vec<MediaFile> = files
        .into_iter()
        .filter(|file| options.target_for(file.media_type).is_enabled())
        .collect();
    let total = selected.len();
    let (scheduled, mut outcomes) = claim_outputs(selected, options);
    for outcome in &outcomes {
        info!("{outcome}");
    }

    let pool = WorkerPool::new(options.threads)?;
    info!(
        "Starting compression of {total} files on {} threads..",
        pool.size()
    );
    let (sender, receiver) = mpsc::channel();
    for file in scheduled {
        let sender = sender.clone();
        let options = options.clone();
        let encoders = encoders.clone();
        pool.execute(move || {
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                compress_file(&file, &options, &encoders)
            }))
            .unwrap_or_else(|e| {
                FileOutcome::failed(&file, format!("panicked: {}", panic_message(e.as_ref())))
            });
            if sender.send(outcome).is_err() {
                warn!("Outcome of '{}' could not be reported", file.path.display());
            }
        })?;
    }
    // Only the jobs hold senders now, the loop below ends with the last one.
    drop(sender);

    for outcome in receiver {
        let done = outcomes.len() + 1;
        if let FileOutcome::Failed { .. } = outcome {
            warn!("[{done}/{total}] {outcome}");
        } else {
            info!("[{done}/{total}] {outcome}");
        }
        outcomes.push(outcome);
    }
    drop(pool);

    if outcomes.len() != total {
        return Err(Error::Other(format!(
            "{} of {total} files did not report an outcome",
            total - outcomes.len()
        )));
    }
    Ok(RunReport::from_outcomes(started, outcomes))
}

/// Splits `files` into the ones to compress and the ones skipped up front
/// because their output collides with another file of the run.
///
/// Every source path is claimed first, then planned outputs in order: an
/// output already claimed by a source or by an earlier file is skipped, so no
/// two jobs ever write the same path.
fn claim_outputs(
    files: Vec<MediaFile>,
    options: &CompressOptions,
) -> (Vec<MediaFile>, Vec<FileOutcome>) {
    let mut claimed: HashSet<PathBuf> = files.iter().map(|file| file.path.clone()).collect();
    let mut scheduled = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();

    for file in files {
        match plan_output(&file.path, options.target_for(file.media_type)) {
            Some(plan) if !plan.overwrites => {
                if claimed.insert(plan.output.clone()) {
                    scheduled.push(file);
                } else {
                    debug!(
                        "'{}' is also the output or source of another file",
                        plan.output.display()
                    );
                    skipped.push(FileOutcome::skipped(&file, "output already exists!"));
                }
            }
            _ => scheduled.push(file),
        }
    }
    (scheduled, skipped)
}

/// Re-encodes a single file according to `options`.
///
/// When the output replaces the source, the source is first moved to its
/// staged path (`*.tmp`) and fed to the encoder from there. On failure the
/// staged file is moved back, so the original is never lost.
pub fn compress_file(
    file: &MediaFile,
    options: &CompressOptions,
    encoders: &Encoders,
) -> FileOutcome {
    let Some(plan) = plan_output(&file.path, options.target_for(file.media_type)) else {
        return FileOutcome::skipped(file, format!("{} files are not selected", file.media_type));
    };

    if !plan.overwrites && plan.output.exists() {
        return FileOutcome::skipped(file, "output already exists!");
    }

    let input = if plan.overwrites {
        let staged = staged_path(&file.path);
        if staged.exists() {
            return FileOutcome::skipped(
                file,
                format!("staged file '{}' already exists!", staged.display()),
            );
        }
        let backup = backup_path(&file.path);
        if options.keep_files && backup.exists() {
            return FileOutcome::skipped(
                file,
                format!("backup '{}' already exists!", backup.display()),
            );
        }
        if let Err(e) = fs::rename(&file.path, &staged) {
            return FileOutcome::failed(file, Error::io(&file.path, e));
        }
        staged
    } else {
        file.path.clone()
    };

    debug!("Compressing {}..", plan.output.display());
    let encoder = encoders.for_media_type(file.media_type);
    let encoded = catch_unwind(AssertUnwindSafe(|| {
        encoder.encode(&input, &plan.output, &plan.output_ext, options.quality)
    }))
    .unwrap_or_else(|e| Err(Error::EncoderPanicked(panic_message(e.as_ref()))));
    if let Err(e) = encoded {
        // Anything at the output path was written by the failed encoder.
        if plan.output.exists() {
            if let Err(e) = fs::remove_file(&plan.output) {
                warn!("Cannot remove '{}': {e}", plan.output.display());
            }
        }
        if plan.overwrites {
            restore_original(&input, &file.path);
        }
        return FileOutcome::failed(file, e);
    }

    let output_size = match fs::metadata(&plan.output) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            if plan.overwrites {
                restore_original(&input, &file.path);
            }
            return FileOutcome::failed(
                file,
                format!("encoder produced no output: {}", Error::io(&plan.output, e)),
            );
        }
    };

    if !options.keep_files {
        if let Err(e) = fs::remove_file(&input) {
            warn!("Cannot remove '{}': {e}", input.display());
        }
    } else if plan.overwrites {
        let backup = backup_path(&file.path);
        debug!("Keeping original at '{}'", backup.display());
        if let Err(e) = fs::rename(&input, &backup) {
            warn!("Cannot move '{}' to '{}': {e}", input.display(), backup.display());
        }
    }

    FileOutcome::Compressed {
        source: file.path.clone(),
        output: plan.output,
        media_type: file.media_type,
        input_size: file.size,
        output_size,
    }
}

fn restore_original(staged: &Path, source: &Path) {
    if let Err(e) = fs::rename(staged, source) {
        warn!(
            "Cannot restore '{}' from '{}': {e}",
            source.display(),
            staged.display()
        );
    }
}
