// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Scaffold materialization.
//!
//! One write primitive with a per-artifact overwrite policy. The binding
//! artifact is mechanically regenerated every run and always replaced; the
//! server, client, and test scaffolds are starting points for hand editing
//! and are only created when absent. Re-running the tool after hand edits
//! must never clobber them; re-running on a clean tree reproduces the same
//! bytes as the first run.

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, Result};
use std::fs;

/// What to do when the destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Remove and recreate the destination (binding artifact).
    Overwrite,
    /// Leave an existing destination untouched (hand-editable scaffolds).
    CreateIfAbsent,
}

/// Whether the write happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The destination was created (or replaced).
    Written,
    /// The destination existed and the policy left it alone.
    SkippedExisting,
}

/// Write `contents` to `path` under the given policy, creating missing
/// parent directories.
///
/// # Errors
///
/// Any filesystem failure is an error; the caller aborts the run without
/// rolling back files already written.
pub fn write(path: &Utf8Path, contents: &str, policy: OverwritePolicy) -> Result<WriteOutcome> {
    if path.exists() {
        match policy {
            OverwritePolicy::CreateIfAbsent => return Ok(WriteOutcome::SkippedExisting),
            OverwritePolicy::Overwrite => {
                fs::remove_file(path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to remove stale artifact '{path}'"))?;
            }
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create directory '{parent}'"))?;
    }

    fs::write(path, contents)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write '{path}'"))?;

    Ok(WriteOutcome::Written)
}
