// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Go toolchain integration.
//!
//! This module drives the two external collaborators: `protoc`, which
//! produces the binding artifact from the interface file, and `gofmt`,
//! which normalizes every freshly written artifact. Both are consumed
//! through this one seam so tests can substitute stand-in programs.
//! Collaborator failure is fatal to the run and surfaces the
//! collaborator's own stderr.

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, Result};
use std::process::Command;
use tracing::debug;

/// External programs the generator shells out to.
#[derive(Debug, Clone)]
pub struct Toolchain {
    protoc: String,
    gofmt: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            protoc: "protoc".to_string(),
            gofmt: "gofmt".to_string(),
        }
    }
}

impl Toolchain {
    /// The system `protoc` and `gofmt` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute the programs to invoke. Used by tests to point the
    /// driver at stand-ins.
    #[must_use]
    pub fn with_programs(protoc: impl Into<String>, gofmt: impl Into<String>) -> Self {
        Self {
            protoc: protoc.into(),
            gofmt: gofmt.into(),
        }
    }

    /// Checks that the interface compiler is available.
    ///
    /// # Errors
    ///
    /// Returns an error with installation instructions if `protoc` cannot
    /// be run.
    pub fn check_protoc_available(&self) -> Result<()> {
        let result = Command::new(&self.protoc)
            .arg("--version")
            .output()
            .into_diagnostic();

        match result {
            Ok(output) if output.status.success() => Ok(()),
            _ => {
                miette::bail!(
                    "{} not found in PATH. Please install the protobuf compiler.\n\
                     \n\
                     Installation instructions:\n\
                     - Ubuntu/Debian: sudo apt-get install protobuf-compiler\n\
                     - macOS: brew install protobuf\n\
                     - Windows: download from https://github.com/protocolbuffers/protobuf/releases\n\
                     \n\
                     The Go plugin is also required: go install github.com/golang/protobuf/protoc-gen-go",
                    self.protoc
                );
            }
        }
    }

    /// Run the interface compiler over `proto_file`, producing the binding
    /// artifact in the services layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the compiler cannot be spawned or exits
    /// non-zero; the compiler's stderr is folded into the diagnostic.
    pub fn compile(&self, proto_file: &Utf8Path) -> Result<()> {
        debug!("Running {} --go_out=plugins=grpc:. {proto_file}", self.protoc);
        let output = Command::new(&self.protoc)
            .arg("--go_out=plugins=grpc:.")
            .arg(proto_file.as_str())
            .output()
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to run {}", self.protoc))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            miette::bail!("protoc failed on '{proto_file}':\n{}", stderr.trim_end());
        }

        Ok(())
    }

    /// Format one freshly written artifact in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatter cannot be spawned or exits
    /// non-zero.
    pub fn format(&self, file: &Utf8Path) -> Result<()> {
        debug!("Running {} -w {file}", self.gofmt);
        let output = Command::new(&self.gofmt)
            .arg("-w")
            .arg(file.as_str())
            .output()
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to run {}", self.gofmt))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            miette::bail!("gofmt failed on '{file}':\n{}", stderr.trim_end());
        }

        Ok(())
    }
}
