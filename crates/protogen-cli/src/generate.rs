// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The scaffold generation driver.
//!
//! One batch run per interface file: resolve the layout, compile the
//! bindings, extract the method list, rewrite the binding imports, and
//! materialize the three scaffolds. Every error is fatal — a failed run
//! is simply re-run once the cause is fixed, so there is no retry or
//! partial-success handling anywhere in this pipeline.

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, Result};
use std::fs;
use tracing::{debug, info, instrument, warn};

use protogen_core::codegen::{client, client_tests, server};
use protogen_core::extract::extract;
use protogen_core::rewrite::rewrite;

use crate::layout;
use crate::scaffold::{self, OverwritePolicy, WriteOutcome};
use crate::toolchain::Toolchain;

/// Generate the service scaffolds for one interface file.
///
/// # Errors
///
/// Returns an error on any input, collaborator, or filesystem failure;
/// the run aborts immediately and artifacts already written stay in
/// place.
#[instrument(skip_all, fields(proto = %proto_file))]
pub fn generate(proto_file: &Utf8Path, toolchain: &Toolchain) -> Result<()> {
    let layout = layout::resolve(proto_file)?;
    info!(package = %layout.package, "Resolved service layout");

    toolchain.check_protoc_available()?;
    toolchain.compile(proto_file)?;

    let source = fs::read_to_string(proto_file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read proto file '{proto_file}'"))?;

    let extraction = extract(&source);
    for warning in &extraction.warnings {
        warn!("{warning}");
    }
    info!(
        methods = extraction.methods.len(),
        imports = extraction.imports.len(),
        "Extracted service definition"
    );

    // The compiler just regenerated the binding artifact; patch its imports
    // for the services layout and put it back.
    let binding = fs::read_to_string(&layout.binding_file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read binding artifact '{}'", layout.binding_file))?;
    let rewritten = rewrite(&binding, &extraction.imports);

    let mut written = Vec::new();

    scaffold::write(&layout.binding_file, &rewritten, OverwritePolicy::Overwrite)?;
    written.push(layout.binding_file.clone());

    let scaffolds = [
        (
            &layout.server_file,
            server::generate(&layout.package, &extraction.methods),
        ),
        (
            &layout.client_file,
            client::generate(&layout.package, &extraction.methods),
        ),
        (
            &layout.client_test_file,
            client_tests::generate(&layout.package, &extraction.methods),
        ),
    ];

    for (path, contents) in scaffolds {
        match scaffold::write(path, &contents, OverwritePolicy::CreateIfAbsent)? {
            WriteOutcome::Written => {
                debug!("Wrote {path}");
                written.push(path.clone());
            }
            WriteOutcome::SkippedExisting => {
                info!("Skipping existing '{path}'");
            }
        }
    }

    for path in &written {
        toolchain.format(path)?;
    }

    info!(artifacts = written.len(), "Generation complete");
    println!("Success.");

    Ok(())
}
