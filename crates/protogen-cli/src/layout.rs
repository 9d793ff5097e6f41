// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Service layout resolution.
//!
//! The services convention places generated artifacts in fixed sibling
//! directories of the service definition: given
//! `.../services/<service>/<pkg>.proto`, the binding module lands in
//! `.../services/proto/`, the server scaffold in `.../services/server/`,
//! and the client scaffold plus its tests in `.../services/client/`.

use camino::{Utf8Path, Utf8PathBuf};
use miette::Result;

/// Everything the driver derives from the interface file path: the package
/// identifier and the full destination path of each artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Package identifier, the proto file's stem.
    pub package: String,
    /// Destination of the rewritten binding artifact (`proto/<pkg>.pb.go`).
    pub binding_file: Utf8PathBuf,
    /// Destination of the server scaffold (`server/main.go`).
    pub server_file: Utf8PathBuf,
    /// Destination of the client scaffold (`client/client.go`).
    pub client_file: Utf8PathBuf,
    /// Destination of the test scaffold (`client/client_test.go`).
    pub client_test_file: Utf8PathBuf,
}

/// Resolve the artifact layout from the interface file path.
///
/// # Errors
///
/// Returns an error if the path does not name a `.proto` file, if the
/// package stem is not a usable identifier, or if the file does not live
/// inside a service directory (there is no grandparent to anchor the
/// sibling layout to).
pub fn resolve(proto_file: &Utf8Path) -> Result<Layout> {
    if proto_file.extension() != Some("proto") {
        miette::bail!("File '{proto_file}' is not a .proto file");
    }

    let package = proto_file
        .file_stem()
        .ok_or_else(|| miette::miette!("File '{proto_file}' has no name"))?;

    // The package identifier names Go types in the generated artifacts
    if package.is_empty() || !package.chars().all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        miette::bail!(
            "Invalid package name '{package}': must contain only alphanumeric characters and underscores"
        );
    }

    let root = proto_file
        .parent()
        .and_then(Utf8Path::parent)
        .ok_or_else(|| {
            miette::miette!(
                "Proto file '{proto_file}' must live inside a service directory, e.g. services/{package}/{package}.proto"
            )
        })?;

    Ok(Layout {
        package: package.to_string(),
        binding_file: root.join("proto").join(format!("{package}.pb.go")),
        server_file: root.join("server").join("main.go"),
        client_file: root.join("client").join("client.go"),
        client_test_file: root.join("client").join("client_test.go"),
    })
}
