// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Go scaffold synthesis.
//!
//! Three generators, one per artifact: [`server`], [`client`], and
//! [`client_tests`]. Each is a pure function of the package identifier and
//! the extracted method list, rendering a [`document::Document`] tree to
//! source text. For a fixed input the output is byte-identical across
//! runs — no timestamps, no random identifiers.

use self::document::{Document, line, nest};
use crate::docvec;

pub mod client;
pub mod client_tests;
pub mod document;
pub mod server;

/// Port the generated server listens on and the generated client dials.
pub const DEFAULT_PORT: &str = "8000";

/// Address the generated client dials.
pub const DIAL_TARGET: &str = "localhost:8000";

/// Dial timeout, in seconds, baked into the generated client.
pub const DIAL_TIMEOUT_SECS: u64 = 2;

/// In-project import path of the generated binding module.
#[must_use]
pub fn proto_import(package: &str) -> String {
    format!("services/{package}/proto")
}

/// Uppercase the first character, preserving the rest.
///
/// `greeter` becomes `Greeter` — used for the generated service and
/// client type names.
#[must_use]
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character, preserving the rest.
///
/// `SayHello` becomes `sayHello` — used for the per-method result-holder
/// type names.
#[must_use]
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render a Go `import (...)` block.
///
/// Each group becomes a blank-line-separated section; empty groups are
/// skipped. Paths are emitted in the given order, quoted.
fn imports(groups: &[&[String]]) -> Document<'static> {
    let mut body: Vec<Document<'static>> = Vec::new();
    let mut first = true;
    for group in groups.iter().filter(|g| !g.is_empty()) {
        if !first {
            body.push(line());
        }
        for path in *group {
            body.push(line());
            body.push(Document::String(format!("\"{path}\"")));
        }
        first = false;
    }
    docvec!["import (", nest(1, Document::Vec(body)), line(), ")"]
}

fn owned(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| (*p).to_string()).collect()
}
