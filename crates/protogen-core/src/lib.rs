// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Protogen scaffold generator core.
//!
//! This crate contains the pure half of the generator:
//! - Method extraction (line-oriented `.proto` scanning)
//! - Binding rewrite (import path patching in generated `.pb.go` text)
//! - Template synthesis (server, client, and test scaffold emission)
//!
//! Everything here is a function of its inputs: no filesystem access,
//! no subprocesses, no shared state between invocations. The CLI crate
//! owns the impure edges.

pub mod codegen;
pub mod extract;
pub mod rewrite;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::extract::{Extraction, ImportRewriteRule, Method};
}
