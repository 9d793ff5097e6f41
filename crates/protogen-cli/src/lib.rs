// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Protogen command-line crate.
//!
//! The impure half of the generator: layout resolution, scaffold
//! materialization, toolchain subprocess integration, and the driver that
//! wires them to the pure `protogen-core` pipeline. Exposed as a library
//! so the end-to-end tests exercise the same code path as the binary.

pub mod generate;
pub mod layout;
pub mod scaffold;
pub mod toolchain;
