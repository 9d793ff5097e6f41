// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Import path rewriting for generated binding artifacts.
//!
//! The interface compiler emits flat imports of the form
//! `common "common/proto"`; inside the services layout those modules live
//! under `services/<pkg>/proto`. This pass patches the generated text with
//! one first-occurrence literal replacement per rule.

use crate::extract::ImportRewriteRule;

/// Apply each rule, in extraction order, as a single first-occurrence
/// substring replacement.
///
/// A rule whose original pattern is absent from the binding text is a
/// no-op: not every declared import surfaces verbatim in the generated
/// artifact.
#[must_use]
pub fn rewrite(binding: &str, rules: &[ImportRewriteRule]) -> String {
    let mut contents = binding.to_string();
    for rule in rules {
        contents = contents.replacen(&rule.original, &rule.rewritten, 1);
    }
    contents
}
