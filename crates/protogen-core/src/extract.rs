// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Method extraction from `.proto` service definitions.
//!
//! This is a line-oriented scan, not a grammar: it recovers the ordered
//! list of `rpc` declarations and the cross-file imports from a service
//! definition without building an AST. Message bodies, options, comments,
//! and braces are ignored. Multi-line declarations are out of scope.
//!
//! The scanner uses error recovery: a line that mentions `rpc` but does
//! not shape up as a single-line declaration is skipped and reported as
//! an [`ExtractWarning`] rather than aborting the run.

use std::sync::LazyLock;

use ecow::EcoString;
use miette::Diagnostic;
use regex::Regex;
use thiserror::Error;

/// Matches a well-formed single-line declaration of the form
/// `rpc Name(Request) returns (Response)`, tolerating extra whitespace
/// and optional `stream` qualifiers on either message type.
static RPC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\brpc\s+(\w+)\s*\(\s*(?:stream\s+)?([A-Za-z_][\w.]*)\s*\)\s*returns\s*\(\s*(?:stream\s+)?([A-Za-z_][\w.]*)\s*\)",
    )
    .expect("rpc declaration regex is valid")
});

/// Matches the `rpc` keyword on its own, used to flag declaration lines
/// the full pattern could not make sense of.
static RPC_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brpc\b").expect("rpc keyword regex is valid"));

/// Matches an import of another interface file, e.g. `import "common.proto";`
/// or `import public "pkg/common.proto";`.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s+(?:public\s+|weak\s+)?"([^"]+)\.proto""#)
        .expect("import regex is valid")
});

/// One remote procedure declared in the interface file.
///
/// All three fields are non-empty by construction: the extractor only
/// emits a `Method` when the whole declaration matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Method name, declared case preserved.
    pub name: EcoString,
    /// Input message type.
    pub request: EcoString,
    /// Output message type.
    pub response: EcoString,
}

/// A literal substring replacement to apply against the generated binding
/// artifact, mapping a flat generated import to its in-project path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRewriteRule {
    /// Identifier of the imported package (last path segment, extension
    /// stripped).
    pub package: EcoString,
    /// The import as the interface compiler emits it, e.g.
    /// `common "common/proto"`.
    pub original: String,
    /// The import as it must read inside the services layout, e.g.
    /// `common "services/common/proto"`.
    pub rewritten: String,
}

impl ImportRewriteRule {
    fn for_package(package: &str) -> Self {
        Self {
            package: package.into(),
            original: format!("{package} \"{package}/proto\""),
            rewritten: format!("{package} \"services/{package}/proto\""),
        }
    }
}

/// A declaration line the scanner recognized but could not extract.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("line {line}: skipping malformed rpc declaration: {text}")]
#[diagnostic(help("expected a single-line `rpc Name(Request) returns (Response);` declaration"))]
pub struct ExtractWarning {
    /// 1-based line number in the interface file.
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
}

/// Everything one scan of an interface file recovers.
///
/// Method order is declaration order; it drives section order in the
/// generated artifacts, so it is semantically meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Remote methods, in declaration order.
    pub methods: Vec<Method>,
    /// One rewrite rule per cross-file import, in declaration order.
    pub imports: Vec<ImportRewriteRule>,
    /// Declaration lines that were skipped as malformed.
    pub warnings: Vec<ExtractWarning>,
}

/// Scan an interface file and recover its methods and imports.
///
/// Never fails: malformed declaration lines are recorded in
/// [`Extraction::warnings`] and otherwise skipped.
#[must_use]
pub fn extract(source: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();

        if let Some(captures) = IMPORT_RE.captures(line) {
            let path = &captures[1];
            let package = path.rsplit('/').next().unwrap_or(path);
            extraction
                .imports
                .push(ImportRewriteRule::for_package(package));
        } else if let Some(captures) = RPC_RE.captures(line) {
            extraction.methods.push(Method {
                name: captures[1].into(),
                request: captures[2].into(),
                response: captures[3].into(),
            });
        } else if RPC_KEYWORD_RE.is_match(line) {
            extraction.warnings.push(ExtractWarning {
                line: index + 1,
                text: line.to_string(),
            });
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_declaration() {
        let extraction = extract("rpc SayHello(HelloRequest) returns (HelloResponse);");
        assert_eq!(
            extraction.methods,
            vec![Method {
                name: "SayHello".into(),
                request: "HelloRequest".into(),
                response: "HelloResponse".into(),
            }]
        );
        assert!(extraction.imports.is_empty());
        assert!(extraction.warnings.is_empty());
    }

    #[test]
    fn preserves_declaration_order() {
        let source = r#"
syntax = "proto3";

service Store {
    rpc Get(GetRequest) returns (GetResponse);
    rpc Put(PutRequest) returns (PutResponse);
    rpc Delete(DeleteRequest) returns (DeleteResponse);
}
"#;
        let extraction = extract(source);
        let names: Vec<&str> = extraction.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Get", "Put", "Delete"]);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let extraction = extract("  rpc   SayHello  ( HelloRequest )   returns   ( HelloResponse ) ;");
        assert_eq!(extraction.methods.len(), 1);
        assert_eq!(extraction.methods[0].name, "SayHello");
        assert_eq!(extraction.methods[0].request, "HelloRequest");
        assert_eq!(extraction.methods[0].response, "HelloResponse");
    }

    #[test]
    fn tolerates_stream_qualifiers() {
        let extraction = extract("rpc Watch(stream WatchRequest) returns (stream WatchResponse);");
        assert_eq!(
            extraction.methods,
            vec![Method {
                name: "Watch".into(),
                request: "WatchRequest".into(),
                response: "WatchResponse".into(),
            }]
        );
    }

    #[test]
    fn malformed_declaration_becomes_warning() {
        let source = "service S {\n    rpc Broken(Request returns Response;\n}\n";
        let extraction = extract(source);
        assert!(extraction.methods.is_empty());
        assert_eq!(extraction.warnings.len(), 1);
        assert_eq!(extraction.warnings[0].line, 2);
        assert!(extraction.warnings[0].text.contains("Broken"));
    }

    #[test]
    fn multi_line_declaration_is_skipped_with_warning() {
        // The opening line mentions rpc but carries no complete declaration.
        let source = "rpc SayHello(HelloRequest)\n    returns (HelloResponse);\n";
        let extraction = extract(source);
        assert!(extraction.methods.is_empty());
        assert_eq!(extraction.warnings.len(), 1);
        assert_eq!(extraction.warnings[0].line, 1);
    }

    #[test]
    fn import_produces_rewrite_rule() {
        let extraction = extract("import \"common.proto\";");
        assert_eq!(extraction.imports.len(), 1);
        let rule = &extraction.imports[0];
        assert_eq!(rule.package, "common");
        assert_eq!(rule.original, "common \"common/proto\"");
        assert_eq!(rule.rewritten, "common \"services/common/proto\"");
    }

    #[test]
    fn import_package_is_last_path_segment() {
        let extraction = extract("import \"shared/types/money.proto\";");
        assert_eq!(extraction.imports.len(), 1);
        assert_eq!(extraction.imports[0].package, "money");
    }

    #[test]
    fn public_import_is_recognized() {
        let extraction = extract("import public \"common.proto\";");
        assert_eq!(extraction.imports.len(), 1);
        assert_eq!(extraction.imports[0].package, "common");
    }

    #[test]
    fn empty_input_extracts_nothing() {
        let extraction = extract("");
        assert_eq!(extraction, Extraction::default());
    }

    #[test]
    fn unrelated_lines_are_ignored() {
        let source = r#"
syntax = "proto3";

package greeter;

message HelloRequest {
    string name = 1;
}
"#;
        let extraction = extract(source);
        assert_eq!(extraction, Extraction::default());
    }

    #[test]
    fn scenario_greeter() {
        let source = r#"
syntax = "proto3";

import "common.proto";

service Greeter {
    rpc SayHello(HelloRequest) returns (HelloResponse);
}
"#;
        let extraction = extract(source);
        assert_eq!(extraction.methods.len(), 1);
        assert_eq!(extraction.methods[0].name, "SayHello");
        assert_eq!(extraction.imports.len(), 1);
        assert_eq!(
            extraction.imports[0].original,
            "common \"common/proto\""
        );
        assert!(extraction.warnings.is_empty());
    }
}
