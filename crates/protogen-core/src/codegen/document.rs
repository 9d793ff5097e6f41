// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Document tree for Go scaffold emission.
//!
//! Template functions return composable `Document` values instead of
//! concatenating strings; a final rendering pass handles indentation.
//! Go is tab-indented and the scaffolds have fixed formatting, so the
//! renderer is deliberately simple: no line-width fitting, one `\t` per
//! nesting level, and indentation is only flushed ahead of content so
//! blank lines inside nested blocks stay empty.
//!
//! # Example
//!
//! ```
//! use protogen_core::codegen::document::{line, nest};
//! use protogen_core::docvec;
//!
//! let doc = docvec!["func main() {", nest(1, docvec![line(), "return"]), line(), "}"];
//! assert_eq!(doc.to_source(), "func main() {\n\treturn\n}");
//! ```

/// A renderable document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document<'a> {
    /// A borrowed string literal.
    Str(&'a str),
    /// An owned string.
    String(String),
    /// A newline; the current indentation is applied ahead of the next
    /// content on the line.
    Line,
    /// Increase indentation (in tab stops) for the inner document.
    Nest(isize, Box<Document<'a>>),
    /// A sequence of documents.
    Vec(Vec<Document<'a>>),
    /// Empty document.
    Nil,
}

/// Coerce a value into a `Document`.
pub trait Documentable<'a> {
    fn to_doc(self) -> Document<'a>;
}

impl<'a> Documentable<'a> for &'a str {
    fn to_doc(self) -> Document<'a> {
        Document::Str(self)
    }
}

impl<'a> Documentable<'a> for String {
    fn to_doc(self) -> Document<'a> {
        Document::String(self)
    }
}

impl<'a> Documentable<'a> for Document<'a> {
    fn to_doc(self) -> Document<'a> {
        self
    }
}

impl<'a> Documentable<'a> for Vec<Document<'a>> {
    fn to_doc(self) -> Document<'a> {
        Document::Vec(self)
    }
}

/// Joins multiple documents together in a vector.
///
/// Each element is converted to a `Document` via the `Documentable` trait.
/// Documents are concatenated directly — no separator is inserted.
#[macro_export]
macro_rules! docvec {
    () => {
        $crate::codegen::document::Document::Vec(Vec::new())
    };

    ($first:expr $(,)?) => {
        $crate::codegen::document::Document::Vec(
            vec![$crate::codegen::document::Documentable::to_doc($first)]
        )
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        match $crate::codegen::document::Documentable::to_doc($first) {
            $crate::codegen::document::Document::Vec(mut vec) => {
                $(
                    vec.push($crate::codegen::document::Documentable::to_doc($rest));
                )*
                $crate::codegen::document::Document::Vec(vec)
            },
            first => {
                $crate::codegen::document::Document::Vec(
                    vec![first, $($crate::codegen::document::Documentable::to_doc($rest)),+]
                )
            }
        }
    };
}

/// Creates a `Line` document — a newline with deferred indentation.
#[must_use]
pub fn line() -> Document<'static> {
    Document::Line
}

/// Creates a `Nil` document — an empty document.
#[must_use]
pub fn nil() -> Document<'static> {
    Document::Nil
}

/// Creates a `Nest` document — indents the inner document by `tabs` stops.
#[must_use]
pub fn nest(tabs: isize, doc: Document<'_>) -> Document<'_> {
    Document::Nest(tabs, Box::new(doc))
}

/// Joins documents with a separator between each pair.
#[must_use]
pub fn join<'a>(
    docs: impl IntoIterator<Item = Document<'a>>,
    separator: &Document<'a>,
) -> Document<'a> {
    let docs: Vec<_> = docs.into_iter().collect();
    if docs.is_empty() {
        return Document::Nil;
    }
    let mut result = Vec::with_capacity(docs.len() * 2 - 1);
    let mut first = true;
    for doc in docs {
        if !first {
            result.push(separator.clone());
        }
        result.push(doc);
        first = false;
    }
    Document::Vec(result)
}

/// Concatenates documents without any separator.
#[must_use]
pub fn concat<'a>(docs: impl IntoIterator<Item = Document<'a>>) -> Document<'a> {
    Document::Vec(docs.into_iter().collect())
}

// --- Rendering ---

#[derive(Debug, Default)]
struct Renderer {
    output: String,
    /// Tab stops owed to the current line, written ahead of its first
    /// content. Blank lines never receive indentation this way.
    pending_indent: isize,
}

impl Renderer {
    fn push_content(&mut self, content: &str) {
        if content.is_empty() {
            return;
        }
        for _ in 0..self.pending_indent {
            self.output.push('\t');
        }
        self.pending_indent = 0;
        self.output.push_str(content);
    }

    fn render(&mut self, doc: &Document<'_>, indent: isize) {
        match doc {
            Document::Str(s) => self.push_content(s),
            Document::String(s) => self.push_content(s),
            Document::Nil => {}
            Document::Line => {
                self.output.push('\n');
                self.pending_indent = indent;
            }
            Document::Nest(extra, doc) => self.render(doc, indent + extra),
            Document::Vec(docs) => {
                for doc in docs {
                    self.render(doc, indent);
                }
            }
        }
    }
}

impl Document<'_> {
    /// Renders the document to Go source text.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut renderer = Renderer::default();
        renderer.render(self, 0);
        renderer.output
    }
}
