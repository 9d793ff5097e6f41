// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Server scaffold generation.
//!
//! Emits `server/main.go`: a listener bootstrap bound to the default port,
//! service registration, and one handler per extracted method. Each handler
//! runs its work in a goroutine and races completion against caller
//! cancellation. The pattern is repeated per method rather than factored
//! into a shared helper so every handler stays independently editable after
//! generation.

use super::document::{Document, line, nest};
use super::{DEFAULT_PORT, imports, lowercase_first, owned, proto_import, uppercase_first};
use crate::docvec;
use crate::extract::Method;

/// Generate the server artifact for `package` and its methods.
#[must_use]
pub fn generate(package: &str, methods: &[Method]) -> String {
    let service = uppercase_first(package);

    let std_group = owned(&["log", "net", "os"]);
    let proto_group = vec![proto_import(package)];
    let grpc_group = if methods.is_empty() {
        owned(&["google.golang.org/grpc"])
    } else {
        owned(&[
            "golang.org/x/net/context",
            "google.golang.org/grpc",
            "google.golang.org/grpc/codes",
            "google.golang.org/grpc/status",
        ])
    };

    let mut doc = docvec![
        "package main",
        line(),
        line(),
        imports(&[&std_group, &proto_group, &grpc_group]),
        line(),
        line(),
        "var (",
        nest(
            1,
            docvec![line(), format!("port string = \"{DEFAULT_PORT}\"")]
        ),
        line(),
        ")",
        line(),
        line(),
        main_function(package, &service),
        line(),
        line(),
        format!("type {package}Server struct{{}}"),
    ];

    for method in methods {
        doc = docvec![
            doc,
            line(),
            line(),
            result_holder(method),
            line(),
            line(),
            handler(package, method),
        ];
    }

    doc = docvec![doc, line()];
    doc.to_source()
}

fn main_function(package: &str, service: &str) -> Document<'static> {
    docvec![
        "func main() {",
        nest(
            1,
            docvec![
                line(),
                "// Accept incoming requests on the default port",
                line(),
                "listener, err := net.Listen(\"tcp\", \":\"+port)",
                line(),
                "if err != nil {",
                nest(1, docvec![line(), "os.Exit(1)"]),
                line(),
                "}",
                line(),
                line(),
                "// Register the service implementation with a fresh gRPC server",
                line(),
                "server := grpc.NewServer()",
                line(),
                format!("proto.Register{service}Server(server, new({package}Server))"),
                line(),
                line(),
                "log.Println(\"Serving on\", port)",
                line(),
                "log.Fatalln(server.Serve(listener))",
            ]
        ),
        line(),
        "}"
    ]
}

/// The per-method response-or-error pair the handler's goroutine delivers.
fn result_holder(method: &Method) -> Document<'static> {
    let holder = lowercase_first(&method.name);
    docvec![
        format!("type {holder}Response struct {{"),
        nest(
            1,
            docvec![
                line(),
                format!("res *proto.{}", method.response),
                line(),
                "err error",
            ]
        ),
        line(),
        "}"
    ]
}

/// A handler that races its goroutine against caller cancellation. When
/// the context wins, the in-flight work is left to finish on its own and
/// the caller gets a Canceled status.
fn handler(package: &str, method: &Method) -> Document<'static> {
    let holder = lowercase_first(&method.name);
    let name = method.name.as_str();
    docvec![
        format!(
            "func (s *{package}Server) {name}(ctx context.Context, req *proto.{}) (*proto.{}, error) {{",
            method.request, method.response
        ),
        nest(
            1,
            docvec![
                line(),
                format!("c := make(chan *{holder}Response)"),
                line(),
                format!("go func(req *proto.{}) {{", method.request),
                nest(
                    1,
                    docvec![
                        line(),
                        format!("resp := new({holder}Response)"),
                        line(),
                        line(),
                        format!("// Build resp.res and resp.err for {name} here"),
                        line(),
                        line(),
                        "c <- resp",
                    ]
                ),
                line(),
                "}(req)",
                line(),
                line(),
                "select {",
                line(),
                "case <-ctx.Done():",
                nest(
                    1,
                    docvec![
                        line(),
                        format!("return nil, status.Error(codes.Canceled, \"{name} canceled\")"),
                    ]
                ),
                line(),
                "case result := <-c:",
                nest(1, docvec![line(), "return result.res, result.err"]),
                line(),
                "}",
            ]
        ),
        line(),
        "}"
    ]
}
