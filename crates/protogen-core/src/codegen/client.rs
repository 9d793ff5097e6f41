// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Client scaffold generation.
//!
//! Emits `client/client.go`: a construct-once shared connection and, per
//! method, a thin forwarding call plus a convenience wrapper. The wrapper
//! calls with an empty default request and normalizes an underlying
//! "no rows" condition to `ErrNotFound`.
//!
//! The generated singleton uses `sync.Once`: the dial happens exactly once
//! no matter how many goroutines race the first call, and the connection
//! is never re-dialed afterwards.

use super::document::{Document, line, nest};
use super::{DIAL_TARGET, DIAL_TIMEOUT_SECS, imports, owned, proto_import, uppercase_first};
use crate::docvec;
use crate::extract::Method;

/// Generate the client artifact for `package` and its methods.
#[must_use]
pub fn generate(package: &str, methods: &[Method]) -> String {
    let service = uppercase_first(package);

    let std_group = if methods.is_empty() {
        owned(&["errors", "sync", "time"])
    } else {
        owned(&["errors", "strings", "sync", "time"])
    };
    let proto_group = vec![proto_import(package)];
    let grpc_group = if methods.is_empty() {
        owned(&["google.golang.org/grpc"])
    } else {
        owned(&["golang.org/x/net/context", "google.golang.org/grpc"])
    };

    let mut doc = docvec![
        "package client",
        line(),
        line(),
        imports(&[&std_group, &proto_group, &grpc_group]),
        line(),
        line(),
        "// ErrNotFound is returned by the call wrappers when the service reports",
        line(),
        "// that no matching row exists.",
        line(),
        "var ErrNotFound = errors.New(\"not found\")",
        line(),
        line(),
        format!("// Client wraps the generated {package} service client."),
        line(),
        "type Client struct {",
        nest(1, docvec![line(), format!("service proto.{service}Client")]),
        line(),
        "}",
        line(),
        line(),
        "var (",
        nest(
            1,
            docvec![
                line(),
                "dialOnce sync.Once",
                line(),
                "shared   *Client",
                line(),
                "dialErr  error",
            ]
        ),
        line(),
        ")",
        line(),
        line(),
        new_client(package, &service),
    ];

    for method in methods {
        doc = docvec![
            doc,
            line(),
            line(),
            forwarding_method(&service, method),
            line(),
            line(),
            convenience_wrapper(&service, method),
        ];
    }

    doc = docvec![doc, line()];
    doc.to_source()
}

fn new_client(package: &str, service: &str) -> Document<'static> {
    docvec![
        format!("// NewClient connects to the {package} service and returns a client to be"),
        line(),
        "// used for calling methods against the service.",
        line(),
        "//",
        line(),
        "// The connection is dialed exactly once; concurrent and subsequent callers",
        line(),
        "// receive the same client without dialing again.",
        line(),
        "func NewClient() (*Client, error) {",
        nest(
            1,
            docvec![
                line(),
                "dialOnce.Do(func() {",
                nest(
                    1,
                    docvec![
                        line(),
                        format!(
                            "conn, err := grpc.Dial(\"{DIAL_TARGET}\", grpc.WithInsecure(), grpc.WithTimeout(time.Second*{DIAL_TIMEOUT_SECS}))"
                        ),
                        line(),
                        "if err != nil {",
                        nest(1, docvec![line(), "dialErr = err", line(), "return"]),
                        line(),
                        "}",
                        line(),
                        format!("shared = &Client{{service: proto.New{service}Client(conn)}}"),
                    ]
                ),
                line(),
                "})",
                line(),
                "return shared, dialErr",
            ]
        ),
        line(),
        "}"
    ]
}

fn forwarding_method(service: &str, method: &Method) -> Document<'static> {
    let name = method.name.as_str();
    docvec![
        format!("// {name} is this client's implementation of the {service}Client interface."),
        line(),
        format!(
            "func (c *Client) {name}(ctx context.Context, req *proto.{}, opts ...grpc.CallOption) (*proto.{}, error) {{",
            method.request, method.response
        ),
        nest(
            1,
            docvec![line(), format!("return c.service.{name}(ctx, req, opts...)")]
        ),
        line(),
        "}"
    ]
}

fn convenience_wrapper(service: &str, method: &Method) -> Document<'static> {
    let name = method.name.as_str();
    docvec![
        format!("// {name} calls the service with an empty request, normalizing a missing"),
        line(),
        "// row to ErrNotFound.",
        line(),
        format!(
            "func {name}(c proto.{service}Client, ctx context.Context) (*proto.{}, error) {{",
            method.response
        ),
        nest(
            1,
            docvec![
                line(),
                format!("r, err := c.{name}(ctx, &proto.{}{{}})", method.request),
                line(),
                "if err != nil {",
                nest(
                    1,
                    docvec![
                        line(),
                        "if strings.Contains(err.Error(), \"no rows\") {",
                        nest(1, docvec![line(), "return nil, ErrNotFound"]),
                        line(),
                        "}",
                        line(),
                        "return nil, err",
                    ]
                ),
                line(),
                "}",
                line(),
                line(),
                "return r, nil",
            ]
        ),
        line(),
        "}"
    ]
}
