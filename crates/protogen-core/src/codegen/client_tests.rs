// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Test scaffold generation.
//!
//! Emits `client/client_test.go`: a fake implementation of the generated
//! client interface (one zero-value stub per method), a construction test
//! for `NewClient`, and one wrapper test per method exercised against the
//! fake.

use super::document::{Document, line, nest};
use super::{imports, owned, proto_import, uppercase_first};
use crate::docvec;
use crate::extract::Method;

/// Generate the test artifact for `package` and its methods.
#[must_use]
pub fn generate(package: &str, methods: &[Method]) -> String {
    let service = uppercase_first(package);

    let std_group = owned(&["testing"]);
    let (proto_group, grpc_group) = if methods.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        (
            vec![proto_import(package)],
            owned(&["golang.org/x/net/context", "google.golang.org/grpc"]),
        )
    };

    let mut doc = docvec![
        "package client",
        line(),
        line(),
        imports(&[&std_group, &proto_group, &grpc_group]),
        line(),
        line(),
        format!("// fake{service}Client is an in-memory stand-in for the generated"),
        line(),
        format!("// {service}Client interface."),
        line(),
        format!("type fake{service}Client struct{{}}"),
    ];

    for method in methods {
        doc = docvec![doc, line(), line(), stub(&service, method)];
    }

    doc = docvec![doc, line(), line(), new_client_test()];

    for method in methods {
        doc = docvec![doc, line(), line(), wrapper_test(&service, method)];
    }

    doc = docvec![doc, line()];
    doc.to_source()
}

/// A stub returning a zero-valued response and no error.
fn stub(service: &str, method: &Method) -> Document<'static> {
    docvec![
        format!(
            "func (f *fake{service}Client) {}(ctx context.Context, req *proto.{}, opts ...grpc.CallOption) (*proto.{}, error) {{",
            method.name, method.request, method.response
        ),
        nest(
            1,
            docvec![line(), format!("return &proto.{}{{}}, nil", method.response)]
        ),
        line(),
        "}"
    ]
}

fn new_client_test() -> Document<'static> {
    docvec![
        "func TestNewClient(t *testing.T) {",
        nest(
            1,
            docvec![
                line(),
                "c, err := NewClient()",
                line(),
                "if err != nil {",
                nest(
                    1,
                    docvec![line(), "t.Fatalf(\"NewClient returned error: %v\", err)"]
                ),
                line(),
                "}",
                line(),
                "if c == nil {",
                nest(1, docvec![line(), "t.Fatal(\"NewClient returned nil client\")"]),
                line(),
                "}",
            ]
        ),
        line(),
        "}"
    ]
}

fn wrapper_test(service: &str, method: &Method) -> Document<'static> {
    let name = method.name.as_str();
    docvec![
        format!("func Test{name}(t *testing.T) {{"),
        nest(
            1,
            docvec![
                line(),
                format!(
                    "if _, err := {name}(new(fake{service}Client), context.Background()); err != nil {{"
                ),
                nest(
                    1,
                    docvec![line(), format!("t.Fatalf(\"{name} returned error: %v\", err)")]
                ),
                line(),
                "}",
            ]
        ),
        line(),
        "}"
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn say_hello() -> Method {
        Method {
            name: "SayHello".into(),
            request: "HelloRequest".into(),
            response: "HelloResponse".into(),
        }
    }

    #[test]
    fn fake_stub_per_method() {
        let source = generate("greeter", &[say_hello()]);
        assert!(source.starts_with("package client\n"));
        assert!(source.contains("type fakeGreeterClient struct{}"));
        assert!(source.contains(
            "func (f *fakeGreeterClient) SayHello(ctx context.Context, req *proto.HelloRequest, opts ...grpc.CallOption) (*proto.HelloResponse, error) {"
        ));
        assert!(source.contains("return &proto.HelloResponse{}, nil"));
    }

    #[test]
    fn construction_test_is_always_emitted() {
        let source = generate("greeter", &[say_hello()]);
        assert!(source.contains("func TestNewClient(t *testing.T) {"));
        assert!(source.contains("t.Fatal(\"NewClient returned nil client\")"));
    }

    #[test]
    fn wrapper_test_per_method() {
        let source = generate("greeter", &[say_hello()]);
        assert!(source.contains("func TestSayHello(t *testing.T) {"));
        assert!(source.contains("SayHello(new(fakeGreeterClient), context.Background())"));
    }

    #[test]
    fn empty_method_list_keeps_only_boilerplate() {
        let source = generate("greeter", &[]);
        assert!(source.contains("type fakeGreeterClient struct{}"));
        assert!(source.contains("func TestNewClient(t *testing.T) {"));
        assert!(!source.contains("context.Background()"));
        // The method-free test file needs nothing beyond the stdlib
        assert!(!source.contains("services/greeter/proto"));
        assert!(!source.contains("google.golang.org/grpc"));
    }

    #[test]
    fn output_is_deterministic() {
        let methods = vec![say_hello()];
        assert_eq!(generate("greeter", &methods), generate("greeter", &methods));
    }
}
