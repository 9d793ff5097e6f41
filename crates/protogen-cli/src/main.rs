// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Protogen command-line interface.
//!
//! This is the main entry point for the `protogen` command.

use camino::Utf8PathBuf;
use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

use protogen_cli::generate;
use protogen_cli::toolchain::Toolchain;

/// Protogen: scaffold gRPC service packages from .proto definitions
#[derive(Debug, Parser)]
#[command(name = "protogen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the service's .proto file
    proto_file: Option<Utf8PathBuf>,
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("protogen_cli=info,protogen_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(proto_file) = cli.proto_file else {
        miette::bail!("You must provide a path to the proto file");
    };

    let result = generate::generate(&proto_file, &Toolchain::new());

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
