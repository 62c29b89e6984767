//! # Postboard CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination. Everything the
//! CLI calls into is the `postboard` library, which knows nothing about the
//! terminal.
//!
//! Logs go to stderr through `tracing-subscriber`; `RUST_LOG` overrides the
//! level picked by `-v`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
