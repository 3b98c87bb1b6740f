//! Reads a raw header block from stdin and prints the recognized security headers as
//! JSON.
//!
//! ```text
//! curl -sI https://www.google.com | cargo run --example inspect
//! curl -sI https://www.google.com | cargo run --example inspect -- --lenient
//! ```

use std::error::Error;
use std::io::{self, Read};

use micro_security_headers::parser::{HeaderParser, MalformedPolicy};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).with_writer(io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let policy = if std::env::args().any(|arg| arg == "--lenient") { MalformedPolicy::Skip } else { MalformedPolicy::Reject };
    let parser = HeaderParser::builder().malformed_policy(policy).build();

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    info!(bytes = raw.len(), ?policy, "read header block");

    match parser.parse(&raw) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            error!(cause = %e, "failed to parse header block");
            Err(e.into())
        }
    }
}
