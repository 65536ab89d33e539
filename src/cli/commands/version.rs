//! Version command implementation.

use serde::Serialize;

use crate::config::Context;
use crate::error::Result;

use super::print_json;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    record_schema: u32,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &Context) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    if ctx.json {
        return print_json(&VersionOutput {
            version,
            build,
            record_schema: kiwi_lib::record::SCHEMA_VERSION,
        });
    }

    println!("kiwi {version}");
    tracing::debug!(build, "version");
    Ok(())
}
