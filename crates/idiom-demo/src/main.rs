//! Catalog demonstration binary
//!
//! Runs every demonstration and prints the collected transcripts. Log
//! verbosity follows `RUST_LOG`; logging filters diagnostics only and
//! never changes the demonstrated behavior.

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let report = idiom_demo::run_all();
    print!("{}", report.render());
}
