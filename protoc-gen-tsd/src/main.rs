#![forbid(unsafe_code)]

use protoc_gen_tsd::PluginError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PluginError> {
    // stdout carries the protoc response
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("PROTOC_GEN_TSD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    protoc_gen_tsd::run()
}
