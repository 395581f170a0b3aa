#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point for the tick surveillance map server.
//!
//! Runs with environment configuration by default; pass `--interactive` to
//! be prompted for the bind address, port, and default county instead.

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if std::env::args().any(|arg| arg == "--interactive") {
        tick_map_server::interactive::run().await
    } else {
        tick_map_server::run_server().await
    }
}
