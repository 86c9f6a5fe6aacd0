//! Lesson 10: API Design
//! A single JSON endpoint
//!
//! Run with: cargo run --bin lesson_10_hello_server
//! Then: curl http://localhost:8080/hello
//!
//! Set HELLO_CONFIG to a TOML file to change `addr` or `greeting`.

use afternoon_lessons::api;
use afternoon_lessons::config::ServerConfig;
use afternoon_lessons::telemetry::init_logging;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(std::env::var_os("VERBOSE").is_some());

    let config = ServerConfig::from_env()?;
    if let Err(e) = api::run(config).await {
        error!("{}", e);
        return Err(e.into());
    }
    Ok(())
}
