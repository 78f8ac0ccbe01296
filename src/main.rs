//! Unit Converter (unitconv)
//!
//! An MCP server for category-based unit conversion.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use unitconv::ads::SkipAds;
use unitconv::build_info;
use unitconv::config::Config;
use unitconv::mcp::ConverterService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");
    tracing::info!(history_capacity = config.history_capacity, "configuration loaded");

    let service = ConverterService::new(config.history_capacity, Arc::new(SkipAds));

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
