//! MCP server module
//!
//! Exposes the converter over the Model Context Protocol.

mod server;

pub use server::ConverterService;
