//! Converter Tools module
//!
//! MCP tool implementations for the unit converter.

pub mod catalog;
pub mod convert;
pub mod history;
pub mod session;
pub mod status;
