//! Unit Converter Library
//!
//! Category-based unit conversion through a per-category base unit, plus the
//! session, history and MCP layers built on top of it.

pub mod ads;
pub mod build_info;
pub mod config;
pub mod conversion;
pub mod mcp;
pub mod models;
pub mod session;
pub mod tools;
