//! MCP server: tool handlers and their request/response types.

pub mod tools;
pub mod types;
