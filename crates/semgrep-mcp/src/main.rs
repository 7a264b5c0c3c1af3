//! semgrep-mcp: Semgrep static analysis as an MCP server.
//!
//! This binary serves as an MCP (Model Context Protocol) server that lets an
//! agent list Semgrep rule configs and run scans. It communicates via stdio
//! transport.

mod cli;
mod server;

use clap::Parser;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use server::tools::SemgrepServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize tracing (logs to stderr so stdout stays clean for MCP)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        "semgrep-mcp starting (configs: {})",
        cli.configs.display()
    );

    let service = SemgrepServer::new(cli.configs)
        .with_semgrep_bin(cli.semgrep_bin)
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("Server error: {}", e))?;

    tracing::info!("semgrep-mcp running on stdio");
    service.waiting().await?;

    tracing::info!("semgrep-mcp shutting down");
    Ok(())
}
