//! jira-query-mcp: MCP server exposing Jira issue fetch, create, templated
//! create, and comment tools over stdio.

mod registry;
mod server;
mod template;
mod tools;
mod types;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use jira_query_client::{JiraConfig, create_jira_client};
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use crate::server::JiraMcpServer;

#[derive(Parser)]
#[command(version, about = "MCP server for Jira issue lookup, creation, and commenting")]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // Tracing to stderr — stdout is reserved for MCP JSON-RPC protocol.
  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  let config = JiraConfig::from_env().context("Failed to resolve Jira configuration")?;
  // An unsupported proxy scheme aborts here, before the transport starts.
  let client = create_jira_client(config).context("Failed to create Jira client")?;
  let server = JiraMcpServer::new(client);

  // Start MCP server on stdio
  let service = server.serve(rmcp::transport::io::stdio()).await?;
  service.waiting().await?;

  Ok(())
}
