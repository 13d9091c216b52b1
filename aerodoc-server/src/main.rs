//! aerodoc-server: MCP server for the aerodoc adapters
//!
//! Exposes two adapters over MCP:
//!   - weather:   get_alerts, get_forecast, geocode_location, get_aviation_weather
//!   - documents: Read PDF Document, Read DOCX Document, Debug PDF prompt
//!
//! Transports:
//!   aerodoc-server                          # stdio (default)
//!   aerodoc-server --http 0.0.0.0:3001      # HTTP JSON-RPC
//!   aerodoc-server --adapter weather        # weather tools only

use aerodoc_mcp::transport::{HttpTransport, StdioTransport, Transport};
use aerodoc_mcp::{McpServer, McpServerConfig, PromptRegistry, ToolRegistry};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const INSTRUCTIONS: &str =
    "Tools for US weather alerts and forecasts, geocoding, aviation METAR/TAF data, \
     and reading PDF/DOCX documents into markdown.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Adapter {
    Weather,
    Documents,
    All,
}

#[derive(Parser)]
#[command(name = "aerodoc-server")]
#[command(about = "MCP server exposing weather and document tools")]
struct Cli {
    /// Which adapter's tools to register
    #[arg(long, short, value_enum, default_value_t = Adapter::All)]
    adapter: Adapter,

    /// Run stdio transport (default if no network transport specified)
    #[arg(long)]
    stdio: bool,

    /// Run HTTP transport on specified address
    #[arg(long, value_name = "ADDR")]
    http: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Server name override
    #[arg(long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so the stdio transport owns stdout.
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let tools = Arc::new(ToolRegistry::new());
    let mut prompts = PromptRegistry::new();

    if matches!(cli.adapter, Adapter::Weather | Adapter::All) {
        let weather = Arc::new(aerodoc_weather::WeatherService::from_env());
        let count = aerodoc_weather::tools::register_all(&tools, weather).await?;
        info!(count, "Registered weather tools");
    }

    if matches!(cli.adapter, Adapter::Documents | Adapter::All) {
        let documents = Arc::new(aerodoc_docs::DocumentService::new());
        let count = aerodoc_docs::tools::register_all(&tools, documents).await?;
        prompts.register(Arc::new(aerodoc_docs::prompts::DebugPdfPrompt));
        info!(count, "Registered document tools");
    }

    let config = McpServerConfig {
        name: cli.name,
        instructions: Some(INSTRUCTIONS.to_string()),
        ..Default::default()
    };
    let server = Arc::new(McpServer::new(config, tools.clone(), prompts));
    info!(tools = tools.count().await, "aerodoc MCP server initialized");

    let run_stdio = cli.stdio || cli.http.is_none();
    let mut handles = Vec::new();

    if let Some(addr) = cli.http {
        let server = server.clone();
        handles.push(tokio::spawn(async move {
            info!(addr = %addr, "Starting HTTP transport");
            HttpTransport::new(addr).serve(server).await
        }));
    }

    // Stdio blocks the main task when enabled.
    if run_stdio {
        info!("Starting stdio transport");
        StdioTransport::new().serve(server).await?;
    } else {
        for handle in handles {
            handle.await??;
        }
    }

    Ok(())
}
