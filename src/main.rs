//! neuro-dashboard CLI
//!
//! Serves the patient performance dashboard, or prints the chart figures
//! for a selection given on the command line.
//!
//! Usage:
//!   neuro-dashboard [OPTIONS]

use std::io::{Write, stdout};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use neuro_dashboard::{
    DashboardConfig, Selection, load_config,
    config::load_config_file,
    project,
    web::{ServerConfig, start_server},
};

/// neuro-dashboard - Neuropsychological test results at a glance
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// IP address or hostname to bind (default: 127.0.0.1, or the config file value)
    #[arg(long)]
    host: Option<String>,

    /// Port for the web server (default: 8050, or the config file value)
    #[arg(short, long)]
    port: Option<u16>,

    /// Don't open the browser automatically
    #[arg(long)]
    no_open: bool,

    /// API endpoint URL for the frontend (useful for separate deployments)
    #[arg(long)]
    api_endpoint: Option<String>,

    /// Config file path (default: search for dashboard.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the chart figures as JSON instead of starting the server
    #[arg(long)]
    print: bool,

    /// Assign a level to a test for --print, e.g. `abfw=superior` (repeatable)
    #[arg(long = "set", value_name = "TEST=LEVEL", requires = "print")]
    assignments: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config: DashboardConfig = match &args.config {
        Some(path) => load_config_file(path)?,
        None => load_config(&std::env::current_dir()?)?,
    };

    if args.print {
        let mut selection = Selection::default();
        for assignment in &args.assignments {
            let (test, level) = selection.apply_assignment(assignment)?;
            tracing::debug!(test = test.key(), %level, "assigned");
        }

        let charts = project(&selection, &config.display.chart_labels());
        let mut out = stdout().lock();
        serde_json::to_writer_pretty(&mut out, &charts)?;
        writeln!(out)?;
        return Ok(());
    }

    // CLI args override config, which overrides defaults
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.api_endpoint.is_some() {
        config.server.api_endpoint = args.api_endpoint;
    }

    let server_config = ServerConfig {
        addr: config.server.socket_addr()?,
        open_browser: config.server.open_browser && !args.no_open,
        api_endpoint: config.server.api_endpoint.clone(),
    };

    tracing::debug!(addr = %server_config.addr, "server configuration resolved");

    // Interactions are serialized, a single thread is enough
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(start_server(config.display, server_config))
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;

    Ok(())
}
