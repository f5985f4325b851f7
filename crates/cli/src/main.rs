use anyhow::Context;
use clap::{Parser, Subcommand};
use ferrous_resolver_domain::{CliOverrides, RecordType};
use std::future::Future;
use tracing::{error, info};

mod bootstrap;
mod demo;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-resolver")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Resolver - DNS query and root trace tool")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Resolver for direct queries (IP or IP:PORT)
    #[arg(long, value_name = "ADDR")]
    server: Option<String>,

    /// Per-query receive timeout; waits indefinitely when unset
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send one query to the configured resolver and print the packet
    Query {
        domain: String,

        /// Record type (A, AAAA, NS, CNAME, SOA, PTR, MX, TXT or TYPEnn)
        #[arg(default_value = "A")]
        record_type: RecordType,
    },

    /// Resolve iteratively from the root servers
    Trace {
        domain: String,

        #[arg(default_value = "A")]
        record_type: RecordType,
    },

    /// Run the built-in sequence of sample lookups
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        upstream: cli.server.clone(),
        query_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)
        .context("failed to load configuration")?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(&config);

    let services = di::DnsServices::new(&config).context("failed to build resolver")?;

    let outcome = match cli.command {
        Command::Query {
            domain,
            record_type,
        } => {
            until_interrupted(async {
                let message = services
                    .query
                    .execute(&domain, record_type)
                    .await
                    .with_context(|| format!("query for {} {} failed", domain, record_type))?;
                print!("{}", output::render_message(&message));
                Ok::<_, anyhow::Error>(())
            })
            .await
        }
        Command::Trace {
            domain,
            record_type,
        } => {
            until_interrupted(async {
                println!("Tracing DNS resolution for {} ({})...", domain, record_type);
                let result = services
                    .trace
                    .execute(&domain, record_type)
                    .await
                    .with_context(|| format!("trace for {} {} failed", domain, record_type))?;
                print!("{}", output::render_trace(&result));
                Ok::<_, anyhow::Error>(())
            })
            .await
        }
        Command::Demo => until_interrupted(demo::run(&services)).await,
    };

    if let Err(e) = &outcome {
        error!(error = %e, "Command failed");
    }
    outcome
}

/// Runs `task` to completion unless Ctrl-C arrives first, in which case the
/// task is dropped along with any in-flight socket.
async fn until_interrupted<F>(task: F) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
{
    tokio::select! {
        result = task => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, cancelling");
            anyhow::bail!("interrupted")
        }
    }
}
