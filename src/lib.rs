pub mod benchmark;
pub mod cli;
pub mod client;
pub mod error;
pub mod models;
pub mod validation;

use benchmark::{ run_complex_memory_check, run_stateless_check, MemoryReport, StatelessReport };
use cli::Args;
use client::{ AgentApi, AgentFlowClient };
use error::BenchError;
use log::{ info, warn };
use std::io::Write;
use std::time::Duration;

/// Outcome of whichever checks the run was configured for.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub stateless: Option<StatelessReport>,
    pub memory: Option<MemoryReport>,
}

pub async fn run<W: Write>(args: &Args, out: &mut W) -> Result<RunReport, BenchError> {
    info!("--- Benchmark Configuration ---");
    info!("AgentFlow Base URL: {}", args.base_url);
    info!("Request Timeout: {}", match args.timeout_secs {
        Some(secs) => format!("{}s", secs),
        None => "none".to_string(),
    });
    info!("Stateless Check: {}", args.stateless);
    info!("Memory Check: {}", !args.skip_memory);
    info!("Cleanup Conversation: {}", args.cleanup);
    info!("-------------------------------");
    if !args.runs_any_check() {
        warn!("Both checks are disabled (--skip-memory without --stateless); nothing will be sent");
    }

    let client = AgentFlowClient::new(&args.base_url, args.timeout_secs.map(Duration::from_secs))?;
    let mut report = RunReport::default();

    if args.stateless {
        report.stateless = Some(run_stateless_check(&client, out).await?);
    }

    if !args.skip_memory {
        let memory = run_complex_memory_check(&client, out).await?;
        if args.cleanup {
            client.delete_conversation(&memory.conversation_id).await?;
            info!("Deleted conversation {}", memory.conversation_id);
        }
        report.memory = Some(memory);
    }

    out.flush()?;
    Ok(report)
}
