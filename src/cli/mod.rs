use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Target Args ---
    /// Base URL of the AgentFlow API (e.g., http://localhost:8080/api)
    #[arg(long, env = "AGENTFLOW_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Optional per-request timeout in seconds. Unset means requests wait indefinitely.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    // --- Scenario Args ---
    /// Also run the stateless /generate check (skipped by default for speed)
    #[arg(long, env = "RUN_STATELESS", default_value = "false")]
    pub stateless: bool,

    /// Skip the multi-turn conversation memory check
    #[arg(long, env = "SKIP_MEMORY", default_value = "false")]
    pub skip_memory: bool,

    /// Delete the conversation created by the memory check once it finishes
    #[arg(long, env = "CLEANUP_CONVERSATION", default_value = "false")]
    pub cleanup: bool,
}

impl Args {
    /// False when `--skip-memory` is given without `--stateless`.
    pub fn runs_any_check(&self) -> bool {
        self.stateless || !self.skip_memory
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            stateless: false,
            skip_memory: false,
            cleanup: false,
        }
    }
}
