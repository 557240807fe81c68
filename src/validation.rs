use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok { Verdict::Pass } else { Verdict::Fail }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// The agent was told to answer in JSON only. Callers pass the trimmed response.
pub fn follows_json_rule(response: &str) -> bool {
    response.starts_with('{') && response.ends_with('}')
}

/// Q1 revenue of $500,000 minus $350,000 expenses.
pub fn has_expected_profit(response: &str) -> bool {
    response.contains("150,000") || response.contains("150000")
}

pub fn format_latency(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}
