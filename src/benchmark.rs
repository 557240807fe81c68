use log::{ debug, info };
use std::io::Write;
use std::time::{ Duration, Instant };

use crate::client::AgentApi;
use crate::error::BenchError;
use crate::validation::{ follows_json_rule, format_latency, has_expected_profit, Verdict };

pub const STATELESS_FACT: &str = "Hi, my name is Alex. Remember that.";
pub const STATELESS_QUESTION: &str = "What is my name?";

pub const ANALYST_SYSTEM_PROMPT: &str = "You are a financial analyst agent.";

/// Instruction and facts sent before the question, in order. Each pair is the
/// progress label printed before the message goes out.
pub const SETUP_TURNS: [(&str, &str); 3] = [
    (
        "Scenario 1: Strict Formatting Instruction",
        "From now on, only respond in valid JSON format. Start every response with '{'.",
    ),
    ("Scenario 2: Providing Data Point A", "The revenue for Q1 was $500,000."),
    ("Scenario 3: Providing Data Point B", "The expenses for Q1 were $350,000."),
];

/// The only timed and validated turn.
pub const SYNTHESIS_TURN: (&str, &str) = (
    "Scenario 4: Synthesis & Formatting Check",
    "What was the net profit for Q1? Remember the JSON formatting rule.",
);

#[derive(Debug, Clone)]
pub struct StatelessReport {
    pub first_response: String,
    pub second_response: String,
}

#[derive(Debug, Clone)]
pub struct MemoryReport {
    pub conversation_id: String,
    pub final_response: String,
    pub latency: Duration,
    pub json_rule: Verdict,
    pub profit: Verdict,
}

/// Shows that `/generate` keeps nothing between calls. No assertion is made.
pub async fn run_stateless_check<A, W>(api: &A, out: &mut W) -> Result<StatelessReport, BenchError>
    where A: AgentApi + ?Sized, W: Write
{
    writeln!(out, "\n--- Testing Stateless (Effectiveness) ---")?;

    let first = api.generate(STATELESS_FACT).await?;
    let first_response = first.response.trim().to_string();
    writeln!(out, "Turn 1 Response: {}", first_response)?;

    let second = api.generate(STATELESS_QUESTION).await?;
    let second_response = second.response.trim().to_string();
    writeln!(out, "Turn 2 Response: {}", second_response)?;

    Ok(StatelessReport { first_response, second_response })
}

/// Creates one conversation, feeds it an instruction and two facts, then checks
/// that the final answer both obeys the instruction and combines the facts.
pub async fn run_complex_memory_check<A, W>(
    api: &A,
    out: &mut W
) -> Result<MemoryReport, BenchError>
    where A: AgentApi + ?Sized, W: Write
{
    writeln!(out, "\n--- Testing Complex Memory (Effectiveness) ---")?;

    let created = api.create_conversation(ANALYST_SYSTEM_PROMPT).await?;
    let conversation_id = match created.conversation_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(BenchError::MissingConversationId),
    };
    info!("Created conversation {}", conversation_id);

    writeln!(out)?;
    for (i, (label, message)) in SETUP_TURNS.iter().enumerate() {
        writeln!(out, "{}", label)?;
        let reply = api.chat(&conversation_id, message).await?;
        debug!("Setup turn {} reply: {}", i + 1, reply.response.trim());
    }

    let (label, message) = SYNTHESIS_TURN;
    writeln!(out, "{}", label)?;
    let started = Instant::now();
    let reply = api.chat(&conversation_id, message).await?;
    let latency = started.elapsed();

    let final_response = reply.response.trim().to_string();
    writeln!(out, "Final Response:\n{}", final_response)?;
    writeln!(out, "Latency: {}", format_latency(latency))?;

    let json_rule = Verdict::from(follows_json_rule(&final_response));
    let profit = Verdict::from(has_expected_profit(&final_response));
    writeln!(out, "\n[Validation] Followed JSON rule: {}", json_rule)?;
    writeln!(out, "\n[Validation] Correct Calculation ($150k): {}", profit)?;

    Ok(MemoryReport {
        conversation_id,
        final_response,
        latency,
        json_rule,
        profit,
    })
}
