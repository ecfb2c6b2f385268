//! Replay of one scenario through the engine.

use anyhow::{Context, Result};
use book_core::{Instruction, MatchingEngine};
use book_protocol::{format_event, parse_instruction};

use crate::scenario::Scenario;

/// Run one scenario from a fresh engine, returning the formatted output
/// lines joined by newlines.
///
/// The run ends at the first flush instruction; a parse error aborts the
/// scenario naming the offending instruction.
pub fn run_scenario(scenario: &Scenario) -> Result<String> {
    let mut engine = MatchingEngine::new(scenario.trading_enabled);
    let mut lines = Vec::new();

    for raw in &scenario.instructions {
        let Some(instruction) = parse_instruction(raw)? else {
            continue;
        };
        let ended = matches!(instruction, Instruction::Flush);
        let events = engine
            .apply(instruction)
            .with_context(|| format!("applying {:?}", raw))?;
        lines.extend(events.iter().map(format_event));
        if ended {
            break;
        }
    }

    Ok(lines.join("\n"))
}
