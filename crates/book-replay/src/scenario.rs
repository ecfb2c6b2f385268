//! Scenario file loading.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// One replayable scenario paired with its expected output.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub description: String,
    pub trading_enabled: bool,
    pub instructions: Vec<String>,
    pub expected_output: String,
}

/// Load all scenarios from `dir/input.txt`, pairing each with its expected
/// output from `dir/output.txt`.
pub fn load_scenarios(dir: &Path) -> Result<Vec<Scenario>> {
    let input_path = dir.join("input.txt");
    let input = fs::read_to_string(&input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;
    let output_path = dir.join("output.txt");
    let output = fs::read_to_string(&output_path)
        .with_context(|| format!("reading {}", output_path.display()))?;

    let inputs = split_scenarios(&input);
    let outputs = split_scenarios(&output);
    if inputs.len() != outputs.len() {
        bail!(
            "{} scenarios in input.txt but {} in output.txt",
            inputs.len(),
            outputs.len()
        );
    }

    inputs
        .into_iter()
        .zip(outputs)
        .enumerate()
        .map(|(i, ((header, instructions), (_, expected)))| {
            let (trading_enabled, description) = parse_header(&header)
                .with_context(|| format!("scenario {} header {:?}", i + 1, header))?;
            Ok(Scenario {
                description,
                trading_enabled,
                instructions,
                expected_output: expected.join("\n"),
            })
        })
        .collect()
}

/// Split a file into `(header, body_lines)` sections delimited by `# `
/// lines. Body lines are trimmed of trailing whitespace and blank lines
/// are dropped; anything before the first marker is ignored.
fn split_scenarios(text: &str) -> Vec<(String, Vec<String>)> {
    let mut sections: Vec<(String, Vec<String>)> = Vec::new();
    for line in text.lines() {
        if let Some(header) = line.strip_prefix("# ") {
            sections.push((header.trim_end().to_string(), Vec::new()));
            continue;
        }
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        if let Some((_, body)) = sections.last_mut() {
            body.push(trimmed.to_string());
        }
    }
    sections
}

/// Header form: `<should_trade> <description>` with `1` for trading mode.
fn parse_header(header: &str) -> Result<(bool, String)> {
    let (flag, description) = header.split_once(' ').unwrap_or((header, ""));
    let trading_enabled = match flag {
        "1" => true,
        "0" => false,
        other => bail!("should_trade must be 0 or 1, found {:?}", other),
    };
    Ok((trading_enabled, description.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_pair(dir: &Path, input: &str, output: &str) {
        fs::write(dir.join("input.txt"), input).unwrap();
        fs::write(dir.join("output.txt"), output).unwrap();
    }

    #[test]
    fn loads_matching_scenario_pairs() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(
            dir.path(),
            "# 1 one resting order\nN, 1, IBM, 10, 100, B, 1\nF\n",
            "# 1 one resting order\nA, 1, 1\nB, B, 10, 100\n",
        );

        let scenarios = load_scenarios(dir.path()).unwrap();
        assert_eq!(scenarios.len(), 1);

        let scenario = &scenarios[0];
        assert!(scenario.trading_enabled);
        assert_eq!(scenario.description, "one resting order");
        assert_eq!(
            scenario.instructions,
            vec!["N, 1, IBM, 10, 100, B, 1".to_string(), "F".to_string()]
        );
        assert_eq!(scenario.expected_output, "A, 1, 1\nB, B, 10, 100");
    }

    #[test]
    fn rejecting_mode_header_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path(), "# 0 reject it\nF\n", "# 0 reject it\n");

        let scenarios = load_scenarios(dir.path()).unwrap();
        assert!(!scenarios[0].trading_enabled);
        assert_eq!(scenarios[0].expected_output, "");
    }

    #[test]
    fn scenario_counts_must_agree() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path(), "# 1 a\nF\n# 1 b\nF\n", "# 1 a\n");

        assert!(load_scenarios(dir.path()).is_err());
    }

    #[test]
    fn header_flag_must_be_binary() {
        let dir = tempfile::tempdir().unwrap();
        write_pair(dir.path(), "# 2 bad flag\nF\n", "# 2 bad flag\n");

        assert!(load_scenarios(dir.path()).is_err());
    }
}
