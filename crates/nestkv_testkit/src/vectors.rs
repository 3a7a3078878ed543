//! Golden scenario vectors.
//!
//! Each vector is a command transcript: the lines fed to a session and the
//! lines it must print. Vectors live in `vectors/scenarios.json` so other
//! front ends can replay the same transcripts.

use nestkv_core::{Reply, Session};
use serde::{Deserialize, Serialize};

const SCENARIOS_JSON: &str = include_str!("../vectors/scenarios.json");

/// A recorded session transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Input lines, in order.
    pub input: Vec<String>,
    /// Lines the session must print, in order.
    pub expected_output: Vec<String>,
}

/// Parses a JSON array of scenario vectors.
///
/// # Errors
///
/// Returns the parse error if `json` is not a valid vector list.
pub fn parse_vectors(json: &str) -> serde_json::Result<Vec<ScenarioVector>> {
    serde_json::from_str(json)
}

/// The scenario vectors shipped with the testkit.
pub fn scenario_vectors() -> Vec<ScenarioVector> {
    parse_vectors(SCENARIOS_JSON).expect("bundled scenarios.json is valid")
}

/// Replays `vector` through a fresh default session.
///
/// Returns what the session printed: command output and error messages,
/// one entry per line, stopping at the end command.
pub fn run_vector(vector: &ScenarioVector) -> Vec<String> {
    let mut session = Session::new();
    let mut printed = Vec::new();

    for line in &vector.input {
        match session.execute_line(line) {
            Ok(Reply::Silent) => {}
            Ok(Reply::Output(text)) => printed.push(text),
            Ok(Reply::End) => break,
            Err(err) => printed.push(err.to_string()),
        }
    }

    printed
}
