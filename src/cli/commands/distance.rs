//! Edit distance CLI command.

use crate::cli::output::{output, CommandOutput};
use crate::services::SimilarityMatcher;

/// Result of the `distance` command.
#[derive(Debug, serde::Serialize)]
pub struct DistanceOutput {
    pub source: String,
    pub target: String,
    pub distance: usize,
}

impl CommandOutput for DistanceOutput {
    fn to_human(&self) -> String {
        format!("{:?} -> {:?}: {}", self.source, self.target, self.distance)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Compute and print the edit distance.
pub fn execute(source: String, target: String, json_mode: bool) {
    let distance = SimilarityMatcher::new().distance(&source, &target);
    output(
        &DistanceOutput {
            source,
            target,
            distance,
        },
        json_mode,
    );
}
