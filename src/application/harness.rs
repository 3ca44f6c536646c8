//! Timed reconstruction runs over named scenarios.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::config::BenchConfig;
use crate::domain::{
    balanced_postorder, inorder_sequence, reconstruct, BinaryTree, Label, ReconstructResult,
};

/// A labelled sequence pair to reconstruct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub inorder: Vec<Label>,
    pub postorder: Vec<Label>,
}

impl Scenario {
    pub fn new(label: impl Into<String>, inorder: Vec<Label>, postorder: Vec<Label>) -> Self {
        Self {
            label: label.into(),
            inorder,
            postorder,
        }
    }

    pub fn empty() -> Self {
        Self::new("Empty", Vec::new(), Vec::new())
    }

    /// Label sets that admit no consistent split.
    pub fn no_solution() -> Self {
        Self::new("No-solution", vec![0, 2, 4, 6, 8], vec![1, 3, 5, 7, 4])
    }

    /// Balanced tree over `0..n-1`.
    pub fn balanced(n: usize) -> Self {
        Self::new(format!("n={n}"), inorder_sequence(n), balanced_postorder(n))
    }
}

/// Outcome of one timed reconstruction.
#[derive(Debug)]
pub struct BuildReport {
    pub label: String,
    pub elapsed: Duration,
    pub outcome: ReconstructResult<BinaryTree>,
}

impl BuildReport {
    pub fn tree(&self) -> Option<&BinaryTree> {
        self.outcome.as_ref().ok()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(_) => write!(f, "{} -> {:.3} ms", self.label, self.elapsed_ms()),
            Err(e) => write!(f, "{} -> No solution: {}", self.label, e),
        }
    }
}

/// Scenarios for a bench run: edge cases first (if enabled), then one
/// balanced case per configured size, in configuration order.
pub fn default_scenarios(config: &BenchConfig) -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    if config.include_edge_cases {
        scenarios.push(Scenario::empty());
        scenarios.push(Scenario::no_solution());
    }
    scenarios.extend(config.sizes.iter().map(|&n| Scenario::balanced(n)));
    scenarios
}

/// Reconstructs the scenario once, timing only the reconstruction.
#[instrument(level = "debug", skip(scenario), fields(label = %scenario.label))]
pub fn time_build(scenario: &Scenario) -> BuildReport {
    let t0 = Instant::now();
    let outcome = reconstruct(&scenario.inorder, &scenario.postorder);
    let elapsed = t0.elapsed();

    match &outcome {
        Ok(tree) => debug!(nodes = tree.len(), ?elapsed, "built"),
        Err(e) => debug!(error = %e, "no solution"),
    }

    BuildReport {
        label: scenario.label.clone(),
        elapsed,
        outcome,
    }
}

#[instrument(level = "info", skip_all, fields(count = scenarios.len()))]
pub fn run_scenarios(scenarios: &[Scenario]) -> Vec<BuildReport> {
    let reports: Vec<BuildReport> = scenarios.iter().map(time_build).collect();
    info!(
        succeeded = reports.iter().filter(|r| r.is_success()).count(),
        "scenarios finished"
    );
    reports
}
