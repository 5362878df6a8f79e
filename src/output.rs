//! Output formatting for human and JSON modes
//!
//! This module provides a structured coverage summary that can be rendered
//! either as human-readable text or machine-parseable JSON.

use std::fmt::Write;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{Release, RequirementOutcome, TestResult, TestType};
use crate::core::services::RequirementsOutcomes;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Coverage report of one aggregate
#[derive(Debug, Clone, Serialize)]
pub struct CoverageSummary {
    /// Type of the top-level requirements
    pub requirement_type: String,
    /// Release the report is restricted to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// Number of top-level requirements
    pub requirement_count: usize,
    /// Number of requirements in all subtrees
    pub flattened_requirement_count: usize,
    /// Requirement counts by rolled-up status
    pub requirements: RequirementCounts,
    /// Number of tests in scope
    pub test_count: usize,
    /// Test counts by status
    pub tests: Vec<ResultCount>,
    /// Tests assumed missing for untested requirements
    pub estimated_unimplemented_tests: usize,
    /// Passing tests over implemented plus estimated tests, in percent
    pub passing_percent: f64,
    /// Whether `passing_percent` includes estimated tests
    pub estimated: bool,
    /// One line per top-level requirement
    pub outcomes: Vec<OutcomeLine>,
}

/// Top-level requirement counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequirementCounts {
    /// Complete requirements
    pub completed: usize,
    /// Requirements with failing tests
    pub failing: usize,
    /// Requirements with tests in error
    pub error: usize,
    /// Requirements with pending tests
    pub pending: usize,
    /// Requirements with compromised tests
    pub compromised: usize,
    /// Requirements whose tests are all ignored
    pub ignored: usize,
    /// Requirements with no recorded test
    pub without_tests: usize,
}

/// Number of tests with one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultCount {
    /// Test status
    pub result: TestResult,
    /// Number of tests
    pub count: usize,
}

/// Summary of one top-level requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeLine {
    /// Requirement name
    pub name: String,
    /// Requirement type
    #[serde(rename = "type")]
    pub requirement_type: String,
    /// Rolled-up status
    pub result: TestResult,
    /// Tests of the requirement's subtree
    pub test_count: usize,
    /// Untested requirements in the subtree
    pub requirements_without_tests: usize,
}

impl OutcomeLine {
    fn of(outcome: &RequirementOutcome) -> Self {
        Self {
            name: outcome.requirement().name().to_string(),
            requirement_type: outcome.requirement().requirement_type().to_string(),
            result: outcome.result(),
            test_count: outcome.test_count(),
            requirements_without_tests: outcome.requirements_without_tests(),
        }
    }
}

impl CoverageSummary {
    /// Summarize an aggregate, optionally labelled with its release
    #[must_use]
    pub fn of(outcomes: &RequirementsOutcomes, release: Option<&Release>) -> Self {
        let passing = outcomes.proportion_of(TestType::Status(TestResult::Success));
        let total = outcomes.total();

        Self {
            requirement_type: outcomes.requirement_type().to_string(),
            release: release.map(|r| r.name.clone()),
            requirement_count: outcomes.requirement_count(),
            flattened_requirement_count: outcomes.flattened_requirement_count(),
            requirements: RequirementCounts {
                completed: outcomes.completed_requirements_count(),
                failing: outcomes.failing_requirements_count(),
                error: outcomes.error_requirements_count(),
                pending: outcomes.pending_requirements_count(),
                compromised: outcomes.compromised_requirements_count(),
                ignored: outcomes.ignored_requirements_count(),
                without_tests: outcomes.requirements_without_tests_count(),
            },
            test_count: outcomes.total_test_count(),
            tests: total
                .by_result
                .iter()
                .filter(|(_, count)| *count > 0)
                .map(|(result, count)| ResultCount {
                    result: *result,
                    count: *count,
                })
                .collect(),
            estimated_unimplemented_tests: outcomes.estimated_unimplemented_tests(),
            passing_percent: passing.percent(),
            estimated: passing.is_estimate(),
            outcomes: outcomes.requirement_outcomes().iter().map(OutcomeLine::of).collect(),
        }
    }

    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }

    /// Pretty-printed JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Plain text report
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let scope = self.release.as_ref().map_or_else(String::new, |r| format!(" in release {r}"));
        let _ = writeln!(
            out,
            "Coverage of {} {} requirement(s){scope}\n",
            self.requirement_count, self.requirement_type
        );

        if self.requirement_count == 0 {
            out.push_str("No requirements.\n");
            return out;
        }

        let tests = self
            .tests
            .iter()
            .map(|c| format!("{} {}", c.count, c.result))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "  Tests:          {} ({tests})", self.test_count);

        let r = &self.requirements;
        let _ = writeln!(
            out,
            "  Requirements:   {} total, {} completed, {} failing, {} error, {} pending, \
             {} compromised, {} ignored",
            self.flattened_requirement_count,
            r.completed,
            r.failing,
            r.error,
            r.pending,
            r.compromised,
            r.ignored
        );
        let _ = writeln!(
            out,
            "  Without tests:  {} (~{} estimated test(s))",
            r.without_tests, self.estimated_unimplemented_tests
        );
        let qualifier = if self.estimated { " (estimated)" } else { "" };
        let _ = writeln!(out, "  Passing:        {:.1}%{qualifier}\n", self.passing_percent);

        for line in &self.outcomes {
            let _ = writeln!(
                out,
                "  [{}] {} ({}) - {} test(s)",
                status_label(line.result),
                line.name,
                line.requirement_type,
                line.test_count
            );
        }
        out
    }
}

fn status_label(result: TestResult) -> ColoredString {
    let label = format!("{:<11}", result.to_string().to_uppercase());
    match result {
        TestResult::Success => label.green(),
        TestResult::Failure | TestResult::Error | TestResult::Compromised => label.red(),
        TestResult::Pending => label.yellow(),
        TestResult::Ignored | TestResult::Skipped | TestResult::Undefined => label.dimmed(),
    }
}
