//! Flattening engine - expands outcomes into every outcome of their subtrees
//!
//! Each child is re-aggregated against its parent's already scoped pool,
//! never against the global one, so a filtered report stays consistent all
//! the way down. Direct children of the given outcomes are always kept;
//! below them, untested requirements of an excluded type are pruned at
//! every depth.

use std::collections::HashSet;

use log::debug;

use super::aggregator::{build_requirement_outcomes, requirement_outcome_for};
use super::filter::pruned;
use crate::core::models::{CoverageSettings, RequirementOutcome};

/// Insertion-ordered set of outcomes, compared structurally
#[derive(Debug, Default)]
struct OutcomeSet {
    seen: HashSet<RequirementOutcome>,
    ordered: Vec<RequirementOutcome>,
}

impl OutcomeSet {
    fn insert(&mut self, outcome: RequirementOutcome) {
        if self.seen.insert(outcome.clone()) {
            self.ordered.push(outcome);
        }
    }
}

/// Every outcome reachable from `outcomes`, each once
///
/// The result is in first-visit order: an outcome, then its children, then
/// their descendants. Flattening an already flattened list yields the same
/// set, provided the outcomes went through [`pruned`] when types are
/// excluded.
#[must_use]
pub fn flatten(
    outcomes: &[RequirementOutcome],
    settings: &CoverageSettings,
) -> Vec<RequirementOutcome> {
    let mut flattened = OutcomeSet::default();
    collect(outcomes, settings, &mut flattened);
    debug!("flattened {} outcome(s) into {}", outcomes.len(), flattened.ordered.len());
    flattened.ordered
}

fn collect(outcomes: &[RequirementOutcome], settings: &CoverageSettings, into: &mut OutcomeSet) {
    for outcome in outcomes {
        into.insert(outcome.clone());

        for child in outcome.requirement().children() {
            let child_outcome = requirement_outcome_for(child, outcome.test_outcomes(), settings);
            let nested = build_requirement_outcomes(
                child.children(),
                child_outcome.test_outcomes(),
                settings,
            );
            into.insert(child_outcome);
            collect(&pruned(&nested, settings), settings, into);
        }
    }
}
