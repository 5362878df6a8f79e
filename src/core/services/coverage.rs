//! Requirements coverage aggregate
//!
//! [`RequirementsOutcomes`] is the report object over a list of
//! requirements: one outcome per distinct requirement, the pool of tests in
//! scope, and lazily cached metrics. Every query either returns a value or
//! builds a new, independent aggregate; an aggregate is never modified after
//! construction.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use reqcov::core::models::{Requirement, TestOutcome, TestOutcomes, TestResult, TestTag};
//! use reqcov::core::services::{CoverageContext, RequirementsOutcomes};
//!
//! let checkout = Requirement::new("Checkout", "epic").with_children(vec![
//!     Requirement::new("Payment", "feature"),
//!     Requirement::new("Shipping", "feature"),
//! ]);
//! let tests = TestOutcomes::of(vec![
//!     TestOutcome::new("pays by card", TestResult::Success)
//!         .with_tag(TestTag::new("feature", "Payment")),
//! ]);
//!
//! let context = Arc::new(CoverageContext::default());
//! let report = RequirementsOutcomes::new(&[checkout], tests, context);
//! assert_eq!(report.total_test_count(), 1);
//! assert_eq!(report.flattened_requirement_count(), 3);
//!
//! let features = report.of_type("feature");
//! assert_eq!(features.requirements_without_tests_count(), 1);
//! assert_eq!(features.estimated_unimplemented_tests(), 4);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use log::debug;
use parking_lot::Mutex;

use super::aggregator::build_requirement_outcomes;
use super::cache::{CoverageCache, Metric};
use super::estimation::{OutcomeCounter, Proportion, estimated_unimplemented_tests};
use super::filter::{pruned, remove_requirements_without_tests, select_release, select_type};
use super::flattener::flatten;
use crate::core::models::{
    CoverageSettings, Release, Requirement, RequirementOutcome, TestOutcomes, TestType,
};
use crate::core::ports::{ParentRequirementProvider, ReleaseTagger, first_parent_of};
use crate::error::Result;

/// Type reported by an aggregate with no requirement
pub const DEFAULT_REQUIREMENT_TYPE: &str = "requirement";

/// Settings and collaborators shared by an aggregate and every view derived from it
#[derive(Default)]
pub struct CoverageContext {
    settings: CoverageSettings,
    release_tagger: Option<Arc<dyn ReleaseTagger>>,
    parent_providers: Vec<Arc<dyn ParentRequirementProvider>>,
}

impl CoverageContext {
    /// Create a context with the given settings and no collaborator
    #[must_use]
    pub fn new(settings: CoverageSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Attach the collaborator that tags tests with release versions
    #[must_use]
    pub fn with_release_tagger(mut self, tagger: Arc<dyn ReleaseTagger>) -> Self {
        self.release_tagger = Some(tagger);
        self
    }

    /// Append a parent requirement provider; earlier providers win
    #[must_use]
    pub fn with_parent_provider(mut self, provider: Arc<dyn ParentRequirementProvider>) -> Self {
        self.parent_providers.push(provider);
        self
    }

    /// Engine settings
    #[must_use]
    pub const fn settings(&self) -> &CoverageSettings {
        &self.settings
    }

    /// Release tagger, if any
    #[must_use]
    pub fn release_tagger(&self) -> Option<&dyn ReleaseTagger> {
        self.release_tagger.as_deref()
    }

    /// Parent requirement providers, in lookup order
    #[must_use]
    pub fn parent_providers(&self) -> &[Arc<dyn ParentRequirementProvider>] {
        &self.parent_providers
    }
}

impl std::fmt::Debug for CoverageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverageContext")
            .field("settings", &self.settings)
            .field("release_tagger", &self.release_tagger.is_some())
            .field("parent_providers", &self.parent_providers.len())
            .finish()
    }
}

/// Test results for a list of requirements
pub struct RequirementsOutcomes {
    requirement_outcomes: Vec<RequirementOutcome>,
    test_outcomes: TestOutcomes,
    parent_requirement: Option<Requirement>,
    context: Arc<CoverageContext>,
    cache: CoverageCache,
    flattened: OnceLock<Vec<RequirementOutcome>>,
    views_by_type: Mutex<HashMap<String, Arc<Self>>>,
}

impl RequirementsOutcomes {
    /// Aggregate the tests of `test_outcomes` over `requirements`
    ///
    /// Duplicate requirements are aggregated once.
    #[must_use]
    pub fn new(
        requirements: &[Requirement],
        test_outcomes: TestOutcomes,
        context: Arc<CoverageContext>,
    ) -> Self {
        let outcomes = build_requirement_outcomes(requirements, &test_outcomes, context.settings());
        Self::from_parts(outcomes, test_outcomes, None, context)
    }

    /// Aggregate the children of `parent`, remembering the parent
    #[must_use]
    pub fn nested(
        parent: Requirement,
        test_outcomes: TestOutcomes,
        context: Arc<CoverageContext>,
    ) -> Self {
        let outcomes =
            build_requirement_outcomes(parent.children(), &test_outcomes, context.settings());
        Self::from_parts(outcomes, test_outcomes, Some(parent), context)
    }

    fn from_parts(
        requirement_outcomes: Vec<RequirementOutcome>,
        test_outcomes: TestOutcomes,
        parent_requirement: Option<Requirement>,
        context: Arc<CoverageContext>,
    ) -> Self {
        Self {
            requirement_outcomes,
            test_outcomes,
            parent_requirement,
            context,
            cache: CoverageCache::new(),
            flattened: OnceLock::new(),
            views_by_type: Mutex::new(HashMap::new()),
        }
    }

    // === Structure ===

    /// One outcome per top-level requirement
    #[must_use]
    pub fn requirement_outcomes(&self) -> &[RequirementOutcome] {
        &self.requirement_outcomes
    }

    /// The tests in scope of this aggregate
    #[must_use]
    pub const fn test_outcomes(&self) -> &TestOutcomes {
        &self.test_outcomes
    }

    /// Shared settings and collaborators
    #[must_use]
    pub const fn context(&self) -> &Arc<CoverageContext> {
        &self.context
    }

    /// Number of top-level requirements
    #[must_use]
    pub fn requirement_count(&self) -> usize {
        self.requirement_outcomes.len()
    }

    /// Number of requirements in all top-level subtrees
    ///
    /// A requirement reachable from two top-level requirements is counted
    /// twice.
    #[must_use]
    pub fn total_requirements(&self) -> usize {
        self.requirement_outcomes.iter().map(|o| o.requirement().flattened().len()).sum()
    }

    /// The requirement these outcomes belong to, for nested aggregates
    #[must_use]
    pub const fn parent_requirement(&self) -> Option<&Requirement> {
        self.parent_requirement.as_ref()
    }

    /// The parent of the parent requirement, as resolved by the providers
    #[must_use]
    pub fn grandparent_requirement(&self) -> Option<Requirement> {
        let parent = self.parent_requirement.as_ref()?;
        parent.parent()?;
        first_parent_of(self.context.parent_providers(), parent)
    }

    /// Type of the first top-level requirement
    #[must_use]
    pub fn requirement_type(&self) -> &str {
        self.requirement_outcomes
            .first()
            .map_or(DEFAULT_REQUIREMENT_TYPE, |o| o.requirement().requirement_type())
    }

    /// Type of the first child found under the top-level requirements
    #[must_use]
    pub fn children_type(&self) -> Option<&str> {
        self.requirement_outcomes
            .iter()
            .find_map(|o| o.requirement().children().first())
            .map(Requirement::requirement_type)
    }

    /// Distinct requirement types, in first-seen order
    #[must_use]
    pub fn types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for outcome in &self.requirement_outcomes {
            for requirement in outcome.requirement().flattened() {
                if !types.iter().any(|t| t == requirement.requirement_type()) {
                    types.push(requirement.requirement_type().to_string());
                }
            }
        }
        types
    }

    /// Every outcome of every subtree, each once
    ///
    /// Computed on first request and kept for the aggregate's lifetime.
    #[must_use]
    pub fn flattened_requirement_outcomes(&self) -> &[RequirementOutcome] {
        self.flattened.get_or_init(|| flatten(&self.requirement_outcomes, self.context.settings()))
    }

    // === Cached requirement counts ===

    /// Top-level requirements that are complete
    #[must_use]
    pub fn completed_requirements_count(&self) -> usize {
        self.count_matching(Metric::CompletedRequirements, RequirementOutcome::is_complete)
    }

    /// Top-level requirements whose tests end in error
    #[must_use]
    pub fn error_requirements_count(&self) -> usize {
        self.count_matching(Metric::ErrorRequirements, RequirementOutcome::is_error)
    }

    /// Top-level requirements whose tests fail
    #[must_use]
    pub fn failing_requirements_count(&self) -> usize {
        self.count_matching(Metric::FailingRequirements, RequirementOutcome::is_failure)
    }

    /// Top-level requirements whose tests are pending
    #[must_use]
    pub fn pending_requirements_count(&self) -> usize {
        self.count_matching(Metric::PendingRequirements, RequirementOutcome::is_pending)
    }

    /// Top-level requirements whose tests are compromised
    #[must_use]
    pub fn compromised_requirements_count(&self) -> usize {
        self.count_matching(Metric::CompromisedRequirements, RequirementOutcome::is_compromised)
    }

    /// Top-level requirements whose tests are ignored
    #[must_use]
    pub fn ignored_requirements_count(&self) -> usize {
        self.count_matching(Metric::IgnoredRequirements, RequirementOutcome::is_ignored)
    }

    /// Top-level requirements that are failing, in error or compromised
    #[must_use]
    pub fn unsuccessful_requirements_count(&self) -> usize {
        self.error_requirements_count()
            + self.failing_requirements_count()
            + self.compromised_requirements_count()
    }

    /// Top-level requirements with no recorded test that are not pending
    #[must_use]
    pub fn requirements_without_tests_count(&self) -> usize {
        self.cache.get_or_compute(Metric::RequirementsWithoutTests, || {
            self.requirement_outcomes
                .iter()
                .map(RequirementOutcome::requirement)
                .filter(|requirement| {
                    !self.tests_recorded_for(requirement) && !self.is_pending(requirement)
                })
                .count()
        })
    }

    /// Requirements in all top-level subtrees
    #[must_use]
    pub fn flattened_requirement_count(&self) -> usize {
        self.cache.get_or_compute(Metric::FlattenedRequirements, || {
            self.requirement_outcomes
                .iter()
                .map(RequirementOutcome::flattened_requirement_count)
                .sum()
        })
    }

    fn count_matching(&self, metric: Metric, predicate: fn(&RequirementOutcome) -> bool) -> usize {
        self.cache.get_or_compute(metric, || {
            self.requirement_outcomes.iter().filter(|o| predicate(o)).count()
        })
    }

    fn tests_recorded_for(&self, requirement: &Requirement) -> bool {
        self.requirement_outcomes
            .iter()
            .any(|o| o.tests_requirement(requirement) && o.test_count() > 0)
    }

    fn is_pending(&self, requirement: &Requirement) -> bool {
        self.requirement_outcomes.iter().any(|o| o.requirement() == requirement && o.is_pending())
    }

    /// The metric cache of this aggregate
    #[must_use]
    pub const fn cache(&self) -> &CoverageCache {
        &self.cache
    }

    // === Test counts and proportions ===

    /// Number of tests in scope
    #[must_use]
    pub fn total_test_count(&self) -> usize {
        self.test_outcomes.total()
    }

    /// Counts of all tests in scope
    #[must_use]
    pub fn total(&self) -> OutcomeCounter {
        self.count(TestType::Any)
    }

    /// Counts of the tests in scope that fall into `test_type`
    #[must_use]
    pub fn count(&self, test_type: TestType) -> OutcomeCounter {
        OutcomeCounter::of(test_type, &self.test_outcomes)
    }

    /// Counts for a category given by name (e.g., "failure", "any")
    pub fn count_by_name(&self, test_type: &str) -> Result<OutcomeCounter> {
        Ok(self.count(test_type.parse()?))
    }

    /// Tests assumed for each requirement without tests
    #[must_use]
    pub fn estimated_tests_per_requirement(&self) -> usize {
        self.context.settings().estimated_tests_per_requirement
    }

    /// Tests assumed missing for the requirements without tests
    #[must_use]
    pub fn estimated_unimplemented_tests(&self) -> usize {
        estimated_unimplemented_tests(
            self.requirements_without_tests_count(),
            self.estimated_tests_per_requirement(),
        )
    }

    /// Share of all tests over implemented plus estimated tests
    #[must_use]
    pub fn proportion(&self) -> Proportion {
        self.proportion_of(TestType::Any)
    }

    /// Share of tests in `test_type` over implemented plus estimated tests
    #[must_use]
    pub fn proportion_of(&self, test_type: TestType) -> Proportion {
        Proportion::of(test_type, &self.test_outcomes, self.estimated_unimplemented_tests())
    }

    /// Proportion for a category given by name
    pub fn proportion_of_name(&self, test_type: &str) -> Result<Proportion> {
        Ok(self.proportion_of(test_type.parse()?))
    }

    // === Derived views ===

    /// A new aggregate restricted to requirements of the given type
    ///
    /// The type comparison ignores case. The view holds exactly the tests of
    /// the matching requirements.
    #[must_use]
    pub fn of_type(&self, requirement_type: &str) -> Self {
        let selection = select_type(self.flattened_requirement_outcomes(), requirement_type);
        debug!(
            "type view {requirement_type:?}: {} requirement(s), {} test(s)",
            selection.requirements.len(),
            selection.tests.len()
        );

        let pool = self.test_outcomes.with_outcomes(selection.tests);
        Self::new(&selection.requirements, pool, Arc::clone(&self.context))
            .without_unrelated_requirements()
    }

    /// Memoized [`Self::of_type`] view
    #[must_use]
    pub fn requirements_of_type(&self, requirement_type: &str) -> Arc<Self> {
        let key = requirement_type.to_lowercase();
        let cached = self.views_by_type.lock().get(&key).cloned();
        if let Some(view) = cached {
            return view;
        }

        let view = Arc::new(self.of_type(requirement_type));
        Arc::clone(self.views_by_type.lock().entry(key).or_insert(view))
    }

    /// A new aggregate restricted to the tests of a release
    ///
    /// Release versions are attached to the tests first (idempotent). A
    /// requirement is kept only if its subtree has at least one test of
    /// the release; kept requirements are rebuilt with their kept children.
    #[must_use]
    pub fn released_requirements_for(&self, release: &Release) -> Self {
        if let Some(tagger) = self.context.release_tagger() {
            tagger.enrich_requirement_outcomes(&self.requirement_outcomes);
        }

        let selection = select_release(&self.requirement_outcomes, &release.name);
        let pool = self.test_outcomes.with_outcomes(selection.tests);
        let requirements = remove_requirements_without_tests(&selection.requirements, &pool);
        debug!(
            "release view {release}: {} requirement(s), {} test(s)",
            requirements.len(),
            pool.total()
        );

        Self::new(&requirements, pool, Arc::clone(&self.context)).without_unrelated_requirements()
    }

    /// Drop untested requirements whose type is excluded by the settings
    ///
    /// Returns `self` untouched when no type is excluded. Requirements with
    /// at least one test are always kept.
    #[must_use]
    pub fn without_unrelated_requirements(self) -> Self {
        if !self.context.settings().excluded_types.is_enabled() {
            return self;
        }

        let outcomes = pruned(&self.requirement_outcomes, self.context.settings());
        Self::from_parts(outcomes, self.test_outcomes, self.parent_requirement, self.context)
    }
}

impl std::fmt::Debug for RequirementsOutcomes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequirementsOutcomes")
            .field("requirement_outcomes", &self.requirement_outcomes)
            .field("test_outcomes", &self.test_outcomes)
            .field("parent_requirement", &self.parent_requirement)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for RequirementsOutcomes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> =
            self.requirement_outcomes.iter().map(|o| o.requirement().name()).collect();
        write!(f, "{} requirement(s) [{}]", names.len(), names.join(", "))?;
        if let Some(parent) = &self.parent_requirement {
            write!(f, " under {parent}")?;
        }
        Ok(())
    }
}
