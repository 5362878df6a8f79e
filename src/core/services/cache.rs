//! Coverage cache - per-aggregate memoization of scalar metrics
//!
//! Each metric owns a dedicated slot, so two metrics can never share a
//! value. An aggregate never changes after construction, which makes a
//! cached value valid for the aggregate's whole lifetime.

use std::sync::OnceLock;

/// Scalar metrics memoized by an aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Top-level requirements that are complete
    CompletedRequirements,
    /// Top-level requirements whose tests end in error
    ErrorRequirements,
    /// Top-level requirements whose tests fail
    FailingRequirements,
    /// Top-level requirements whose tests are pending
    PendingRequirements,
    /// Top-level requirements whose tests are compromised
    CompromisedRequirements,
    /// Top-level requirements whose tests are ignored
    IgnoredRequirements,
    /// Top-level requirements with no test that are not pending
    RequirementsWithoutTests,
    /// Requirements in all top-level subtrees
    FlattenedRequirements,
}

impl Metric {
    /// Number of metrics
    pub const COUNT: usize = 8;

    /// All metrics, in slot order
    pub const ALL: [Self; Self::COUNT] = [
        Self::CompletedRequirements,
        Self::ErrorRequirements,
        Self::FailingRequirements,
        Self::PendingRequirements,
        Self::CompromisedRequirements,
        Self::IgnoredRequirements,
        Self::RequirementsWithoutTests,
        Self::FlattenedRequirements,
    ];

    /// Stable metric name, for logs and reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CompletedRequirements => "CompletedRequirementsCount",
            Self::ErrorRequirements => "ErrorRequirementsCount",
            Self::FailingRequirements => "FailingRequirementsCount",
            Self::PendingRequirements => "PendingRequirementsCount",
            Self::CompromisedRequirements => "CompromisedRequirementsCount",
            Self::IgnoredRequirements => "IgnoredRequirementsCount",
            Self::RequirementsWithoutTests => "RequirementsWithoutTestsCount",
            Self::FlattenedRequirements => "FlattenedRequirementCount",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lazily computed metric values of one aggregate
///
/// Safe to share between threads: concurrent first requests for the same
/// metric compute it once, the others wait for that value.
#[derive(Debug, Default)]
pub struct CoverageCache {
    slots: [OnceLock<usize>; Metric::COUNT],
}

impl CoverageCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value of `metric`, computing it on first request
    pub fn get_or_compute(&self, metric: Metric, compute: impl FnOnce() -> usize) -> usize {
        *self.slots[metric.slot()].get_or_init(|| {
            let value = compute();
            log::trace!("cached {metric} = {value}");
            value
        })
    }

    /// The cached value of `metric`, if already computed
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<usize> {
        self.slots[metric.slot()].get().copied()
    }

    /// Number of metrics computed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Whether no metric has been computed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
