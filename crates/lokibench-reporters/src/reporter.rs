//! Suite lifecycle hooks.

use crate::summary::{SetupSummary, SpecSummary, SuiteSummary};

/// Lifecycle interface driven by the benchmark suite runner.
///
/// Every hook defaults to a no-op so implementations only override the
/// events they react to. Hooks cannot fail; reporters handle their own
/// errors.
pub trait Reporter {
    fn suite_will_begin(&mut self, _summary: &SuiteSummary) {}

    fn before_suite_did_run(&mut self, _setup: &SetupSummary) {}

    fn spec_will_run(&mut self, _spec: &SpecSummary) {}

    fn spec_did_complete(&mut self, _spec: &SpecSummary) {}

    fn after_suite_did_run(&mut self, _setup: &SetupSummary) {}

    fn suite_did_end(&mut self, _summary: &SuiteSummary) {}
}

/// Forwards every hook to each contained reporter in insertion order
#[derive(Default)]
pub struct Reporters {
    reporters: Vec<Box<dyn Reporter>>,
}

impl Reporters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reporter: impl Reporter + 'static) {
        self.reporters.push(Box::new(reporter));
    }

    pub fn with(mut self, reporter: impl Reporter + 'static) -> Self {
        self.push(reporter);
        self
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl std::fmt::Debug for Reporters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporters")
            .field("count", &self.reporters.len())
            .finish()
    }
}

impl Reporter for Reporters {
    fn suite_will_begin(&mut self, summary: &SuiteSummary) {
        for reporter in &mut self.reporters {
            reporter.suite_will_begin(summary);
        }
    }

    fn before_suite_did_run(&mut self, setup: &SetupSummary) {
        for reporter in &mut self.reporters {
            reporter.before_suite_did_run(setup);
        }
    }

    fn spec_will_run(&mut self, spec: &SpecSummary) {
        for reporter in &mut self.reporters {
            reporter.spec_will_run(spec);
        }
    }

    fn spec_did_complete(&mut self, spec: &SpecSummary) {
        for reporter in &mut self.reporters {
            reporter.spec_did_complete(spec);
        }
    }

    fn after_suite_did_run(&mut self, setup: &SetupSummary) {
        for reporter in &mut self.reporters {
            reporter.after_suite_did_run(setup);
        }
    }

    fn suite_did_end(&mut self, summary: &SuiteSummary) {
        for reporter in &mut self.reporters {
            reporter.suite_did_end(summary);
        }
    }
}
