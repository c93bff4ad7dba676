use std::{fmt, sync::Arc};

use log::{debug, trace};
use proptest::{
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::config::DEFAULT_RETRY_BUDGET;

/// States of a single generate/validate/retry draw.
#[derive(Debug)]
enum DrawState<V, T> {
    /// Drawing raw material from the source strategy.
    Drawing,
    /// Building and checking a candidate from the raw material.
    Validating(V),
    Accepted(V, T),
    Retrying,
    /// Retry budget spent, terminal.
    Exhausted,
}

/// Strategy that builds a value out of raw material drawn by `source`, drawing again whenever the
/// build function returns `None`.
///
/// Every failed candidate is reported to the runner as a local rejection so that a structurally
/// infeasible request surfaces as proptest's "too many local rejects" failure. A single draw gives
/// up after `budget` candidates and returns an error to the runner.
///
/// Shrinking simplifies the raw material and rebuilds, complicating back until the build succeeds
/// again.
pub struct Retry<S, F> {
    whence: &'static str,
    source: S,
    attempt: Arc<F>,
    budget: usize,
}

impl<S, F> Retry<S, F> {
    pub fn new<T>(whence: &'static str, source: S, attempt: F) -> Self
    where
        S: Strategy,
        F: Fn(S::Value) -> Option<T>,
    {
        Retry {
            whence,
            source,
            attempt: Arc::new(attempt),
            budget: DEFAULT_RETRY_BUDGET,
        }
    }

    /// Sets the number of candidates a single draw may try (at least 1).
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget.max(1);
        self
    }
}

impl<S, F> fmt::Debug for Retry<S, F>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retry")
            .field("whence", &self.whence)
            .field("source", &self.source)
            .field("budget", &self.budget)
            .finish()
    }
}

impl<S, F, T> Strategy for Retry<S, F>
where
    S: Strategy,
    F: Fn(S::Value) -> Option<T>,
    T: fmt::Debug + Clone,
{
    type Tree = RetryValueTree<S::Tree, F, T>;
    type Value = T;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let mut state = DrawState::Drawing;
        let mut draws = 0usize;
        loop {
            state = match state {
                DrawState::Drawing => {
                    draws += 1;
                    DrawState::Validating(self.source.new_tree(runner)?)
                }
                DrawState::Validating(source) => match (self.attempt)(source.current()) {
                    Some(value) => DrawState::Accepted(source, value),
                    None => DrawState::Retrying,
                },
                DrawState::Accepted(source, current) => {
                    return Ok(RetryValueTree {
                        source,
                        attempt: Arc::clone(&self.attempt),
                        current,
                    });
                }
                DrawState::Retrying if draws >= self.budget => DrawState::Exhausted,
                DrawState::Retrying => {
                    trace!("{}: candidate {} rejected", self.whence, draws);
                    runner.reject_local(self.whence)?;
                    DrawState::Drawing
                }
                DrawState::Exhausted => {
                    debug!("{}: exhausted after {} candidates", self.whence, draws);
                    return Err(format!(
                        "{}: no valid candidate within {} draws",
                        self.whence, self.budget
                    )
                    .into());
                }
            };
        }
    }
}

/// Value tree of [Retry].
pub struct RetryValueTree<V, F, T> {
    source: V,
    attempt: Arc<F>,
    current: T,
}

impl<V, F, T> RetryValueTree<V, F, T>
where
    V: ValueTree,
    F: Fn(V::Value) -> Option<T>,
{
    /// Complicates the source until it builds a value again, returns false (keeping the last good
    /// value) if the source runs out of complications first.
    fn rebuild_or_complicate(&mut self) -> bool {
        loop {
            if let Some(value) = (self.attempt)(self.source.current()) {
                self.current = value;
                return true;
            }

            if !self.source.complicate() {
                return false;
            }
        }
    }
}

impl<V, F, T> ValueTree for RetryValueTree<V, F, T>
where
    V: ValueTree,
    F: Fn(V::Value) -> Option<T>,
    T: fmt::Debug + Clone,
{
    type Value = T;

    fn current(&self) -> T {
        self.current.clone()
    }

    fn simplify(&mut self) -> bool {
        self.source.simplify() && self.rebuild_or_complicate()
    }

    fn complicate(&mut self) -> bool {
        self.source.complicate() && self.rebuild_or_complicate()
    }
}

impl<V, F, T> Clone for RetryValueTree<V, F, T>
where
    V: Clone,
    T: Clone,
{
    fn clone(&self) -> Self {
        RetryValueTree {
            source: self.source.clone(),
            attempt: Arc::clone(&self.attempt),
            current: self.current.clone(),
        }
    }
}

impl<V, F, T> fmt::Debug for RetryValueTree<V, F, T>
where
    V: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryValueTree")
            .field("source", &self.source)
            .field("current", &self.current)
            .finish()
    }
}
