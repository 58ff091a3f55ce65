//! Exhaustive functor search by backtracking.
//!
//! Source objects are assigned images one at a time, in declaration order,
//! trying target objects in declaration order. After each trial only the
//! pairs that involve the newly assigned object are checked; a branch that
//! already breaks an arrow is abandoned before it grows. Each recursive
//! frame owns its partial assignment, so nothing is undone and no state is
//! shared between branches.

use crate::category::ThinCategory;
use crate::functor::{self, Functor};
use tracing::debug;

/// Every functor from `source` to `target`.
///
/// The result is complete and free of duplicates. For fixed inputs the
/// order is deterministic: lexicographic in target declaration order,
/// keyed by source declaration order.
pub fn find_all_functors<'c>(
    source: &'c ThinCategory,
    target: &'c ThinCategory,
) -> Vec<Functor<'c>> {
    let mut found = Vec::new();
    let mut search = Search::new(source, target);
    search.extend(Vec::with_capacity(source.len()), &mut |images| {
        found.push(Functor::from_images(source, target, images));
    });
    search.report(found.len());
    found
}

/// Number of functors from `source` to `target`, without collecting them.
pub fn count_functors(source: &ThinCategory, target: &ThinCategory) -> usize {
    let mut count = 0usize;
    let mut search = Search::new(source, target);
    search.extend(Vec::with_capacity(source.len()), &mut |_| count += 1);
    search.report(count);
    count
}

struct Search<'c> {
    source: &'c ThinCategory,
    target: &'c ThinCategory,
    explored: usize,
    pruned: usize,
}

impl<'c> Search<'c> {
    fn new(source: &'c ThinCategory, target: &'c ThinCategory) -> Self {
        Self {
            source,
            target,
            explored: 0,
            pruned: 0,
        }
    }

    /// Grow `assignment` (images of the first `assignment.len()` source
    /// objects) in every consistent way, handing complete ones to `emit`.
    fn extend<F>(&mut self, assignment: Vec<usize>, emit: &mut F)
    where
        F: FnMut(Vec<usize>),
    {
        if assignment.len() == self.source.len() {
            // Pruning already covered every related pair; the full pass
            // guards the emitted functor regardless.
            if functor::preserves_arrows(self.source, self.target, &assignment) {
                emit(assignment);
            }
            return;
        }

        for candidate in 0..self.target.len() {
            self.explored += 1;
            let mut trial = assignment.clone();
            trial.push(candidate);
            if self.consistent(&trial) {
                self.extend(trial, emit);
            } else {
                self.pruned += 1;
            }
        }
    }

    /// Check the pairs between the newest object and those already placed,
    /// skipping pairs the source does not relate.
    fn consistent(&self, trial: &[usize]) -> bool {
        let newest = trial.len() - 1;
        let image = trial[newest];
        (0..=newest).all(|i| {
            let forward = !self.source.reaches(i, newest) || self.target.reaches(trial[i], image);
            let backward = !self.source.reaches(newest, i) || self.target.reaches(image, trial[i]);
            forward && backward
        })
    }

    fn report(&self, found: usize) {
        debug!(
            source = self.source.len(),
            target = self.target.len(),
            explored = self.explored,
            pruned = self.pruned,
            found,
            "functor search finished"
        );
    }
}
