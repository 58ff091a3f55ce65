//! Reflexive-transitive closure of a generating relation.
//!
//! Every object starts out reaching only itself. Generating pairs add
//! direct edges, then reachable sets are saturated: each object absorbs
//! the reachable sets of everything it already reaches, pass after pass,
//! until a full pass changes nothing. Naive, cubic in the worst case, and
//! fine at the sizes these categories are built for.

use crate::error::CategoryError;
use crate::object::{ObjectId, ObjectTable};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// A label-keyed relation: each object and the objects it has an arrow to.
pub type Relation = BTreeMap<ObjectId, BTreeSet<ObjectId>>;

/// Index-keyed reachable sets, one per interned object.
pub(crate) type Reach = Vec<BTreeSet<usize>>;

/// Close `generators` over `objects` into a reflexive-transitive relation.
///
/// Fails with [`CategoryError::UndeclaredObject`] when a generating pair
/// mentions an object outside `objects`, and with
/// [`CategoryError::DuplicateObject`] when `objects` repeats a label.
pub fn reflexive_transitive_closure<I, O, G, A, B>(
    objects: I,
    generators: G,
) -> Result<Relation, CategoryError>
where
    I: IntoIterator<Item = O>,
    O: Into<ObjectId>,
    G: IntoIterator<Item = (A, B)>,
    A: Into<ObjectId>,
    B: Into<ObjectId>,
{
    let table = ObjectTable::intern(objects)?;
    let reach = close(&table, generators)?;
    Ok(to_relation(&table, &reach))
}

pub(crate) fn close<G, A, B>(table: &ObjectTable, generators: G) -> Result<Reach, CategoryError>
where
    G: IntoIterator<Item = (A, B)>,
    A: Into<ObjectId>,
    B: Into<ObjectId>,
{
    let mut reach: Reach = (0..table.len()).map(|i| BTreeSet::from([i])).collect();
    let mut edges = 0usize;

    for (from, to) in generators {
        let (from, to) = (from.into(), to.into());
        let context = format!("generating pair ({from}, {to})");
        let i = table.declared(&from, &context)?;
        let j = table.declared(&to, &context)?;
        reach[i].insert(j);
        edges += 1;
    }

    debug!(objects = table.len(), edges, "closing generating relation");
    Ok(saturate(reach))
}

/// Run union passes until a fixed point.
pub(crate) fn saturate(mut reach: Reach) -> Reach {
    let mut passes = 0usize;
    loop {
        passes += 1;
        let mut changed = false;

        for v in 0..reach.len() {
            let mut grown = reach[v].clone();
            for &u in &reach[v] {
                if u != v {
                    grown.extend(reach[u].iter().copied());
                }
            }
            if grown.len() != reach[v].len() {
                reach[v] = grown;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    debug!(objects = reach.len(), passes, "closure saturated");
    reach
}

pub(crate) fn to_relation(table: &ObjectTable, reach: &Reach) -> Relation {
    reach
        .iter()
        .enumerate()
        .map(|(i, targets)| {
            let targets = targets.iter().map(|&j| table.get(j).clone()).collect();
            (table.get(i).clone(), targets)
        })
        .collect()
}
