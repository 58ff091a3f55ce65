//! Thin categories: a finite object set with a preorder of arrows.
//!
//! A thin category has at most one arrow between any ordered pair of
//! objects, so it is exactly a preorder. Construction either closes a set
//! of generating pairs (closure guaranteed) or accepts a relation the
//! caller claims is already closed. Membership is validated on both paths;
//! closure is only re-verified on request.

use crate::closure::{self, Reach, Relation};
use crate::error::CategoryError;
use crate::object::{ObjectId, ObjectTable};
use std::collections::BTreeSet;
use tracing::debug;

/// A finite thin category.
///
/// Objects keep their declaration order; that order is the fixed object
/// order used by functor search and by every listing this type produces.
#[derive(Debug, Clone)]
pub struct ThinCategory {
    name: Option<String>,
    table: ObjectTable,
    reach: Reach,
}

impl ThinCategory {
    /// Build a category from generating pairs, closing them first.
    pub fn from_generators<I, O, G, A, B>(objects: I, generators: G) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = O>,
        O: Into<ObjectId>,
        G: IntoIterator<Item = (A, B)>,
        A: Into<ObjectId>,
        B: Into<ObjectId>,
    {
        let table = ObjectTable::intern(objects)?;
        let reach = closure::close(&table, generators)?;
        Ok(Self {
            name: None,
            table,
            reach,
        })
    }

    /// Build a category from a relation that is trusted to be closed.
    ///
    /// Every key and every target must be a declared object. Objects with
    /// no entry get no arrows at all: the relation is taken exactly as
    /// given. Use [`ThinCategory::from_closed_relation_checked`] when the
    /// relation comes from somewhere that cannot be trusted.
    pub fn from_closed_relation<I, O, R, K, T, E>(objects: I, relation: R) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = O>,
        O: Into<ObjectId>,
        R: IntoIterator<Item = (K, T)>,
        K: Into<ObjectId>,
        T: IntoIterator<Item = E>,
        E: Into<ObjectId>,
    {
        let table = ObjectTable::intern(objects)?;
        let mut reach: Reach = vec![BTreeSet::new(); table.len()];

        for (source, targets) in relation {
            let source = source.into();
            let i = table.declared(&source, "relation key")?;
            for target in targets {
                let target = target.into();
                let context = format!("relation entry for `{source}`");
                let j = table.declared(&target, &context)?;
                reach[i].insert(j);
            }
        }

        Ok(Self {
            name: None,
            table,
            reach,
        })
    }

    /// Like [`ThinCategory::from_closed_relation`], but rejects relations
    /// that are not reflexive and transitive.
    pub fn from_closed_relation_checked<I, O, R, K, T, E>(
        objects: I,
        relation: R,
    ) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = O>,
        O: Into<ObjectId>,
        R: IntoIterator<Item = (K, T)>,
        K: Into<ObjectId>,
        T: IntoIterator<Item = E>,
        E: Into<ObjectId>,
    {
        let category = Self::from_closed_relation(objects, relation)?;
        category.verify_preorder()?;
        Ok(category)
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check that the relation is reflexive and transitive.
    ///
    /// Reports the first violation in declaration order.
    pub fn verify_preorder(&self) -> Result<(), CategoryError> {
        for (i, reachable) in self.reach.iter().enumerate() {
            if !reachable.contains(&i) {
                return Err(CategoryError::NotReflexive {
                    object: self.table.get(i).clone(),
                });
            }
        }

        for (i, reachable) in self.reach.iter().enumerate() {
            for &j in reachable {
                if let Some(&k) = self.reach[j].iter().find(|&&k| !reachable.contains(&k)) {
                    return Err(CategoryError::NotTransitive {
                        from: self.table.get(i).clone(),
                        via: self.table.get(j).clone(),
                        to: self.table.get(k).clone(),
                    });
                }
            }
        }

        debug!(objects = self.len(), "relation verified as a preorder");
        Ok(())
    }

    /// Whether there is an arrow `source -> target`.
    ///
    /// Naming an object outside the category is an error, not `false`.
    pub fn has_arrow(
        &self,
        source: impl AsRef<str>,
        target: impl AsRef<str>,
    ) -> Result<bool, CategoryError> {
        let i = self.table.lookup(source.as_ref())?;
        let j = self.table.lookup(target.as_ref())?;
        Ok(self.reaches(i, j))
    }

    /// Objects in declaration order.
    pub fn objects(&self) -> &[ObjectId] {
        self.table.as_slice()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    pub fn contains(&self, object: impl AsRef<str>) -> bool {
        self.table.index_of(object.as_ref()).is_some()
    }

    /// Every object `object` has an arrow to, in declaration order.
    pub fn reachable_from(&self, object: impl AsRef<str>) -> Result<Vec<&ObjectId>, CategoryError> {
        let i = self.table.lookup(object.as_ref())?;
        Ok(self.reach[i].iter().map(|&j| self.table.get(j)).collect())
    }

    /// All arrows, identities included, ordered by source then target.
    pub fn arrows(&self) -> impl Iterator<Item = (&ObjectId, &ObjectId)> + '_ {
        self.reach.iter().enumerate().flat_map(move |(i, reachable)| {
            reachable
                .iter()
                .map(move |&j| (self.table.get(i), self.table.get(j)))
        })
    }

    /// Whether `a` and `b` have arrows both ways.
    pub fn is_isomorphic_pair(
        &self,
        a: impl AsRef<str>,
        b: impl AsRef<str>,
    ) -> Result<bool, CategoryError> {
        let i = self.table.lookup(a.as_ref())?;
        let j = self.table.lookup(b.as_ref())?;
        Ok(self.reaches(i, j) && self.reaches(j, i))
    }

    /// The opposite category: same objects, every arrow reversed.
    pub fn opposite(&self) -> Self {
        let mut reach: Reach = vec![BTreeSet::new(); self.len()];
        for (i, reachable) in self.reach.iter().enumerate() {
            for &j in reachable {
                reach[j].insert(i);
            }
        }
        Self {
            name: self.name.as_ref().map(|name| format!("{name}^op")),
            table: self.table.clone(),
            reach,
        }
    }

    /// The relation keyed by object label.
    pub fn relation(&self) -> Relation {
        closure::to_relation(&self.table, &self.reach)
    }

    pub(crate) fn reaches(&self, i: usize, j: usize) -> bool {
        self.reach[i].contains(&j)
    }

    pub(crate) fn reach_of(&self, i: usize) -> &BTreeSet<usize> {
        &self.reach[i]
    }

    pub(crate) fn index_of(&self, object: &str) -> Option<usize> {
        self.table.index_of(object)
    }

    pub(crate) fn object_at(&self, i: usize) -> &ObjectId {
        self.table.get(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ThinCategory {
        ThinCategory::from_generators(["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap()
    }

    #[test]
    fn has_arrow_on_closed_chain() {
        let cat = chain();
        assert!(cat.has_arrow("a", "c").unwrap());
        assert!(cat.has_arrow("b", "b").unwrap());
        assert!(!cat.has_arrow("c", "a").unwrap());
    }

    #[test]
    fn has_arrow_unknown_object_is_lookup_failure() {
        let cat = chain();
        assert_eq!(
            cat.has_arrow("z", "a"),
            Err(CategoryError::UnknownObject {
                object: ObjectId::new("z")
            })
        );
        assert!(cat.has_arrow("a", "z").is_err());
    }

    #[test]
    fn closed_relation_undeclared_key_rejected() {
        let err = ThinCategory::from_closed_relation(["a"], [("q", vec!["a"])]).unwrap_err();
        assert_eq!(
            err,
            CategoryError::UndeclaredObject {
                object: ObjectId::new("q"),
                context: "relation key".into(),
            }
        );
    }

    #[test]
    fn closed_relation_undeclared_target_rejected() {
        let err =
            ThinCategory::from_closed_relation(["a"], [("a", vec!["a", "w"])]).unwrap_err();
        assert!(matches!(
            err,
            CategoryError::UndeclaredObject { ref object, .. } if object.as_str() == "w"
        ));
    }

    #[test]
    fn closed_relation_taken_as_given() {
        // Not reflexive, accepted anyway on the trusted path.
        let cat = ThinCategory::from_closed_relation(["a", "b"], [("a", vec!["b"])]).unwrap();
        assert!(cat.has_arrow("a", "b").unwrap());
        assert!(!cat.has_arrow("a", "a").unwrap());
        assert!(cat.reachable_from("b").unwrap().is_empty());
    }

    #[test]
    fn checked_relation_rejects_missing_identity() {
        let err = ThinCategory::from_closed_relation_checked(
            ["a", "b"],
            [("a", vec!["a", "b"]), ("b", vec![])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CategoryError::NotReflexive {
                object: ObjectId::new("b")
            }
        );
    }

    #[test]
    fn checked_relation_rejects_missing_composite() {
        let err = ThinCategory::from_closed_relation_checked(
            ["a", "b", "c"],
            [
                ("a", vec!["a", "b"]),
                ("b", vec!["b", "c"]),
                ("c", vec!["c"]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CategoryError::NotTransitive {
                from: ObjectId::new("a"),
                via: ObjectId::new("b"),
                to: ObjectId::new("c"),
            }
        );
    }

    #[test]
    fn checked_relation_accepts_preorder() {
        let relation = chain().relation();
        let cat = ThinCategory::from_closed_relation_checked(["a", "b", "c"], relation).unwrap();
        assert!(cat.has_arrow("a", "c").unwrap());
    }

    #[test]
    fn arrows_listed_in_declaration_order() {
        let cat = ThinCategory::from_generators(["y", "x"], [("y", "x")]).unwrap();
        let arrows: Vec<(&str, &str)> = cat
            .arrows()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(arrows, vec![("y", "y"), ("y", "x"), ("x", "x")]);
    }

    #[test]
    fn opposite_reverses_arrows() {
        let op = chain().with_name("chain").opposite();
        assert_eq!(op.name(), Some("chain^op"));
        assert!(op.has_arrow("c", "a").unwrap());
        assert!(!op.has_arrow("a", "c").unwrap());
        op.verify_preorder().unwrap();
    }

    #[test]
    fn cycle_members_are_isomorphic_not_merged() {
        let cat = ThinCategory::from_generators(["a", "b"], [("a", "b"), ("b", "a")]).unwrap();
        assert!(cat.is_isomorphic_pair("a", "b").unwrap());
        assert_eq!(cat.len(), 2);
    }

    #[test]
    fn empty_category() {
        let cat = ThinCategory::from_generators(Vec::<&str>::new(), Vec::<(&str, &str)>::new())
            .unwrap();
        assert!(cat.is_empty());
        assert_eq!(cat.arrows().count(), 0);
        cat.verify_preorder().unwrap();
    }
}
