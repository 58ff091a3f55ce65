//! Natural transformations between functors into a thin category.
//!
//! When the target is thin, a transformation `F => G` has no choice to
//! make: each component `F(o) -> G(o)` is the unique arrow if it exists,
//! and naturality squares commute automatically. Existence is therefore a
//! pointwise arrow check and nothing needs to be built.

use crate::category::ThinCategory;
use crate::enumerate::find_all_functors;
use crate::error::CategoryError;
use crate::functor::Functor;
use crate::object::ObjectId;

/// Whether a natural transformation `f => g` exists.
///
/// Both functors must borrow the same source and the same target category.
pub fn exists_transformation(f: &Functor<'_>, g: &Functor<'_>) -> Result<bool, CategoryError> {
    Ok(first_obstruction(f, g)?.is_none())
}

/// The first source object (declaration order) with no arrow `f(o) -> g(o)`.
pub fn first_obstruction<'c>(
    f: &Functor<'c>,
    g: &Functor<'_>,
) -> Result<Option<&'c ObjectId>, CategoryError> {
    ensure_parallel(f, g)?;
    let (source, target) = (f.source(), f.target());
    Ok((0..source.len())
        .find(|&o| !target.reaches(f.image_at(o), g.image_at(o)))
        .map(|o| source.object_at(o)))
}

fn ensure_parallel(f: &Functor<'_>, g: &Functor<'_>) -> Result<(), CategoryError> {
    if !std::ptr::eq(f.source(), g.source()) {
        return Err(CategoryError::CategoryMismatch(
            "functors do not share a source category".into(),
        ));
    }
    if !std::ptr::eq(f.target(), g.target()) {
        return Err(CategoryError::CategoryMismatch(
            "functors do not share a target category".into(),
        ));
    }
    Ok(())
}

/// All functors between two categories, ordered by transformation existence.
///
/// Objects of [`FunctorCategory::category`] are named `F0`, `F1`, … after
/// their position in [`FunctorCategory::functors`].
#[derive(Debug)]
pub struct FunctorCategory<'c> {
    functors: Vec<Functor<'c>>,
    category: ThinCategory,
}

impl<'c> FunctorCategory<'c> {
    pub fn functors(&self) -> &[Functor<'c>] {
        &self.functors
    }

    pub fn category(&self) -> &ThinCategory {
        &self.category
    }

    /// Label of the functor at `index`.
    pub fn label(index: usize) -> ObjectId {
        ObjectId::new(format!("F{index}"))
    }
}

/// Enumerate functors `source -> target` and order them pointwise.
///
/// The pointwise order on monotone maps into a preorder is itself a
/// preorder, so the relation is installed as closed without re-closing.
pub fn functor_category<'c>(
    source: &'c ThinCategory,
    target: &'c ThinCategory,
) -> Result<FunctorCategory<'c>, CategoryError> {
    let functors = find_all_functors(source, target);
    let labels: Vec<ObjectId> = (0..functors.len()).map(FunctorCategory::label).collect();

    let mut relation = Vec::with_capacity(functors.len());
    for (i, f) in functors.iter().enumerate() {
        let mut reachable = Vec::new();
        for (j, g) in functors.iter().enumerate() {
            if exists_transformation(f, g)? {
                reachable.push(labels[j].clone());
            }
        }
        relation.push((labels[i].clone(), reachable));
    }

    let category = ThinCategory::from_closed_relation(labels, relation)?;
    Ok(FunctorCategory { functors, category })
}
