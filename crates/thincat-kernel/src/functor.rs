//! Functors between thin categories and their validation.
//!
//! Between thin categories a functor is fully determined by its action on
//! objects: there is at most one arrow to send each arrow to, so the only
//! law left is that arrows must land on arrows. A mapping `F` is a functor
//! exactly when every arrow `a -> b` of the source gives an arrow
//! `F(a) -> F(b)` in the target.

use crate::category::ThinCategory;
use crate::error::CategoryError;
use crate::object::ObjectId;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A label-keyed object mapping, as handed in by callers.
pub type Mapping = BTreeMap<ObjectId, ObjectId>;

/// A total, arrow-preserving mapping between two thin categories.
///
/// The functor borrows both categories. Two functors are only comparable
/// when they borrow the very same category values, not merely equal ones.
#[derive(Clone)]
pub struct Functor<'c> {
    source: &'c ThinCategory,
    target: &'c ThinCategory,
    images: Vec<usize>,
}

impl<'c> Functor<'c> {
    pub(crate) fn from_images(
        source: &'c ThinCategory,
        target: &'c ThinCategory,
        images: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(images.len(), source.len());
        Self {
            source,
            target,
            images,
        }
    }

    /// The identity functor on `category`.
    pub fn identity(category: &'c ThinCategory) -> Self {
        Self::from_images(category, category, (0..category.len()).collect())
    }

    pub fn source(&self) -> &'c ThinCategory {
        self.source
    }

    pub fn target(&self) -> &'c ThinCategory {
        self.target
    }

    /// The image of a source object.
    pub fn image(&self, object: impl AsRef<str>) -> Result<&'c ObjectId, CategoryError> {
        let object = object.as_ref();
        let i = self
            .source
            .index_of(object)
            .ok_or_else(|| CategoryError::UnknownObject {
                object: ObjectId::new(object),
            })?;
        Ok(self.target.object_at(self.images[i]))
    }

    /// `(object, image)` pairs in source declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'c ObjectId, &'c ObjectId)> + '_ {
        let (source, target) = (self.source, self.target);
        self.images
            .iter()
            .enumerate()
            .map(move |(i, &j)| (source.object_at(i), target.object_at(j)))
    }

    pub fn mapping(&self) -> Mapping {
        self.pairs()
            .map(|(object, image)| (object.clone(), image.clone()))
            .collect()
    }

    /// `next ∘ self`. `next` must start where `self` ends.
    pub fn compose(&self, next: &Functor<'c>) -> Result<Functor<'c>, CategoryError> {
        if !std::ptr::eq(self.target, next.source) {
            return Err(CategoryError::CategoryMismatch(
                "cannot compose: target of the first functor is not the source of the second"
                    .into(),
            ));
        }
        let images = self.images.iter().map(|&j| next.images[j]).collect();
        Ok(Functor::from_images(self.source, next.target, images))
    }

    /// Whether distinct source objects have distinct images.
    pub fn is_injective_on_objects(&self) -> bool {
        let distinct: BTreeSet<usize> = self.images.iter().copied().collect();
        distinct.len() == self.images.len()
    }

    pub(crate) fn image_at(&self, i: usize) -> usize {
        self.images[i]
    }
}

impl PartialEq for Functor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source)
            && std::ptr::eq(self.target, other.target)
            && self.images == other.images
    }
}

impl Eq for Functor<'_> {}

impl std::fmt::Debug for Functor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Functor ")?;
        f.debug_map()
            .entries(self.pairs().map(|(a, b)| (a.as_str(), b.as_str())))
            .finish()
    }
}

impl Serialize for Functor<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.pairs())
    }
}

/// Full arrow-preservation check over interned images.
pub(crate) fn preserves_arrows(
    source: &ThinCategory,
    target: &ThinCategory,
    images: &[usize],
) -> bool {
    (0..source.len()).all(|s| {
        source
            .reach_of(s)
            .iter()
            .all(|&r| target.reaches(images[s], images[r]))
    })
}

/// Decide whether `mapping` is a functor from `source` to `target`.
///
/// `Ok(false)` means the mapping is total but breaks an arrow. A mapping
/// that is not total over the source, carries keys outside the source, or
/// sends an object outside the target is a caller error.
pub fn is_valid_functor(
    source: &ThinCategory,
    target: &ThinCategory,
    mapping: &Mapping,
) -> Result<bool, CategoryError> {
    let images = resolve(source, target, mapping)?;
    Ok(preserves_arrows(source, target, &images))
}

/// Build a functor from `mapping`, or `Ok(None)` when it breaks an arrow.
pub fn create_functor<'c>(
    source: &'c ThinCategory,
    target: &'c ThinCategory,
    mapping: &Mapping,
) -> Result<Option<Functor<'c>>, CategoryError> {
    let images = resolve(source, target, mapping)?;
    if preserves_arrows(source, target, &images) {
        Ok(Some(Functor::from_images(source, target, images)))
    } else {
        Ok(None)
    }
}

fn resolve(
    source: &ThinCategory,
    target: &ThinCategory,
    mapping: &Mapping,
) -> Result<Vec<usize>, CategoryError> {
    if let Some(stray) = mapping.keys().find(|key| !source.contains(key)) {
        return Err(CategoryError::UnexpectedMappingKey {
            object: stray.clone(),
        });
    }

    source
        .objects()
        .iter()
        .map(|object| {
            let image = mapping
                .get(object)
                .ok_or_else(|| CategoryError::IncompleteMapping {
                    object: object.clone(),
                })?;
            target
                .index_of(image.as_str())
                .ok_or_else(|| CategoryError::UnknownObject {
                    object: image.clone(),
                })
        })
        .collect()
}
