//! Object identifiers and the per-category interning table.
//!
//! Objects are opaque labels with value equality. A category interns its
//! declared objects once into dense indices; every relation lookup after
//! construction works on those indices.

use crate::error::CategoryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque identifier for an object of a thin category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for ObjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&ObjectId> for ObjectId {
    fn from(id: &ObjectId) -> Self {
        id.clone()
    }
}

/// Declaration-ordered objects with an index for O(1) membership.
#[derive(Debug, Clone, Default)]
pub(crate) struct ObjectTable {
    objects: Vec<ObjectId>,
    index: HashMap<ObjectId, usize>,
}

impl ObjectTable {
    /// Intern a declared object set. Declaring an object twice is rejected.
    pub(crate) fn intern<I, O>(objects: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = O>,
        O: Into<ObjectId>,
    {
        let mut table = ObjectTable::default();
        for object in objects {
            let object = object.into();
            if table.index.contains_key(&object) {
                return Err(CategoryError::DuplicateObject(object));
            }
            table.index.insert(object.clone(), table.objects.len());
            table.objects.push(object);
        }
        Ok(table)
    }

    pub(crate) fn index_of(&self, object: &str) -> Option<usize> {
        self.index.get(object).copied()
    }

    /// Resolve an object named by a query.
    pub(crate) fn lookup(&self, object: &str) -> Result<usize, CategoryError> {
        self.index_of(object)
            .ok_or_else(|| CategoryError::UnknownObject {
                object: ObjectId::new(object),
            })
    }

    /// Resolve an object named by construction input.
    pub(crate) fn declared(&self, object: &ObjectId, context: &str) -> Result<usize, CategoryError> {
        self.index_of(object.as_str())
            .ok_or_else(|| CategoryError::UndeclaredObject {
                object: object.clone(),
                context: context.to_string(),
            })
    }

    pub(crate) fn get(&self, index: usize) -> &ObjectId {
        &self.objects[index]
    }

    pub(crate) fn as_slice(&self) -> &[ObjectId] {
        &self.objects
    }

    pub(crate) fn len(&self) -> usize {
        self.objects.len()
    }
}
