//! Category documents: the serde form of a category definition.
//!
//! A document declares the objects and either generating pairs (closed on
//! load) or a relation claimed closed. The same shape reads from JSON and
//! from TOML:
//!
//! ```toml
//! name = "chain3"
//! objects = ["a", "b", "c"]
//! generators = [["a", "b"], ["b", "c"]]
//! ```

use crate::category::ThinCategory;
use crate::error::CategoryError;
use crate::object::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub objects: Vec<ObjectId>,

    /// Generating pairs `[from, to]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generators: Option<Vec<(ObjectId, ObjectId)>>,

    /// A relation the author claims is already reflexive and transitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<BTreeMap<ObjectId, Vec<ObjectId>>>,

    /// Verify a supplied `relation` is a preorder before accepting it.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verify: bool,
}

impl CategoryDocument {
    pub fn from_json_str(input: &str) -> Result<Self, CategoryError> {
        serde_json::from_str(input).map_err(|e| CategoryError::Document(e.to_string()))
    }

    pub fn from_toml_str(input: &str) -> Result<Self, CategoryError> {
        toml::from_str(input).map_err(|e| CategoryError::Document(e.to_string()))
    }

    /// Describe an existing category by its full closed relation.
    pub fn from_category(category: &ThinCategory) -> Self {
        let relation = category
            .relation()
            .into_iter()
            .map(|(object, targets)| (object, targets.into_iter().collect()))
            .collect();
        Self {
            name: category.name().map(str::to_string),
            objects: category.objects().to_vec(),
            generators: None,
            relation: Some(relation),
            verify: false,
        }
    }

    /// Construct the category this document describes.
    ///
    /// With neither `generators` nor `relation` the category is discrete.
    pub fn build(&self) -> Result<ThinCategory, CategoryError> {
        let category = match (&self.generators, &self.relation) {
            (Some(_), Some(_)) => {
                return Err(CategoryError::Document(
                    "`generators` and `relation` are mutually exclusive".into(),
                ));
            }
            (None, Some(relation)) if self.verify => {
                ThinCategory::from_closed_relation_checked(&self.objects, relation)?
            }
            (None, Some(relation)) => ThinCategory::from_closed_relation(&self.objects, relation)?,
            (Some(generators), None) => ThinCategory::from_generators(
                &self.objects,
                generators.iter().map(|(a, b)| (a, b)),
            )?,
            (None, None) => {
                ThinCategory::from_generators(&self.objects, Vec::<(ObjectId, ObjectId)>::new())?
            }
        };

        Ok(match &self.name {
            Some(name) => category.with_name(name.clone()),
            None => category,
        })
    }
}
