//! Error types for thin-category operations.
//!
//! Invalid candidate mappings are not errors: they surface as `Ok(false)`
//! or `Ok(None)`. Everything here is either malformed construction input,
//! a lookup of an object the category does not have, or caller misuse.

use crate::object::ObjectId;

/// Errors arising from category construction, queries, and functor checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    /// A relation or generating pair names an object that was never declared.
    #[error("undeclared object `{object}` referenced by {context}")]
    UndeclaredObject { object: ObjectId, context: String },

    /// The same object appears twice in a declared object set.
    #[error("object `{0}` is declared more than once")]
    DuplicateObject(ObjectId),

    /// A relation supplied as closed lacks an identity arrow.
    #[error("relation is not reflexive: `{object}` has no identity arrow")]
    NotReflexive { object: ObjectId },

    /// A relation supplied as closed is missing a composite arrow.
    #[error("relation is not transitive: `{from}` -> `{via}` -> `{to}` but no `{from}` -> `{to}`")]
    NotTransitive {
        from: ObjectId,
        via: ObjectId,
        to: ObjectId,
    },

    /// A category document could not be parsed or is self-contradictory.
    #[error("invalid category document: {0}")]
    Document(String),

    /// A query named an object outside the category.
    #[error("unknown object `{object}`")]
    UnknownObject { object: ObjectId },

    /// A mapping handed to the validator is not total.
    #[error("mapping has no image for source object `{object}`")]
    IncompleteMapping { object: ObjectId },

    /// A mapping handed to the validator carries a key outside the source.
    #[error("mapping key `{object}` is not an object of the source category")]
    UnexpectedMappingKey { object: ObjectId },

    /// Two functors (or a functor pair being composed) do not share the
    /// categories the operation requires.
    #[error("category mismatch: {0}")]
    CategoryMismatch(String),
}

/// Coarse classification of a [`CategoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed construction input; no category was built.
    Validation,
    /// An object lookup failed.
    Lookup,
    /// The caller broke an operation's precondition.
    Contract,
}

impl CategoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CategoryError::UndeclaredObject { .. }
            | CategoryError::DuplicateObject(_)
            | CategoryError::NotReflexive { .. }
            | CategoryError::NotTransitive { .. }
            | CategoryError::Document(_) => ErrorKind::Validation,
            CategoryError::UnknownObject { .. } => ErrorKind::Lookup,
            CategoryError::IncompleteMapping { .. }
            | CategoryError::UnexpectedMappingKey { .. }
            | CategoryError::CategoryMismatch(_) => ErrorKind::Contract,
        }
    }

    pub fn is_contract_violation(&self) -> bool {
        self.kind() == ErrorKind::Contract
    }
}
