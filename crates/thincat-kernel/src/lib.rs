//! # Thincat Kernel
//!
//! Thin categories (finite preorders), the functors between them, and the
//! natural transformations between those functors.
//!
//! Between thin categories everything collapses to objects: an arrow is
//! just an ordered pair, a functor is just a mapping of objects that sends
//! arrows to arrows, and a natural transformation either exists or does
//! not. The kernel computes three things:
//!
//! 1. the reflexive-transitive closure of a generating relation,
//! 2. every functor between two thin categories,
//! 3. whether a natural transformation exists between two functors.
//!
//! ## Architecture
//!
//! ```text
//! ObjectId / ObjectTable   ← labels, interned to dense indices
//!     │
//! closure                  ← generators → reflexive-transitive relation
//!     │
//! ThinCategory             ← validated objects + closed relation
//!     │
//! Functor / validator      ← arrow-preserving total mappings
//!     │
//! enumerate                ← backtracking search over all mappings
//!     │
//! transformation           ← pointwise arrow compatibility
//! ```
//!
//! Nothing here performs I/O. [`document`] gives categories a serde form
//! so front ends can load them from JSON or TOML.

pub mod category;
pub mod closure;
pub mod document;
pub mod enumerate;
pub mod error;
pub mod functor;
pub mod object;
pub mod transformation;

pub use category::ThinCategory;
pub use closure::{Relation, reflexive_transitive_closure};
pub use document::CategoryDocument;
pub use enumerate::{count_functors, find_all_functors};
pub use error::{CategoryError, ErrorKind};
pub use functor::{Functor, Mapping, create_functor, is_valid_functor};
pub use object::ObjectId;
pub use transformation::{
    FunctorCategory, exists_transformation, first_obstruction, functor_category,
};
