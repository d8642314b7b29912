//! Category model and reflection surface for `triform`.
//!
//! Every marshalable type belongs to exactly one [`Category`]. The
//! [`Marshal`] trait turns a value into a typed view ([`CategoryRef`] /
//! [`CategoryMut`]) whose variants carry the operation trait for that
//! category ([`ops::Scalar`], [`ops::Sequence`], [`ops::Record`], ...).
//! Codecs walk those views recursively without ever naming the concrete
//! Rust type.
//!
//! Built-in impls cover the primitive scalars, `String`, `Option`,
//! `Box` / `Rc` / `Arc`, the std sequence / set / map collections,
//! native tuples up to arity 8 and [`Pair`]. User structs and enums
//! join the model through [`marshal_record!`], [`marshal_enum!`] and
//! [`marshal_sum!`].
//!
//! # Examples
//!
//! ```
//! use triform_value::{Category, CategoryRef, Marshal, classify};
//!
//! assert_eq!(classify::<i32>(), Category::Scalar);
//! assert_eq!(classify::<Vec<String>>(), Category::Sequence);
//!
//! let value = vec![1_i32, 2, 3];
//! let CategoryRef::Sequence(seq) = value.category_ref() else {
//!     unreachable!()
//! };
//! assert_eq!(seq.len(), 3);
//! ```

mod category;
mod impls;
mod macros;
mod marshal;

pub mod ops;

pub use category::{Category, Classify, classify};
pub use marshal::{CategoryMut, CategoryRef, Marshal};
pub use ops::{MapKey, Pair, RecordSchema, ScalarValue};
