//! Per-category operation traits.
//!
//! Each trait is the surface a codec works through once it has matched
//! the corresponding [`CategoryRef`](crate::CategoryRef) /
//! [`CategoryMut`](crate::CategoryMut) variant. Mutating growth goes
//! through `*_with` callbacks so a codec can fill a freshly inserted
//! slot without ever learning its concrete type.

mod enumeration;
mod map;
mod nullable;
mod pair;
mod record;
mod scalar;
mod sequence;
mod set;
mod sum;
mod text;
mod tuple;

pub use enumeration::Enumeration;
pub use map::{Map, MapKey};
pub use nullable::Nullable;
pub use pair::{Pair, PairSlots};
pub use record::{Record, RecordSchema};
pub use scalar::{Scalar, ScalarValue};
pub use sequence::{Sequence, SequenceIter};
pub use set::Set;
pub use sum::Sum;
pub use text::Text;
pub use tuple::Tuple;
