use core::fmt;

use crate::Marshal;

/// Lossless carrier for a scalar leaf.
///
/// Signed integers travel as [`Int`](ScalarValue::Int), unsigned ones
/// as [`UInt`](ScalarValue::UInt) so that the full `u64` range
/// survives the trip. The variant a slot reports from
/// [`Scalar::get`] also tells text codecs how to parse it back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Operations of [`Category::Scalar`](crate::Category::Scalar) values.
pub trait Scalar: Marshal {
    /// Reads the current value.
    fn get(&self) -> ScalarValue;

    /// Writes a value.
    ///
    /// A carrier that does not fit the slot (wrong variant, or an
    /// integer outside the slot's range) is dropped and the slot keeps
    /// its previous value.
    fn set(&mut self, value: ScalarValue);
}
