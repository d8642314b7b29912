/// The closed set of marshaling shapes.
///
/// A category decides which operation trait a value exposes and which
/// branch every codec takes for it. The set is closed: codecs match
/// exhaustively and adding a variant is a breaking change across the
/// workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Numeric or boolean leaf, carried as [`ScalarValue`](crate::ScalarValue).
    Scalar,
    /// String leaf.
    Text,
    /// C-like enum, carried as its integer ordinal.
    Enum,
    /// Optional value (`Option<T>`).
    Nullable,
    /// Ordered homogeneous collection (`Vec`, `VecDeque`).
    Sequence,
    /// Unordered homogeneous collection (`HashSet`, `BTreeSet`).
    Set,
    /// Keyed collection (`HashMap`, `BTreeMap`).
    Map,
    /// Two heterogeneous slots named `first` and `second`.
    Pair,
    /// Fixed run of heterogeneous positional slots.
    Tuple,
    /// One-of type whose active alternative is encoded bare. Write-only.
    Sum,
    /// Named heterogeneous fields in declaration order.
    Record,
}

/// Compile-time category of a type.
///
/// Pointer wrappers forward the category of their pointee, everything
/// else states its own. [`classify`] reads the constant without needing
/// a value in hand.
pub trait Classify {
    const CATEGORY: Category;
}

/// Returns the category `T` marshals as.
///
/// # Examples
///
/// ```
/// use triform_value::{Category, classify};
///
/// assert_eq!(classify::<bool>(), Category::Scalar);
/// assert_eq!(classify::<Option<String>>(), Category::Nullable);
/// assert_eq!(classify::<Box<u8>>(), Category::Scalar);
/// ```
pub const fn classify<T: Classify>() -> Category {
    T::CATEGORY
}
