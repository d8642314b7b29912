/// Marshals a struct as a [`Category::Record`](crate::Category::Record).
///
/// List every field that should travel; unlisted fields are invisible
/// to the codecs. Field names become the member / element / key names
/// in the encoded form, in declaration order.
///
/// # Examples
///
/// ```
/// use triform_value::{Category, classify, marshal_record};
///
/// #[derive(Default)]
/// struct Person {
///     name: String,
///     age: i32,
///     skills: Vec<String>,
/// }
///
/// marshal_record!(Person { name, age, skills });
///
/// assert_eq!(classify::<Person>(), Category::Record);
/// ```
#[macro_export]
macro_rules! marshal_record {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::Classify for $ty {
            const CATEGORY: $crate::Category = $crate::Category::Record;
        }

        impl $crate::Marshal for $ty {
            #[inline]
            fn category(&self) -> $crate::Category {
                $crate::Category::Record
            }

            #[inline]
            fn category_ref(&self) -> $crate::CategoryRef<'_> {
                $crate::CategoryRef::Record(self)
            }

            #[inline]
            fn category_mut(&mut self) -> $crate::CategoryMut<'_> {
                $crate::CategoryMut::Record(self)
            }
        }

        impl $crate::ops::Record for $ty {
            fn schema(&self) -> &'static $crate::RecordSchema {
                static SCHEMA: $crate::RecordSchema = $crate::RecordSchema {
                    type_name: ::core::stringify!($ty),
                    field_names: &[$(::core::stringify!($field)),+],
                };
                &SCHEMA
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn $crate::Marshal> {
                match name {
                    $(::core::stringify!($field) => {
                        ::core::option::Option::Some(&self.$field as &dyn $crate::Marshal)
                    })+
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn $crate::Marshal> {
                match name {
                    $(::core::stringify!($field) => {
                        ::core::option::Option::Some(&mut self.$field as &mut dyn $crate::Marshal)
                    })+
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

/// Marshals a C-like enum as a [`Category::Enum`](crate::Category::Enum).
///
/// The enum travels as its integer discriminant, so it must be a unit
/// enum (`#[repr]` discriminants are honored). List every variant; an
/// ordinal matching none of them is rejected on decode.
///
/// # Examples
///
/// ```
/// use triform_value::{Category, classify, marshal_enum};
///
/// #[derive(Clone, Copy, Default, PartialEq, Debug)]
/// enum Color {
///     #[default]
///     Red,
///     Green,
///     Blue,
/// }
///
/// marshal_enum!(Color { Red, Green, Blue });
///
/// assert_eq!(classify::<Color>(), Category::Enum);
/// ```
#[macro_export]
macro_rules! marshal_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::Classify for $ty {
            const CATEGORY: $crate::Category = $crate::Category::Enum;
        }

        impl $crate::Marshal for $ty {
            #[inline]
            fn category(&self) -> $crate::Category {
                $crate::Category::Enum
            }

            #[inline]
            fn category_ref(&self) -> $crate::CategoryRef<'_> {
                $crate::CategoryRef::Enum(self)
            }

            #[inline]
            fn category_mut(&mut self) -> $crate::CategoryMut<'_> {
                $crate::CategoryMut::Enum(self)
            }
        }

        impl $crate::ops::Enumeration for $ty {
            fn ordinal(&self) -> i64 {
                *self as i64
            }

            fn set_ordinal(&mut self, ordinal: i64) -> bool {
                $(
                    if ordinal == $ty::$variant as i64 {
                        *self = $ty::$variant;
                        return true;
                    }
                )+
                false
            }
        }
    };
}

/// Marshals a payload-carrying enum as a write-only
/// [`Category::Sum`](crate::Category::Sum).
///
/// Every variant must carry exactly one unnamed payload. The encoded
/// form is the active payload bare, with no discriminant, which is why
/// sums cannot be decoded.
///
/// # Examples
///
/// ```
/// use triform_value::{Category, classify, marshal_sum};
///
/// enum Shape {
///     Sides(u32),
///     Radius(f64),
/// }
///
/// marshal_sum!(Shape { Sides, Radius });
///
/// assert_eq!(classify::<Shape>(), Category::Sum);
/// ```
#[macro_export]
macro_rules! marshal_sum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::Classify for $ty {
            const CATEGORY: $crate::Category = $crate::Category::Sum;
        }

        impl $crate::Marshal for $ty {
            #[inline]
            fn category(&self) -> $crate::Category {
                $crate::Category::Sum
            }

            #[inline]
            fn category_ref(&self) -> $crate::CategoryRef<'_> {
                $crate::CategoryRef::Sum(self)
            }

            #[inline]
            fn category_mut(&mut self) -> $crate::CategoryMut<'_> {
                $crate::CategoryMut::Sum(self)
            }
        }

        impl $crate::ops::Sum for $ty {
            fn active(&self) -> &dyn $crate::Marshal {
                match self {
                    $($ty::$variant(payload) => payload as &dyn $crate::Marshal,)+
                }
            }
        }
    };
}
