use crate::marshal::impl_marshal_cast_fn;
use crate::ops::{Scalar, ScalarValue};
use crate::{Category, Classify, Marshal};

macro_rules! impl_marshal_for_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Classify for $ty {
                const CATEGORY: Category = Category::Scalar;
            }

            impl Marshal for $ty {
                impl_marshal_cast_fn!(Scalar);
            }

            impl Scalar for $ty {
                fn get(&self) -> ScalarValue {
                    ScalarValue::Int(*self as i64)
                }

                fn set(&mut self, value: ScalarValue) {
                    match value {
                        ScalarValue::Int(v) => {
                            if let Ok(v) = <$ty>::try_from(v) {
                                *self = v;
                            }
                        }
                        ScalarValue::UInt(v) => {
                            if let Ok(v) = <$ty>::try_from(v) {
                                *self = v;
                            }
                        }
                        _ => {}
                    }
                }
            }
        )*
    };
}

macro_rules! impl_marshal_for_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Classify for $ty {
                const CATEGORY: Category = Category::Scalar;
            }

            impl Marshal for $ty {
                impl_marshal_cast_fn!(Scalar);
            }

            impl Scalar for $ty {
                fn get(&self) -> ScalarValue {
                    ScalarValue::UInt(*self as u64)
                }

                fn set(&mut self, value: ScalarValue) {
                    match value {
                        ScalarValue::Int(v) => {
                            if let Ok(v) = <$ty>::try_from(v) {
                                *self = v;
                            }
                        }
                        ScalarValue::UInt(v) => {
                            if let Ok(v) = <$ty>::try_from(v) {
                                *self = v;
                            }
                        }
                        _ => {}
                    }
                }
            }
        )*
    };
}

impl_marshal_for_signed!(i8, i16, i32, i64, isize);
impl_marshal_for_unsigned!(u8, u16, u32, u64, usize);

impl Classify for bool {
    const CATEGORY: Category = Category::Scalar;
}

impl Marshal for bool {
    impl_marshal_cast_fn!(Scalar);
}

impl Scalar for bool {
    fn get(&self) -> ScalarValue {
        ScalarValue::Bool(*self)
    }

    fn set(&mut self, value: ScalarValue) {
        if let ScalarValue::Bool(v) = value {
            *self = v;
        }
    }
}

impl Classify for f32 {
    const CATEGORY: Category = Category::Scalar;
}

impl Marshal for f32 {
    impl_marshal_cast_fn!(Scalar);
}

impl Scalar for f32 {
    fn get(&self) -> ScalarValue {
        ScalarValue::Float(f64::from(*self))
    }

    fn set(&mut self, value: ScalarValue) {
        match value {
            ScalarValue::Int(v) => *self = v as f32,
            ScalarValue::UInt(v) => *self = v as f32,
            ScalarValue::Float(v) => *self = v as f32,
            ScalarValue::Bool(_) => {}
        }
    }
}

impl Classify for f64 {
    const CATEGORY: Category = Category::Scalar;
}

impl Marshal for f64 {
    impl_marshal_cast_fn!(Scalar);
}

impl Scalar for f64 {
    fn get(&self) -> ScalarValue {
        ScalarValue::Float(*self)
    }

    fn set(&mut self, value: ScalarValue) {
        match value {
            ScalarValue::Int(v) => *self = v as f64,
            ScalarValue::UInt(v) => *self = v as f64,
            ScalarValue::Float(v) => *self = v,
            ScalarValue::Bool(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::{Scalar, ScalarValue};

    #[test]
    fn integers_reject_out_of_range_writes() {
        let mut byte = 5_u8;
        byte.set(ScalarValue::Int(300));
        assert_eq!(byte, 5);
        byte.set(ScalarValue::Int(42));
        assert_eq!(byte, 42);
        byte.set(ScalarValue::UInt(7));
        assert_eq!(byte, 7);
    }

    #[test]
    fn signed_accepts_unsigned_carrier_in_range() {
        let mut value = 0_i32;
        value.set(ScalarValue::UInt(9));
        assert_eq!(value, 9);
        value.set(ScalarValue::UInt(u64::MAX));
        assert_eq!(value, 9);
    }

    #[test]
    fn bool_ignores_numeric_carriers() {
        let mut flag = true;
        flag.set(ScalarValue::Int(0));
        assert!(flag);
        flag.set(ScalarValue::Bool(false));
        assert!(!flag);
    }

    #[test]
    fn floats_widen_and_narrow() {
        let mut value = 0.0_f32;
        value.set(ScalarValue::Float(1.5));
        assert_eq!(value, 1.5);
        assert_eq!(value.get(), ScalarValue::Float(1.5));

        let mut wide = 0.0_f64;
        wide.set(ScalarValue::Int(-3));
        assert_eq!(wide, -3.0);
    }
}
