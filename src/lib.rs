#![doc = include_str!("../README.md")]

pub use triform_codec as codec;
pub use triform_value as value;

pub use triform_codec::{Format, MarshalError, ini, json, xml};
pub use triform_value::{
    Category, CategoryMut, CategoryRef, Classify, Marshal, Pair, RecordSchema, ScalarValue,
    classify, marshal_enum, marshal_record, marshal_sum,
};
