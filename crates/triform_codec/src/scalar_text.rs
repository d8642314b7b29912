//! Scalar text handling shared by the element- and key-value-based
//! codecs.
//!
//! XML and INI carry every leaf as text, so the slot's current
//! [`ScalarValue`] variant decides how the text parses back. Text that
//! does not parse as that variant is dropped and the slot keeps its
//! value.

use triform_value::ScalarValue;
use triform_value::ops::Scalar;

pub(crate) fn decode_scalar(slot: &mut dyn Scalar, text: &str) {
    let text = text.trim();
    match slot.get() {
        ScalarValue::Bool(_) => {
            if text == "true" || text == "1" {
                slot.set(ScalarValue::Bool(true));
            } else if text == "false" || text == "0" {
                slot.set(ScalarValue::Bool(false));
            }
        }
        ScalarValue::Int(_) => {
            if let Ok(v) = text.parse::<i64>() {
                slot.set(ScalarValue::Int(v));
            }
        }
        ScalarValue::UInt(_) => {
            if let Ok(v) = text.parse::<u64>() {
                slot.set(ScalarValue::UInt(v));
            }
        }
        ScalarValue::Float(_) => {
            if let Ok(v) = text.parse::<f64>() {
                slot.set(ScalarValue::Float(v));
            }
        }
    }
}
