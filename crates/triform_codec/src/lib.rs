//! JSON, XML and INI codecs over the `triform_value` category model.
//!
//! Each codec module walks a value's typed view recursively and maps
//! every category onto its collaborator's document model:
//! [`serde_json::Value`] for JSON, [`xmltree::Element`] for XML and a
//! `Properties` section of an INI document for INI.
//!
//! Decoding is best effort. A document that fails to parse at all is
//! reported as [`MarshalError`], and so is a missing XML root or INI
//! section. Inside a parsed document, members that are missing, carry
//! the wrong shape or fail to parse are skipped and the target keeps
//! its previous (usually default) state for them. Skips worth knowing
//! about are emitted as `tracing` warnings.
//!
//! # Examples
//!
//! ```
//! use triform_codec::json;
//!
//! assert_eq!(json::stringify(&42_i32), "42");
//! assert_eq!(json::parse::<i32>("42").unwrap(), 42);
//! ```

mod error;
mod scalar_text;

pub mod ini;
pub mod json;
pub mod xml;

pub use error::{Format, MarshalError};
