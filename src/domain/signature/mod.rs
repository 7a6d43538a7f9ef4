//! The signature engine: deterministic, order-sensitive hash computation.
//!
//! Used both to produce signatures for outbound requests and to verify
//! signatures on inbound untrusted callbacks.
//!
//! # Module Structure
//!
//! - `hash` - digest algorithm selection (fixed enumerated set)
//! - `custom` - ordered `Shp_*` extension-field collection
//! - `engine` - canonical string composition and digest compute/verify

mod custom;
mod engine;
mod hash;

pub use custom::{is_custom_key, CustomField, CustomFields};
pub use engine::SignatureEngine;
pub use hash::{HashAlgorithm, UnsupportedHashAlgorithm, SUPPORTED_ALGORITHMS};
