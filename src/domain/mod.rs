//! Domain layer: pure logic, no I/O.
//!
//! # Module Organization
//!
//! - `signature` - canonical string composition and digest compute/verify
//! - `payment` - typed outbound payment requests
//! - `callback` - inbound callback payloads and verification

pub mod callback;
pub mod payment;
pub mod signature;
