//! Adapters implementing the transport port.
//!
//! - `http` - reqwest-backed transport and webservice XML decoding
//! - `mock` - in-memory transport double for tests

pub mod http;
pub mod mock;
