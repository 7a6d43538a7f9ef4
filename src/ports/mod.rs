//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GatewayTransport` - HTTP calls to the gateway; the signature engine
//!   and link builder never perform I/O themselves.

mod transport;

pub use transport::{GatewayResponse, GatewayTransport, TransportError};
