//! HTTP adapter: reqwest transport and webservice XML decoding.

mod transport;
mod xml;

pub use transport::HttpTransport;
pub use xml::{xml_to_map, XmlDecodeError};
