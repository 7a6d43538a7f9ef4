//! Digest algorithm selection for request signatures.
//!
//! The gateway accepts a fixed set of algorithms; the merchant picks one in
//! their shop settings and the SDK must produce hex digests under the same
//! algorithm. Defaults to SHA-256.

use std::fmt;
use std::str::FromStr;

use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use thiserror::Error;

/// Algorithm identifiers the gateway accepts, in its own spelling.
pub const SUPPORTED_ALGORITHMS: &[&str] =
    &["md5", "ripemd160", "sha1", "sha256", "sha384", "sha512"];

/// A configured hash identifier is not in the supported set.
///
/// Raised at configuration time, before any request is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unsupported hash algorithm `{0}`; supported values: md5, ripemd160, sha1, sha256, sha384, sha512"
)]
pub struct UnsupportedHashAlgorithm(pub String);

/// Digest algorithm used for outbound and inbound signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    Md5,
    Ripemd160,
    Sha1,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Gateway-side identifier for this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Ripemd160 => "ripemd160",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Lower-case hex digest of `input` under this algorithm.
    pub fn hex_digest(&self, input: &str) -> String {
        let bytes = input.as_bytes();
        match self {
            HashAlgorithm::Md5 => format!("{:x}", md5::compute(bytes)),
            HashAlgorithm::Ripemd160 => hex::encode(Ripemd160::digest(bytes)),
            HashAlgorithm::Sha1 => hex::encode(Sha1::digest(bytes)),
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
            HashAlgorithm::Sha384 => hex::encode(Sha384::digest(bytes)),
            HashAlgorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = UnsupportedHashAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "ripemd160" => Ok(HashAlgorithm::Ripemd160),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            other => Err(UnsupportedHashAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sha256() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
    }

    #[test]
    fn parses_every_supported_identifier() {
        for name in SUPPORTED_ALGORITHMS {
            let algorithm: HashAlgorithm = name.parse().unwrap();
            assert_eq!(algorithm.as_str(), *name);
        }
    }

    #[test]
    fn rejects_unsupported_identifier() {
        let err = "crc32".parse::<HashAlgorithm>().unwrap_err();
        assert_eq!(err, UnsupportedHashAlgorithm("crc32".to_string()));
        assert!(err.to_string().contains("sha256"));
        assert!(err.to_string().contains("ripemd160"));
    }

    // Digests of "abc" are pinned against the published test vectors for
    // each algorithm.
    #[test]
    fn digest_test_vectors() {
        let cases = [
            (HashAlgorithm::Md5, "900150983cd24fb0d6963f7d28e17f72"),
            (
                HashAlgorithm::Ripemd160,
                "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc",
            ),
            (
                HashAlgorithm::Sha1,
                "a9993e364706816aba3e25717850c26c9cd0d89d",
            ),
            (
                HashAlgorithm::Sha256,
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
            (
                HashAlgorithm::Sha384,
                "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
            ),
            (
                HashAlgorithm::Sha512,
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            ),
        ];

        for (algorithm, expected) in cases {
            assert_eq!(algorithm.hex_digest("abc"), expected, "{algorithm}");
        }
    }

    #[test]
    fn digest_is_lower_case() {
        let digest = HashAlgorithm::Sha256.hex_digest("demo:100.00:12345:pwd1");
        assert_eq!(digest, digest.to_lowercase());
    }
}
