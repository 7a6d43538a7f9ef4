//! Canonical string composition and signature computation.
//!
//! A signature is the hex digest of the `:`-joined required fields followed
//! by `key=value` extension segments, under the configured algorithm.
//! Composition is pure and stateless; verification compares hex digests
//! case-insensitively in constant time.

use subtle::ConstantTimeEq;

use super::custom::CustomFields;
use super::hash::HashAlgorithm;

/// Computes and verifies gateway signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureEngine {
    algorithm: HashAlgorithm,
}

impl SignatureEngine {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Canonical string for the given required fields and extension fields.
    ///
    /// Callers must filter out absent optional fields beforehand: an absent
    /// field is omitted entirely, never passed through as an empty segment.
    pub fn canonical(required: &[&str], custom: &CustomFields) -> String {
        let mut out = required.join(":");
        for segment in custom.hash_segments() {
            out.push(':');
            out.push_str(&segment);
        }
        out
    }

    /// Lower-case hex digest of the canonical string.
    pub fn sign(&self, required: &[&str], custom: &CustomFields) -> String {
        self.algorithm
            .hex_digest(&Self::canonical(required, custom))
    }

    /// True iff `supplied` hex-matches the recomputed digest, ignoring case.
    pub fn verify(&self, required: &[&str], custom: &CustomFields, supplied: &str) -> bool {
        hex_eq_ignore_case(&self.sign(required, custom), supplied)
    }
}

/// Case-insensitive, constant-time comparison of two hex strings.
fn hex_eq_ignore_case(expected: &str, supplied: &str) -> bool {
    if expected.len() != supplied.len() {
        return false;
    }
    let expected = expected.to_ascii_lowercase();
    let supplied = supplied.to_ascii_lowercase();
    expected.as_bytes().ct_eq(supplied.as_bytes()).into()
}
