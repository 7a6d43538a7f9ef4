//! Merchant-defined `Shp_*` extension fields.
//!
//! These are opaque merchant parameters that ride along with a payment and
//! must be echoed back unchanged by the gateway. They are incorporated into
//! the signature, so their order matters: the container preserves insertion
//! order and that order is the hash order. The gateway performs the same
//! computation server-side, so reordering breaks verification.

/// Whether `key` carries the case-insensitive `Shp_` prefix.
pub fn is_custom_key(key: &str) -> bool {
    key.to_lowercase().starts_with("shp_")
}

/// A single merchant-defined key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomField {
    pub key: String,
    pub value: String,
}

/// Ordered collection of `Shp_*` fields.
///
/// Keys without the prefix are dropped on insertion, mirroring how the
/// gateway ignores them in its own signature computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFields {
    fields: Vec<CustomField>,
}

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the `Shp_*` entries from `pairs`, preserving their relative
    /// order. Non-matching keys are dropped; no matches yields an empty
    /// collection, not an error.
    pub fn collect<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut out = Self::new();
        for (key, value) in pairs {
            out.push(key, value);
        }
        out
    }

    /// Appends a field if its key carries the prefix. Returns whether the
    /// field was kept.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if !is_custom_key(&key) {
            return false;
        }
        self.fields.push(CustomField {
            key,
            value: value.into(),
        });
        true
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomField> {
        self.fields.iter()
    }

    /// `key=value` hash segments, in insertion order.
    pub(crate) fn hash_segments(&self) -> impl Iterator<Item = String> + '_ {
        self.fields
            .iter()
            .map(|field| format!("{}={}", field.key, field.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_keeps_only_prefixed_keys() {
        let fields = CustomFields::collect([
            ("OutSum", "100.00"),
            ("Shp_order", "42"),
            ("Description", "test"),
            ("Shp_user", "alice"),
        ]);

        assert_eq!(fields.len(), 2);
        let keys: Vec<_> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["Shp_order", "Shp_user"]);
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let fields = CustomFields::collect([
            ("Shp_a", "1"),
            ("shp_b", "2"),
            ("SHP_c", "3"),
            ("ShP_d", "4"),
        ]);
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn preserves_insertion_order() {
        let fields = CustomFields::collect([("Shp_z", "1"), ("Shp_a", "2"), ("Shp_m", "3")]);
        let keys: Vec<_> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["Shp_z", "Shp_a", "Shp_m"]);
    }

    #[test]
    fn no_matches_is_empty_not_an_error() {
        let fields = CustomFields::collect([("OutSum", "100.00"), ("InvId", "1")]);
        assert!(fields.is_empty());
    }

    #[test]
    fn push_rejects_unprefixed_key() {
        let mut fields = CustomFields::new();
        assert!(!fields.push("Description", "x"));
        assert!(fields.push("Shp_item", "widget"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn hash_segments_format() {
        let fields = CustomFields::collect([("Shp_foo", "bar"), ("Shp_n", "1")]);
        let segments: Vec<_> = fields.hash_segments().collect();
        assert_eq!(segments, ["Shp_foo=bar", "Shp_n=1"]);
    }
}
