//! Canonical serialization and sequence-hash computation.
//!
//! Every field that contributes to a record's hash is listed explicitly so
//! nothing is accidentally omitted.
//!
//! Hash input layout (bytes, in order):
//!   1. canonical JSON of the record content, keys sorted lexicographically:
//!      `{action_type, actor_id, details, entity_id, new_state, previous_state}`
//!   2. previous_hash as UTF-8 bytes (64 ASCII hex chars, or empty for the
//!      first record of a chain)
//!
//! The sorted-key requirement is what makes the hash reproducible from
//! persisted fields regardless of storage representation.  It is realized
//! structurally: `HashContent` declares its fields in lexicographic order
//! (serde serializes struct fields in declaration order) and `details` is a
//! `BTreeMap`, so nested keys are sorted too.

use serde::Serialize;
use sha2::{Digest, Sha256};

use sgrs_contracts::record::Details;

/// The exact content a sequence hash commits to.
///
/// `created_at`, `origin`, and the record's own hash are deliberately
/// excluded: the first two are assigned after hashing, and including the
/// hash itself would be circular.
#[derive(Serialize)]
struct HashContent<'a> {
    // Field order is the canonical (lexicographic) key order.
    action_type: &'a str,
    actor_id: i64,
    details: &'a Details,
    entity_id: i64,
    new_state: Option<&'a str>,
    previous_state: Option<&'a str>,
}

/// Compute the SHA-256 sequence hash for one record's content linked to its
/// predecessor.
///
/// Returns a lowercase 64-character hex string.  A pure function: identical
/// inputs always produce the identical digest.
///
/// # Panics
///
/// Panics if the content cannot be serialized to JSON — which cannot happen
/// for string-keyed maps of JSON values.
pub fn sequence_hash(
    entity_id: i64,
    actor_id: i64,
    action_type: &str,
    previous_state: Option<&str>,
    new_state: Option<&str>,
    details: &Details,
    previous_hash: &str,
) -> String {
    let content = HashContent {
        action_type,
        actor_id,
        details,
        entity_id,
        new_state,
        previous_state,
    };
    let canonical = serde_json::to_vec(&content)
        .expect("hash content must always be serializable to JSON");

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    hasher.update(previous_hash.as_bytes());

    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sgrs_contracts::record::Details;

    use super::sequence_hash;

    fn details(pairs: &[(&str, serde_json::Value)]) -> Details {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// The digest is a pure function of its inputs.
    #[test]
    fn hash_is_deterministic() {
        let d = details(&[("title", json!("Pothole")), ("ward", json!("12"))]);
        let a = sequence_hash(7, 3, "CREATED", None, Some("submitted"), &d, "");
        let b = sequence_hash(7, 3, "CREATED", None, Some("submitted"), &d, "");
        assert_eq!(a, b);
    }

    #[test]
    fn hash_is_lowercase_hex_64() {
        let h = sequence_hash(1, 1, "CREATED", None, None, &Details::new(), "");
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// Details insertion order must not affect the digest — the map is
    /// key-sorted before serialization.
    #[test]
    fn details_insertion_order_is_irrelevant() {
        let mut forward = Details::new();
        forward.insert("alpha".to_string(), json!(1));
        forward.insert("beta".to_string(), json!(2));

        let mut reverse = Details::new();
        reverse.insert("beta".to_string(), json!(2));
        reverse.insert("alpha".to_string(), json!(1));

        assert_eq!(
            sequence_hash(7, 3, "UPDATED", Some("a"), Some("b"), &forward, "x"),
            sequence_hash(7, 3, "UPDATED", Some("a"), Some("b"), &reverse, "x"),
        );
    }

    /// Any participating field changes the digest.
    #[test]
    fn every_hashed_field_matters() {
        let d = details(&[("title", json!("Pothole"))]);
        let base = sequence_hash(7, 3, "CREATED", None, Some("submitted"), &d, "");

        assert_ne!(base, sequence_hash(8, 3, "CREATED", None, Some("submitted"), &d, ""));
        assert_ne!(base, sequence_hash(7, 4, "CREATED", None, Some("submitted"), &d, ""));
        assert_ne!(base, sequence_hash(7, 3, "UPDATED", None, Some("submitted"), &d, ""));
        assert_ne!(base, sequence_hash(7, 3, "CREATED", Some("x"), Some("submitted"), &d, ""));
        assert_ne!(base, sequence_hash(7, 3, "CREATED", None, Some("rejected"), &d, ""));
        assert_ne!(
            base,
            sequence_hash(7, 3, "CREATED", None, Some("submitted"), &Details::new(), "")
        );
        assert_ne!(base, sequence_hash(7, 3, "CREATED", None, Some("submitted"), &d, "aa"));
    }

    /// `None` and `Some("")` are distinct states and must hash differently.
    #[test]
    fn absent_state_differs_from_empty_state() {
        let d = Details::new();
        let absent = sequence_hash(7, 3, "CREATED", None, None, &d, "");
        let empty = sequence_hash(7, 3, "CREATED", Some(""), None, &d, "");
        assert_ne!(absent, empty);
    }
}
