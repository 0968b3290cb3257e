//! Property-based tests for digest determinism

use proptest::prelude::*;
use trimerge::tree::hasher;

proptest! {
    /// Same bytes always give the same digest; different bytes give different digests
    #[test]
    fn digest_is_deterministic(content1 in any::<Vec<u8>>(), content2 in any::<Vec<u8>>()) {
        prop_assert_eq!(hasher::hash_bytes(&content1), hasher::hash_bytes(&content1));
        if content1 != content2 {
            prop_assert_ne!(hasher::hash_bytes(&content1), hasher::hash_bytes(&content2));
        }
    }

    /// Streaming a reader agrees with hashing the whole buffer
    #[test]
    fn reader_digest_matches_buffer(content in proptest::collection::vec(any::<u8>(), 0..20_000)) {
        let streamed = hasher::hash_reader(content.as_slice()).unwrap();
        prop_assert_eq!(streamed, hasher::hash_bytes(&content));
    }

    /// Hex rendering is always 64 lowercase characters
    #[test]
    fn digest_hex_shape(content in any::<Vec<u8>>()) {
        let hex = hasher::hash_bytes(&content).to_hex();
        prop_assert_eq!(hex.len(), 64);
        prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
