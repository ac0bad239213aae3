//! Property tests for the path codec and coercion rules.

use proptest::prelude::*;

use ltree_rs::coerce::{self, to_tagged_array};
use ltree_rs::{decode_path, encode_path, PatternDialect, TaggedArray};

proptest! {
    /// decode ∘ encode ∘ decode is the identity on the path text, for any
    /// input at all — the codec never normalizes.
    #[test]
    fn roundtrip_decode_encode(s in ".*") {
        let path = decode_path(encode_path(&decode_path(s.clone())));
        prop_assert_eq!(path.path, s);
    }

    /// Splitting into labels and rejoining on `.` reproduces the path,
    /// empty segments included.
    #[test]
    fn labels_rejoin_to_path(s in "[a-zA-Z0-9_.]{0,40}") {
        let path = decode_path(s.clone());
        let rejoined = path.labels().collect::<Vec<_>>().join(".");
        prop_assert_eq!(rejoined, s);
    }

    /// List coercion preserves element order exactly.
    #[test]
    fn list_coercion_preserves_order(
        elements in proptest::collection::vec("[a-z*.]{1,8}", 0..8)
    ) {
        let array = to_tagged_array(elements.clone().into(), PatternDialect::Lquery).unwrap();
        prop_assert_eq!(array.elements(), elements.as_slice());
        prop_assert_eq!(array.dialect(), PatternDialect::Lquery);
    }

    /// Coercing an already-correctly-tagged array changes nothing.
    #[test]
    fn coercion_is_idempotent_on_correct_tag(
        elements in proptest::collection::vec("[a-z*.]{1,8}", 0..8)
    ) {
        let array = TaggedArray::new(PatternDialect::Ltree, elements);
        let out = to_tagged_array(array.clone().into(), PatternDialect::Ltree).unwrap();
        prop_assert_eq!(out, array);
    }

    /// Concatenation via the codec: parent of a child is the original.
    #[test]
    fn parent_inverts_child(s in "[a-z]{1,6}(\\.[a-z]{1,6}){0,4}", label in "[a-z]{1,6}") {
        let path = coerce::decode_path(s);
        prop_assert_eq!(path.child(&label).parent(), Some(path));
    }
}
