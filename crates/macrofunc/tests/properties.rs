//! Property tests for the evaluation contract.

use macrofunc::{MacroFunction, UNRESOLVED, evaluate};
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    #[test]
    fn uppercase_is_idempotent(s in "[ -~]{0,40}") {
        let once = evaluate(&s, "uppercase", &[""]);
        prop_assert_eq!(evaluate(&once, "uppercase", &[""]), once.clone());
        prop_assert_eq!(once, s.to_ascii_uppercase());
    }

    #[test]
    fn lowercase_is_idempotent(s in "[ -~]{0,40}") {
        let once = evaluate(&s, "lowercase", &[""]);
        prop_assert_eq!(evaluate(&once, "lowercase", &[""]), once);
    }

    #[test]
    fn url_round_trip(s in "\\PC{0,40}") {
        let encoded = evaluate(&s, "urlencode", &[""]);
        prop_assert!(encoded.bytes().all(|b| b.is_ascii_alphanumeric() || b"-_.~%".contains(&b)));
        prop_assert_eq!(evaluate(&encoded, "urldecode", &[""]), s);
    }

    #[test]
    fn html_round_trip(s in "\\PC{0,40}") {
        let encoded = evaluate(&s, "htmlencode", &[""]);
        prop_assert!(!encoded.contains(['<', '>', '"', '\'']));
        prop_assert_eq!(evaluate(&encoded, "htmldecode", &[""]), s);
    }

    #[test]
    fn unknown_names_are_always_unresolved(
        name in "[a-z]{1,12}",
        value in "\\PC{0,20}",
        parameters in vec("\\PC{0,8}", 0..4),
    ) {
        prop_assume!(MacroFunction::from_name(&name).is_none());
        prop_assert_eq!(evaluate(&value, &name, &parameters), UNRESOLVED);
    }

    #[test]
    fn evaluation_never_panics(
        index in 0..MacroFunction::ALL.len(),
        value in "\\PC{0,20}",
        parameters in vec("[ -~]{0,8}", 0..4),
    ) {
        let function = MacroFunction::ALL[index];
        let _ = evaluate(&value, function.name(), &parameters);
    }

    #[test]
    fn tr_with_ascii_lists_preserves_length(
        value in "[a-z]{0,30}",
        search in "[a-z]{1,10}",
        replacement in "[A-Z]{1,10}",
    ) {
        let result = evaluate(&value, "tr", &[search, replacement]);
        prop_assert_eq!(result.chars().count(), value.chars().count());
    }
}
