//! Token classification against the knowledgebase.
//!
//! Two predicates with different tolerance:
//! - [`classify`] decides whether a line's first token enters the ordering cache.
//! - [`classify_strict`] re-validates cached tokens while comparing, and also
//!   accepts tag names (bare or pseudo-suffixed).

use crate::knowledge::Knowledgebase;

/// True when `token` is a property, a vendor-prefixed property, or a
/// pseudo-suffixed property.
pub fn classify(token: &str, kb: &Knowledgebase) -> bool {
    kb.is_property(token)
        || is_prefixed_property(token, kb)
        || is_suffixed(token, kb, |name| kb.is_property(name))
}

/// [`classify`], widened to tag names and pseudo-suffixed tag names.
pub fn classify_strict(token: &str, kb: &Knowledgebase) -> bool {
    classify(token, kb) || kb.is_tag(token) || is_suffixed(token, kb, |name| kb.is_tag(name))
}

fn is_prefixed_property(token: &str, kb: &Knowledgebase) -> bool {
    kb.prefixes
        .iter()
        .filter_map(|prefix| token.strip_prefix(prefix.as_str()))
        .any(|rest| kb.is_property(rest))
}

fn is_suffixed(token: &str, kb: &Knowledgebase, is_base: impl Fn(&str) -> bool) -> bool {
    kb.pseudo_suffixes
        .iter()
        .filter_map(|suffix| token.strip_suffix(suffix.as_str()))
        .any(is_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> Knowledgebase {
        Knowledgebase::new(
            ["color", "transform", "margin"],
            ["-webkit-", "-moz-"],
            ["hover", ":focus"],
            ["a", "div"],
        )
    }

    #[test]
    fn exact_property_matches() {
        assert!(classify("color", &kb()));
        assert!(!classify("colour", &kb()));
    }

    #[test]
    fn prefixed_property_matches() {
        assert!(classify("-webkit-transform", &kb()));
        assert!(classify("-moz-transform", &kb()));
        assert!(!classify("-ms-transform", &kb()));
    }

    #[test]
    fn suffixed_property_matches() {
        assert!(classify("colorhover", &kb()));
        assert!(classify("color:focus", &kb()));
        assert!(!classify("colorvisited", &kb()));
    }

    #[test]
    fn prefix_and_suffix_do_not_combine() {
        assert!(!classify("-webkit-transformhover", &kb()));
    }

    #[test]
    fn tags_only_pass_the_strict_predicate() {
        assert!(!classify("div", &kb()));
        assert!(classify_strict("div", &kb()));
        assert!(classify_strict("ahover", &kb()));
        assert!(!classify_strict("-webkit-div", &kb()));
    }

    #[test]
    fn strict_accepts_everything_classify_accepts() {
        for token in ["color", "-webkit-transform", "marginhover", "xyz"] {
            if classify(token, &kb()) {
                assert!(classify_strict(token, &kb()));
            }
        }
    }

    #[test]
    fn classification_is_repeatable() {
        let kb = kb();
        let first = (classify("-moz-transform", &kb), classify_strict("ahover", &kb));
        let second = (classify("-moz-transform", &kb), classify_strict("ahover", &kb));
        assert_eq!(first, second);
    }
}
