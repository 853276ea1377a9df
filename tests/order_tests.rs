//! Behavioural tests for the sort-order checker, driven line by line the way
//! the linter drives it.

use stylint::order::{classify, classify_strict};
use stylint::{CheckerState, Knowledgebase, Verdict};

const INDENT: usize = 4;

fn kb() -> Knowledgebase {
    Knowledgebase::new(
        ["background", "border", "color", "margin", "transform", "a", "b", "c", "m", "z"],
        ["-webkit-", "-moz-"],
        ["hover"],
        ["div", "span"],
    )
}

fn check_all(lines: &[&str], inside_hash: bool) -> Vec<Verdict> {
    let kb = kb();
    let mut state = CheckerState::new();
    lines
        .iter()
        .map(|line| state.check_line(line, &kb, inside_hash, INDENT))
        .collect()
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn correct_order_reports_sorted_on_every_property() {
        let verdicts = check_all(
            &[".box", "    background red", "    color blue", "    margin 0"],
            false,
        );
        assert_eq!(verdicts[0], Verdict::NotApplicable);
        assert_eq!(&verdicts[1..], &[Verdict::Sorted; 3]);
    }

    #[test]
    fn violation_is_reported_on_second_line() {
        let verdicts = check_all(
            &[".box", "    margin 0", "    color blue", "    background red"],
            false,
        );
        assert_eq!(verdicts[1], Verdict::Sorted);
        assert_eq!(verdicts[2], Verdict::Unsorted);
    }

    #[test]
    fn b_a_c_fails_at_a() {
        let verdicts = check_all(&[".x", "    b 1", "    a 1", "    c 1"], false);
        assert_eq!(verdicts[2], Verdict::Unsorted);
    }

    #[test]
    fn unknown_token_does_not_flip_the_verdict() {
        let verdicts = check_all(
            &[".x", "    border 0", "    xyz 1", "    margin 0"],
            false,
        );
        assert!(!verdicts.iter().any(|v| v.is_violation()));
    }

    #[test]
    fn hash_bodies_accept_any_order() {
        let verdicts = check_all(&["    z 1", "    a 1", "    m 1"], true);
        assert!(verdicts.iter().all(|v| *v == Verdict::Sorted));
    }

    #[test]
    fn extend_directive_is_not_applicable_whatever_the_cache() {
        let kb = kb();
        let mut state = CheckerState::new();
        for line in [".x", "    margin 0", "    color 0"] {
            state.check_line(line, &kb, false, INDENT);
        }
        assert_eq!(
            state.check_line("    @extend $foo", &kb, false, INDENT),
            Verdict::NotApplicable
        );
        assert_eq!(
            CheckerState::new().check_line("@extend $foo", &kb, false, INDENT),
            Verdict::NotApplicable
        );
    }

    #[test]
    fn nested_blocks_start_fresh() {
        let verdicts = check_all(
            &[
                ".x",
                "    margin 0",
                "    div",
                "        color 0",
                "        margin 0",
                "    background 0",
            ],
            false,
        );
        assert!(!verdicts.iter().any(|v| v.is_violation()));
    }

    #[test]
    fn independent_states_do_not_interfere() {
        let kb = kb();
        let mut first = CheckerState::new();
        let mut second = CheckerState::new();

        first.check_line("    margin 0", &kb, false, INDENT);
        second.check_line("    background 0", &kb, false, INDENT);

        assert_eq!(
            first.check_line("    color 0", &kb, false, INDENT),
            Verdict::Unsorted
        );
        assert_eq!(
            second.check_line("    color 0", &kb, false, INDENT),
            Verdict::Sorted
        );
    }

    #[test]
    fn context_change_empties_cache_before_append() {
        let kb = kb();
        let mut state = CheckerState::new();
        state.check_line("    margin 0", &kb, false, INDENT);
        state.check_line("    transform 0", &kb, false, INDENT);

        state.check_line("        color 0", &kb, false, INDENT);
        assert_eq!(state.cache(), ["color"]);
    }
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    #[test]
    fn prefixed_property_is_accepted() {
        assert!(classify("-webkit-transform", &kb()));
    }

    #[test]
    fn pseudo_suffixed_property_is_accepted() {
        assert!(classify("colorhover", &kb()));
    }

    #[test]
    fn tag_names_need_the_strict_predicate() {
        assert!(!classify("spanhover", &kb()));
        assert!(classify_strict("spanhover", &kb()));
    }

    #[test]
    fn builtin_tables_classify_real_css() {
        let kb = Knowledgebase::builtin();
        assert!(classify("-moz-box-sizing", kb));
        assert!(classify("z-index", kb));
        assert!(classify_strict("ahover", kb));
        assert!(!classify("not-a-property", kb));
    }
}
