//! Lines that are never ordered: selectors, directives, control flow,
//! variable assignments and mixin/function calls.

use once_cell::sync::Lazy;
use regex::Regex;

static IGNORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[$.#{}()=>&*]|\b(?:if|else|unless|for|return)\b|@(?:block|media|extends?|import|require|css|keyframes|font-face)\b",
    )
    .expect("ignore pattern is a valid regex")
});

/// True when `line` looks like anything other than a plain property declaration.
pub fn is_ignored(line: &str) -> bool {
    IGNORE_PATTERN.is_match(line)
}

/// True when `line` has both an opening and a closing parenthesis.
pub fn is_call(line: &str) -> bool {
    line.contains('(') && line.contains(')')
}
