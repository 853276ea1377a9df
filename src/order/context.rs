//! Block context derivation from leading indentation.

/// Characters a line is split on when looking for its first token.
const SEPARATORS: [char; 4] = [' ', '\t', ',', ':'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineContext<'a> {
    /// Nesting depth: leading empty split tokens divided by the indent width.
    pub context: usize,
    /// First non-empty token, or `""` for a blank line.
    pub first_token: &'a str,
}

/// Derives the nesting level and first token of `line`.
///
/// Every separator character is its own split point, so each leading
/// separator yields one empty token. `indent_width` must be non-zero; the
/// configuration layer rejects zero before a checker ever runs.
pub fn compute_context(line: &str, indent_width: usize) -> LineContext<'_> {
    let mut leading_empty = 0;
    let mut first_token = "";

    for token in line.split(SEPARATORS) {
        if token.is_empty() {
            leading_empty += 1;
        } else {
            first_token = token;
            break;
        }
    }

    if first_token.is_empty() {
        return LineContext {
            context: 0,
            first_token,
        };
    }

    LineContext {
        context: leading_empty / indent_width,
        first_token,
    }
}
