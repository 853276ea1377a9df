//! Hash (object literal) body tracking.
//!
//! A hash opens on a line carrying both `=` and `{` (`myHash = {`) and closes
//! on the next line carrying `}`. Property order inside one is not enforced.

/// True when `line` opens a hash body.
pub fn starts_hash(line: &str) -> bool {
    line.contains('=') && line.contains('{')
}

/// True when `line` closes the hash body we are currently inside.
pub fn ends_hash(line: &str, inside_hash: bool) -> bool {
    inside_hash && line.contains('}')
}
