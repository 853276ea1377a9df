//! The stateful sort-order checker.
//!
//! One `CheckerState` belongs to one linted file. Lines must be fed in file
//! order; sharing a state between two files interleaves their blocks.

use tracing::trace;

use crate::knowledge::Knowledgebase;
use crate::order::classify::{classify, classify_strict};
use crate::order::context::compute_context;
use crate::order::filter::{is_call, is_ignored};

/// Outcome of checking a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Properties seen so far in the block are in order.
    Sorted,
    /// This line broke alphabetical order.
    Unsorted,
    /// The line is not an orderable property declaration.
    NotApplicable,
}

impl Verdict {
    pub fn is_violation(self) -> bool {
        self == Verdict::Unsorted
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckerState {
    previous_context: usize,
    cache: Vec<String>,
}

impl CheckerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both the carried context and the cache, for reuse on a new file.
    pub fn reset(&mut self) {
        self.previous_context = 0;
        self.cache.clear();
    }

    pub fn previous_context(&self) -> usize {
        self.previous_context
    }

    /// Tokens accumulated for the current block, in textual order.
    pub fn cache(&self) -> &[String] {
        &self.cache
    }

    /// Checks one physical line.
    ///
    /// `inside_hash` marks lines within a `{ ... }` object body, where order is
    /// not enforced. `indent_width` must be non-zero.
    pub fn check_line(
        &mut self,
        line: &str,
        kb: &Knowledgebase,
        inside_hash: bool,
        indent_width: usize,
    ) -> Verdict {
        let line_ctx = compute_context(line, indent_width);
        let context = line_ctx.context;

        if context != self.previous_context {
            self.cache.clear();
        }

        if line_ctx.first_token.is_empty() || context == 0 || is_ignored(line) || is_call(line) {
            return Verdict::NotApplicable;
        }

        if classify(line_ctx.first_token, kb) {
            self.cache.push(line_ctx.first_token.to_string());
        }

        if self.cache.is_empty() {
            return Verdict::NotApplicable;
        }

        let verdict = if inside_hash || context != self.previous_context {
            Verdict::Sorted
        } else {
            self.compare(kb)
        };

        trace!(context, token = line_ctx.first_token, ?verdict, "sort order");
        self.previous_context = context;
        verdict
    }

    /// Compares the cache to its sorted form. A mismatching token that is not
    /// itself recognised (strictly) is tolerated.
    fn compare(&self, kb: &Knowledgebase) -> Verdict {
        let mut sorted = self.cache.clone();
        sorted.sort();
        debug_assert_eq!(sorted.len(), self.cache.len());

        let violation = self
            .cache
            .iter()
            .zip(&sorted)
            .any(|(actual, expected)| actual != expected && classify_strict(actual, kb));

        if violation {
            Verdict::Unsorted
        } else {
            Verdict::Sorted
        }
    }
}
