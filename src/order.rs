//! Alphabetical property-order checking.
//!
//! The checker is fed one physical line at a time, in file order, and carries
//! its block state in an explicit [`CheckerState`]. Each call yields a
//! [`Verdict`]; only [`Verdict::Unsorted`] is a finding.

pub mod checker;
pub mod classify;
pub mod context;
pub mod filter;

// Re-exports for concise imports
pub use checker::{CheckerState, Verdict};
pub use classify::{classify, classify_strict};
pub use context::{compute_context, LineContext};
pub use filter::{is_call, is_ignored};
