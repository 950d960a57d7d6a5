#![forbid(unsafe_code)]

//! Wrap-position selection for host editors.
//!
//! # Role
//! `softwrap` answers one question: given a window of text and a preferred
//! maximum offset, at which character offset should a visual line break be
//! inserted? The answer is driven by a per-character rule table — each rule
//! names a trigger character, which side of it a break may land on, and a
//! priority weight — plus a built-in heuristic for plain symbol boundaries.
//!
//! # Primary responsibilities
//! - **[`WrapRule`]**: a wrapping preference for a single trigger character.
//! - **[`WrapPositionSelector`]**: owns the rule table and runs the
//!   two-phase scan that picks the break offset.
//! - **[`CharText`]**: the read-only character-access seam; `[char]` slices
//!   and `ropey` ropes plug in directly.
//!
//! # How it fits in the system
//! A host editing component supplies the character sequence, the window
//! bounds, and the preferred offset, and inserts a visual break at the
//! returned offset. The selector never renders, never mutates text, and
//! never fails a query — odd inputs are normalized, not rejected.
//!
//! # Example
//! ```
//! use softwrap::{WrapCondition, WrapPositionSelector, WrapRule};
//!
//! let mut selector = WrapPositionSelector::new();
//! selector
//!     .register_rule(WrapRule::new(',').condition(WrapCondition::After).weight(20))
//!     .unwrap();
//!
//! let text: Vec<char> = "alpha, beta gamma".chars().collect();
//! // Preferred offset sits inside "gamma"; the comma rule outweighs the
//! // nearer space boundary, so the break lands right after the comma.
//! let pos = selector.select_wrap_position(&text, 0, text.len(), 12, true);
//! assert_eq!(pos, 6);
//! ```

pub mod rule;
pub mod selector;
pub mod text;

pub use rule::{DuplicateRuleError, WrapCondition, WrapRule};
pub use selector::{WrapPositionSelector, WrapPositionStrategy};
pub use text::CharText;
