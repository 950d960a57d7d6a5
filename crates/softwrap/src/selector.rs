#![forbid(unsafe_code)]

//! The wrap position selector: a rule-driven, weighted two-phase scan.
//!
//! [`WrapPositionSelector`] owns a table of [`WrapRule`]s and answers each
//! query with a single bounded pass over the window: scan backward from the
//! preferred offset collecting weighted candidates, and only when that
//! yields nothing (and the caller allows it) scan forward taking the first
//! acceptable position. An existing newline always wins outright.
//!
//! | Situation | Result |
//! |---|---|
//! | Empty window (`end <= start`) | `end` |
//! | Newline inside the scanned range | offset just past the newline |
//! | Candidates at or before the preferred offset | highest weight, ties to the larger offset |
//! | Nothing backward, overshoot disallowed | the caller's unclamped preferred offset |
//! | Nothing backward, overshoot allowed | first acceptable forward position |
//! | Nothing anywhere | clamped preferred offset |
//!
//! Queries never fail: inputs are normalized rather than rejected, and the
//! cost is linear in the window length. Instances are not thread-safe by
//! design — registration takes `&mut self` and querying takes `&self`, so
//! the borrow checker enforces the register-then-query contract.
//!
//! # Example
//! ```
//! use softwrap::{WrapCondition, WrapPositionSelector, WrapRule};
//!
//! let selector = WrapPositionSelector::from_rules([
//!     WrapRule::new(',').condition(WrapCondition::After).weight(20),
//!     WrapRule::new(' ').condition(WrapCondition::After),
//! ])
//! .unwrap();
//!
//! let text: Vec<char> = "one, two three".chars().collect();
//! let pos = selector.select_wrap_position(&text, 0, text.len(), 10, true);
//! // The comma rule outweighs the nearer space.
//! assert_eq!(pos, 4);
//! ```

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::rule::{DuplicateRuleError, WrapCondition, WrapRule};
use crate::text::CharText;

/// Weight of a wrap position at a plain (rule-less) non-identifier symbol.
/// Kept below any explicitly configured rule at the default weight, so
/// symbol boundaries stay wrap-eligible without outcompeting real rules.
const NON_ID_WEIGHT: u32 = (WrapRule::DEFAULT_WEIGHT - 1) / 2;

/// Identifier characters: ASCII letters, digits, `_`, and `$`.
#[inline]
fn is_id_char(c: char) -> bool {
    c == '_' || c == '$' || c.is_ascii_alphanumeric()
}

/// Tie-break for the backward scan: among equal weights, the offset closer
/// to the preferred offset (the larger one) wins.
fn prefer_larger(candidate: usize, incumbent: usize) -> bool {
    candidate > incumbent
}

/// Pick the winning offset from an `offset -> weight` candidate map.
///
/// Highest weight wins; `prefer` breaks ties and must return `true` when
/// its first argument beats the second. Returns `None` on an empty map.
fn choose_offset(
    candidates: &FxHashMap<usize, u32>,
    prefer: fn(usize, usize) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (&offset, &weight) in candidates {
        match best {
            None => best = Some((offset, weight)),
            Some((best_offset, best_weight)) => {
                if weight > best_weight || (weight == best_weight && prefer(offset, best_offset)) {
                    best = Some((offset, weight));
                }
            }
        }
    }
    best.map(|(offset, _)| offset)
}

/// Strategy seam a host editor calls when a visual line exceeds its width.
///
/// Implementations return the offset at which to insert the break. Queries
/// never fail; odd inputs are normalized instead of rejected.
pub trait WrapPositionStrategy {
    /// Pick the offset at which to break `text` within
    /// `[start_offset, end_offset]`, aiming at or before `preferred_offset`.
    fn wrap_position(
        &self,
        text: &dyn CharText,
        start_offset: usize,
        end_offset: usize,
        preferred_offset: usize,
        allow_overshoot: bool,
    ) -> usize;
}

/// Rule-driven wrap position selection.
///
/// Holds one [`WrapRule`] per trigger character. The table is append-only
/// per key: a second rule for the same trigger is rejected, never merged or
/// overwritten.
#[derive(Debug, Clone, Default)]
pub struct WrapPositionSelector {
    /// Wrap rules keyed by trigger character.
    rules: FxHashMap<char, WrapRule>,
}

impl WrapPositionSelector {
    /// Create a selector with an empty rule table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selector from a batch of rules in one step.
    ///
    /// Validates trigger uniqueness across the whole batch; on a duplicate
    /// the build fails and no selector is produced.
    ///
    /// # Errors
    /// [`DuplicateRuleError`] if two rules in the batch share a trigger
    /// character.
    pub fn from_rules<I>(rules: I) -> Result<Self, DuplicateRuleError>
    where
        I: IntoIterator<Item = WrapRule>,
    {
        let mut selector = Self::new();
        for rule in rules {
            selector.register_rule(rule)?;
        }
        Ok(selector)
    }

    /// Register a wrap rule for its trigger character.
    ///
    /// # Errors
    /// [`DuplicateRuleError`] if a rule for the same trigger character is
    /// already registered. The table is left unchanged and the error
    /// carries both rules.
    pub fn register_rule(&mut self, rule: WrapRule) -> Result<(), DuplicateRuleError> {
        match self.rules.entry(rule.trigger) {
            Entry::Occupied(slot) => Err(DuplicateRuleError {
                existing: *slot.get(),
                rejected: rule,
            }),
            Entry::Vacant(slot) => {
                slot.insert(rule);
                Ok(())
            }
        }
    }

    /// The rule registered for `trigger`, if any.
    #[must_use]
    pub fn rule(&self, trigger: char) -> Option<&WrapRule> {
        self.rules.get(&trigger)
    }

    /// Pick the offset at which to insert a visual line break.
    ///
    /// Scans `[start_offset, end_offset)` of `text`, aiming at or before
    /// `preferred_offset` (clamped into the window). The backward phase
    /// weighs every candidate it finds; the forward phase — entered only
    /// when the backward phase found nothing and `allow_overshoot` is set —
    /// takes the first acceptable position, since any overshoot is already
    /// a compromise.
    ///
    /// Returns an offset in `[start_offset, end_offset]`, with one
    /// deliberate exception: when no candidate exists at or before the
    /// preferred offset and `allow_overshoot` is `false`, the original
    /// `preferred_offset` is returned as-is, even if it lies outside the
    /// window.
    ///
    /// The caller must ensure `end_offset <= text.len_chars()`.
    pub fn select_wrap_position<T>(
        &self,
        text: &T,
        start_offset: usize,
        end_offset: usize,
        preferred_offset: usize,
        allow_overshoot: bool,
    ) -> usize
    where
        T: CharText + ?Sized,
    {
        if end_offset <= start_offset {
            return end_offset;
        }
        debug_assert!(
            end_offset <= text.len_chars(),
            "window end {end_offset} past text end {}",
            text.len_chars()
        );

        // Normalization.
        let preferred = preferred_offset.min(end_offset - 1).max(start_offset);

        let mut candidates: FxHashMap<usize, u32> = FxHashMap::default();

        // Look for a wrap position at or before the preferred offset.
        let mut i = preferred;
        while i > start_offset {
            let c = text.char_at(i);
            if c == '\n' {
                return i + 1;
            }

            if let Some(rule) = self.rules.get(&c) {
                match rule.condition {
                    WrapCondition::Both | WrapCondition::Before => {
                        candidates.entry(i).or_insert(rule.weight);
                    }
                    WrapCondition::After => {
                        if i < preferred {
                            candidates.entry(i + 1).or_insert(rule.weight);
                        }
                    }
                }
                i -= 1;
                continue;
            }

            // Between two plain symbols is a bad place to break (think `++`
            // or `=>`): a symbol position qualifies only right after an
            // identifier run, or hard against the window start.
            if !is_id_char(c)
                && (i < start_offset + 2
                    || (is_id_char(text.char_at(i - 1))
                        && !self.rules.contains_key(&text.char_at(i - 1))))
            {
                candidates.entry(i).or_insert(NON_ID_WEIGHT);
            }
            i -= 1;
        }

        if let Some(offset) = choose_offset(&candidates, prefer_larger) {
            tracing::trace!(
                offset,
                candidates = candidates.len(),
                "backward scan picked wrap position"
            );
            return offset;
        }

        if !allow_overshoot {
            return preferred_offset;
        }

        // Past the preferred offset the first acceptable position wins; no
        // weighing, since any overshoot is already a compromise.
        for i in preferred + 1..end_offset {
            let c = text.char_at(i);
            if c == '\n' {
                return i + 1;
            }

            if let Some(rule) = self.rules.get(&c) {
                match rule.condition {
                    WrapCondition::Both | WrapCondition::Before => return i,
                    WrapCondition::After => {
                        if i < end_offset - 1 {
                            return i + 1;
                        }
                    }
                }
            }

            if !is_id_char(c) && (i >= end_offset - 1 || is_id_char(text.char_at(i + 1))) {
                return i;
            }
        }

        tracing::debug!(
            start_offset,
            end_offset,
            "no wrap position in window, falling back to preferred offset"
        );
        preferred
    }
}

impl WrapPositionStrategy for WrapPositionSelector {
    fn wrap_position(
        &self,
        text: &dyn CharText,
        start_offset: usize,
        end_offset: usize,
        preferred_offset: usize,
        allow_overshoot: bool,
    ) -> usize {
        self.select_wrap_position(
            text,
            start_offset,
            end_offset,
            preferred_offset,
            allow_overshoot,
        )
    }
}
