#![forbid(unsafe_code)]

//! Per-character wrap rules.
//!
//! A [`WrapRule`] records a wrapping preference for a single trigger
//! character: which side of the character a break may land on, and a weight
//! used when several candidate positions compete. Rules are immutable
//! values; the selector's table holds at most one rule per trigger.

use std::fmt;

/// Which side of the trigger character a line break may be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapCondition {
    /// Break only after the trigger character.
    After,
    /// Break only before the trigger character.
    Before,
    /// Break on either side of the trigger character.
    Both,
}

/// A wrapping preference for a single trigger character.
///
/// # Example
/// ```
/// use softwrap::{WrapCondition, WrapRule};
///
/// let rule = WrapRule::new(',').condition(WrapCondition::After).weight(20);
/// assert_eq!(rule.trigger, ',');
/// assert_eq!(rule.weight, 20);
///
/// // Defaults: break on both sides, default weight.
/// let plain = WrapRule::new(' ');
/// assert_eq!(plain.condition, WrapCondition::Both);
/// assert_eq!(plain.weight, WrapRule::DEFAULT_WEIGHT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapRule {
    /// Character this rule applies to.
    pub trigger: char,
    /// Which side of the trigger a break may land on.
    pub condition: WrapCondition,
    /// Priority among competing candidate positions. Higher wins.
    pub weight: u32,
}

impl WrapRule {
    /// Weight used when a rule does not specify one.
    pub const DEFAULT_WEIGHT: u32 = 10;

    /// Create a rule for `trigger` that allows breaking on both sides at
    /// the default weight.
    #[must_use]
    pub fn new(trigger: char) -> Self {
        Self {
            trigger,
            condition: WrapCondition::Both,
            weight: Self::DEFAULT_WEIGHT,
        }
    }

    /// Set the wrap condition.
    #[must_use]
    pub fn condition(mut self, condition: WrapCondition) -> Self {
        self.condition = condition;
        self
    }

    /// Set the priority weight. Must be positive.
    #[must_use]
    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }
}

impl fmt::Display for WrapRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({:?}, weight {})",
            self.trigger, self.condition, self.weight
        )
    }
}

/// Registration was rejected because the trigger character already has a
/// rule.
///
/// Carries both rules for diagnostics. The rule table is left untouched:
/// [`existing`](Self::existing) stays active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRuleError {
    /// The rule already registered for the trigger character.
    pub existing: WrapRule,
    /// The rule that was rejected.
    pub rejected: WrapRule,
}

impl fmt::Display for DuplicateRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "can't register wrap rule {}: another rule is already registered for {:?} - {}",
            self.rejected, self.rejected.trigger, self.existing
        )
    }
}

impl std::error::Error for DuplicateRuleError {}

#[cfg(test)]
mod tests {
    use super::*;

    // ====== Construction ======

    #[test]
    fn new_defaults_to_both_at_default_weight() {
        let rule = WrapRule::new('x');
        assert_eq!(rule.trigger, 'x');
        assert_eq!(rule.condition, WrapCondition::Both);
        assert_eq!(rule.weight, WrapRule::DEFAULT_WEIGHT);
    }

    #[test]
    fn setters_override_defaults() {
        let rule = WrapRule::new(';').condition(WrapCondition::After).weight(25);
        assert_eq!(rule.condition, WrapCondition::After);
        assert_eq!(rule.weight, 25);
    }

    // ====== Display ======

    #[test]
    fn duplicate_error_names_both_rules() {
        let err = DuplicateRuleError {
            existing: WrapRule::new(','),
            rejected: WrapRule::new(',').weight(20),
        };
        let msg = err.to_string();
        assert!(msg.contains("','"), "missing trigger in: {msg}");
        assert!(msg.contains("weight 10"), "missing existing rule in: {msg}");
        assert!(msg.contains("weight 20"), "missing rejected rule in: {msg}");
    }
}
