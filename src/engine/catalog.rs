//! Rule catalog construction and ordering.
//!
//! This module holds the *static* side of the engine: the ordered list of
//! intent rules that a run walks from top to bottom.
//!
//! In this engine, resolution is intentionally split into two phases:
//!
//! 1. **Build the catalog** (this module): take the rule list exactly as the
//!    rules modules declare it and check its invariants once.
//! 2. **Run** (see `matcher.rs`): scan the input for coarse topics
//!    (`trigger.rs`), then walk the catalog in order and stop at the first
//!    rule whose phrase predicate holds.
//!
//! ## Invariants
//!
//! - Declaration order is dispatch priority. The catalog never sorts, ranks,
//!   or re-orders rules, and exposes iteration only in order. An earlier rule
//!   always shadows a later one for inputs both would match.
//! - `RuleId` is an index into the catalog and stays stable for the life of
//!   the catalog.
//! - Every rule declares at least one phrase, and every phrase is already
//!   lower-case. Matching runs against lower-cased input, so an upper-case
//!   phrase could never fire; that is a catalog bug, caught at construction.
//! - Tags are unique. Traces and replies identify rules by tag.

use crate::Rule;
use std::collections::HashSet;

/// Rule identifier (index into the catalog, i.e. dispatch position).
pub(crate) type RuleId = usize;

/// An ordered, immutable intent rule set.
///
/// Built once at startup and shared for the process lifetime. Consumers may
/// only iterate in declaration order.
#[derive(Debug)]
pub struct Catalog {
    rules: Vec<Rule>,
}

impl Catalog {
    /// Build a catalog from rules in evaluation order.
    ///
    /// Panics if a rule breaks a catalog invariant. The rule list is static
    /// configuration, so a bad entry should fail loudly at startup rather
    /// than silently never match.
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut tags = HashSet::new();
        for rule in &rules {
            assert!(
                !(rule.required_phrases.is_empty() && rule.optional_phrases.is_empty()),
                "rule '{}' declares no phrases and could never match",
                rule.tag
            );
            for phrase in rule.required_phrases.iter().chain(rule.optional_phrases.iter()) {
                assert!(!phrase.is_empty(), "rule '{}' declares an empty phrase", rule.tag);
                assert_eq!(
                    *phrase,
                    phrase.to_lowercase(),
                    "rule '{}' phrase '{}' must be lower-case",
                    rule.tag,
                    phrase
                );
            }
            assert!(tags.insert(rule.tag), "duplicate rule tag '{}'", rule.tag);
        }
        Catalog { rules }
    }

    /// Rules in declaration order, paired with their `RuleId`.
    pub fn iter(&self) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.rules.iter().enumerate()
    }

    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Tags in declaration order.
    pub fn tags(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.tag).collect()
    }
}
