//! First-match dispatch over the ordered catalog.
//!
//! This module is the operational core of the engine:
//!
//! - Normalize the message to its lower-cased matching view.
//! - Scan coarse topic flags for diagnostics (see `trigger.rs`).
//! - Walk the catalog in declaration order and stop at the first rule whose
//!   phrase predicate holds.
//! - When nothing matches, draw a fallback reply from the pool
//!   (see `fallback.rs`), substituting the raw message.
//!
//! ## Contract
//!
//! - **Deterministic on match.** The same input against the same catalog
//!   always produces the same reply; randomness exists only on the fallback
//!   path.
//! - **Short-circuit.** Rules after the first match are never evaluated.
//!   Catalog order is the only priority mechanism.
//! - **Total.** Every input, including the empty string, resolves to a reply.
//!   A run has no error path.
//!
//! ## Debugging
//!
//! Setting `CUDACOACH_DEBUG_RULES=1` prints trace information about the scan,
//! each match, and fallback draws.

use super::catalog::{Catalog, RuleId};
use super::fallback::FallbackPool;
use super::metrics::{RuleCheck, RunMetrics, RunResult};
use super::trigger::TriggerInfo;
use crate::{NormalizedText, Rule};
use std::time::Instant;

/// How a reply was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A catalog rule matched; `id` is its dispatch position.
    Rule { id: RuleId, tag: &'static str },
    /// No rule matched; `template` is the index drawn from the pool.
    Fallback { template: usize },
}

/// A produced reply plus where it came from.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub text: String,
    pub source: Source,
}

/// Matcher orchestrates resolving one learner message against a catalog.
///
/// Usage: create with `Matcher::new(input, &catalog)` then call `run(&pool)`.
///
/// High-level flow inside `run`:
///
/// ```text
/// normalize -> trigger scan -> ordered walk ──┬─ first match -> canned reply
///                                             └─ no match    -> pool draw
/// ```
#[derive(Debug)]
pub struct Matcher<'a> {
    /// The learner message, exactly as received.
    input: &'a str,
    /// Ordered rule set (shared reference).
    catalog: &'a Catalog,
}

impl<'a> Matcher<'a> {
    pub fn new(input: &'a str, catalog: &'a Catalog) -> Self {
        Matcher { input, catalog }
    }

    /// Resolve the message to a reply.
    pub fn run(self, pool: &FallbackPool) -> Resolution {
        self.run_with_metrics(pool).resolution
    }

    /// Resolve the message, collecting the per-rule trace and timings.
    pub fn run_with_metrics(self, pool: &FallbackPool) -> RunResult {
        let debug = std::env::var_os("CUDACOACH_DEBUG_RULES").is_some();
        let run_start = Instant::now();

        let scan_start = Instant::now();
        let normalized = NormalizedText::of(self.input);
        let trigger_info = TriggerInfo::scan(self.input, &normalized);
        let scan = scan_start.elapsed();

        if debug {
            eprintln!("[trigger_scan] topics={:?}", trigger_info.topics);
        }

        let evaluate_start = Instant::now();
        let mut checks: Vec<RuleCheck> = Vec::new();
        let mut winner: Option<(RuleId, &Rule)> = None;
        for (id, rule) in self.catalog.iter() {
            let matched = rule.matches(&normalized);
            checks.push(RuleCheck {
                tag: rule.tag,
                topic: rule.topic,
                matched,
                hits: rule.hits(&normalized),
            });
            if matched {
                if debug {
                    eprintln!("[rule_matched] id={} tag={:?} after {} checks", id, rule.tag, checks.len());
                }
                winner = Some((id, rule));
                // First match wins; the rest of the catalog is not evaluated.
                break;
            }
        }

        let resolution = match winner {
            Some((id, rule)) => {
                Resolution { text: rule.response.to_string(), source: Source::Rule { id, tag: rule.tag } }
            }
            None => {
                // The fallback echoes the learner's own wording, so it gets
                // the raw input, not the normalized view.
                let (text, template) = pool.resolve(self.input);
                if debug {
                    eprintln!("[fallback] template={} of {}", template, pool.len());
                }
                Resolution { text, source: Source::Fallback { template } }
            }
        };
        let evaluate = evaluate_start.elapsed();

        let rules_considered = checks.len();
        RunResult {
            resolution,
            topics: trigger_info.topics,
            checks,
            metrics: RunMetrics { total: run_start.elapsed(), scan, evaluate, rules_considered },
        }
    }
}
