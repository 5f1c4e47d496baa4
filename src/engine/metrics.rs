//! Engine run metrics.
//!
//! This module defines a small set of structs used to observe and debug
//! dispatch behavior.
//!
//! The intended usage is:
//!
//! - `Matcher::run` for normal operation.
//! - `Matcher::run_with_metrics` for the debug report, verbose replies, and
//!   inspecting why a message was routed the way it was.
//!
//! ## Design notes
//!
//! - `RuleCheck` rows exist only for rules the run actually evaluated. The
//!   walk stops at the first match, so a trace never contains rows past the
//!   matching rule; anything after it was skipped, not rejected.
//! - `RuleCheck::hits` may allocate. Both run paths share the same walk, and
//!   a trace of at most one row per catalog entry stays small.

use super::matcher::Resolution;
use super::trigger::TopicMask;
use crate::Topic;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for `Matcher::run_with_metrics`.
    pub total: Duration,
    /// Time spent normalizing the input and scanning topic flags.
    pub scan: Duration,
    /// Time spent walking the catalog and, when needed, drawing a fallback.
    pub evaluate: Duration,
    /// Number of rules evaluated before the walk stopped.
    pub rules_considered: usize,
}

/// One evaluated catalog entry.
#[derive(Debug, Clone)]
pub struct RuleCheck {
    pub tag: &'static str,
    pub topic: Topic,
    pub matched: bool,
    /// Phrases from the rule found in the input, whether or not it matched.
    /// A partial hit (e.g. "gpu" present but "cpu" missing) shows up here.
    pub hits: Vec<&'static str>,
}

/// Matcher output bundled with trace and timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The produced reply and its source.
    pub resolution: Resolution,
    /// Coarse topic flags from the trigger scan.
    pub topics: TopicMask,
    /// One row per evaluated rule, in catalog order.
    pub checks: Vec<RuleCheck>,
    /// Timing measurements for the run.
    pub metrics: RunMetrics,
}
