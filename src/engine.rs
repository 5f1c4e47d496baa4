//! Intent matching and reply resolution engine.
//!
//! This module is the *entry point* for the dispatch engine. It is split into
//! focused submodules under `src/engine/` while keeping paths stable (for
//! example `crate::engine::Matcher` and `crate::engine::FallbackPool`).
//!
//! ## How the parts work together
//!
//! At a high level, resolving a learner message is a pipeline:
//!
//! ```text
//! rules (ordered) ──┐
//!                   │  Catalog::new                (catalog.rs)
//!                   └───────────────┬──────────────
//!                                   │
//! input ── NormalizedText::of ──────┼─ lower-case matching view
//!          TriggerInfo::scan        │  coarse topic flags (diagnostics)
//!          (trigger.rs)             │
//!                                   v
//!                      Matcher::run (matcher.rs)
//!                        - walk the catalog in declaration order
//!                        - first rule whose phrase predicate holds wins
//!                        - stop immediately; later rules are not evaluated
//!                                   │
//!                          no rule matched?
//!                                   │
//!                                   v
//!                      FallbackPool::resolve (fallback.rs)
//!                        - pick one template uniformly at random
//!                        - substitute the raw (un-normalized) input
//!                                   │
//!                                   v
//!                              Resolution
//! ```
//!
//! The engine leans on **first-match dispatch**: catalog order is behavior,
//! and an earlier rule always shadows a later one. Every input produces a
//! reply; there is no error path out of a run.
//!
//! ## Responsibilities by module
//!
//! - `catalog.rs`: owns the ordered rule list and checks catalog invariants
//!   once at construction.
//! - `trigger.rs`: scans the input to compute coarse topic flags for
//!   diagnostics and reports.
//! - `matcher.rs`: performs the ordered first-match walk and falls back when
//!   nothing matches.
//! - `fallback.rs`: holds the fixed template pool and the injected RNG used
//!   for uniform selection.
//! - `metrics.rs`: timing and per-rule trace data for runs.
//!
//! ## Public surface
//!
//! Most code interacts with the engine via:
//!
//! - [`Matcher`]
//! - [`Catalog`] (for reusing a constructed rule set)
//! - [`FallbackPool`] (seedable for reproducible fallback selection)
//!
//! ## Adding new rules
//!
//! New rules are added under `src/rules/**` and ultimately passed into
//! `Catalog::new(..)`. Their position in the returned list is their dispatch
//! priority, so place a new rule before any broader rule that would shadow it.
//!
//! ## Debugging
//!
//! Set `CUDACOACH_DEBUG_RULES=1` to print scan and match traces.

#[path = "engine/catalog.rs"]
mod catalog;
#[path = "engine/fallback.rs"]
mod fallback;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/trigger.rs"]
mod trigger;

#[allow(unused_imports)]
pub use catalog::Catalog;
#[allow(unused_imports)]
pub use fallback::{FallbackPool, INPUT_SLOT};
#[allow(unused_imports)]
pub use matcher::{Matcher, Resolution, Source};
#[allow(unused_imports)]
pub use metrics::{RuleCheck, RunMetrics, RunResult};
#[allow(unused_imports)]
pub use trigger::{TopicMask, TriggerInfo};
