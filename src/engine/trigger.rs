//! Trigger scanning (input pre-classification).
//!
//! This module inspects a learner message and produces coarse topic flags.
//! The flags feed diagnostics only: verbose replies, the debug report, and
//! trace output. Dispatch itself always walks the full catalog in order, so
//! the scan can never change which reply a message gets.
//!
//! ## Design notes
//!
//! - This is a *heuristic* scan. False positives are acceptable because
//!   nothing downstream keys behavior off a flag; a flag is a hint about what
//!   the learner seems to be asking, not a routing decision.
//! - The needle lists are deliberately wider than the rule phrases. A message
//!   can carry a topic the catalog has no rule for, and the report should
//!   still say so.

use crate::NormalizedText;

bitflags::bitflags! {
    /// Coarse subject flags detected in a learner message.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TopicMask: u32 {
        const PLATFORM    = 1 << 0;
        const HARDWARE    = 1 << 1;
        const EXECUTION   = 1 << 2;
        const MEMORY      = 1 << 3;
        const CONCURRENCY = 1 << 4;
        const PERFORMANCE = 1 << 5;
        const PRACTICE    = 1 << 6;
        const GUIDANCE    = 1 << 7;
        /// The message contains a question mark.
        const QUESTION    = 1 << 8;
        /// The message is empty or whitespace-only. Still a valid input;
        /// it just cannot match any rule and will draw a fallback reply.
        const EMPTYISH    = 1 << 9;
    }
}

const PLATFORM_NEEDLES: &[&str] = &["cuda", "nvcc", "nvidia"];
const HARDWARE_NEEDLES: &[&str] = &["gpu", "cpu", "hardware", "multiprocessor", "streaming"];
const EXECUTION_NEEDLES: &[&str] = &["kernel", "thread", "block", "warp", "simt", "grid", "launch"];
const MEMORY_NEEDLES: &[&str] = &["memory", "coalescing", "register", "cache", "shared", "global", "device"];
const CONCURRENCY_NEEDLES: &[&str] = &["sync", "barrier", "race", "atomic", "deadlock", "lockstep"];
const PERFORMANCE_NEEDLES: &[&str] = &[
    "optimization",
    "optimize",
    "performance",
    "occupancy",
    "bandwidth",
    "latency",
    "throughput",
    "profiling",
    "nsight",
    "nvprof",
];
const PRACTICE_NEEDLES: &[&str] = &["example", "code", "snippet", "editor", "show me", "write"];
const GUIDANCE_NEEDLES: &[&str] = &["help", "stuck", "error", "start", "begin", "how do", "what is", "explain", "confused"];

const FLAG_NAMES: &[(TopicMask, &str)] = &[
    (TopicMask::PLATFORM, "platform"),
    (TopicMask::HARDWARE, "hardware"),
    (TopicMask::EXECUTION, "execution"),
    (TopicMask::MEMORY, "memory"),
    (TopicMask::CONCURRENCY, "concurrency"),
    (TopicMask::PERFORMANCE, "performance"),
    (TopicMask::PRACTICE, "practice"),
    (TopicMask::GUIDANCE, "guidance"),
    (TopicMask::QUESTION, "question"),
    (TopicMask::EMPTYISH, "emptyish"),
];

impl TopicMask {
    /// Human-readable names of the set flags, in flag order.
    pub fn names(self) -> Vec<&'static str> {
        FLAG_NAMES.iter().filter(|(flag, _)| self.contains(*flag)).map(|(_, name)| *name).collect()
    }
}

/// Input characteristics detected from a learner message.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub topics: TopicMask,
}

impl TriggerInfo {
    /// Scan a message for coarse topic flags.
    ///
    /// Topic needles match the same way rule phrases do: plain substring
    /// containment over the lower-cased text. The question and emptyish
    /// checks look at the raw input.
    pub fn scan(input: &str, normalized: &NormalizedText) -> Self {
        let mut topics = TopicMask::empty();

        if input.trim().is_empty() {
            topics |= TopicMask::EMPTYISH;
        }
        if input.contains('?') {
            topics |= TopicMask::QUESTION;
        }

        if mentions(normalized, PLATFORM_NEEDLES) {
            topics |= TopicMask::PLATFORM;
        }
        if mentions(normalized, HARDWARE_NEEDLES) {
            topics |= TopicMask::HARDWARE;
        }
        if mentions(normalized, EXECUTION_NEEDLES) {
            topics |= TopicMask::EXECUTION;
        }
        if mentions(normalized, MEMORY_NEEDLES) {
            topics |= TopicMask::MEMORY;
        }
        if mentions(normalized, CONCURRENCY_NEEDLES) {
            topics |= TopicMask::CONCURRENCY;
        }
        if mentions(normalized, PERFORMANCE_NEEDLES) {
            topics |= TopicMask::PERFORMANCE;
        }
        if mentions(normalized, PRACTICE_NEEDLES) {
            topics |= TopicMask::PRACTICE;
        }
        if mentions(normalized, GUIDANCE_NEEDLES) {
            topics |= TopicMask::GUIDANCE;
        }

        TriggerInfo { topics }
    }
}

fn mentions(normalized: &NormalizedText, needles: &[&str]) -> bool {
    needles.iter().any(|needle| normalized.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> TopicMask {
        TriggerInfo::scan(input, &NormalizedText::of(input)).topics
    }

    #[test]
    fn empty_input_is_flagged_emptyish() {
        assert!(scan("").contains(TopicMask::EMPTYISH));
        assert!(scan("   \t ").contains(TopicMask::EMPTYISH));
        assert!(!scan("cuda").contains(TopicMask::EMPTYISH));
    }

    #[test]
    fn question_mark_sets_question_flag() {
        assert!(scan("what is cuda?").contains(TopicMask::QUESTION));
        assert!(!scan("tell me about cuda").contains(TopicMask::QUESTION));
    }

    #[test]
    fn topic_needles_are_case_insensitive() {
        let topics = scan("How does GPU MEMORY coalescing work?");
        assert!(topics.contains(TopicMask::HARDWARE));
        assert!(topics.contains(TopicMask::MEMORY));
        assert!(topics.contains(TopicMask::QUESTION));
    }

    #[test]
    fn syncthreads_trips_concurrency_and_execution() {
        let topics = scan("why do I need __syncthreads()");
        assert!(topics.contains(TopicMask::CONCURRENCY));
        // "__syncthreads" also contains "thread".
        assert!(topics.contains(TopicMask::EXECUTION));
    }

    #[test]
    fn off_topic_input_sets_no_subject_flags() {
        assert_eq!(scan("the weather is nice today"), TopicMask::empty());
    }

    #[test]
    fn names_follow_flag_order() {
        let topics = scan("show me example cuda code?");
        assert_eq!(topics.names(), vec!["platform", "practice", "question"]);
    }
}
