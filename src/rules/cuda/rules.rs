//! The CUDA intent rules.
//!
//! Order is behavior. `get()` returns the rules in evaluation order and the
//! matcher takes the first hit, so earlier rules shadow later ones wherever
//! their phrases overlap. Two shadows are deliberate and load-bearing:
//!
//! - "memory" (memory-hierarchy) fires before "memory access"
//!   (memory-coalescing), so the coalescing rule is reached through
//!   "coalescing" alone.
//! - "thread" (threads-and-blocks) fires before "__syncthreads"
//!   (synchronization), because "__syncthreads" contains "thread" as a
//!   substring. The synchronization rule is reached through the word
//!   "synchronization" itself.
//!
//! When adding a rule, place it with this in mind rather than appending
//! blindly at the end.

use crate::Topic;
use crate::rules::cuda::responses;

fn rule_platform_definition() -> crate::Rule {
    intent! {
        tag: "platform-definition",
        topic: Topic::Platform,
        optional_phrases: ["what is cuda", "define cuda"],
        response: responses::PLATFORM_DEFINITION,
    }
}

/// The one rule with AND logic: both sides of the comparison must appear.
fn rule_gpu_vs_cpu() -> crate::Rule {
    intent! {
        tag: "gpu-vs-cpu",
        topic: Topic::Hardware,
        required_phrases: ["gpu", "cpu"],
        response: responses::GPU_VS_CPU,
    }
}

fn rule_kernels() -> crate::Rule {
    intent! {
        tag: "kernels",
        topic: Topic::Execution,
        optional_phrases: ["kernel"],
        response: responses::KERNELS,
    }
}

/// "global memory" is subsumed by "memory"; both are listed because both are
/// part of the published predicate.
fn rule_memory_hierarchy() -> crate::Rule {
    intent! {
        tag: "memory-hierarchy",
        topic: Topic::Memory,
        optional_phrases: ["memory", "global memory"],
        response: responses::MEMORY_HIERARCHY,
    }
}

fn rule_threads_and_blocks() -> crate::Rule {
    intent! {
        tag: "threads-and-blocks",
        topic: Topic::Execution,
        optional_phrases: ["thread", "block"],
        response: responses::THREADS_AND_BLOCKS,
    }
}

fn rule_synchronization() -> crate::Rule {
    intent! {
        tag: "synchronization",
        topic: Topic::Concurrency,
        optional_phrases: ["synchronization", "__syncthreads"],
        response: responses::SYNCHRONIZATION,
    }
}

fn rule_warps_and_simt() -> crate::Rule {
    intent! {
        tag: "warps-and-simt",
        topic: Topic::Execution,
        optional_phrases: ["warp", "simt"],
        response: responses::WARPS_AND_SIMT,
    }
}

fn rule_memory_coalescing() -> crate::Rule {
    intent! {
        tag: "memory-coalescing",
        topic: Topic::Memory,
        optional_phrases: ["coalescing", "memory access"],
        response: responses::MEMORY_COALESCING,
    }
}

fn rule_optimization() -> crate::Rule {
    intent! {
        tag: "optimization",
        topic: Topic::Performance,
        optional_phrases: ["optimization", "performance"],
        response: responses::OPTIMIZATION,
    }
}

fn rule_code_example() -> crate::Rule {
    intent! {
        tag: "code-example",
        topic: Topic::Practice,
        optional_phrases: ["example", "code"],
        response: responses::CODE_EXAMPLE,
    }
}

fn rule_troubleshooting() -> crate::Rule {
    intent! {
        tag: "troubleshooting",
        topic: Topic::Guidance,
        optional_phrases: ["help", "stuck", "error"],
        response: responses::TROUBLESHOOTING,
    }
}

/// Last on purpose: "start"/"begin" appear in plenty of messages that a more
/// specific rule should own first.
fn rule_getting_started() -> crate::Rule {
    intent! {
        tag: "getting-started",
        topic: Topic::Guidance,
        optional_phrases: ["start", "begin"],
        response: responses::GETTING_STARTED,
    }
}

pub fn get() -> Vec<crate::Rule> {
    vec![
        rule_platform_definition(),
        rule_gpu_vs_cpu(),
        rule_kernels(),
        rule_memory_hierarchy(),
        rule_threads_and_blocks(),
        rule_synchronization(),
        rule_warps_and_simt(),
        rule_memory_coalescing(),
        rule_optimization(),
        rule_code_example(),
        rule_troubleshooting(),
        rule_getting_started(),
    ]
}
