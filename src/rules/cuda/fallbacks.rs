//! Fallback material: the reply templates drawn when no rule matches, the
//! session greeting, and the prompt suggestions the host UI offers.
//!
//! Each template carries exactly one `{input}` slot. The slot receives the
//! learner's message verbatim, quotes and all, so every fallback visibly
//! acknowledges what was asked even when the catalog has no answer for it.

/// Templates for unrecognized messages. The pool is fixed; selection among
/// them is uniformly random (see `engine::FallbackPool`).
pub const TEMPLATES: &[&str] = &[
    "That's a great question about \"{input}\"! In CUDA programming, understanding the parallel execution model is key. Each thread works on a small piece of data independently, allowing massive parallelism. What specific aspect would you like me to explain further?",
    "Interesting point about \"{input}\"! This relates to how GPU architecture differs from CPU architecture. GPUs have thousands of lightweight cores designed for throughput, while CPUs have fewer powerful cores designed for latency. How does this apply to your current lesson?",
    "Excellent question on \"{input}\"! This is fundamental to efficient CUDA programming. The key is understanding how threads are organized into warps and blocks, and how this maps to the GPU's streaming multiprocessors. Would you like me to elaborate on any particular aspect?",
    "Good thinking about \"{input}\"! This concept is crucial for writing high-performance CUDA code. It's all about maximizing parallelism while minimizing memory access latency. Have you tried implementing this in the code editor yet?",
];

/// Message shown when a tutoring session opens. Never produced by dispatch;
/// the host asks for it explicitly.
pub const GREETING: &str = "Welcome to CudaCoach! 🚀 I'm your AI CUDA programming tutor. I'm here to help you master GPU programming, from basic concepts to advanced optimization techniques. Ask me anything about CUDA, GPU architecture, memory management, or kernel programming. Let's unlock the power of parallel computing together!";

/// Starter questions the host UI offers on an empty session. Every one of
/// these is phrased to hit a catalog rule, never the fallback pool.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "What is CUDA?",
    "Explain GPU vs CPU architecture",
    "How do CUDA threads work?",
    "What are kernels?",
    "Show me memory optimization tips",
    "Help with thread synchronization",
];
