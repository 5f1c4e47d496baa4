use crate::engine::{Catalog, FallbackPool, Matcher, RuleCheck, Source};
use crate::rules::cuda::fallbacks;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(crate::rules::cuda::rules::get()));

/// Shared tutor behind [`resolve`] and [`answer`], seeded from OS entropy.
static DEFAULT_TUTOR: Lazy<Tutor> = Lazy::new(Tutor::new);

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A catalog rule recognized the message; `tag` names it.
    Intent { tag: &'static str },
    /// No rule matched; `template` is the index drawn from the fallback pool.
    Fallback { template: usize },
}

/// Result from [`Tutor::resolve`].
#[derive(Debug, Clone)]
pub struct Reply {
    /// The reply text, ready to show to the learner.
    pub text: String,
    /// Whether an intent rule or the fallback pool produced `text`.
    pub origin: Origin,
    /// Total elapsed time spent resolving.
    pub elapsed: Duration,
}

/// One evaluated rule in a verbose trace, in catalog order.
#[derive(Debug, Clone)]
pub struct RuleTrace {
    pub tag: &'static str,
    /// Subject area of the rule, e.g. `"memory"` or `"guidance"`.
    pub topic: &'static str,
    pub matched: bool,
    /// Rule phrases found in the message, including partial hits on rules
    /// that did not match.
    pub hits: Vec<&'static str>,
}

/// Additional details returned by [`Tutor::resolve_verbose`].
///
/// This is intentionally compact: it's meant for debugging and the CLI
/// report without dumping the entire internal state.
#[derive(Debug, Clone)]
pub struct ResolveDetails {
    /// Names of the coarse topic flags detected in the message.
    pub topics: Vec<&'static str>,
    /// One row per evaluated rule. The walk stops at the first match, so
    /// rules after a matching one never appear here.
    pub trace: Vec<RuleTrace>,
    /// Number of rules evaluated before the walk stopped.
    pub rules_considered: usize,
    /// Total number of rules in the catalog.
    pub rules_total: usize,
    /// Time spent normalizing and scanning topic flags.
    pub scan: Duration,
    /// Time spent walking the catalog (and drawing a fallback, if needed).
    pub evaluate: Duration,
    /// Total elapsed time.
    pub total: Duration,
}

/// Result from [`Tutor::resolve_verbose`].
#[derive(Debug, Clone)]
pub struct ReplyVerbose {
    pub text: String,
    pub origin: Origin,
    pub elapsed: Duration,
    pub details: ResolveDetails,
}

/// Author of a [`ChatMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior turn of a conversation, as the host UI stores it. Extra fields
/// the UI attaches (ids, timestamps) are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The request body the tutoring UI posts to its chat endpoint.
///
/// Only `prompt` drives the reply. `context` (a lesson identifier) and
/// `conversation_history` are accepted so hosts can send their full payload,
/// but dispatch is stateless and single-turn: neither field changes routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

/// The response body: just the reply text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// A tutoring responder: the rule catalog plus a fallback pool.
///
/// Construction is cheap apart from seeding the generator; the catalog is
/// built once per process and shared. A `Tutor` is safe to share across
/// threads: matching is read-only and the pool locks only around a draw.
#[derive(Debug)]
pub struct Tutor {
    catalog: &'static Catalog,
    pool: FallbackPool,
}

impl Tutor {
    /// Tutor whose fallback draws come from OS entropy.
    pub fn new() -> Self {
        Tutor { catalog: &DEFAULT_CATALOG, pool: FallbackPool::from_entropy(fallbacks::TEMPLATES) }
    }

    /// Tutor with a seeded fallback generator. Two tutors built from the
    /// same seed produce identical reply sequences for identical inputs.
    pub fn seeded(seed: u64) -> Self {
        Tutor { catalog: &DEFAULT_CATALOG, pool: FallbackPool::seeded(fallbacks::TEMPLATES, seed) }
    }

    /// Resolve one learner message to a reply.
    ///
    /// Matched messages resolve deterministically to their rule's canned
    /// text; unmatched messages draw a fallback template. Every input gets
    /// a reply, including the empty string.
    pub fn resolve(&self, text: &str) -> Reply {
        let run = Matcher::new(text, self.catalog).run_with_metrics(&self.pool);
        Reply {
            text: run.resolution.text,
            origin: source_to_origin(run.resolution.source),
            elapsed: run.metrics.total,
        }
    }

    /// Resolve `text` and return extra (compact) debug details.
    ///
    /// This is what the CLI report renders. The default [`Tutor::resolve`]
    /// path returns the same reply without the assembled details.
    pub fn resolve_verbose(&self, text: &str) -> ReplyVerbose {
        let run = Matcher::new(text, self.catalog).run_with_metrics(&self.pool);

        let details = ResolveDetails {
            topics: run.topics.names(),
            trace: run.checks.iter().map(check_to_trace).collect(),
            rules_considered: run.metrics.rules_considered,
            rules_total: self.catalog.len(),
            scan: run.metrics.scan,
            evaluate: run.metrics.evaluate,
            total: run.metrics.total,
        };

        ReplyVerbose {
            text: run.resolution.text,
            origin: source_to_origin(run.resolution.source),
            elapsed: run.metrics.total,
            details,
        }
    }

    /// Answer a wire-shaped request. Routing looks at `prompt` only.
    pub fn answer(&self, request: &ChatRequest) -> ChatResponse {
        ChatResponse { response: self.resolve(&request.prompt).text }
    }
}

impl Default for Tutor {
    fn default() -> Self {
        Tutor::new()
    }
}

/// Resolve `text` using the shared default [`Tutor`].
///
/// # Example
/// ```
/// use cudacoach::resolve;
///
/// let reply = resolve("What is CUDA?");
/// assert!(reply.contains("parallel computing platform"));
/// ```
pub fn resolve(text: &str) -> String {
    DEFAULT_TUTOR.resolve(text).text
}

/// Answer a wire-shaped request using the shared default [`Tutor`].
pub fn answer(request: &ChatRequest) -> ChatResponse {
    DEFAULT_TUTOR.answer(request)
}

/// The fixed message a session opens with.
pub fn greeting() -> &'static str {
    fallbacks::GREETING
}

/// Starter questions a host UI can offer. Each one routes to a rule.
pub fn suggested_prompts() -> &'static [&'static str] {
    fallbacks::SUGGESTED_PROMPTS
}

fn source_to_origin(source: Source) -> Origin {
    match source {
        Source::Rule { tag, .. } => Origin::Intent { tag },
        Source::Fallback { template } => Origin::Fallback { template },
    }
}

fn check_to_trace(check: &RuleCheck) -> RuleTrace {
    RuleTrace { tag: check.tag, topic: check.topic.name(), matched: check.matched, hits: check.hits.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::cuda::responses;

    #[test]
    fn matched_input_resolves_deterministically() {
        assert_eq!(resolve("GPU vs CPU?"), responses::GPU_VS_CPU);
        assert_eq!(resolve("GPU vs CPU?"), resolve("GPU vs CPU?"));
        // Casing never changes the outcome.
        assert_eq!(resolve("gPu VS cPu"), responses::GPU_VS_CPU);
        assert_eq!(resolve("WHAT IS CUDA?"), resolve("what is cuda?"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // Contains "cuda" but not the phrase "what is cuda", so the kernel
        // rule owns it.
        assert_eq!(resolve("what is a cuda kernel"), responses::KERNELS);
    }

    #[test]
    fn code_example_reply_is_verbatim() {
        let reply = resolve("show me some code");
        assert!(reply.contains("__global__ void vectorAdd(float *a, float *b, float *c, int n) {"));
        assert!(reply.contains("vectorAdd<<<(n+255)/256, 256>>>(d_a, d_b, d_c, n);"));
    }

    #[test]
    fn fallback_covers_the_whole_pool_and_echoes_the_input() {
        let tutor = Tutor::seeded(42);
        let mut seen = [false; 4];
        for _ in 0..10_000 {
            let reply = tutor.resolve("xyzzy quasar");
            match reply.origin {
                Origin::Fallback { template } => {
                    seen[template] = true;
                    assert!(reply.text.contains("xyzzy quasar"), "fallback lost the input: {}", reply.text);
                }
                Origin::Intent { tag } => panic!("'xyzzy quasar' matched rule '{}'", tag),
            }
        }
        assert_eq!(seen, [true, true, true, true]);
    }

    #[test]
    fn fallback_echoes_original_casing() {
        let reply = Tutor::seeded(8).resolve("My WeIrD QuEsTiOn");
        assert!(matches!(reply.origin, Origin::Fallback { .. }));
        assert!(reply.text.contains("My WeIrD QuEsTiOn"));
    }

    #[test]
    fn empty_input_still_gets_a_reply() {
        let reply = Tutor::seeded(1).resolve("");
        assert!(matches!(reply.origin, Origin::Fallback { .. }));
        assert!(!reply.text.is_empty());

        let blank = Tutor::seeded(1).resolve("   \t  ");
        assert!(matches!(blank.origin, Origin::Fallback { .. }));
    }

    #[test]
    fn seeded_tutors_replay_identical_sequences() {
        let a = Tutor::seeded(7);
        let b = Tutor::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.resolve("unmatched message").text, b.resolve("unmatched message").text);
        }
    }

    #[test]
    fn verbose_trace_stops_at_the_match() {
        let verbose = Tutor::seeded(0).resolve_verbose("GPU vs CPU?");

        assert_eq!(verbose.origin, Origin::Intent { tag: "gpu-vs-cpu" });
        // platform-definition is checked and rejected, then gpu-vs-cpu hits.
        assert_eq!(verbose.details.rules_considered, 2);
        assert_eq!(verbose.details.trace.len(), 2);
        assert!(!verbose.details.trace[0].matched);
        assert!(verbose.details.trace[1].matched);
        assert_eq!(verbose.details.trace[1].hits, vec!["gpu", "cpu"]);
        assert_eq!(verbose.details.rules_total, 12);
        assert!(verbose.details.topics.contains(&"hardware"));
        assert_eq!(verbose.elapsed, verbose.details.total);
    }

    #[test]
    fn verbose_trace_covers_the_catalog_on_fallback() {
        let verbose = Tutor::seeded(0).resolve_verbose("nothing cuda-less here at all");
        // "cuda-less" does contain "cuda", but no rule keys on bare "cuda".
        assert!(matches!(verbose.origin, Origin::Fallback { .. }));
        assert_eq!(verbose.details.rules_considered, verbose.details.rules_total);
    }

    #[test]
    fn chat_request_accepts_the_ui_payload() {
        let request: ChatRequest = serde_json::from_str(
            r#"{
                "prompt": "what is cuda",
                "context": "lesson-3",
                "conversation_history": [
                    {"id": "1", "role": "assistant", "content": "Welcome!", "timestamp": "2026-01-12T09:00:00Z"},
                    {"id": "2", "role": "user", "content": "hi", "timestamp": "2026-01-12T09:00:30Z"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(request.prompt, "what is cuda");
        assert_eq!(request.context.as_deref(), Some("lesson-3"));
        assert_eq!(request.conversation_history.len(), 2);
        assert_eq!(request.conversation_history[0].role, Role::Assistant);

        let response = answer(&request);
        assert_eq!(response.response, responses::PLATFORM_DEFINITION);
    }

    #[test]
    fn chat_request_works_without_optional_fields() {
        let request: ChatRequest = serde_json::from_str(r#"{"prompt": "what are kernels?"}"#).unwrap();
        assert!(request.context.is_none());
        assert!(request.conversation_history.is_empty());
        assert_eq!(answer(&request).response, responses::KERNELS);
    }

    #[test]
    fn history_never_steers_routing() {
        let bare = ChatRequest { prompt: "explain synchronization".into(), context: None, conversation_history: vec![] };
        let loaded = ChatRequest {
            prompt: "explain synchronization".into(),
            context: Some("lesson-9".into()),
            conversation_history: vec![
                ChatMessage { role: Role::User, content: "show me an example".into() },
                ChatMessage { role: Role::Assistant, content: responses::CODE_EXAMPLE.into() },
            ],
        };
        assert_eq!(answer(&bare).response, answer(&loaded).response);
        assert_eq!(answer(&loaded).response, responses::SYNCHRONIZATION);
    }

    #[test]
    fn chat_response_serializes_flat() {
        let line = serde_json::to_string(&ChatResponse { response: "ok".to_string() }).unwrap();
        assert_eq!(line, r#"{"response":"ok"}"#);
    }

    #[test]
    fn greeting_and_suggestions_are_exposed() {
        assert!(greeting().contains("Welcome to CudaCoach!"));
        assert_eq!(suggested_prompts().len(), 6);
    }
}
