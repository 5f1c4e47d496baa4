extern crate self as cudacoach;

#[macro_use]
mod macros;
mod api;
mod engine;
mod rules;

pub use api::{
    ChatMessage, ChatRequest, ChatResponse, Origin, Reply, ReplyVerbose, ResolveDetails, Role,
    RuleTrace, Tutor, answer, greeting, resolve, suggested_prompts,
};

// --- Internal types ---------------------------------------------------------

/// Broad subject area an intent rule belongs to. Purely descriptive: routing
/// is decided by catalog order and phrase predicates, never by topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Topic {
    Platform,
    Hardware,
    Execution,
    Memory,
    Concurrency,
    Performance,
    Practice,
    Guidance,
}

impl Topic {
    pub fn name(self) -> &'static str {
        match self {
            Topic::Platform => "platform",
            Topic::Hardware => "hardware",
            Topic::Execution => "execution",
            Topic::Memory => "memory",
            Topic::Concurrency => "concurrency",
            Topic::Performance => "performance",
            Topic::Practice => "practice",
            Topic::Guidance => "guidance",
        }
    }
}

/// Lower-cased view of a learner message, used only for phrase matching.
///
/// Normalization is Unicode lower-casing and nothing else: no trimming, no
/// punctuation stripping, no whitespace folding. Replies that echo the
/// message back always interpolate the original text, never this view.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedText(String);

impl NormalizedText {
    pub fn of(input: &str) -> Self {
        NormalizedText(input.to_lowercase())
    }

    /// Contiguous substring containment. Phrases are matched as-is, so
    /// multi-word phrases like "what is cuda" must appear verbatim.
    pub fn contains(&self, phrase: &str) -> bool {
        self.0.contains(phrase)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An intent rule: a stable tag, a phrase predicate, and the canned reply
/// produced when the predicate holds.
///
/// The predicate is the conjunction of two gates over the lower-cased input:
/// ALL `required_phrases` must appear (AND logic), and at least one of the
/// `optional_phrases` must appear (OR logic). An empty list passes its gate.
#[derive(Debug, Clone)]
pub(crate) struct Rule {
    pub tag: &'static str,
    pub topic: Topic,
    /// Required phrases - ALL must appear in input for this rule to match.
    pub required_phrases: &'static [&'static str],
    /// Optional phrases - ANY one must appear in input for this rule to match.
    pub optional_phrases: &'static [&'static str],
    pub response: &'static str,
}

impl Rule {
    pub fn matches(&self, text: &NormalizedText) -> bool {
        // A rule with no phrases at all matches nothing.
        if self.required_phrases.is_empty() && self.optional_phrases.is_empty() {
            return false;
        }
        let required_ok = self.required_phrases.iter().all(|p| text.contains(p));
        let optional_ok = self.optional_phrases.is_empty()
            || self.optional_phrases.iter().any(|p| text.contains(p));
        required_ok && optional_ok
    }

    /// Phrases from either list that appear in `text`, in declaration order.
    pub fn hits(&self, text: &NormalizedText) -> Vec<&'static str> {
        self.required_phrases
            .iter()
            .chain(self.optional_phrases.iter())
            .filter(|p| text.contains(p))
            .copied()
            .collect()
    }
}
