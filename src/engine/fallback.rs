//! Randomized fallback replies for unrecognized input.
//!
//! When no catalog rule matches a message, the engine still answers: it draws
//! one template from a fixed pool, uniformly at random, and substitutes the
//! learner's message into the template's single `{input}` slot.
//!
//! ## Design notes
//!
//! - The substituted text is always the *raw* message, exactly as the learner
//!   typed it. Lower-casing exists only for matching and never leaks into a
//!   reply.
//! - The generator is injected rather than reached for globally, so tests and
//!   the CLI can seed it and replay the exact same draw sequence. A pool
//!   behind a `Mutex` is safe to share across threads; only the draw itself
//!   holds the lock.
//! - Selection is total. Empty or unmatched-only input still gets a reply,
//!   and there is no panic path out of [`FallbackPool::resolve`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Marker replaced by the learner's raw message inside each template.
pub const INPUT_SLOT: &str = "{input}";

/// A fixed pool of reply templates with an injected random number generator.
#[derive(Debug)]
pub struct FallbackPool {
    templates: &'static [&'static str],
    rng: Mutex<StdRng>,
}

impl FallbackPool {
    /// Build a pool over `templates` driven by `rng`.
    ///
    /// Panics if the pool is empty or a template does not contain exactly one
    /// `{input}` slot. Templates are static configuration, so a malformed one
    /// should fail at startup.
    pub fn new(templates: &'static [&'static str], rng: StdRng) -> Self {
        assert!(!templates.is_empty(), "fallback pool needs at least one template");
        for (index, template) in templates.iter().enumerate() {
            assert_eq!(
                template.matches(INPUT_SLOT).count(),
                1,
                "fallback template {index} must contain exactly one {INPUT_SLOT} slot"
            );
        }
        FallbackPool { templates, rng: Mutex::new(rng) }
    }

    /// Pool with a seeded generator; the same seed replays the same draws.
    pub fn seeded(templates: &'static [&'static str], seed: u64) -> Self {
        FallbackPool::new(templates, StdRng::seed_from_u64(seed))
    }

    /// Pool seeded from operating system entropy.
    pub fn from_entropy(templates: &'static [&'static str]) -> Self {
        FallbackPool::new(templates, StdRng::from_entropy())
    }

    /// Draw one template uniformly at random and render it with `input`
    /// substituted verbatim. Returns the rendered reply and the index drawn.
    pub fn resolve(&self, input: &str) -> (String, usize) {
        // A poisoned lock still hands back a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = rng.gen_range(0..self.templates.len());
        (self.templates[index].replacen(INPUT_SLOT, input, 1), index)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
