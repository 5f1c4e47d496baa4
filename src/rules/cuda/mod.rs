//! The CUDA tutoring catalog: intent rules, their canned explanations, and
//! the fallback material for everything the rules do not recognize.

pub mod fallbacks;
pub mod responses;
pub mod rules;

#[cfg(test)]
mod tests;
