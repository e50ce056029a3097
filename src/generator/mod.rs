//! Secret code generation.
//!
//! Secrets are drawn one peg at a time, uniformly and with replacement, from
//! the palette. The random source is always passed in, so tests can pin the
//! secret with a seed.

mod secret;

pub use secret::{generate, SequenceGenerator};
