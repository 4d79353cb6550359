//! Domain layer containing the dialogue engine core.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, names, errors)
//! - `tags` - Phrase table and whole-word tag extraction
//! - `dialogue` - State registry, handler tables, and the dialogue engine

pub mod dialogue;
pub mod foundation;
pub mod tags;
