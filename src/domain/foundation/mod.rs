//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, name types, and error types that form
//! the vocabulary of the dialogue engine.

mod errors;
mod facts;
mod ids;
mod names;
mod tag;
mod timestamp;

pub use errors::{ConfigWarning, EngineError, HandlerRole};
pub use facts::FactTable;
pub use ids::SessionId;
pub use names::{Manner, StateName};
pub use tag::{Tag, TagCounts};
pub use timestamp::Timestamp;
