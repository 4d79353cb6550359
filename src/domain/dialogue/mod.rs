//! Dialogue state machine: registry, handler tables, session, engine.

mod engine;
mod handlers;
mod registry;
mod session;

pub use engine::DialogueEngine;
pub use handlers::{
    EnterHandler, FinishHandler, HandlerSet, HandlerSetBuilder, RespondHandler, Transition,
};
pub use registry::StateRegistry;
pub use session::Session;
