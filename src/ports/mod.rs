//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts
//! between the engine and the outside world:
//!
//! - `BotDefinition` - how a bot personality supplies its declarative
//!   configuration (states, phrases, handlers)
//! - `ChatIo` - line-oriented input/output consumed by the chat loop

mod bot_definition;
mod chat_io;

pub use bot_definition::BotDefinition;
pub use chat_io::ChatIo;
