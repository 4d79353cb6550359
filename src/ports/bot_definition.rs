//! Bot Definition Port - how a bot personality configures the engine.

use crate::domain::dialogue::{DialogueEngine, HandlerSet, StateRegistry};
use crate::domain::tags::{PhraseTable, PhraseTableError};

/// Declarative configuration of one bot personality.
///
/// A bot supplies its state set, tag vocabulary, and handler table;
/// the engine contains all of the transition logic. Implementations
/// are unit structs: the configuration is static, and per-conversation
/// data lives in the `Scratch` type.
pub trait BotDefinition {
    /// Per-conversation scratch data (e.g. a remembered entity).
    type Scratch: Default;

    /// Display name, used to prefix responses in the chat loop.
    fn name() -> &'static str;

    /// Optional text printed before the first prompt.
    fn greeting() -> Option<String> {
        None
    }

    /// The declared state set and default state.
    fn registry() -> StateRegistry;

    /// The phrase-to-tags vocabulary.
    ///
    /// # Errors
    ///
    /// Returns `PhraseTableError` for a malformed vocabulary document.
    fn phrase_table() -> Result<PhraseTable, PhraseTableError>;

    /// The per-state and per-manner handlers.
    fn handlers() -> HandlerSet<Self::Scratch>;

    /// Assembles a ready-to-chat engine for this bot.
    ///
    /// # Errors
    ///
    /// Returns `PhraseTableError` if the vocabulary fails to build.
    fn engine() -> Result<DialogueEngine<Self::Scratch>, PhraseTableError> {
        Ok(DialogueEngine::new(
            Self::registry(),
            Self::phrase_table()?,
            Self::handlers(),
        ))
    }
}
