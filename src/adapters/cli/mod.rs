//! CLI chat loop adapter.
//!
//! Drives a [`BotDefinition`] over a [`ChatIo`]: read a line, call
//! `respond`, print the reply prefixed with the bot's name, repeat
//! until an exit keyword or end of input.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::domain::foundation::EngineError;
use crate::domain::tags::PhraseTableError;
use crate::ports::{BotDefinition, ChatIo};

/// Errors that end a chat session abnormally.
///
/// Engine errors indicate handler-wiring bugs; the loop surfaces them
/// instead of attempting partial-message recovery.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("bot configuration failed: {0}")]
    Configuration(#[from] PhraseTableError),

    #[error("conversation aborted: {0}")]
    Engine(#[from] EngineError),
}

/// Returns true for the case-insensitive exit keywords.
fn is_exit_keyword(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Runs one conversation with the bot until exit or end of input.
///
/// # Errors
///
/// Returns `ChatError` if the bot's vocabulary fails to build or an
/// engine call fails; warnings never block startup.
pub fn run<B: BotDefinition>(io: &mut impl ChatIo, prompt: &str) -> Result<(), ChatError> {
    let mut engine = B::engine()?;
    tracing::info!(bot = B::name(), session_id = %engine.session().id(), "chat session started");

    if let Some(greeting) = B::greeting() {
        io.write_line(&greeting);
    }

    while let Some(line) = io.read_line(prompt) {
        let message = line.trim();
        if is_exit_keyword(message) {
            break;
        }
        let reply = engine.respond(message)?;
        io.write_line(&format!("{}: {}", B::name(), reply));
    }

    tracing::info!(bot = B::name(), "chat session ended");
    Ok(())
}

/// [`ChatIo`] over stdin/stdout.
#[derive(Debug, Default)]
pub struct StdChatIo;

impl StdChatIo {
    pub fn new() -> Self {
        Self
    }
}

impl ChatIo for StdChatIo {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }

    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}
