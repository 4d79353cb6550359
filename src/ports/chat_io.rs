//! Chat IO Port - line-oriented console contract for the chat loop.

/// Reads user lines and writes bot lines.
///
/// The engine itself performs no I/O; this port is what the chat loop
/// adapter drives. Test doubles feed scripted lines through it.
pub trait ChatIo {
    /// Reads one line of user input, without its trailing newline.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Writes one line of bot output.
    fn write_line(&mut self, line: &str);
}
