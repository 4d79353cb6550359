//! Adapters - Implementations of ports against the outside world.

pub mod cli;
