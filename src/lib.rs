//! Tagbot - Tag-Based Dialogue Agent Engine
//!
//! This crate implements a reusable engine for building tag-based,
//! state-driven dialogue agents: free-text input is classified into
//! domain tags by literal phrase matching, and per-state decision
//! functions drive the conversation through a declared state machine.

pub mod adapters;
pub mod bots;
pub mod config;
pub mod domain;
pub mod ports;
