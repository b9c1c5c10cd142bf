//! Error types for the scanner.
//!
//! This module defines the two error kinds the crate distinguishes:
//!
//! - Load errors: a constant table could not be built from its source.
//!   These are fatal and surface before any tokenization starts.
//! - Lexical errors: a malformed lexeme in the input. Each one is recovered
//!   from by resynchronizing, but all of them are collected into a report
//!   that fails the overall tokenization call.

pub mod errors;
