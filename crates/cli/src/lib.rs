//! CLI utilities for Dishfinder
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Error reports with codes and suggestions
//! - Formatting for scores, nutrition values and durations

#![warn(missing_docs)]

pub mod output;
