//! Subcommand implementations

pub mod check;
pub mod home;
pub mod interactive;
pub mod search;
